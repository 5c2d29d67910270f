//! Newline-delimited JSON [`WindowSource`].
//!
//! Reads one JSON window descriptor per line from any [`BufRead`]; the
//! binary uses stdin.  Blank lines are skipped, malformed lines are logged
//! and skipped.
//!
//! # Wire format
//!
//! ```json
//! {"name":"~/src - URxvt","class":"URxvt","instance":"urxvt"}
//! {"name":"(1) YouTube - Mozilla Firefox","window_properties":{"class":"Firefox"}}
//! ```

use crate::traits::WindowSource;
use crate::window::WindowDescriptor;
use log::{debug, error, info};
use std::io::BufRead;
use std::sync::mpsc;

/// A [`WindowSource`] reading JSON lines from a reader.
pub struct LineSource<R> {
    reader: R,
}

/// Errors produced by [`LineSource`].
#[derive(Debug, thiserror::Error)]
pub enum LineSourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<R: BufRead + Send> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> WindowSource for LineSource<R> {
    type Error = LineSourceError;

    /// Read until end of input.
    ///
    /// Lines that are not UTF-8 or not a window descriptor are logged and
    /// skipped; only a failing reader ends the loop with an error.
    fn run(&mut self, sink: mpsc::Sender<WindowDescriptor>) -> Result<(), Self::Error> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = match std::str::from_utf8(&buf) {
                Ok(text) => text.trim(),
                Err(e) => {
                    error!("bad window descriptor: {} ({})", String::from_utf8_lossy(&buf).trim_end(), e);
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }
            match serde_json::from_str::<WindowDescriptor>(text) {
                Ok(window) => {
                    debug!("received {}", window);
                    if sink.send(window).is_err() {
                        info!("sink closed, shutting down");
                        return Ok(());
                    }
                }
                Err(e) => {
                    error!("bad window descriptor: {} ({})", text, e);
                }
            }
        }
        debug!("end of input");
        Ok(())
    }
}

//  Tests
