//! Seams between the glyph resolver and the outside world.
//!
//! Window descriptors come from a window-manager IPC client that is not part
//! of this crate.  [`WindowSource`] abstracts that transport so the binary
//! (and tests) can feed windows from stdin, a socket, or a fixed list.

use crate::window::WindowDescriptor;
use std::sync::mpsc;

/// A source of [`WindowDescriptor`]s.
///
/// # Contract
///
/// * [`run`](WindowSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received window is sent through `sink` exactly once, in arrival
///   order.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait WindowSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Forward every incoming window into `sink`.
    ///
    /// Returns early with `Ok(())` once the receiving side hangs up.
    fn run(&mut self, sink: mpsc::Sender<WindowDescriptor>) -> Result<(), Self::Error>;
}
