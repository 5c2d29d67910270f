//! Entry point for the **appglyph** binary.
//!
//! Reads newline-delimited JSON window descriptors from stdin on a
//! background thread and prints one glyph per window on stdout.
//!
//! ```text
//! appglyph [path/to/config.json]
//! ```

use appglyph::config::Config;
use appglyph::definitions::default_registry;
use appglyph::ipc::lines::LineSource;
use appglyph::traits::WindowSource;
use appglyph::window::WindowDescriptor;
use log::{error, info};
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::sync::mpsc;

/// Resolve the default config path (`$XDG_CONFIG_HOME/appglyph/config.json`).
fn default_config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("appglyph").join("config.json")
}

/// Load the config from the path given on the command line, or the default
/// location.
///
/// Only a missing file at the default location falls back to compiled-in
/// defaults; any other failure is fatal.
fn load_config() -> Config {
    let loaded = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path).map(|cfg| (path, Some(cfg))),
        None => {
            let path = default_config_path();
            Config::load_optional(&path).map(|cfg| (path, cfg))
        }
    };
    match loaded {
        Ok((path, Some(cfg))) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Ok((path, None)) => {
            info!("no config file at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let registry = match default_registry() {
        Ok(r) => r,
        Err(e) => {
            error!("failed to build app definitions: {}", e);
            std::process::exit(1);
        }
    };

    let (tx, rx) = mpsc::channel::<WindowDescriptor>();
    let reader = std::thread::spawn(move || {
        let mut source = LineSource::new(BufReader::new(std::io::stdin()));
        source.run(tx)
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for window in rx {
        let glyph = config.glyph_for(registry, &window);
        if let Err(e) = writeln!(out, "{}", glyph).and_then(|_| out.flush()) {
            error!("failed to write glyph: {}", e);
            std::process::exit(1);
        }
    }

    match reader.join() {
        Ok(Ok(())) => info!("input closed, exiting"),
        Ok(Err(e)) => {
            error!("stdin reader error: {}", e);
            std::process::exit(1);
        }
        Err(_) => {
            error!("stdin reader panicked");
            std::process::exit(1);
        }
    }
}
