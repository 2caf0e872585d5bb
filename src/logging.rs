//! File-backed logger.
//!
//! The terminal is in raw alternate-screen mode while the game runs, so log
//! lines go to ~/.escape-earth/escape-earth.log instead of stderr. The level
//! defaults to `info` and follows `RUST_LOG` when set.

use crate::utils::persistence::data_path;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

pub const LOG_FILENAME: &str = "escape-earth.log";

/// Install the global logger at the default location. Returns the log path.
pub fn init() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILENAME)?;
    init_at(&path)?;
    Ok(path)
}

/// Install the global logger writing (appending) to `path`.
pub fn init_at(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
