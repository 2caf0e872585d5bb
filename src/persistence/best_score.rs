//! Best score, stored as a bare decimal integer in a text file.
//!
//! A missing or unreadable file, or anything that doesn't parse as a
//! non-negative integer, counts as a best score of 0.

use crate::utils::persistence::resolve_data_path;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const BEST_SCORE_FILENAME: &str = "highscore.txt";

/// Owns the best score and the file it lives in.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
    best: u32,
}

impl BestScoreStore {
    /// Open the store at the default location, ~/.escape-earth/highscore.txt.
    ///
    /// Nothing is created here; the directory appears on the first write.
    pub fn open_default() -> Self {
        Self::open(resolve_data_path(BEST_SCORE_FILENAME))
    }

    /// Open the store at `path` and read the current best.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = load_best_score(&path);
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a finished run. Writes the file only when `score` beats the
    /// stored best; returns whether it did.
    pub fn submit(&mut self, score: u32) -> io::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        save_best_score(&self.path, score)?;
        self.best = score;
        Ok(true)
    }
}

/// Read the best score from `path`.
pub fn load_best_score(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| content.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Overwrite `path` with `score` and flush it to disk before returning.
pub fn save_best_score(path: &Path, score: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(score.to_string().as_bytes())?;
    file.sync_all()
}
