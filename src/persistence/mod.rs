//! Durable state that outlives a single run.

pub mod best_score;

pub use best_score::{load_best_score, save_best_score, BestScoreStore, BEST_SCORE_FILENAME};
