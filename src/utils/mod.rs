//! Filesystem helpers shared by settings, logging and the score file.

pub mod persistence;

pub use persistence::{
    data_dir, data_path, load_json_or_default, resolve_data_path, save_json,
};
