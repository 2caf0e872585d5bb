//! Escape Earth - a terminal arcade game.
//!
//! The library holds the simulation, screen flow, persistence and rendering
//! so they can be tested without a terminal; `main.rs` only wires them to
//! crossterm.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod flow;
pub mod game;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod settings;
pub mod ui;
pub mod utils;
