//! Command-line arguments.

use crate::core::constants::{MAX_FRAME_RATE, MIN_FRAME_RATE};
use std::path::PathBuf;

pub const USAGE: &str = "\
Escape Earth - fly a UFO through the gaps

Usage: escape-earth [options]

Options:
  --seed <N>          Use a fixed RNG seed
  --score-file <PATH> Read and write the best score at PATH
  --fps <N>           Frames per second (10-240)
  --version, -v       Show version information
  --help, -h          Show this help message";

/// Overrides applied on top of the saved settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub seed: Option<u64>,
    pub score_file: Option<PathBuf>,
    pub frame_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Parse arguments, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--score-file" => {
                let value = args.next().ok_or("--score-file needs a path")?;
                options.score_file = Some(PathBuf::from(value));
            }
            "--fps" => {
                let value = args.next().ok_or("--fps needs a value")?;
                let fps: u32 = value
                    .parse()
                    .map_err(|_| format!("invalid frame rate: {}", value))?;
                if !(MIN_FRAME_RATE..=MAX_FRAME_RATE).contains(&fps) {
                    return Err(format!(
                        "frame rate must be between {} and {}",
                        MIN_FRAME_RATE, MAX_FRAME_RATE
                    ));
                }
                options.frame_rate = Some(fps);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}
