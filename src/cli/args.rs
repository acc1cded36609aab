//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Usage line printed when no image path is given.
pub const USAGE: &str = "<filepath> [--width=N] [--height=N] [--ascii-gradient=STRING]";

/// Render an image as ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render an image as ASCII art", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Image file to render
    pub path: Option<PathBuf>,

    /// Output width in characters (default: 80)
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "",
        allow_hyphen_values = true
    )]
    pub width: Option<String>,

    /// Output height in characters (default: 80)
    #[arg(
        short = 'h',
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "",
        allow_hyphen_values = true
    )]
    pub height: Option<String>,

    /// Characters ordered from darkest to brightest
    #[arg(short, long, value_name = "STRING", allow_hyphen_values = true)]
    pub ascii_gradient: Option<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Requested width, if given as a valid positive integer.
    pub fn output_width(&self) -> Option<u32> {
        lenient_dimension(self.width.as_deref(), "width")
    }

    /// Requested height, if given as a valid positive integer.
    pub fn output_height(&self) -> Option<u32> {
        lenient_dimension(self.height.as_deref(), "height")
    }

    /// Log level implied by the number of `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse a dimension, accepting only a non-empty run of ASCII digits that
/// fits in `u32` and is non-zero.
pub fn parse_dimension(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|&n| n > 0)
}

fn lenient_dimension(raw: Option<&str>, name: &str) -> Option<u32> {
    let raw = raw?;
    let parsed = parse_dimension(raw);
    if parsed.is_none() {
        log::info!("Ignoring invalid --{} value '{}'", name, raw);
    }
    parsed
}
