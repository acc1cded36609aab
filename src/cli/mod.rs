//! Command-line interface definitions and helpers.

mod args;

pub use args::{parse_dimension, Args, USAGE};
