//! asciify library crate.
//!
//! Converts raster images to ASCII art. The binary is a thin wrapper around
//! [`renderer::render`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod renderer;
pub mod source;

pub use error::{AsciifyError, Result};
