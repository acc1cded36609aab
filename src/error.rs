//! Error types for the asciify pipeline.
//!
//! Every failure is detected where it happens and propagated as an
//! [`AsciifyError`] to the binary, which prints it and exits non-zero.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that abort a render.
#[derive(Debug, thiserror::Error)]
pub enum AsciifyError {
    /// The image file could not be opened.
    #[error("failed to open image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image codec could not produce pixel data.
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded samples don't match the declared geometry.
    #[error(
        "image buffer holds {actual} samples, expected {expected} for {width}x{height} with {channels} channel(s)"
    )]
    InvalidImage {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },

    /// The requested grid is larger than the image along some axis.
    #[error(
        "output grid {grid_width}x{grid_height} does not fit image {image_width}x{image_height} (block size would be zero)"
    )]
    InvalidDimensions {
        image_width: u32,
        image_height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    /// A gradient needs at least one character.
    #[error("ascii gradient must contain at least one character")]
    EmptyGradient,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AsciifyError>;
