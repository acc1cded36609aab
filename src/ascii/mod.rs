//! ASCII conversion pipeline.
//!
//! Turns decoded pixels into text in three pure steps:
//!
//! 1. **Downsampling** - average each block of pixels into one grid cell
//! 2. **Normalization** - stretch contrast between trimmed percentiles
//! 3. **Mapping** - look up each cell in a brightness-ordered [`Gradient`]
//!
//! None of these steps perform I/O.

mod downsample;
mod gradient;
mod mapping;
mod normalize;

pub use downsample::{block_size, downsample, AveragedGrid, BlockSize, GridSize};
pub use gradient::{Gradient, DEFAULT_GRADIENT};
pub use mapping::render;
pub use normalize::{normalize, ContrastRange};

use crate::error::Result;
use crate::source::DecodedImage;

/// Run all three steps on an already decoded image.
pub fn image_to_ascii(image: &DecodedImage, grid: GridSize, gradient: &Gradient) -> Result<String> {
    let averaged = downsample(image, grid)?;
    Ok(grid_to_ascii(&averaged, gradient))
}

/// Normalize and map an averaged grid.
pub fn grid_to_ascii(grid: &AveragedGrid, gradient: &Gradient) -> String {
    let indices = normalize(grid, gradient.len());
    render(&indices, grid.width() as usize, gradient)
}
