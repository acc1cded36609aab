//! Block averaging of decoded pixels into a character grid.

use crate::error::{AsciifyError, Result};
use crate::source::DecodedImage;

/// Output grid dimensions in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Size in pixels of the source rectangle behind one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize {
    pub width: u32,
    pub height: u32,
}

/// Averaged intensity per grid cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AveragedGrid {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl AveragedGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// Compute the block size for an image and a requested grid.
///
/// Each axis is `floor(image / grid)`. Fails with
/// [`AsciifyError::InvalidDimensions`] when either axis comes out as zero,
/// i.e. the grid is larger than the image or has a zero dimension.
pub fn block_size(image_width: u32, image_height: u32, grid: GridSize) -> Result<BlockSize> {
    let invalid = || AsciifyError::InvalidDimensions {
        image_width,
        image_height,
        grid_width: grid.width,
        grid_height: grid.height,
    };

    let width = image_width.checked_div(grid.width).ok_or_else(invalid)?;
    let height = image_height.checked_div(grid.height).ok_or_else(invalid)?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok(BlockSize { width, height })
}

/// Downsample a decoded image to a grid of averaged intensities.
///
/// Cell (x, y) covers the rectangle starting at
/// `(x * block.width, y * block.height)` of size `block.width x block.height`.
/// Its value is the sum of every channel sample of every pixel in that
/// rectangle divided by `block.width * block.height * channels`, so all
/// channels count equally.
///
/// Pixels to the right of or below the last full block are not covered.
///
/// # Example
/// ```ignore
/// // 640x480 RGB image to a 40x20 grid: 16x24 pixel blocks
/// let grid = downsample(&image, GridSize::new(40, 20))?;
/// assert_eq!(grid.values().len(), 40 * 20);
/// ```
pub fn downsample(image: &DecodedImage, grid: GridSize) -> Result<AveragedGrid> {
    let block = block_size(image.width(), image.height(), grid)?;
    log::debug!(
        "Block size {}x{} for {}x{} grid",
        block.width,
        block.height,
        grid.width,
        grid.height
    );

    let channels = image.channels() as usize;
    let row_stride = image.width() as usize * channels;
    let span = block.width as usize * channels;
    let divisor = block.width as u64 * block.height as u64 * channels as u64;
    let samples = image.samples();

    let mut values = Vec::with_capacity(grid.cells());

    for cy in 0..grid.height as usize {
        for cx in 0..grid.width as usize {
            let base_y = cy * block.height as usize;
            let base_x = cx * span;

            let mut sum = 0u64;
            for dy in 0..block.height as usize {
                let start = (base_y + dy) * row_stride + base_x;
                sum += samples[start..start + span]
                    .iter()
                    .map(|&s| s as u64)
                    .sum::<u64>();
            }

            // mean of u8 samples always fits
            values.push((sum / divisor) as u8);
        }
    }

    Ok(AveragedGrid {
        width: grid.width,
        height: grid.height,
        values,
    })
}
