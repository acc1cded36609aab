//! File-to-text rendering.
//!
//! Glues an [`ImageSource`] to the ASCII pipeline. The decoded pixels live
//! only until the averaged grid is built.

use crate::ascii;
use crate::config::RenderOptions;
use crate::error::Result;
use crate::source::ImageSource;

/// Load an image and render it as text with the given options.
///
/// Returns the complete output; nothing is written on failure.
pub fn render<S: ImageSource + ?Sized>(source: &S, options: &RenderOptions) -> Result<String> {
    let averaged = {
        let image = source.load()?;
        ascii::downsample(&image, options.grid)?
    };
    Ok(ascii::grid_to_ascii(&averaged, &options.gradient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{Gradient, GridSize};
    use crate::error::AsciifyError;
    use crate::source::DecodedImage;

    fn options(width: u32, height: u32, gradient: &str) -> RenderOptions {
        RenderOptions {
            grid: GridSize::new(width, height),
            gradient: Gradient::parse(gradient).unwrap(),
        }
    }

    #[test]
    fn test_render_uniform_image_is_darkest() {
        let img = DecodedImage::new(100, 100, 1, vec![128; 100 * 100]).unwrap();
        let out = render(&img, &RenderOptions {
            grid: GridSize::new(2, 2),
            ..RenderOptions::default()
        })
        .unwrap();
        assert_eq!(out, "  \n  \n");
    }

    #[test]
    fn test_render_two_tone() {
        // left half black, right half white
        let mut samples = Vec::new();
        for _ in 0..4 {
            samples.extend_from_slice(&[0, 0, 255, 255]);
        }
        let img = DecodedImage::new(4, 4, 1, samples).unwrap();
        let out = render(&img, &options(2, 2, ".#")).unwrap();
        assert_eq!(out, ".#\n.#\n");
    }

    #[test]
    fn test_render_invalid_dimensions() {
        let img = DecodedImage::new(80, 10, 1, vec![0; 800]).unwrap();
        assert!(matches!(
            render(&img, &options(9999, 1, "ab")),
            Err(AsciifyError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_matches_in_memory_pipeline() {
        let samples: Vec<u8> = (0..40 * 20).map(|i| (i % 40 * 6) as u8).collect();
        let img = DecodedImage::new(40, 20, 1, samples).unwrap();
        let opts = options(10, 5, " .:-=+*#%@");
        assert_eq!(
            render(&img, &opts).unwrap(),
            ascii::image_to_ascii(&img, opts.grid, &opts.gradient).unwrap()
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let samples: Vec<u8> = (0..64 * 48 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let img = DecodedImage::new(64, 48, 3, samples).unwrap();
        let opts = options(16, 12, " .:-=+*#%@");
        assert_eq!(render(&img, &opts).unwrap(), render(&img, &opts).unwrap());
    }
}
