//! Image loading.
//!
//! Decoding is delegated to the `image` crate. The rest of the pipeline only
//! sees a [`DecodedImage`]: dimensions, channel count and interleaved 8-bit
//! samples.

use std::path::PathBuf;

use image::{DynamicImage, ImageReader};

use crate::error::{AsciifyError, Result};

/// A decoded raster image with interleaved 8-bit channel samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a sample buffer, checking it against the declared geometry.
    ///
    /// `channels` must be 1 to 4 and `samples.len()` must equal
    /// `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if width == 0 || height == 0 || !(1..=4).contains(&channels) || samples.len() != expected
        {
            return Err(AsciifyError::InvalidImage {
                width,
                height,
                channels,
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Samples in row-major order, `channels` bytes per pixel.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Convert a decoded `image` value, keeping its native channel layout.
    ///
    /// 16-bit and float images are narrowed to 8 bits per channel with the
    /// channel count preserved.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        let (width, height) = (img.width(), img.height());
        let (channels, samples) = match img {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other => match other.color().channel_count() {
                1 => (1, other.into_luma8().into_raw()),
                2 => (2, other.into_luma_alpha8().into_raw()),
                3 => (3, other.into_rgb8().into_raw()),
                _ => (4, other.into_rgba8().into_raw()),
            },
        };
        Self::new(width, height, channels, samples)
    }
}

/// Anything that can produce a [`DecodedImage`].
pub trait ImageSource {
    fn load(&self) -> Result<DecodedImage>;
}

/// Loads an image file from disk, guessing the format from its content.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileSource {
    fn load(&self) -> Result<DecodedImage> {
        let reader = ImageReader::open(&self.path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|source| AsciifyError::Io {
                path: self.path.clone(),
                source,
            })?;

        let img = reader.decode().map_err(|source| AsciifyError::Decode {
            path: self.path.clone(),
            source,
        })?;

        let decoded = DecodedImage::from_dynamic(img)?;
        log::info!(
            "Decoded '{}': {}x{}, {} channel(s)",
            self.path.display(),
            decoded.width,
            decoded.height,
            decoded.channels
        );
        Ok(decoded)
    }
}

/// An already-decoded image, handy for tests and library callers.
impl ImageSource for DecodedImage {
    fn load(&self) -> Result<DecodedImage> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = DecodedImage::new(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            AsciifyError::InvalidImage {
                expected: 12,
                actual: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_bad_channel_count() {
        assert!(DecodedImage::new(1, 1, 0, vec![]).is_err());
        assert!(DecodedImage::new(1, 1, 5, vec![0; 5]).is_err());
    }

    #[test]
    fn test_from_dynamic_keeps_luma() {
        let buf = GrayImage::from_pixel(3, 2, Luma([42]));
        let img = DecodedImage::from_dynamic(DynamicImage::ImageLuma8(buf)).unwrap();
        assert_eq!(img.channels(), 1);
        assert_eq!(img.samples(), &[42; 6]);
    }

    #[test]
    fn test_from_dynamic_keeps_rgba() {
        let buf = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
        let img = DecodedImage::from_dynamic(DynamicImage::ImageRgba8(buf)).unwrap();
        assert_eq!(img.channels(), 4);
        assert_eq!(img.samples(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_dynamic_narrows_16_bit() {
        let buf = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_pixel(1, 1, Luma([u16::MAX]));
        let img = DecodedImage::from_dynamic(DynamicImage::ImageLuma16(buf)).unwrap();
        assert_eq!(img.channels(), 1);
        assert_eq!(img.samples(), &[255]);
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = FileSource::new(dir.path().join("nope.png"));
        assert!(matches!(src.load(), Err(AsciifyError::Io { .. })));
    }

    #[test]
    fn test_file_source_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(
            FileSource::new(&path).load(),
            Err(AsciifyError::Decode { .. })
        ));
    }
}
