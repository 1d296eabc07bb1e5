//! CPU-side noise image: sampling a source into an 8-bit grid.

use std::path::Path;

use image::GrayImage;

use crate::error::NoiseError;
use crate::noise::NoiseSource;

/// Map a noise value to an 8-bit intensity
///
/// `clamp(round(value * 255), 0, 255)`; negative values go black and NaN
/// maps to 0.
pub fn quantize(value: f64) -> u8 {
    // `as u8` saturates and sends NaN to 0
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Single-channel image stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl NoiseImage {
    /// Black image of the given size
    pub fn new(width: u32, height: u32) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            return Err(NoiseError::EmptyImage { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        })
    }

    /// Sample `source` once per pixel at `(x * step, y * step, z)`
    pub fn generate(
        source: &dyn NoiseSource,
        width: u32,
        height: u32,
        step: f64,
        z: f64,
    ) -> Result<Self, NoiseError> {
        let mut image = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let value = source.sample(x as f64 * step, y as f64 * step, z);
                image.put(x, y, quantize(value));
            }
        }
        Ok(image)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the image
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at `(x, y)`; out-of-range writes are ignored
    pub fn put(&mut self, x: u32, y: u32, value: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    /// Raw row-major bytes, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mean intensity, mostly useful for sanity checks
    pub fn mean(&self) -> f64 {
        let sum: u64 = self.pixels.iter().map(|&p| u64::from(p)).sum();
        sum as f64 / self.pixels.len() as f64
    }

    /// Write the image as a grayscale PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), NoiseError> {
        let gray = GrayImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            NoiseError::EmptyImage {
                width: self.width,
                height: self.height,
            },
        )?;
        gray.save(path)?;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{NoiseField, PerlinNoiseSource, UniformNoiseSource};

    struct Gradient;

    impl NoiseSource for Gradient {
        fn sample(&self, x: f64, _y: f64, _z: f64) -> f64 {
            x / 3.0
        }

        fn animated(&self) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "gradient"
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(-0.4), 0);
        assert_eq!(quantize(2.0), 255);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(matches!(
            NoiseImage::new(0, 4),
            Err(NoiseError::EmptyImage { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_generate_is_row_major() {
        let image = NoiseImage::generate(&Gradient, 4, 2, 1.0, 0.0).unwrap();
        assert_eq!(image.as_bytes(), &[0, 85, 170, 255, 0, 85, 170, 255]);
        assert_eq!(image.get(3, 1), Some(255));
        assert_eq!(image.get(4, 0), None);
    }

    #[test]
    fn test_put_out_of_range_is_ignored() {
        let mut image = NoiseImage::new(2, 2).unwrap();
        image.put(5, 5, 9);
        image.put(1, 0, 9);
        assert_eq!(image.as_bytes(), &[0, 9, 0, 0]);
    }

    #[test]
    fn test_perlin_image_is_deterministic() {
        let make = || {
            let source = PerlinNoiseSource::new(NoiseField::new(0.25, 12), 2, 0.2);
            NoiseImage::generate(&source, 80, 80, 0.2, 0.0).unwrap()
        };
        let a = make();
        assert_eq!(a, make());
        // Some pixels lit, some dark
        assert!(a.as_bytes().iter().any(|&p| p > 0));
        assert!(a.as_bytes().iter().any(|&p| p == 0));
    }

    #[test]
    fn test_uniform_image_mean() {
        let source = UniformNoiseSource::new(12);
        let image = NoiseImage::generate(&source, 64, 64, 1.0, 0.0).unwrap();
        let mean = image.mean();
        assert!(mean > 110.0 && mean < 145.0, "mean {}", mean);
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join(format!("noisefield_test_{}.png", std::process::id()));
        let image = NoiseImage::generate(&UniformNoiseSource::new(1), 8, 8, 1.0, 0.0).unwrap();
        image.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().into_luma8();
        assert_eq!(loaded.as_raw(), image.as_bytes());
        let _ = std::fs::remove_file(&path);
    }
}
