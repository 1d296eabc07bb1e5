//! Noise texture parameters.

use crate::error::NoiseError;
use crate::noise::{NoiseField, NoiseSource, NoiseVariant, PerlinNoiseSource, UniformNoiseSource};

/// Upper bound on summed octaves
///
/// Octave 32 already samples at 2^31 times the base frequency, far below
/// the resolution of an 8-bit texture.
pub const MAX_OCTAVES: u32 = 32;

/// Noise texture generation parameters
#[derive(Debug, Clone)]
pub struct NoiseParams {
    /// Which source backs the texture
    pub variant: NoiseVariant,

    /// Permutation / RNG seed
    pub seed: u32,

    /// Texture resolution (pixels per side)
    pub size: u32,

    /// Coordinate step between neighbouring pixels
    pub step: f64,

    /// Multiplier from input coordinates to lattice cells
    /// 0.25 with a 0.2 step puts one lattice cell every 20 pixels
    pub field_scale: f64,

    /// Number of summed octaves, in 1..=MAX_OCTAVES
    pub octaves: u32,

    /// Amplitude decay per octave, typically in (0, 1]
    pub persistence: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            variant: NoiseVariant::Perlin,
            seed: 12,
            size: 80,
            step: 0.2,
            field_scale: 0.25,
            octaves: 2,
            persistence: 0.2,
        }
    }
}

impl NoiseParams {
    /// Reject settings that would produce an empty or undefined texture
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.size == 0 {
            return Err(NoiseError::EmptyImage {
                width: self.size,
                height: self.size,
            });
        }
        if self.octaves == 0 {
            return Err(NoiseError::ZeroOctaves);
        }
        if self.octaves > MAX_OCTAVES {
            return Err(NoiseError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }
        for (name, value) in [
            ("step", self.step),
            ("field_scale", self.field_scale),
            ("persistence", self.persistence),
        ] {
            if !value.is_finite() {
                return Err(NoiseError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }

    /// Coordinate step for the active variant
    ///
    /// Uniform static has one value per unit cell, so it steps a whole cell
    /// per pixel regardless of `step`.
    pub fn pixel_step(&self) -> f64 {
        match self.variant {
            NoiseVariant::Perlin => self.step,
            NoiseVariant::Uniform => 1.0,
        }
    }

    /// Validate and construct the configured noise source
    pub fn build_source(&self) -> Result<Box<dyn NoiseSource>, NoiseError> {
        self.validate()?;
        let source: Box<dyn NoiseSource> = match self.variant {
            NoiseVariant::Perlin => Box::new(PerlinNoiseSource::new(
                NoiseField::new(self.field_scale, self.seed),
                self.octaves,
                self.persistence,
            )),
            NoiseVariant::Uniform => Box::new(UniformNoiseSource::new(self.seed)),
        };
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NoiseParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let params = NoiseParams {
            octaves: 0,
            ..NoiseParams::default()
        };
        assert!(matches!(params.validate(), Err(NoiseError::ZeroOctaves)));
        assert!(params.build_source().is_err());
    }

    #[test]
    fn test_octave_cap() {
        let at_cap = NoiseParams {
            octaves: MAX_OCTAVES,
            ..NoiseParams::default()
        };
        assert!(at_cap.validate().is_ok());

        let params = NoiseParams {
            octaves: 2000,
            ..NoiseParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(NoiseError::TooManyOctaves {
                octaves: 2000,
                max: MAX_OCTAVES
            })
        ));
        assert!(params.build_source().is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let params = NoiseParams {
            size: 0,
            ..NoiseParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(NoiseError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = NoiseParams {
            persistence: f64::NAN,
            ..NoiseParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(NoiseError::NonFiniteParameter {
                name: "persistence",
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_persistence_accepted() {
        let params = NoiseParams {
            persistence: 1.5,
            ..NoiseParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_build_source_by_variant() {
        let perlin = NoiseParams::default().build_source().unwrap();
        assert_eq!(perlin.name(), "perlin");
        assert!(perlin.animated());

        let params = NoiseParams {
            variant: NoiseVariant::Uniform,
            ..NoiseParams::default()
        };
        let uniform = params.build_source().unwrap();
        assert_eq!(uniform.name(), "uniform");
        assert!(!uniform.animated());
        assert_eq!(params.pixel_step(), 1.0);
    }
}
