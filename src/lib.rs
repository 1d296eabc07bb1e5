//! Noisefield library - seeded Perlin noise and the texture demo around it

pub mod animation;
pub mod cli;
pub mod error;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod texture;

pub use crate::error::NoiseError;
pub use crate::noise::{NoiseField, NoiseSource, NoiseVariant, PerlinNoiseSource, UniformNoiseSource};
pub use crate::texture::{quantize, NoiseImage};
