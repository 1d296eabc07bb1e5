//! Procedural noise generation.
//!
//! `NoiseField` is the Perlin core; `NoiseSource` lets the renderer swap
//! between Perlin noise and plain uniform static.

mod field;
mod source;

pub use field::{NoiseField, TABLE_SIZE};
pub use source::{NoiseSource, NoiseVariant, PerlinNoiseSource, UniformNoiseSource};
