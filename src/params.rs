//! Parameter definitions with units and documented semantics.
//!
//! Every tunable number in the demo lives here with:
//! - Units (pixels, lattice cells, frames)
//! - Documented ranges and meanings
//! - Validation where a bad value would otherwise slip through

mod generation;
mod render;

pub use generation::{NoiseParams, MAX_OCTAVES};
pub use render::{AnimationConfig, RenderConfig};
