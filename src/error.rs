//! Error type shared by configuration, image export and rendering.

/// Errors surfaced by the noise demo
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    #[error("octave count must be at least 1")]
    ZeroOctaves,

    #[error("octave count {octaves} exceeds the maximum of {max}")]
    TooManyOctaves { octaves: u32, max: u32 },

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("renderer setup failed: {0}")]
    Render(String),
}
