//! Window and animation configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Window title
    pub title: String,

    /// Tint multiplied into the noise intensity (linear RGB)
    pub color: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 400,
            title: "Noise Generator".to_string(),
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Texture scrolling configuration
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Scroll the texture each frame
    pub enabled: bool,

    /// Frames for one full wrap of the texture (offset 0 -> 1)
    pub period_frames: u32,
}

impl AnimationConfig {
    /// One wrap every `3 * texture_size` frames
    pub fn for_texture_size(texture_size: u32) -> Self {
        Self {
            enabled: true,
            period_frames: texture_size.saturating_mul(3),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::for_texture_size(80)
    }
}
