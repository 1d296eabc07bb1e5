//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::noise::NoiseVariant;
use crate::params::{AnimationConfig, NoiseParams, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noisefield")]
#[command(about = "Render a procedural noise texture to a window", long_about = None)]
pub struct Args {
    /// Noise source: perlin (scrolling) or uniform (static)
    #[arg(long, value_enum, default_value_t = NoiseVariant::Perlin)]
    pub variant: NoiseVariant,

    /// Permutation / RNG seed
    #[arg(long, default_value_t = 12)]
    pub seed: u32,

    /// Texture size in pixels (width = height)
    #[arg(long, default_value_t = 80)]
    pub size: u32,

    /// Coordinate step between neighbouring pixels
    #[arg(long, default_value_t = 0.2)]
    pub step: f64,

    /// Lattice cells per unit of input coordinate
    #[arg(long, default_value_t = 0.25)]
    pub field_scale: f64,

    /// Number of Perlin octaves
    #[arg(long, default_value_t = 2)]
    pub octaves: u32,

    /// Amplitude decay per octave
    #[arg(long, default_value_t = 0.2)]
    pub persistence: f64,

    /// Disable texture scrolling
    #[arg(long = "static")]
    pub no_scroll: bool,

    /// Window size in pixels (width = height)
    #[arg(long, value_name = "PIXELS", default_value_t = 400)]
    pub window_size: u32,

    /// Write the texture to a PNG instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Args {
    /// Noise generation parameters from the command line
    pub fn noise_params(&self) -> NoiseParams {
        NoiseParams {
            variant: self.variant,
            seed: self.seed,
            size: self.size,
            step: self.step,
            field_scale: self.field_scale,
            octaves: self.octaves,
            persistence: self.persistence,
        }
    }

    /// Scrolling follows the source unless `--static` is given
    pub fn animation_config(&self, animated: bool) -> AnimationConfig {
        let mut config = AnimationConfig::for_texture_size(self.size);
        config.enabled = animated && !self.no_scroll;
        config
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.window_size,
            window_height: self.window_size,
            ..RenderConfig::default()
        }
    }
}
