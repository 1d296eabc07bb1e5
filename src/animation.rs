//! Frame-driven texture scrolling.

use crate::params::AnimationConfig;

/// Wrap-around frame counter producing a texture offset in [0, 1)
#[derive(Debug, Clone)]
pub struct ScrollTimer {
    frame: u32,
    period: u32,
    enabled: bool,
}

impl ScrollTimer {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            frame: 0,
            period: config.period_frames.max(1),
            enabled: config.enabled,
        }
    }

    /// Advance one frame and return the new offset
    ///
    /// A disabled timer stays at offset 0.
    pub fn tick(&mut self) -> f32 {
        if self.enabled {
            self.frame = (self.frame + 1) % self.period;
        }
        self.offset()
    }

    pub fn offset(&self) -> f32 {
        self.frame as f32 / self.period as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut timer = ScrollTimer::new(&AnimationConfig {
            enabled: true,
            period_frames: 4,
        });
        assert_eq!(timer.offset(), 0.0);
        assert_eq!(timer.tick(), 0.25);
        assert_eq!(timer.tick(), 0.5);
        assert_eq!(timer.tick(), 0.75);
        assert_eq!(timer.tick(), 0.0);
    }

    #[test]
    fn test_offset_stays_below_one() {
        let mut timer = ScrollTimer::new(&AnimationConfig::default());
        for _ in 0..1000 {
            let offset = timer.tick();
            assert!((0.0..1.0).contains(&offset));
        }
    }

    #[test]
    fn test_disabled_timer_is_static() {
        let mut timer = ScrollTimer::new(&AnimationConfig {
            enabled: false,
            period_frames: 4,
        });
        assert_eq!(timer.tick(), 0.0);
        assert_eq!(timer.tick(), 0.0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut timer = ScrollTimer::new(&AnimationConfig {
            enabled: true,
            period_frames: 0,
        });
        assert_eq!(timer.tick(), 0.0);
    }
}
