//! Spring configuration helpers
//!
//! Re-exports configuration from segbar-core and provides additional utilities.

use std::time::Duration;

pub use segbar_core::SpringConfig;

/// Longest simulated step; frames are split into steps of at most this size
pub const MAX_STEP: Duration = Duration::from_millis(1);

/// Longest frame the spring will simulate at once
///
/// A stalled loop (suspended terminal, slow draw) resumes from where it was
/// instead of integrating minutes of motion.
pub const MAX_FRAME: Duration = Duration::from_millis(250);

/// Extension trait for SpringConfig with utility methods
pub trait SpringConfigExt {
    /// Get tick duration for the animation frame rate
    fn animation_tick_duration(&self) -> Duration;

    /// Check if the tile should animate at all
    ///
    /// Parameters the spring cannot settle with fall back to snapping.
    fn is_animated(&self) -> bool;

    /// Damping ratio; below 1.0 the spring overshoots
    fn damping_ratio(&self) -> f64;
}

impl SpringConfigExt for SpringConfig {
    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.stiffness > 0.0 && self.is_valid()
    }

    fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical == 0.0 {
            0.0
        } else {
            self.damping / critical
        }
    }
}
