//! Highlight tile controller
//!
//! Holds the animated offset of the tile between frames. The widget calls
//! [`TileState::animate_to`] while rendering; the application advances it with
//! [`TileState::update`] once per frame, like any other frame-driven state.

use std::time::{Duration, Instant};

use tracing::debug;

use super::config::{SpringConfig, SpringConfigExt};
use super::spring::Spring;

/// Animated offset of the highlight tile
#[derive(Debug, Clone)]
pub struct TileState {
    /// `None` until the first target is known
    spring: Option<Spring>,
    config: SpringConfig,
    /// Time of the previous update while moving
    last_update: Option<Instant>,
}

impl Default for TileState {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl TileState {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: None,
            config,
            last_update: None,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Update configuration; applies to motion already in flight
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
        if let Some(spring) = self.spring.as_mut() {
            spring.set_config(config);
            if !config.is_animated() {
                let target = spring.target();
                spring.snap_to(target);
                self.last_update = None;
            }
        }
    }

    /// Request the tile to move to `target`
    ///
    /// The first target is adopted without animation. Later targets retarget
    /// the spring from wherever the tile currently is.
    pub fn animate_to(&mut self, target: f64) {
        let animated = self.config.is_animated();

        let Some(spring) = self.spring.as_mut() else {
            self.spring = Some(Spring::new(self.config, target));
            return;
        };

        if spring.target() == target {
            return;
        }

        if !animated {
            spring.snap_to(target);
            return;
        }

        debug!(
            from = spring.position(),
            to = target,
            "Retargeting highlight tile"
        );
        if spring.is_at_rest() {
            self.last_update = Some(Instant::now());
        }
        spring.set_target(target);
    }

    /// Current offset of the tile
    #[inline]
    pub fn offset(&self) -> f64 {
        self.spring.map(|s| s.position()).unwrap_or(0.0)
    }

    /// Offset the tile is heading to, if it has one
    pub fn target(&self) -> Option<f64> {
        self.spring.map(|s| s.target())
    }

    /// Check if frames are still needed
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some_and(|s| !s.is_at_rest())
    }

    /// Advance by the wall-clock time since the previous update
    pub fn update(&mut self) -> f64 {
        if !self.is_animating() {
            self.last_update = None;
            return self.offset();
        }

        let now = Instant::now();
        let dt = self
            .last_update
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_update = Some(now);
        self.advance(dt)
    }

    /// Advance by an explicit duration and return the new offset
    pub fn advance(&mut self, dt: Duration) -> f64 {
        if let Some(spring) = self.spring.as_mut() {
            if !spring.advance(dt) && self.last_update.is_some() {
                debug!(offset = spring.position(), "Highlight tile settled");
                self.last_update = None;
            }
        }
        self.offset()
    }

    /// Jump to the target and stop any motion
    pub fn finish(&mut self) {
        if let Some(spring) = self.spring.as_mut() {
            let target = spring.target();
            spring.snap_to(target);
        }
        self.last_update = None;
    }

    /// Forget the position so the next target is adopted without animation
    pub fn reset(&mut self) {
        self.spring = None;
        self.last_update = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(tile: &mut TileState) {
        for _ in 0..400 {
            tile.advance(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_first_target_snaps() {
        let mut tile = TileState::default();
        assert_eq!(tile.offset(), 0.0);
        assert_eq!(tile.target(), None);

        tile.animate_to(40.0);
        assert_eq!(tile.offset(), 40.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_change_animates() {
        let mut tile = TileState::default();
        tile.animate_to(0.0);
        tile.animate_to(100.0);

        assert!(tile.is_animating());
        assert_eq!(tile.offset(), 0.0);

        let offset = tile.advance(Duration::from_millis(16));
        assert!(offset > 0.0 && offset < 100.0);

        settle(&mut tile);
        assert!(!tile.is_animating());
        assert_eq!(tile.offset(), 100.0);
    }

    #[test]
    fn test_same_target_is_a_no_op() {
        let mut tile = TileState::default();
        tile.animate_to(10.0);
        tile.animate_to(10.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_retarget_mid_flight_does_not_jump() {
        let mut tile = TileState::default();
        tile.animate_to(0.0);
        tile.animate_to(100.0);
        tile.advance(Duration::from_millis(60));

        let before = tile.offset();
        tile.animate_to(-50.0);
        assert_eq!(tile.offset(), before);
        assert!(tile.is_animating());

        settle(&mut tile);
        assert_eq!(tile.offset(), -50.0);
    }

    #[test]
    fn test_reduced_motion_snaps() {
        let config = SpringConfig {
            enabled: false,
            ..Default::default()
        };
        let mut tile = TileState::new(config);
        tile.animate_to(0.0);
        tile.animate_to(30.0);
        assert_eq!(tile.offset(), 30.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_disabling_mid_flight_finishes() {
        let mut tile = TileState::default();
        tile.animate_to(0.0);
        tile.animate_to(30.0);
        tile.advance(Duration::from_millis(16));

        tile.set_config(SpringConfig {
            enabled: false,
            ..Default::default()
        });
        assert_eq!(tile.offset(), 30.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_finish_and_reset() {
        let mut tile = TileState::default();
        tile.animate_to(0.0);
        tile.animate_to(30.0);
        tile.finish();
        assert_eq!(tile.offset(), 30.0);

        tile.reset();
        tile.animate_to(70.0);
        assert_eq!(tile.offset(), 70.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_unsettling_config_snaps() {
        let config = SpringConfig {
            rest_speed_threshold: -1.0,
            ..Default::default()
        };
        let mut tile = TileState::new(config);
        tile.animate_to(0.0);
        tile.animate_to(10.0);
        assert_eq!(tile.offset(), 10.0);
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_update_uses_wall_clock() {
        let mut tile = TileState::default();
        tile.animate_to(0.0);
        tile.animate_to(100.0);
        std::thread::sleep(Duration::from_millis(20));
        let offset = tile.update();
        assert!(offset > 0.0);
    }
}
