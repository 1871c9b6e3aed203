//! Damped spring integrator
//!
//! Models `m·x'' = -k·(x - target) - c·x'` and integrates it with
//! semi-implicit Euler in fixed sub-steps, so the result depends only on the
//! total time advanced and not on how it was split into frames.

use std::time::Duration;

use super::config::{SpringConfig, MAX_FRAME, MAX_STEP};

/// A value pulled towards a target by a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    /// Create a spring resting at `position`
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            config,
            at_rest: true,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Move the target, keeping the current position and velocity
    pub fn set_target(&mut self, target: f64) {
        if self.at_rest && target == self.target {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Jump to `target` and stop
    pub fn snap_to(&mut self, target: f64) {
        self.target = target;
        self.settle();
    }

    /// Advance the simulation by `dt`
    ///
    /// Returns true while the spring is still moving.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }

        let max_step = MAX_STEP.as_secs_f64();
        let mut remaining = dt.min(MAX_FRAME).as_secs_f64();

        while remaining > 0.0 {
            let step = remaining.min(max_step);
            remaining -= step;
            if self.step(step) {
                return false;
            }
        }

        true
    }

    /// One integration step, returns true once the spring settled
    fn step(&mut self, h: f64) -> bool {
        let config = &self.config;
        let before = self.position - self.target;

        let force = -config.stiffness * before - config.damping * self.velocity;
        self.velocity += force / config.mass * h;
        self.position += self.velocity * h;

        let after = self.position - self.target;

        if config.overshoot_clamping && before != 0.0 && before * after <= 0.0 {
            self.settle();
            return true;
        }

        if after.abs() <= config.rest_displacement_threshold
            && self.velocity.abs() <= config.rest_speed_threshold
        {
            self.settle();
            return true;
        }

        false
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.at_rest = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(spring: &mut Spring, total: Duration, frame: Duration) -> Vec<f64> {
        let mut positions = Vec::new();
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            spring.advance(frame);
            positions.push(spring.position());
            elapsed += frame;
        }
        positions
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let mut spring = Spring::new(SpringConfig::default(), 5.0);
        assert!(spring.is_at_rest());
        assert!(!spring.advance(Duration::from_millis(16)));
        assert_eq!(spring.position(), 5.0);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(100.0);
        assert!(!spring.is_at_rest());

        run_for(&mut spring, Duration::from_secs(3), Duration::from_millis(16));

        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 100.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_first_frame_moves_towards_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-40.0);
        spring.advance(Duration::from_millis(16));
        assert!(spring.position() < 0.0);
        assert!(spring.position() > -40.0);
        assert!(spring.velocity() < 0.0);
    }

    #[test]
    fn test_retarget_keeps_position_and_velocity() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(100.0);
        spring.advance(Duration::from_millis(50));

        let position = spring.position();
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.position(), position);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.target(), 0.0);

        // Momentum carries it further before it turns around
        spring.advance(Duration::from_millis(1));
        assert!(spring.position() > position);

        run_for(&mut spring, Duration::from_secs(3), Duration::from_millis(16));
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_default_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(100.0);
        let positions = run_for(&mut spring, Duration::from_secs(2), Duration::from_millis(5));
        assert!(positions.iter().any(|p| *p > 100.0));
    }

    #[test]
    fn test_overshoot_clamping() {
        let config = SpringConfig {
            overshoot_clamping: true,
            ..Default::default()
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        let positions = run_for(&mut spring, Duration::from_secs(2), Duration::from_millis(5));
        assert!(positions.iter().all(|p| *p <= 100.0));
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 100.0);
    }

    #[test]
    fn test_frame_split_does_not_matter() {
        let mut a = Spring::new(SpringConfig::default(), 0.0);
        let mut b = a;
        a.set_target(60.0);
        b.set_target(60.0);

        a.advance(Duration::from_millis(40));
        for _ in 0..4 {
            b.advance(Duration::from_millis(10));
        }
        assert!((a.position() - b.position()).abs() < 1e-9);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut a = Spring::new(SpringConfig::default(), 0.0);
        a.set_target(100.0);
        let mut b = a;

        a.advance(Duration::from_secs(600));
        b.advance(MAX_FRAME);
        assert_eq!(a.position(), b.position());
        assert!(!a.is_at_rest());
    }

    #[test]
    fn test_snap_to() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(100.0);
        spring.advance(Duration::from_millis(30));
        spring.snap_to(20.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 20.0);
        assert_eq!(spring.velocity(), 0.0);
    }
}
