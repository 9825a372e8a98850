// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Tuning constants for the pan simulation.
///
/// The defaults are the grid's shipped feel; they are exposed so hosts can
/// retune without forking the simulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Per-frame velocity multiplier while coasting after a release.
    pub friction: f64,
    /// Per-frame velocity multiplier while a zoom request is waiting for the
    /// camera to settle. Stronger than `friction` so the wait stays short.
    pub settle_decay: f64,
    /// Speed (units/frame) under which a settling fling counts as stopped.
    pub settle_speed: f64,
    /// Fraction of the remaining `target - current` distance covered per
    /// frame.
    pub approach: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            friction: 0.95,
            settle_decay: 0.6,
            settle_speed: 0.5,
            approach: 0.08,
        }
    }
}

/// How the simulator should treat velocity on a given frame.
///
/// The caller derives this from its own state: an active drag suppresses
/// inertia entirely, and a pending zoom request switches the decay model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// A drag is active; `target` is driven by pointer deltas, so the step
    /// neither decays nor integrates velocity.
    Dragging,
    /// Free motion: velocity decays by friction and moves `target`.
    Coasting,
    /// A zoom request is waiting; velocity decays hard until it stops.
    SettlingForZoom,
}

/// Outcome of one simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Normal frame; nothing to act on.
    Stepped,
    /// The settling fling just dropped below the stop speed; velocity has
    /// been zeroed and the caller should fire its pending zoom now.
    SettledForZoom,
}

/// Computes the symmetric per-axis pan limits.
///
/// Content that fits entirely within the viewport gets a limit of zero on
/// that axis, which disables panning there.
#[must_use]
pub fn axis_limits(content: Size, viewport: Size) -> Vec2 {
    Vec2::new(
        ((content.width - viewport.width) / 2.0).max(0.0),
        ((content.height - viewport.height) / 2.0).max(0.0),
    )
}

/// Inertial pan state: logical target, rendered offset, and fling velocity.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanSimulator {
    config: PanConfig,
    target: Vec2,
    current: Vec2,
    velocity: Vec2,
}

impl PanSimulator {
    /// Creates a simulator at rest at the origin with custom tuning.
    #[must_use]
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// The authoritative logical offset.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// The rendered offset; commit this as the frame's translation.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// The fling velocity in units per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current fling speed (velocity magnitude) in units per frame.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.hypot()
    }

    /// Marks the start of a drag: kills any in-flight fling.
    pub fn begin_drag(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Applies one pointer move: `target` follows the delta directly and the
    /// delta becomes the fling velocity, so a release carries momentum.
    pub fn drag_by(&mut self, delta: Vec2) {
        self.target += delta;
        self.velocity = delta;
    }

    /// Runs one frame of simulation.
    ///
    /// Order matters and is fixed: velocity decay and integration (phase
    /// dependent), then clamping `target` to `limits`, then easing `current`
    /// toward `target`. `current` is never clamped directly; it trails the
    /// clamped target and therefore respects the bounds asymptotically.
    pub fn step(&mut self, phase: PanPhase, limits: Vec2) -> StepResult {
        let mut result = StepResult::Stepped;
        match phase {
            PanPhase::Dragging => {}
            PanPhase::Coasting => {
                self.velocity *= self.config.friction;
                self.target += self.velocity;
            }
            PanPhase::SettlingForZoom => {
                self.velocity *= self.config.settle_decay;
                if self.velocity.hypot() < self.config.settle_speed {
                    self.velocity = Vec2::ZERO;
                    result = StepResult::SettledForZoom;
                }
                self.target += self.velocity;
            }
        }

        self.target.x = self.target.x.clamp(-limits.x, limits.x);
        self.target.y = self.target.y.clamp(-limits.y, limits.y);

        self.current += (self.target - self.current) * self.config.approach;
        result
    }

    /// Returns everything to rest at the origin.
    ///
    /// Used on focus-enter and focus-exit, where the camera transform takes
    /// over and the pan restarts from identity afterwards.
    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
        self.current = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    const NO_LIMITS: Vec2 = Vec2::new(f64::MAX, f64::MAX);

    #[test]
    fn limits_derive_from_content_overhang() {
        let limits = axis_limits(Size::new(3000.0, 1000.0), Size::new(1000.0, 1000.0));
        assert_eq!(limits, Vec2::new(1000.0, 0.0));
    }

    #[test]
    fn content_that_fits_cannot_pan() {
        let limits = axis_limits(Size::new(500.0, 400.0), Size::new(1000.0, 800.0));
        assert_eq!(limits, Vec2::ZERO);

        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(300.0, -200.0));
        pan.step(PanPhase::Coasting, limits);
        assert_eq!(pan.target(), Vec2::ZERO);
    }

    #[test]
    fn drag_moves_target_and_seeds_velocity() {
        let mut pan = PanSimulator::default();
        pan.begin_drag();
        pan.drag_by(Vec2::new(10.0, 4.0));
        pan.drag_by(Vec2::new(6.0, 2.0));

        assert_eq!(pan.target(), Vec2::new(16.0, 6.0));
        // Velocity is the latest delta, not an accumulation.
        assert_eq!(pan.velocity(), Vec2::new(6.0, 2.0));
    }

    #[test]
    fn begin_drag_kills_inertia() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(30.0, 0.0));
        assert!(pan.speed() > 0.0);
        pan.begin_drag();
        assert_eq!(pan.velocity(), Vec2::ZERO);
    }

    #[test]
    fn coasting_decays_exponentially() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(20.0, 0.0));

        pan.step(PanPhase::Coasting, NO_LIMITS);
        assert!((pan.velocity().x - 19.0).abs() < 1e-12);
        pan.step(PanPhase::Coasting, NO_LIMITS);
        assert!((pan.velocity().x - 18.05).abs() < 1e-12);
    }

    #[test]
    fn coasting_eventually_stops_moving_target() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(20.0, 10.0));
        for _ in 0..2000 {
            pan.step(PanPhase::Coasting, NO_LIMITS);
        }
        let before = pan.target();
        pan.step(PanPhase::Coasting, NO_LIMITS);
        assert!((pan.target() - before).hypot() < 1e-6);
    }

    #[test]
    fn dragging_phase_skips_decay_and_integration() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(10.0, 0.0));
        let (target, velocity) = (pan.target(), pan.velocity());

        pan.step(PanPhase::Dragging, NO_LIMITS);
        assert_eq!(pan.target(), target);
        assert_eq!(pan.velocity(), velocity);
    }

    #[test]
    fn target_never_exceeds_limits() {
        let limits = Vec2::new(1000.0, 600.0);
        let mut pan = PanSimulator::default();
        for _ in 0..300 {
            pan.drag_by(Vec2::new(25.0, 17.0));
            pan.step(PanPhase::Dragging, limits);
            assert!(pan.target().x.abs() <= limits.x);
            assert!(pan.target().y.abs() <= limits.y);
        }
        assert_eq!(pan.target().x, limits.x);
        assert_eq!(pan.target().y, limits.y);
    }

    #[test]
    fn overshoot_clamps_to_exact_limit() {
        let limits = axis_limits(Size::new(3000.0, 1000.0), Size::new(1000.0, 1000.0));
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(-5000.0, 0.0));
        pan.step(PanPhase::Dragging, limits);
        assert_eq!(pan.target().x, -1000.0);
    }

    #[test]
    fn current_converges_without_overshooting() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(100.0, 0.0));
        pan.begin_drag(); // freeze target at 100

        let mut last_gap = f64::MAX;
        for _ in 0..400 {
            pan.step(PanPhase::Coasting, NO_LIMITS);
            let gap = pan.target().x - pan.current().x;
            assert!(gap >= 0.0); // never passes the target
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn settling_reports_exactly_once_per_fling() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(8.0, 0.0));

        let mut settled = 0;
        for _ in 0..20 {
            if pan.step(PanPhase::SettlingForZoom, NO_LIMITS) == StepResult::SettledForZoom {
                settled += 1;
                break;
            }
        }
        assert_eq!(settled, 1);
        assert_eq!(pan.velocity(), Vec2::ZERO);

        // 8 * 0.6^n drops below 0.5 first at n = 6, so five frames step
        // normally and the sixth settles.
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(8.0, 0.0));
        let mut frames = 0;
        while pan.step(PanPhase::SettlingForZoom, NO_LIMITS) == StepResult::Stepped {
            frames += 1;
        }
        assert_eq!(frames, 5, "settle should trigger on the sixth frame");
    }

    #[test]
    fn slow_fling_settles_immediately() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(0.4, 0.0));
        assert_eq!(
            pan.step(PanPhase::SettlingForZoom, NO_LIMITS),
            StepResult::SettledForZoom
        );
    }

    #[test]
    fn reset_returns_everything_to_origin() {
        let mut pan = PanSimulator::default();
        pan.drag_by(Vec2::new(50.0, 50.0));
        for _ in 0..10 {
            pan.step(PanPhase::Coasting, NO_LIMITS);
        }
        pan.reset();
        assert_eq!(pan.target(), Vec2::ZERO);
        assert_eq!(pan.current(), Vec2::ZERO);
        assert_eq!(pan.velocity(), Vec2::ZERO);
    }
}
