// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry choreography: the grid unlocks in three fixed steps after a build.
//!
//! A freshly built grid is intentionally inert: cards ignore the pointer and
//! sit in their tight initial layout. Three one-shot stages then fire at
//! fixed offsets — the spacing class, the physics-ready flag, and finally
//! pointer interactivity. These are deadlines consumed by the engine's timer
//! drain, not a continuous animation.

/// Deck construction and choreography configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckConfig {
    /// Number of cards in a built deck.
    pub total_cards: usize,
    /// Prefix prepended to every catalog filename.
    pub asset_prefix: String,
    /// Delay from build to the layout-spacing stage, in milliseconds.
    pub spaced_delay_ms: f64,
    /// Delay from build until the pan simulation starts running.
    pub ready_delay_ms: f64,
    /// Delay from build until cards accept taps.
    pub clickable_delay_ms: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            total_cards: 104,
            asset_prefix: String::from("../playgroundassets/"),
            spaced_delay_ms: 1000.0,
            ready_delay_ms: 1800.0,
            clickable_delay_ms: 2500.0,
        }
    }
}

/// One step of the staged enablement sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Apply the layout-spacing visual class.
    Spaced,
    /// Start running the pan simulation.
    Ready,
    /// Enable per-card pointer interactivity.
    Clickable,
}

/// Scheduled stage deadlines for one grid build.
///
/// Stages always fire in [`Stage`] declaration order, even if a host skips
/// frames and several deadlines pass at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagePlan {
    spaced_at: f64,
    ready_at: f64,
    clickable_at: f64,
    fired: usize,
}

impl StagePlan {
    /// Plans the three stages relative to the build instant `built_at_ms`.
    #[must_use]
    pub fn new(built_at_ms: f64, config: &DeckConfig) -> Self {
        Self {
            spaced_at: built_at_ms + config.spaced_delay_ms,
            ready_at: built_at_ms + config.ready_delay_ms,
            clickable_at: built_at_ms + config.clickable_delay_ms,
            fired: 0,
        }
    }

    /// Pops the next stage whose deadline has passed, if any.
    ///
    /// Call repeatedly per frame until it returns `None`.
    pub fn due(&mut self, now_ms: f64) -> Option<Stage> {
        let (stage, deadline) = match self.fired {
            0 => (Stage::Spaced, self.spaced_at),
            1 => (Stage::Ready, self.ready_at),
            2 => (Stage::Clickable, self.clickable_at),
            _ => return None,
        };
        if now_ms < deadline {
            return None;
        }
        self.fired += 1;
        Some(stage)
    }

    /// Returns `true` once all three stages have fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fired >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_fire_in_order_at_their_deadlines() {
        let config = DeckConfig::default();
        let mut plan = StagePlan::new(0.0, &config);

        assert_eq!(plan.due(999.0), None);
        assert_eq!(plan.due(1000.0), Some(Stage::Spaced));
        assert_eq!(plan.due(1000.0), None);
        assert_eq!(plan.due(1799.9), None);
        assert_eq!(plan.due(1800.0), Some(Stage::Ready));
        assert_eq!(plan.due(2500.0), Some(Stage::Clickable));
        assert!(plan.is_complete());
        assert_eq!(plan.due(10_000.0), None);
    }

    #[test]
    fn skipped_frames_drain_multiple_stages() {
        let config = DeckConfig::default();
        let mut plan = StagePlan::new(100.0, &config);

        let mut fired = Vec::new();
        while let Some(stage) = plan.due(5000.0) {
            fired.push(stage);
        }
        assert_eq!(fired, vec![Stage::Spaced, Stage::Ready, Stage::Clickable]);
    }

    #[test]
    fn plan_is_relative_to_build_instant() {
        let config = DeckConfig::default();
        let mut plan = StagePlan::new(10_000.0, &config);
        assert_eq!(plan.due(2500.0), None);
        assert_eq!(plan.due(11_000.0), Some(Stage::Spaced));
    }

    #[test]
    fn default_config_matches_shipped_grid() {
        let config = DeckConfig::default();
        assert_eq!(config.total_cards, 104);
        assert_eq!(config.asset_prefix, "../playgroundassets/");
        assert_eq!(config.spaced_delay_ms, 1000.0);
        assert_eq!(config.ready_delay_ms, 1800.0);
        assert_eq!(config.clickable_delay_ms, 2500.0);
    }
}
