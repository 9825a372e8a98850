// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Ribbon: the works carousel's scroll simulation.
//!
//! The carousel is a horizontal strip of project covers laid out three times
//! over, scrolling forever: wheel and touch input feed a velocity, every
//! frame integrates and decays it, and the offset wraps over one copy's
//! width so the seam is never visible. A per-item proximity style (slight
//! scale-up and parallax shift near the viewport center) gives the strip
//! depth.
//!
//! Like the rest of driftdeck, the simulation is headless: the host owns
//! the strip's elements and widths, calls [`Ribbon::frame`] from its frame
//! callback, and applies the returned offset plus one [`item_style`] per
//! visible item.
//!
//! ## Minimal example
//!
//! ```rust
//! use driftdeck_ribbon::{Ribbon, RibbonConfig};
//!
//! let mut ribbon = Ribbon::new(RibbonConfig::default());
//! ribbon.wheel(40.0);
//! let offset = ribbon.frame(3600.0);
//! assert!(offset < 0.0); // scrolling forward moves the strip left
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Tuning constants for the ribbon simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonConfig {
    /// Velocity gained per unit of wheel delta.
    pub wheel_gain: f64,
    /// Velocity gained per unit of touch-drag delta.
    pub touch_gain: f64,
    /// Per-frame velocity multiplier.
    pub friction: f64,
    /// Scale boost an item gets at the exact viewport center.
    pub center_scale: f64,
    /// Parallax shift per unit of normalized center distance.
    pub parallax: f64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            wheel_gain: 0.15,
            touch_gain: 0.5,
            friction: 0.9,
            center_scale: 0.1,
            parallax: 30.0,
        }
    }
}

/// Proximity styling for one ribbon item.
///
/// Items scale up as they approach the viewport center and shift with a
/// small parallax proportional to their signed distance from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal shift in view units.
    pub parallax: f64,
}

/// Endlessly wrapping 1D scroll state for the works carousel.
///
/// The strip's content is laid out three times over; the offset lives in
/// `(-track_width / 3, 0]` and wraps when it leaves that window, so one
/// copy's width of travel brings an identical frame back around.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ribbon {
    config: RibbonConfig,
    scroll_x: f64,
    velocity: f64,
    last_touch_x: Option<f64>,
}

impl Ribbon {
    /// Creates a ribbon at rest at offset zero.
    #[must_use]
    pub fn new(config: RibbonConfig) -> Self {
        Self {
            config,
            scroll_x: 0.0,
            velocity: 0.0,
            last_touch_x: None,
        }
    }

    /// The current strip offset; the host applies it as a translation.
    #[must_use]
    pub fn scroll_x(&self) -> f64 {
        self.scroll_x
    }

    /// The current scroll velocity in units per frame.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Feeds one wheel event. Deltas accumulate, so a fast spin builds
    /// speed across events.
    pub fn wheel(&mut self, delta_y: f64) {
        self.velocity += delta_y * self.config.wheel_gain;
    }

    /// Begins a touch drag at `x`, stopping any in-flight scroll.
    pub fn touch_start(&mut self, x: f64) {
        self.last_touch_x = Some(x);
        self.velocity = 0.0;
    }

    /// Feeds one touch move. Unlike wheel input, the latest drag delta
    /// replaces the velocity outright, so the strip tracks the finger.
    pub fn touch_move(&mut self, x: f64) {
        let Some(last) = self.last_touch_x else {
            return;
        };
        self.velocity = (last - x) * self.config.touch_gain;
        self.last_touch_x = Some(x);
    }

    /// Ends the touch drag; the last velocity coasts on.
    pub fn touch_end(&mut self) {
        self.last_touch_x = None;
    }

    /// Runs one frame: integrate, decay, wrap. Returns the new offset.
    ///
    /// `track_width` is the full laid-out width of the tripled strip,
    /// re-queried by the host each frame so layout changes are picked up.
    pub fn frame(&mut self, track_width: f64) -> f64 {
        self.scroll_x -= self.velocity;
        self.velocity *= self.config.friction;

        let span = track_width / 3.0;
        if self.scroll_x <= -span {
            self.scroll_x = 0.0;
        }
        if self.scroll_x > 0.0 {
            self.scroll_x = -span;
        }
        self.scroll_x
    }

    /// Proximity styling for an item whose on-screen center is at
    /// `item_center`, against a viewport centered at `viewport_center`.
    #[must_use]
    pub fn item_style(&self, item_center: f64, viewport_center: f64) -> ItemStyle {
        let distance = (item_center - viewport_center) / viewport_center;
        let closeness = 1.0 - distance.abs().min(1.0);
        ItemStyle {
            scale: 1.0 + self.config.center_scale * closeness,
            parallax: distance * self.config.parallax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: f64 = 3600.0;

    #[test]
    fn starts_at_rest() {
        let ribbon = Ribbon::default();
        assert_eq!(ribbon.scroll_x(), 0.0);
        assert_eq!(ribbon.velocity(), 0.0);
    }

    #[test]
    fn wheel_deltas_accumulate() {
        let mut ribbon = Ribbon::default();
        ribbon.wheel(40.0);
        ribbon.wheel(40.0);
        assert!((ribbon.velocity() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn frame_integrates_then_decays() {
        let mut ribbon = Ribbon::default();
        ribbon.wheel(40.0); // velocity 6
        let offset = ribbon.frame(TRACK);
        assert!((offset - -6.0).abs() < 1e-12);
        assert!((ribbon.velocity() - 5.4).abs() < 1e-12);
    }

    #[test]
    fn coasting_comes_to_rest() {
        let mut ribbon = Ribbon::default();
        ribbon.wheel(100.0);
        for _ in 0..500 {
            ribbon.frame(TRACK);
        }
        assert!(ribbon.velocity().abs() < 1e-3);
    }

    #[test]
    fn forward_travel_wraps_to_zero() {
        let mut ribbon = Ribbon::default();
        // One copy's width is 1200; push well past it.
        for _ in 0..40 {
            ribbon.wheel(400.0);
            ribbon.frame(TRACK);
        }
        assert!(ribbon.scroll_x() > -1200.0);
        assert!(ribbon.scroll_x() <= 0.0);
    }

    #[test]
    fn backward_travel_wraps_to_far_edge() {
        let mut ribbon = Ribbon::default();
        ribbon.wheel(-40.0); // velocity -6; scroll moves positive
        let offset = ribbon.frame(TRACK);
        assert_eq!(offset, -1200.0);
    }

    #[test]
    fn touch_drag_tracks_the_finger() {
        let mut ribbon = Ribbon::default();
        ribbon.wheel(100.0);
        ribbon.touch_start(500.0);
        // Touch down kills the wheel fling.
        assert_eq!(ribbon.velocity(), 0.0);

        ribbon.touch_move(480.0);
        assert!((ribbon.velocity() - 10.0).abs() < 1e-12);
        // The next move replaces, not accumulates.
        ribbon.touch_move(470.0);
        assert!((ribbon.velocity() - 5.0).abs() < 1e-12);

        ribbon.touch_end();
        ribbon.frame(TRACK);
        assert!(ribbon.velocity() > 0.0, "release coasts");
    }

    #[test]
    fn touch_moves_without_a_start_are_ignored() {
        let mut ribbon = Ribbon::default();
        ribbon.touch_move(300.0);
        assert_eq!(ribbon.velocity(), 0.0);
    }

    #[test]
    fn centered_item_peaks_scale_without_parallax() {
        let ribbon = Ribbon::default();
        let style = ribbon.item_style(640.0, 640.0);
        assert!((style.scale - 1.1).abs() < 1e-12);
        assert_eq!(style.parallax, 0.0);
    }

    #[test]
    fn distant_item_flattens_out() {
        let ribbon = Ribbon::default();
        // At or beyond one viewport-center of distance, the scale boost is
        // fully gone while parallax keeps growing linearly.
        let style = ribbon.item_style(1280.0, 640.0);
        assert!((style.scale - 1.0).abs() < 1e-12);
        assert!((style.parallax - 30.0).abs() < 1e-12);

        let far = ribbon.item_style(1920.0, 640.0);
        assert!((far.scale - 1.0).abs() < 1e-12);
        assert!((far.parallax - 60.0).abs() < 1e-12);
    }

    #[test]
    fn parallax_is_signed() {
        let ribbon = Ribbon::default();
        let left = ribbon.item_style(320.0, 640.0);
        let right = ribbon.item_style(960.0, 640.0);
        assert!((left.parallax + 15.0).abs() < 1e-12);
        assert!((right.parallax - 15.0).abs() < 1e-12);
        assert!((left.scale - right.scale).abs() < 1e-12);
    }
}
