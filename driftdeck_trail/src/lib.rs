// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Trail: the cursor's trailing thread.
//!
//! A short chain of points follows the pointer: the head snaps to the
//! pointer every frame and each later point eases a fixed fraction toward
//! its predecessor, which gives the thread its whip-like lag. The host
//! strokes [`Trail::points`] as a polyline and pins its cursor badge to
//! [`Trail::head`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use driftdeck_trail::{Trail, TrailConfig};
//!
//! let mut trail = Trail::new(TrailConfig::default(), Point::new(640.0, 360.0));
//! trail.frame(Point::new(700.0, 360.0));
//! assert_eq!(trail.head(), Point::new(700.0, 360.0));
//! assert!(trail.points().last().unwrap().x < 700.0); // the tail lags
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

/// Tuning constants for the trail chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Number of points in the chain, head included.
    pub length: usize,
    /// Fraction of the gap to its predecessor each point closes per frame.
    pub follow: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            length: 12,
            follow: 0.25,
        }
    }
}

/// A chain of points trailing the pointer.
#[derive(Clone, Debug)]
pub struct Trail {
    config: TrailConfig,
    points: Vec<Point>,
}

impl Trail {
    /// Creates a trail collapsed onto `origin` (typically the viewport
    /// center, matching where the pointer is assumed before its first move).
    #[must_use]
    pub fn new(config: TrailConfig, origin: Point) -> Self {
        let points = alloc::vec![origin; config.length.max(1)];
        Self { config, points }
    }

    /// The chain, head first; stroke it as a polyline.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The head of the chain, where the cursor badge sits.
    #[must_use]
    pub fn head(&self) -> Point {
        self.points[0]
    }

    /// Runs one frame: the head snaps to `pointer` and every later point
    /// eases toward its predecessor.
    pub fn frame(&mut self, pointer: Point) {
        self.points[0] = pointer;
        for i in 1..self.points.len() {
            let lead = self.points[i - 1];
            let point = &mut self.points[i];
            *point += (lead - *point) * self.config.follow;
        }
    }
}
