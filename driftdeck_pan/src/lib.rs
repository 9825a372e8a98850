// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Pan: inertial 2D pan simulation.
//!
//! This crate owns the pair of offsets at the heart of the grid's feel:
//!
//! - `target` — the authoritative logical offset, driven directly by drags
//!   and by decaying fling velocity, always clamped to the content limits.
//! - `current` — the rendered offset, pulled toward `target` by a fixed
//!   fraction every frame (a leaky low-pass filter), so motion eases out
//!   without ever overshooting.
//!
//! The simulator is headless: it knows nothing about elements or styles.
//! Hosts feed it drag deltas and per-frame limits, and read back `current`
//! as the frame's translation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use driftdeck_pan::{PanPhase, PanSimulator, axis_limits};
//!
//! let mut pan = PanSimulator::default();
//! let limits = axis_limits(Size::new(3000.0, 2000.0), Size::new(1000.0, 800.0));
//! assert_eq!(limits, Vec2::new(1000.0, 600.0));
//!
//! // Drag right by 12 units, release, and let the fling coast.
//! pan.drag_by(Vec2::new(12.0, 0.0));
//! for _ in 0..120 {
//!     pan.step(PanPhase::Coasting, limits);
//! }
//! assert!(pan.target().x > 12.0); // momentum carried past the drag
//! assert!(pan.target().x <= limits.x);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod simulator;

pub use simulator::{PanConfig, PanPhase, PanSimulator, StepResult, axis_limits};
