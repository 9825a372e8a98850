// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Input: pointer normalization and tap/drag discrimination.
//!
//! This crate turns a raw pointer-down/move/up (or touch-start/move/end)
//! sequence into the two signals the rest of driftdeck consumes:
//!
//! - continuous movement deltas `(dx, dy)` while a press is active, and
//! - a single discrete [`Gesture`] classification when the press ends,
//!   distinguishing a *tap* (total displacement below a fixed threshold,
//!   intended as a click) from a *drag* (intended as a pan).
//!
//! A mouse button and a single touch contact are treated identically; any
//! additional simultaneous contacts are ignored while a press is active
//! (single-pointer model). The tracker emits values only — it never mutates
//! pan or focus state, which belong to the simulator and state machine
//! crates built on top of this one.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use driftdeck_input::{Gesture, PointerId, PointerSession};
//!
//! let mut session = PointerSession::default();
//!
//! // Press at (10, 10), wiggle by 2 units, release.
//! session.press(PointerId::MOUSE, Point::new(10.0, 10.0));
//! let delta = session.movement(PointerId::MOUSE, Point::new(12.0, 10.0)).unwrap();
//! assert_eq!(delta.x, 2.0);
//!
//! let release = session.release(PointerId::MOUSE, Point::new(12.0, 10.0)).unwrap();
//! assert_eq!(release.gesture, Gesture::Tap);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod session;

pub use session::{Gesture, PointerId, PointerSession, Release, TAP_THRESHOLD};
