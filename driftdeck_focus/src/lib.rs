// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Focus: the browsing ↔ focused cycle of the card grid.
//!
//! Two pieces live here:
//!
//! - [`FocusMachine`]: an explicit state machine over
//!   `Browsing → ZoomPending → Focused → Resetting → Browsing`, replacing
//!   the combinatorial space of boolean flags with states whose illegal
//!   combinations (focused-and-dragging, dismiss-while-resetting) are
//!   unrepresentable.
//! - [`focus_transform`]: the camera math that maps a tapped card's center
//!   to the viewport's center at a fixed zoom factor, and its reversal to
//!   identity on dismissal.
//!
//! The machine is generic over the card identity type and owns no cards; it
//! only remembers which identity is pending or focused. Timing is external:
//! hosts schedule the reset-settle deadline themselves and report it back
//! via [`FocusMachine::settle_finished`].
//!
//! ## Minimal example
//!
//! ```rust
//! use driftdeck_focus::{FocusMachine, FocusPhase, TapOutcome};
//!
//! let mut focus: FocusMachine<usize> = FocusMachine::default();
//!
//! // A tap while the camera is still: zoom immediately.
//! assert_eq!(focus.tap(3, 0.0), TapOutcome::Zoom);
//! assert_eq!(focus.phase(), FocusPhase::Focused);
//! assert_eq!(focus.focused_card(), Some(3));
//!
//! // Only an outside press leaves Focused.
//! assert!(focus.dismiss());
//! assert_eq!(focus.phase(), FocusPhase::Resetting);
//! focus.settle_finished();
//! assert_eq!(focus.phase(), FocusPhase::Browsing);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod machine;

pub use camera::{CameraTransform, focus_transform};
pub use machine::{FocusConfig, FocusMachine, FocusPhase, TapOutcome};
