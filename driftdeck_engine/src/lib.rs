// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Engine: the playground grid coordinator.
//!
//! This crate wires the leaf crates — input discrimination, inertial pan,
//! deck building, and the focus cycle — into one [`Playground`] value that
//! owns every piece of shared mutable state the interaction needs: the
//! deck, the pan offsets, the focus machine, the parked zoom request, the
//! staged-enablement flags, and a one-shot timer queue. Confining all of it
//! to one value preserves the single-writer guarantee the original
//! single-threaded design relied on, while keeping every piece testable.
//!
//! The platform stays on the far side of two capability traits:
//!
//! - [`GridGeometry`] answers the questions the engine asks each frame
//!   (viewport size, grid content size, per-card rectangles).
//! - [`RenderCommitter`] receives every presentation command the engine
//!   issues (transforms, classes, overlay text, video lifecycle). It is the
//!   only path by which the engine touches presentation state, so a
//!   recording double makes the whole interaction assertable in tests.
//!
//! Hosts drive the engine with plain calls: `init` once the page is ready,
//! `frame(now)` from their per-frame callback, and the pointer entry points
//! from event handlers. Time flows in through those `now` arguments; the
//! engine schedules its own one-shot work (entry choreography, reset
//! settle, video fades) on an internal deadline queue drained at the start
//! of each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use driftdeck_deck::portfolio_catalog;
//! use driftdeck_engine::{NullCommitter, Playground, PlaygroundConfig};
//!
//! let mut playground = Playground::new(PlaygroundConfig::default());
//! let mut committer = NullCommitter;
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! playground.init(&portfolio_catalog(), &mut rng, 0.0, &mut committer);
//! assert_eq!(playground.deck().len(), 104);
//! ```

mod host;
mod playground;
mod timers;

pub use host::{CardMedia, GridGeometry, HitTarget, NullCommitter, RenderCommitter};
pub use playground::{Playground, PlaygroundConfig, PlaygroundDebugInfo};

// The identities and values crossing the host seams come from the leaf
// crates; re-export them so hosts depend on this crate alone.
pub use driftdeck_deck::{Card, CardId, CardTemplate, DeckConfig, MediaKind};
pub use driftdeck_focus::{CameraTransform, FocusConfig, FocusPhase};
pub use driftdeck_input::PointerId;
pub use driftdeck_pan::PanConfig;
