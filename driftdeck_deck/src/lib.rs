// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftdeck Deck: building the card grid's deck from a small catalog.
//!
//! The playground grid shows far more cards than the portfolio has projects.
//! This crate materializes that deck: the catalog is repeated round-robin
//! until the fixed deck size is reached, truncated to exactly that size, and
//! then shuffled with an unbiased Fisher–Yates pass so no two page loads
//! look alike. It also derives each card's media kind and asset paths, and
//! lays out the staged-enablement choreography that follows a build.
//!
//! The crate owns no views and performs no I/O; hosts instantiate whatever
//! elements they like for the returned [`Card`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use driftdeck_deck::{CardTemplate, build_deck};
//!
//! let catalog = vec![
//!     CardTemplate::image("a.png", "A", "first"),
//!     CardTemplate::image("b.png", "B", "second"),
//!     CardTemplate::image("c.png", "C", "third"),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let deck = build_deck(&catalog, 5, &mut rng);
//! assert_eq!(deck.len(), 5);
//!
//! // Round-robin fill: two cards repeat, one appears once.
//! let firsts = deck.iter().filter(|c| c.template.title == "A").count();
//! assert_eq!(firsts, 2);
//! ```

mod build;
mod portfolio;
mod stages;

pub use build::{Card, CardId, CardTemplate, MediaKind, build_deck, placeholder_url};
pub use portfolio::portfolio_catalog;
pub use stages::{DeckConfig, Stage, StagePlan};
