// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits the host platform implements.
//!
//! The engine treats the platform as two collaborators: a geometry oracle it
//! *queries* and a presentation sink it *commands*. A DOM host implements
//! [`GridGeometry`] over `getBoundingClientRect`-style queries and
//! [`RenderCommitter`] over style/class mutation; tests implement them over
//! plain structs.

use kurbo::{Point, Rect, Size};

use driftdeck_deck::{CardId, MediaKind};
use driftdeck_focus::CameraTransform;

/// Geometry the engine queries every frame.
///
/// All card coordinates are in *grid content space*: relative to the grid
/// layer's layout origin, unaffected by any transform the engine has
/// committed. The host is responsible for excluding its own transforms when
/// answering.
pub trait GridGeometry {
    /// Size of the viewport the grid pans within.
    fn viewport_size(&self) -> Size;

    /// Bounding size of the full card grid content.
    fn content_size(&self) -> Size;

    /// Screen-space position of the grid layer's layout origin when no
    /// transform is applied.
    fn grid_origin(&self) -> Point;

    /// Rectangle of a card in grid content space.
    fn card_rect(&self, card: CardId) -> Rect;
}

/// Media the host should materialize for one grid card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMedia {
    /// Which deck slot this is.
    pub id: CardId,
    /// Image or looping muted video.
    pub kind: MediaKind,
    /// Fully resolved media path.
    pub src: String,
}

/// What sat under a pointer press, as classified by the host's hit testing.
///
/// Only three distinctions matter to the engine: the focused card, the
/// information overlay, and everything else (which dismisses a focus).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A grid card.
    Card(CardId),
    /// The currently focused card (or a descendant of it).
    ActiveCard,
    /// The information overlay.
    Overlay,
    /// Anything else on the page.
    Background,
}

/// Presentation commands the engine issues.
///
/// This is the only channel through which the engine touches presentation
/// state. Hosts with missing cosmetic anchors (for example, no overlay
/// element on this page) simply no-op the corresponding methods; the engine
/// never observes the difference, which is exactly the graceful degradation
/// the interaction calls for.
pub trait RenderCommitter {
    /// Replaces the grid's cards with a freshly built deck.
    fn rebuild_grid(&mut self, cards: &[CardMedia]);

    /// Applies the grid layer's transform for this frame.
    fn apply_transform(&mut self, transform: CameraTransform);

    /// Toggles the layout-spacing class of the entry choreography.
    fn set_spaced(&mut self, on: bool);

    /// Toggles focused-mode presentation on the viewport and grid layer.
    fn set_focus_mode(&mut self, on: bool);

    /// Toggles the reset-animation class on the grid layer.
    fn set_resetting(&mut self, on: bool);

    /// Marks one card as the exclusive active card, or clears the marker.
    fn set_active_card(&mut self, card: Option<CardId>);

    /// Enables or disables pointer interactivity on all cards.
    fn set_cards_interactive(&mut self, on: bool);

    /// Populates and shows the information overlay.
    fn show_overlay(&mut self, title: &str, description: &str);

    /// Hides the information overlay.
    fn hide_overlay(&mut self);

    /// Attaches the high-resolution companion video over a card, initially
    /// invisible.
    fn attach_focus_video(&mut self, card: CardId, src: &str);

    /// Starts companion-video playback, muted or with sound.
    fn play_focus_video(&mut self, card: CardId, muted: bool);

    /// Fades the companion video in (`true`) or out (`false`).
    fn set_focus_video_visible(&mut self, card: CardId, visible: bool);

    /// Removes the companion video from a card.
    fn remove_focus_video(&mut self, card: CardId);

    /// Swaps a card's base media source (placeholder fallback).
    fn set_card_media_source(&mut self, card: CardId, src: &str);
}

/// A committer that ignores every command.
///
/// Useful for hosts or tests that only care about the simulation state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCommitter;

impl RenderCommitter for NullCommitter {
    fn rebuild_grid(&mut self, _cards: &[CardMedia]) {}
    fn apply_transform(&mut self, _transform: CameraTransform) {}
    fn set_spaced(&mut self, _on: bool) {}
    fn set_focus_mode(&mut self, _on: bool) {}
    fn set_resetting(&mut self, _on: bool) {}
    fn set_active_card(&mut self, _card: Option<CardId>) {}
    fn set_cards_interactive(&mut self, _on: bool) {}
    fn show_overlay(&mut self, _title: &str, _description: &str) {}
    fn hide_overlay(&mut self) {}
    fn attach_focus_video(&mut self, _card: CardId, _src: &str) {}
    fn play_focus_video(&mut self, _card: CardId, _muted: bool) {}
    fn set_focus_video_visible(&mut self, _card: CardId, _visible: bool) {}
    fn remove_focus_video(&mut self, _card: CardId) {}
    fn set_card_media_source(&mut self, _card: CardId, _src: &str) {}
}
