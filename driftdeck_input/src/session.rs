// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press session tracking: deltas while pressed, tap/drag classification on release.
//!
//! ## Usage
//!
//! 1) Call [`PointerSession::press`] when a button goes down or a touch
//!    contact begins. The first pointer wins; later contacts are ignored
//!    until the session ends.
//! 2) On each move event, call [`PointerSession::movement`] to get the delta
//!    since the previous position of the active pointer.
//! 3) Call [`PointerSession::release`] when the active pointer lifts to get
//!    the [`Release`] record, including the [`Gesture`] classification.
//! 4) [`PointerSession::cancel`] abandons the session without classifying
//!    (for example when the platform cancels a touch sequence).

use kurbo::{Point, Vec2};

/// Total press→release displacement below which a press counts as a tap.
///
/// The comparison is strict: displacement exactly at the threshold is a drag.
pub const TAP_THRESHOLD: f64 = 5.0;

/// Identity of a platform pointer source.
///
/// Hosts map whatever the platform hands them (a mouse device, a touch
/// contact identifier) onto this. The value only needs to be stable for the
/// lifetime of one press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Conventional identity for the mouse pointer.
    pub const MOUSE: Self = Self(0);
}

/// What a completed press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Displacement stayed under [`TAP_THRESHOLD`]; the press was a click.
    Tap,
    /// Displacement reached the threshold; the press was a pan.
    Drag,
}

/// Record of a completed press, produced by [`PointerSession::release`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Tap/drag classification of the whole press.
    pub gesture: Gesture,
    /// Straight-line distance from press origin to release position.
    pub displacement: f64,
    /// Where the press began.
    pub origin: Point,
    /// Where the pointer lifted.
    pub position: Point,
}

#[derive(Clone, Copy, Debug)]
struct ActivePress {
    id: PointerId,
    origin: Point,
    last: Point,
}

/// Tracks one press at a time across pointer sources.
///
/// A mouse press and a single touch contact behave identically. While a
/// press is active, events from any other [`PointerId`] are ignored, which
/// gives the single-pointer model the grid interaction expects.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSession {
    active: Option<ActivePress>,
}

impl PointerSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a press, returning `true` if this pointer became the active one.
    ///
    /// Returns `false` (and changes nothing) when another pointer already
    /// holds the session.
    pub fn press(&mut self, id: PointerId, pos: Point) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActivePress {
            id,
            origin: pos,
            last: pos,
        });
        true
    }

    /// Feeds a move event, returning the delta since the previous position.
    ///
    /// Returns `None` when no press is active or the event belongs to a
    /// pointer other than the active one.
    pub fn movement(&mut self, id: PointerId, pos: Point) -> Option<Vec2> {
        let press = self.active.as_mut().filter(|p| p.id == id)?;
        let delta = pos - press.last;
        press.last = pos;
        Some(delta)
    }

    /// Ends the press, classifying it as tap or drag.
    ///
    /// Returns `None` when the lifting pointer is not the active one; the
    /// session stays open in that case (a second finger lifting must not end
    /// the primary press).
    pub fn release(&mut self, id: PointerId, pos: Point) -> Option<Release> {
        let press = self.active.filter(|p| p.id == id)?;
        self.active = None;
        let displacement = (pos - press.origin).hypot();
        let gesture = if displacement < TAP_THRESHOLD {
            Gesture::Tap
        } else {
            Gesture::Drag
        };
        Some(Release {
            gesture,
            displacement,
            origin: press.origin,
            position: pos,
        })
    }

    /// Abandons the active press without producing a classification.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the active pointer's identity, if any.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active.map(|p| p.id)
    }
}
