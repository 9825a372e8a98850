// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for the focus cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusConfig {
    /// Magnification applied to a focused card.
    pub zoom: f64,
    /// Tap-time fling speed above which the zoom waits for the camera to
    /// settle instead of firing mid-fling.
    pub defer_speed: f64,
    /// How long the reset animation runs before input is accepted again, in
    /// milliseconds. 1200 ms shipped in an earlier revision of the grid.
    pub settle_ms: f64,
    /// Delay before a focus video starts its cross-fade over the thumbnail.
    pub video_fade_in_delay_ms: f64,
    /// Delay from dismissal until a faded-out focus video is removed.
    pub video_remove_delay_ms: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            zoom: 2.8,
            defer_speed: 1.0,
            settle_ms: 1800.0,
            video_fade_in_delay_ms: 100.0,
            video_remove_delay_ms: 600.0,
        }
    }
}

/// Where the grid is in its browsing ↔ focused cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPhase {
    /// Free panning; taps are accepted.
    Browsing,
    /// A tap landed mid-fling; the zoom fires once the camera settles.
    ZoomPending,
    /// One card is magnified and centered; only dismissal is accepted.
    Focused,
    /// The camera is animating back to identity; all input is ignored.
    Resetting,
}

/// What a tap resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Execute the zoom now.
    Zoom,
    /// The fling is still fast; the zoom is parked until the camera settles.
    Deferred,
    /// The machine is focused or resetting; the tap does nothing.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State<T> {
    Browsing,
    ZoomPending(T),
    Focused(T),
    Resetting,
}

/// Explicit state machine for the grid's focus cycle.
///
/// Generic over the card identity type `T`; the machine references cards by
/// identity only and never owns them. All transitions are guarded:
///
/// - `Browsing`/`ZoomPending` + tap → `Focused` (or `ZoomPending` when the
///   fling is fast; a newer tap supersedes the parked one).
/// - `ZoomPending` + settle → `Focused`; + drag start → `Browsing`.
/// - `Focused` + dismiss → `Resetting`.
/// - `Resetting` + settle deadline → `Browsing`. Nothing else leaves
///   `Resetting`.
#[derive(Clone, Copy, Debug)]
pub struct FocusMachine<T> {
    config: FocusConfig,
    state: State<T>,
}

impl<T> Default for FocusMachine<T> {
    fn default() -> Self {
        Self {
            config: FocusConfig::default(),
            state: State::Browsing,
        }
    }
}

impl<T: Copy + Eq> FocusMachine<T> {
    /// Creates a machine in `Browsing` with the given tuning.
    #[must_use]
    pub fn new(config: FocusConfig) -> Self {
        Self {
            config,
            state: State::Browsing,
        }
    }

    /// The machine's tuning constants.
    #[must_use]
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// The current phase, without card payloads.
    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        match self.state {
            State::Browsing => FocusPhase::Browsing,
            State::ZoomPending(_) => FocusPhase::ZoomPending,
            State::Focused(_) => FocusPhase::Focused,
            State::Resetting => FocusPhase::Resetting,
        }
    }

    /// The focused card's identity, if the machine is `Focused`.
    #[must_use]
    pub fn focused_card(&self) -> Option<T> {
        match self.state {
            State::Focused(card) => Some(card),
            _ => None,
        }
    }

    /// The parked card's identity, if the machine is `ZoomPending`.
    #[must_use]
    pub fn pending_card(&self) -> Option<T> {
        match self.state {
            State::ZoomPending(card) => Some(card),
            _ => None,
        }
    }

    /// Whether the pan simulation should run this frame.
    ///
    /// Panning is suspended the moment a card is focused and stays suspended
    /// through the reset animation.
    #[must_use]
    pub fn pan_active(&self) -> bool {
        matches!(self.state, State::Browsing | State::ZoomPending(_))
    }

    /// Handles a qualifying tap on `card` with the given fling speed.
    ///
    /// A fast fling parks the request instead of zooming mid-motion; a
    /// newer tap supersedes a parked one rather than queueing behind it.
    pub fn tap(&mut self, card: T, speed: f64) -> TapOutcome {
        match self.state {
            State::Browsing | State::ZoomPending(_) => {
                if speed > self.config.defer_speed {
                    self.state = State::ZoomPending(card);
                    TapOutcome::Deferred
                } else {
                    self.state = State::Focused(card);
                    TapOutcome::Zoom
                }
            }
            State::Focused(_) | State::Resetting => TapOutcome::Ignored,
        }
    }

    /// Consumes the parked request once the camera has settled.
    ///
    /// Returns the card to zoom into, transitioning to `Focused`; `None`
    /// when nothing was parked.
    pub fn settled(&mut self) -> Option<T> {
        match self.state {
            State::ZoomPending(card) => {
                self.state = State::Focused(card);
                Some(card)
            }
            _ => None,
        }
    }

    /// Drops a parked request (a new drag started before the camera
    /// settled). Returns `true` if one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        match self.state {
            State::ZoomPending(_) => {
                self.state = State::Browsing;
                true
            }
            _ => false,
        }
    }

    /// Handles a dismissal gesture. Only effective while `Focused`.
    pub fn dismiss(&mut self) -> bool {
        match self.state {
            State::Focused(_) => {
                self.state = State::Resetting;
                true
            }
            _ => false,
        }
    }

    /// Reports that the reset-settle window elapsed. Only effective while
    /// `Resetting`.
    pub fn settle_finished(&mut self) -> bool {
        match self.state {
            State::Resetting => {
                self.state = State::Browsing;
                true
            }
            _ => false,
        }
    }

    /// Returns to `Browsing` unconditionally, dropping any payload.
    ///
    /// Used by re-initialization; not a transition of the normal cycle.
    pub fn reset_hard(&mut self) {
        self.state = State::Browsing;
    }
}
