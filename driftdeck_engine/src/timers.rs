// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot deadline queue drained by the frame tick.
//!
//! The original design leaned on platform `setTimeout`; here the deadlines
//! live with the rest of the state and fire when a frame observes them as
//! past due. Within one frame, timers fire before the physics step, and
//! same-deadline timers fire in the order they were scheduled.

use driftdeck_deck::CardId;

/// A deferred action owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerAction {
    /// The reset animation finished; accept input again.
    SettleFinished,
    /// Begin the companion video's cross-fade over its thumbnail.
    VideoFadeIn(CardId),
    /// Remove a faded-out companion video.
    VideoRemove(CardId),
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    deadline_ms: f64,
    action: TimerAction,
}

/// FIFO-stable one-shot timer queue.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue {
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, deadline_ms: f64, action: TimerAction) {
        self.entries.push(Entry {
            deadline_ms,
            action,
        });
    }

    /// Pops the next past-due action in scheduling order, if any.
    pub(crate) fn pop_due(&mut self, now_ms: f64) -> Option<TimerAction> {
        let index = self.entries.iter().position(|e| e.deadline_ms <= now_ms)?;
        Some(self.entries.remove(index).action)
    }

    /// Drops every pending action (re-initialization).
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
