// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use rand::Rng;

use driftdeck_deck::{
    Card, CardId, CardTemplate, DeckConfig, Stage, StagePlan, build_deck, placeholder_url,
};
use driftdeck_focus::{
    CameraTransform, FocusConfig, FocusMachine, FocusPhase, TapOutcome, focus_transform,
};
use driftdeck_input::{Gesture, PointerId, PointerSession};
use driftdeck_pan::{PanConfig, PanPhase, PanSimulator, StepResult, axis_limits};

use crate::host::{CardMedia, GridGeometry, HitTarget, RenderCommitter};
use crate::timers::{TimerAction, TimerQueue};

/// Combined tuning for one playground instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaygroundConfig {
    /// Deck construction and entry choreography.
    pub deck: DeckConfig,
    /// Pan feel.
    pub pan: PanConfig,
    /// Focus cycle feel.
    pub focus: FocusConfig,
}

/// The playground grid coordinator.
///
/// One value owns every piece of shared interaction state; hosts drive it
/// from their frame callback and pointer handlers and implement the
/// [`GridGeometry`]/[`RenderCommitter`] seams. Until [`Playground::init`]
/// runs, every entry point is a no-op — a page without the grid's anchors
/// simply never initializes, and the feature is absent rather than broken.
#[derive(Debug)]
pub struct Playground {
    config: PlaygroundConfig,
    deck: Vec<Card>,
    session: PointerSession,
    pan: PanSimulator,
    focus: FocusMachine<CardId>,
    stage_plan: Option<StagePlan>,
    timers: TimerQueue,
    spaced: bool,
    ready: bool,
    clickable: bool,
    dragging: bool,
    video_retried: bool,
    initialized: bool,
}

impl Playground {
    /// Creates an uninitialized playground with the given tuning.
    #[must_use]
    pub fn new(config: PlaygroundConfig) -> Self {
        let pan = PanSimulator::new(config.pan);
        let focus = FocusMachine::new(config.focus);
        Self {
            config,
            deck: Vec::new(),
            session: PointerSession::default(),
            pan,
            focus,
            stage_plan: None,
            timers: TimerQueue::default(),
            spaced: false,
            ready: false,
            clickable: false,
            dragging: false,
            video_retried: false,
            initialized: false,
        }
    }

    /// Builds (or rebuilds) the grid from `catalog` and arms the entry
    /// choreography.
    ///
    /// Calling this again performs a full reset: a fresh shuffled deck, all
    /// offsets and flags back to their defaults, every pending timer
    /// dropped. The host keeps driving the same single frame callback, so
    /// re-entry never produces a second loop's worth of work.
    pub fn init<R: Rng + ?Sized>(
        &mut self,
        catalog: &[CardTemplate],
        rng: &mut R,
        now_ms: f64,
        committer: &mut impl RenderCommitter,
    ) {
        self.session = PointerSession::default();
        self.pan = PanSimulator::new(self.config.pan);
        self.focus = FocusMachine::new(self.config.focus);
        self.timers.clear();
        self.spaced = false;
        self.ready = false;
        self.clickable = false;
        self.dragging = false;
        self.video_retried = false;

        self.deck = build_deck(catalog, self.config.deck.total_cards, rng);
        self.stage_plan = Some(StagePlan::new(now_ms, &self.config.deck));
        self.initialized = true;

        let media: Vec<CardMedia> = self
            .deck
            .iter()
            .map(|card| CardMedia {
                id: card.id,
                kind: card.template.media_kind(),
                src: card.template.asset_path(&self.config.deck.asset_prefix),
            })
            .collect();
        committer.rebuild_grid(&media);

        // Cards start inert and tightly packed; the stage plan unlocks them.
        committer.set_cards_interactive(false);
        committer.set_spaced(false);
        committer.set_focus_mode(false);
        committer.set_resetting(false);
        committer.set_active_card(None);
        committer.hide_overlay();
        committer.apply_transform(CameraTransform::IDENTITY);
    }

    /// Runs one frame: due timers first, then the pan simulation.
    ///
    /// The pan step is suspended while a card is focused or the reset
    /// animation is running, and before the choreography's ready stage.
    pub fn frame(
        &mut self,
        geometry: &impl GridGeometry,
        committer: &mut impl RenderCommitter,
        now_ms: f64,
    ) {
        if !self.initialized {
            return;
        }
        self.run_stages(committer, now_ms);
        self.run_timers(committer, now_ms);

        if !self.ready || !self.focus.pan_active() {
            return;
        }

        let phase = if self.dragging {
            PanPhase::Dragging
        } else if self.focus.pending_card().is_some() {
            PanPhase::SettlingForZoom
        } else {
            PanPhase::Coasting
        };
        let limits = axis_limits(geometry.content_size(), geometry.viewport_size());

        match self.pan.step(phase, limits) {
            StepResult::SettledForZoom => {
                // The parked tap waited out the fling; zoom now instead of
                // committing one more pan frame under the new transform.
                if let Some(card) = self.focus.settled() {
                    self.execute_zoom(geometry, committer, now_ms, card);
                }
            }
            StepResult::Stepped => {
                committer.apply_transform(CameraTransform::panned(self.pan.current()));
            }
        }
    }

    /// Handles a pointer (mouse or first touch) going down.
    ///
    /// While focused, a press outside the active card and overlay dismisses
    /// the focus; otherwise a press claims the drag session, kills any
    /// fling, and drops a parked zoom request.
    pub fn pointer_down(
        &mut self,
        committer: &mut impl RenderCommitter,
        now_ms: f64,
        pointer: PointerId,
        pos: Point,
        hit: HitTarget,
    ) {
        if !self.initialized {
            return;
        }
        match self.focus.phase() {
            FocusPhase::Focused => {
                if !matches!(hit, HitTarget::ActiveCard | HitTarget::Overlay) {
                    self.reset_view(committer, now_ms);
                }
            }
            FocusPhase::Resetting => {}
            FocusPhase::Browsing | FocusPhase::ZoomPending => {
                if !self.ready {
                    return;
                }
                self.focus.cancel_pending();
                if self.session.press(pointer, pos) {
                    self.dragging = true;
                    self.pan.begin_drag();
                }
            }
        }
    }

    /// Handles pointer movement; pans while the active pointer drags.
    pub fn pointer_move(&mut self, pointer: PointerId, pos: Point) {
        if !self.initialized {
            return;
        }
        let Some(delta) = self.session.movement(pointer, pos) else {
            return;
        };
        if self.dragging && self.ready && self.focus.pan_active() {
            self.pan.drag_by(delta);
        }
    }

    /// Handles the pointer lifting; a sub-threshold press over a card
    /// becomes a zoom (immediate or parked, depending on fling speed).
    pub fn pointer_up(
        &mut self,
        geometry: &impl GridGeometry,
        committer: &mut impl RenderCommitter,
        now_ms: f64,
        pointer: PointerId,
        pos: Point,
        hit: HitTarget,
    ) {
        if !self.initialized {
            return;
        }
        let Some(release) = self.session.release(pointer, pos) else {
            return;
        };
        self.dragging = false;

        if release.gesture != Gesture::Tap || !self.clickable {
            return;
        }
        let HitTarget::Card(card) = hit else {
            return;
        };
        match self.focus.tap(card, self.pan.speed()) {
            TapOutcome::Zoom => self.execute_zoom(geometry, committer, now_ms, card),
            TapOutcome::Deferred | TapOutcome::Ignored => {}
        }
    }

    /// Reports that a card's base image failed to load.
    ///
    /// The card gets a deterministic placeholder keyed by its deck index.
    /// Silent, and never retried beyond the swap itself.
    pub fn media_failed(&mut self, committer: &mut impl RenderCommitter, card: CardId) {
        if !self.initialized || card.0 >= self.deck.len() {
            return;
        }
        committer.set_card_media_source(card, &placeholder_url(card));
    }

    /// Reports that the focus video's playback start was refused.
    ///
    /// Autoplay with sound is commonly blocked; the one permitted fallback
    /// is to retry muted, exactly once per focus session.
    pub fn autoplay_rejected(&mut self, committer: &mut impl RenderCommitter, card: CardId) {
        if !self.initialized || self.video_retried {
            return;
        }
        if self.focus.focused_card() != Some(card) {
            return;
        }
        self.video_retried = true;
        committer.play_focus_video(card, true);
    }

    /// The current deck, in deck order. Empty before initialization.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// The focus cycle's current phase.
    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    /// Snapshot of the transient state for inspection and tests.
    #[must_use]
    pub fn debug_info(&self) -> PlaygroundDebugInfo {
        PlaygroundDebugInfo {
            phase: self.focus.phase(),
            target: self.pan.target(),
            current: self.pan.current(),
            velocity: self.pan.velocity(),
            spaced: self.spaced,
            ready: self.ready,
            clickable: self.clickable,
            dragging: self.dragging,
            deck_len: self.deck.len(),
            initialized: self.initialized,
        }
    }

    fn run_stages(&mut self, committer: &mut impl RenderCommitter, now_ms: f64) {
        let Some(plan) = self.stage_plan.as_mut() else {
            return;
        };
        while let Some(stage) = plan.due(now_ms) {
            match stage {
                Stage::Spaced => {
                    self.spaced = true;
                    committer.set_spaced(true);
                }
                Stage::Ready => self.ready = true,
                Stage::Clickable => {
                    self.clickable = true;
                    committer.set_cards_interactive(true);
                }
            }
        }
    }

    fn run_timers(&mut self, committer: &mut impl RenderCommitter, now_ms: f64) {
        while let Some(action) = self.timers.pop_due(now_ms) {
            match action {
                TimerAction::SettleFinished => {
                    if self.focus.settle_finished() {
                        committer.set_resetting(false);
                    }
                }
                TimerAction::VideoFadeIn(card) => {
                    committer.set_focus_video_visible(card, true);
                }
                TimerAction::VideoRemove(card) => {
                    committer.remove_focus_video(card);
                }
            }
        }
    }

    fn execute_zoom(
        &mut self,
        geometry: &impl GridGeometry,
        committer: &mut impl RenderCommitter,
        now_ms: f64,
        card: CardId,
    ) {
        // The camera takes over; panning restarts from identity after the
        // eventual reset.
        self.pan.reset();

        let transform = focus_transform(
            geometry.card_rect(card),
            geometry.grid_origin(),
            geometry.viewport_size(),
            self.config.focus.zoom,
        );
        committer.set_focus_mode(true);
        committer.set_resetting(false);
        committer.set_active_card(Some(card));
        committer.apply_transform(transform);

        let Some(entry) = self.deck.get(card.0) else {
            return;
        };
        committer.show_overlay(&entry.template.title, &entry.template.description);

        if let Some(src) = entry.template.video_path(&self.config.deck.asset_prefix) {
            self.video_retried = false;
            committer.attach_focus_video(card, &src);
            committer.play_focus_video(card, false);
            self.timers.schedule(
                now_ms + self.config.focus.video_fade_in_delay_ms,
                TimerAction::VideoFadeIn(card),
            );
        }
    }

    fn reset_view(&mut self, committer: &mut impl RenderCommitter, now_ms: f64) {
        let Some(card) = self.focus.focused_card() else {
            return;
        };
        if !self.focus.dismiss() {
            return;
        }

        committer.set_focus_mode(false);
        committer.set_resetting(true);
        committer.hide_overlay();

        self.pan.reset();
        committer.apply_transform(CameraTransform::IDENTITY);

        let has_video = self
            .deck
            .get(card.0)
            .is_some_and(|c| c.template.video_filename.is_some());
        if has_video {
            committer.set_focus_video_visible(card, false);
            self.timers.schedule(
                now_ms + self.config.focus.video_remove_delay_ms,
                TimerAction::VideoRemove(card),
            );
        }
        committer.set_active_card(None);

        self.timers
            .schedule(now_ms + self.config.focus.settle_ms, TimerAction::SettleFinished);
    }
}

/// Debug snapshot of a [`Playground`]'s transient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaygroundDebugInfo {
    /// Current focus phase.
    pub phase: FocusPhase,
    /// Logical pan offset.
    pub target: Vec2,
    /// Rendered pan offset.
    pub current: Vec2,
    /// Fling velocity.
    pub velocity: Vec2,
    /// Whether the layout-spacing stage has fired.
    pub spaced: bool,
    /// Whether the pan simulation is running.
    pub ready: bool,
    /// Whether cards accept taps.
    pub clickable: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Number of cards in the deck.
    pub deck_len: usize,
    /// Whether `init` has run.
    pub initialized: bool,
}
