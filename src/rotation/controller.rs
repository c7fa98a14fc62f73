//! Auto-rotating carousel controller.
//!
//! Owns a [`RotationState`], a single one-shot timer and the observers that
//! redraw on every change. At most one timer is outstanding: every re-arm
//! cancels the previous timer first, and teardown or drop cancels the last.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::ui::mvi::Reducer;

use super::clock::Clock;
use super::error::RotationError;
use super::intent::RotationIntent;
use super::keys::{key_command, InputFocus, KeyCommand, KeyDisposition};
use super::reducer::RotationReducer;
use super::scheduler::{TimerId, TimerScheduler};
use super::signals::{CarouselId, KeySource, VisibilitySource};
use super::state::{Direction, RotationSnapshot, RotationState};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3500);
pub const DEFAULT_SUPPRESSION: Duration = Duration::from_millis(8000);

pub type Observer = Box<dyn FnMut(&RotationSnapshot) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

pub struct RotationController {
    id: CarouselId,
    state: RotationState,
    interval: Duration,
    suppression: Duration,
    clock: Arc<dyn Clock>,
    scheduler: Box<dyn TimerScheduler>,
    timer: Option<TimerId>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl RotationController {
    pub fn new(id: CarouselId, clock: Arc<dyn Clock>, scheduler: Box<dyn TimerScheduler>) -> Self {
        Self {
            id,
            state: RotationState::default(),
            interval: DEFAULT_INTERVAL,
            suppression: DEFAULT_SUPPRESSION,
            clock,
            scheduler,
            timer: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Length of the pause in auto-advance after a manual jump.
    pub fn with_suppression(mut self, suppression: Duration) -> Self {
        self.suppression = suppression;
        self
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        self.state.snapshot(self.id)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a timer is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Start over with `slide_count` slides at index 0.
    ///
    /// With zero slides the controller stays idle and never schedules.
    /// Pause, visibility and autoplay flags carry over.
    pub fn initialize(&mut self, slide_count: usize, interval: Duration) -> Result<(), RotationError> {
        if interval.is_zero() {
            return Err(RotationError::ZeroInterval);
        }
        self.disarm();
        self.interval = interval;
        self.state = RotationState {
            auto_advancing: self.state.auto_advancing,
            paused_by_user: self.state.paused_by_user,
            page_visible: self.state.page_visible,
            ..RotationState::new(slide_count)
        };
        tracing::debug!(
            carousel = %self.id,
            slides = slide_count,
            interval_ms = interval.as_millis() as u64,
            "rotation initialized"
        );
        if self.state.can_auto_advance() {
            self.arm(self.interval);
        }
        self.emit();
        Ok(())
    }

    /// Subscribe to host visibility and keys, and adopt the current
    /// visibility.
    pub fn mount<H>(&mut self, host: &mut H)
    where
        H: VisibilitySource + KeySource + ?Sized,
    {
        let visible = host.subscribe_visibility(self.id);
        host.subscribe_keys(self.id);
        self.set_page_visible(visible);
    }

    /// Release host subscriptions and cancel the timer. The controller is
    /// consumed so nothing can mutate it afterwards.
    pub fn teardown<H>(mut self, host: &mut H)
    where
        H: VisibilitySource + KeySource + ?Sized,
    {
        host.unsubscribe_visibility(self.id);
        host.unsubscribe_keys(self.id);
        self.disarm();
        self.observers.clear();
        tracing::debug!(carousel = %self.id, "rotation torn down");
    }

    pub fn subscribe(&mut self, observer: Observer) -> ObserverId {
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer, _)| *observer != id);
    }

    /// Manual step. The next automatic step waits a full interval.
    pub fn advance(&mut self, direction: Direction) {
        if self.state.active_index.is_none() {
            return;
        }
        self.dispatch(RotationIntent::Advance { direction });
        if self.state.can_auto_advance() {
            self.arm(self.interval);
        }
    }

    /// Select slide `index` and hold auto-advance for the suppression window.
    ///
    /// The hold is never shorter than one interval, so a jump never brings
    /// the next automatic step forward. Selecting the current slide is a
    /// no-op.
    pub fn jump_to(&mut self, index: usize) -> Result<(), RotationError> {
        let len = self.state.slide_count;
        if index >= len {
            return Err(RotationError::OutOfRange { index, len });
        }
        if self.state.active_index == Some(index) {
            return Ok(());
        }
        let hold = self.suppression.max(self.interval);
        let suppress_until = self.clock.now() + hold;
        self.dispatch(RotationIntent::JumpTo {
            index,
            suppress_until,
        });
        if self.state.can_auto_advance() {
            self.arm(hold);
        }
        Ok(())
    }

    pub fn set_paused_by_user(&mut self, paused: bool) {
        self.update_flags(RotationIntent::SetPausedByUser { paused });
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        self.update_flags(RotationIntent::SetPageVisible { visible });
    }

    pub fn set_auto_advancing(&mut self, enabled: bool) {
        self.update_flags(RotationIntent::SetAutoAdvancing { enabled });
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused_by_user(!self.state.paused_by_user);
    }

    /// Clear a user pause and re-enable autoplay.
    pub fn resume(&mut self) {
        let was_eligible = self.state.can_auto_advance();
        self.dispatch(RotationIntent::SetPausedByUser { paused: false });
        self.dispatch(RotationIntent::SetAutoAdvancing { enabled: true });
        self.sync_timer(was_eligible);
    }

    /// Timer callback: advance forward if every flag allows it.
    ///
    /// Inside a suppression window the timer is re-armed for the remainder.
    /// Any other blocking flag leaves the timer disarmed until it clears.
    pub fn tick(&mut self) {
        if !self.state.can_auto_advance() {
            return;
        }
        let now = self.clock.now();
        if let Some(remaining) = self.state.suppression_remaining(now) {
            self.arm(remaining);
            return;
        }
        self.dispatch(RotationIntent::Tick { now });
        self.arm(self.interval);
    }

    /// Entry point for fired timers. Stale ids are ignored.
    pub fn on_timer(&mut self, timer: TimerId) {
        if self.timer != Some(timer) {
            tracing::trace!(carousel = %self.id, ?timer, "stale rotation timer ignored");
            return;
        }
        self.timer = None;
        self.tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent, focus: InputFocus) -> KeyDisposition {
        let Some(command) = key_command(key, focus) else {
            return KeyDisposition::PassThrough;
        };
        match command {
            KeyCommand::Previous => self.advance(Direction::Backward),
            KeyCommand::Next => self.advance(Direction::Forward),
            KeyCommand::TogglePause => self.toggle_paused(),
            KeyCommand::Resume => self.resume(),
        }
        KeyDisposition::Handled
    }

    fn update_flags(&mut self, intent: RotationIntent) {
        let was_eligible = self.state.can_auto_advance();
        self.dispatch(intent);
        self.sync_timer(was_eligible);
    }

    /// Becoming eligible arms a fresh interval. Leftover time from before a
    /// pause is never resumed.
    fn sync_timer(&mut self, was_eligible: bool) {
        match (was_eligible, self.state.can_auto_advance()) {
            (_, false) => self.disarm(),
            (false, true) => self.arm(self.interval),
            (true, true) => {}
        }
    }

    fn dispatch(&mut self, intent: RotationIntent) {
        let before = self.state.clone();
        self.state = RotationReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state != before {
            if before.active_index != self.state.active_index {
                tracing::debug!(
                    carousel = %self.id,
                    from = ?before.active_index,
                    to = ?self.state.active_index,
                    direction = ?self.state.direction,
                    "slide changed"
                );
            }
            self.emit();
        }
    }

    fn emit(&mut self) {
        let snapshot = self.state.snapshot(self.id);
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }

    fn arm(&mut self, delay: Duration) {
        self.disarm();
        self.timer = Some(self.scheduler.schedule(delay));
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer);
        }
    }
}

impl Drop for RotationController {
    fn drop(&mut self) {
        self.disarm();
    }
}
