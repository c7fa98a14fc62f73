use std::time::Instant;

use crate::rotation::signals::CarouselId;
use crate::ui::mvi::UiState;

/// Most recent navigation direction. Only used to pick a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Index step applied when advancing in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPhase {
    /// No slides; the controller never schedules anything.
    Idle,
    Active,
}

/// Mutable state of a single rotation controller.
///
/// `active_index` is `Some(i)` with `i < slide_count` whenever there is at
/// least one slide, and `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    pub slide_count: usize,
    pub active_index: Option<usize>,
    pub direction: Direction,
    pub auto_advancing: bool,
    pub paused_by_user: bool,
    pub page_visible: bool,
    /// Auto-advance is withheld until this instant after a manual jump.
    pub suppress_until: Option<Instant>,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl UiState for RotationState {}

impl RotationState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            active_index: (slide_count > 0).then_some(0),
            direction: Direction::Forward,
            auto_advancing: true,
            paused_by_user: false,
            page_visible: true,
            suppress_until: None,
        }
    }

    pub fn phase(&self) -> RotationPhase {
        if self.active_index.is_some() {
            RotationPhase::Active
        } else {
            RotationPhase::Idle
        }
    }

    /// True when the timer is allowed to be armed at all.
    pub fn can_auto_advance(&self) -> bool {
        self.active_index.is_some()
            && self.auto_advancing
            && !self.paused_by_user
            && self.page_visible
    }

    /// Remaining suppression at `now`, if the window has not yet elapsed.
    pub fn suppression_remaining(&self, now: Instant) -> Option<std::time::Duration> {
        self.suppress_until
            .filter(|until| now < *until)
            .map(|until| until - now)
    }

    pub fn snapshot(&self, carousel: CarouselId) -> RotationSnapshot {
        RotationSnapshot {
            carousel,
            active_index: self.active_index,
            slide_count: self.slide_count,
            direction: self.direction,
            paused_by_user: self.paused_by_user,
            auto_advancing: self.auto_advancing,
            page_visible: self.page_visible,
        }
    }
}

/// What the rendering layer sees after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSnapshot {
    pub carousel: CarouselId,
    pub active_index: Option<usize>,
    pub slide_count: usize,
    pub direction: Direction,
    pub paused_by_user: bool,
    pub auto_advancing: bool,
    pub page_visible: bool,
}
