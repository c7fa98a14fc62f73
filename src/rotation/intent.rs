use std::time::Instant;

use crate::rotation::state::Direction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RotationIntent {
    /// Step one slide with wraparound in either direction.
    Advance { direction: Direction },
    /// Select a slide directly. Callers check the range first.
    JumpTo {
        index: usize,
        suppress_until: Instant,
    },
    SetPausedByUser { paused: bool },
    SetPageVisible { visible: bool },
    SetAutoAdvancing { enabled: bool },
    /// Timer fired. Advances forward only if every flag allows it at `now`.
    Tick { now: Instant },
}

impl Intent for RotationIntent {}
