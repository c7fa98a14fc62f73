//! Reducer for slide rotation.

use crate::ui::mvi::Reducer;

use super::intent::RotationIntent;
use super::state::{Direction, RotationState};

/// Pure state transitions for a rotation controller.
///
/// Timer bookkeeping and observer notification happen in the controller
/// around each dispatch.
pub struct RotationReducer;

impl Reducer for RotationReducer {
    type State = RotationState;
    type Intent = RotationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RotationIntent::Advance { direction } => step(state, direction),

            RotationIntent::JumpTo {
                index,
                suppress_until,
            } => match state.active_index {
                Some(active) if index < state.slide_count && index != active => RotationState {
                    direction: jump_direction(active, index, state.slide_count),
                    active_index: Some(index),
                    suppress_until: Some(suppress_until),
                    ..state
                },
                _ => state,
            },

            RotationIntent::SetPausedByUser { paused } => RotationState {
                paused_by_user: paused,
                ..state
            },

            RotationIntent::SetPageVisible { visible } => RotationState {
                page_visible: visible,
                ..state
            },

            RotationIntent::SetAutoAdvancing { enabled } => RotationState {
                auto_advancing: enabled,
                ..state
            },

            RotationIntent::Tick { now } => {
                if !state.can_auto_advance() || state.suppression_remaining(now).is_some() {
                    return state;
                }
                let state = RotationState {
                    suppress_until: None,
                    ..state
                };
                step(state, Direction::Forward)
            }
        }
    }
}

fn step(state: RotationState, direction: Direction) -> RotationState {
    let Some(active) = state.active_index else {
        return state;
    };
    let len = state.slide_count as isize;
    let next = (active as isize + direction.step() + len).rem_euclid(len) as usize;
    RotationState {
        active_index: Some(next),
        direction,
        ..state
    }
}

/// Shorter circular rotation wins; an exact half circle goes forward.
fn jump_direction(from: usize, to: usize, len: usize) -> Direction {
    let forward = (to + len - from) % len;
    let backward = len - forward;
    if forward <= backward {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn active(len: usize, index: usize) -> RotationState {
        RotationState {
            active_index: Some(index),
            ..RotationState::new(len)
        }
    }

    #[test]
    fn advance_forward_wraps_to_zero() {
        let new = RotationReducer::reduce(
            active(3, 2),
            RotationIntent::Advance {
                direction: Direction::Forward,
            },
        );
        assert_eq!(new.active_index, Some(0));
        assert_eq!(new.direction, Direction::Forward);
    }

    #[test]
    fn advance_backward_from_zero_wraps_to_last() {
        let new = RotationReducer::reduce(
            active(5, 0),
            RotationIntent::Advance {
                direction: Direction::Backward,
            },
        );
        assert_eq!(new.active_index, Some(4));
        assert_eq!(new.direction, Direction::Backward);
    }

    #[test]
    fn advance_on_idle_is_noop() {
        let new = RotationReducer::reduce(
            RotationState::new(0),
            RotationIntent::Advance {
                direction: Direction::Forward,
            },
        );
        assert_eq!(new, RotationState::new(0));
    }

    #[test]
    fn single_slide_advances_onto_itself() {
        let new = RotationReducer::reduce(
            active(1, 0),
            RotationIntent::Advance {
                direction: Direction::Backward,
            },
        );
        assert_eq!(new.active_index, Some(0));
    }

    #[test]
    fn jump_picks_shorter_direction() {
        let until = Instant::now();
        let back = RotationReducer::reduce(
            active(6, 1),
            RotationIntent::JumpTo {
                index: 5,
                suppress_until: until,
            },
        );
        assert_eq!(back.direction, Direction::Backward);
        assert_eq!(back.active_index, Some(5));

        let fwd = RotationReducer::reduce(
            active(6, 1),
            RotationIntent::JumpTo {
                index: 3,
                suppress_until: until,
            },
        );
        assert_eq!(fwd.direction, Direction::Forward);
    }

    #[test]
    fn jump_half_circle_prefers_forward() {
        let mut state = active(4, 3);
        state.direction = Direction::Backward;
        let new = RotationReducer::reduce(
            state,
            RotationIntent::JumpTo {
                index: 1,
                suppress_until: Instant::now(),
            },
        );
        assert_eq!(new.direction, Direction::Forward);
    }

    #[test]
    fn jump_to_current_index_changes_nothing() {
        let mut state = active(4, 2);
        state.direction = Direction::Backward;
        let new = RotationReducer::reduce(
            state.clone(),
            RotationIntent::JumpTo {
                index: 2,
                suppress_until: Instant::now(),
            },
        );
        assert_eq!(new, state);
    }

    #[test]
    fn jump_out_of_range_changes_nothing() {
        let state = active(4, 2);
        let new = RotationReducer::reduce(
            state.clone(),
            RotationIntent::JumpTo {
                index: 4,
                suppress_until: Instant::now(),
            },
        );
        assert_eq!(new, state);
    }

    #[test]
    fn tick_blocked_while_paused_hidden_or_stopped() {
        let now = Instant::now();
        for blocked in [
            RotationIntent::SetPausedByUser { paused: true },
            RotationIntent::SetPageVisible { visible: false },
            RotationIntent::SetAutoAdvancing { enabled: false },
        ] {
            let state = RotationReducer::reduce(active(3, 0), blocked);
            let new = RotationReducer::reduce(state, RotationIntent::Tick { now });
            assert_eq!(new.active_index, Some(0));
        }
    }

    #[test]
    fn tick_respects_suppression_window() {
        let now = Instant::now();
        let mut state = active(3, 0);
        state.suppress_until = Some(now + Duration::from_secs(8));

        let held = RotationReducer::reduce(state.clone(), RotationIntent::Tick { now });
        assert_eq!(held.active_index, Some(0));

        let moved = RotationReducer::reduce(
            state,
            RotationIntent::Tick {
                now: now + Duration::from_secs(8),
            },
        );
        assert_eq!(moved.active_index, Some(1));
        assert_eq!(moved.suppress_until, None);
    }
}
