//! Slide rotation: auto-advance, pause/resume, manual navigation and the
//! keyboard contract for carousels.

mod clock;
mod controller;
mod error;
mod intent;
mod keys;
mod reducer;
mod scheduler;
mod signals;
mod state;

pub use clock::{Clock, SystemClock};
pub use controller::{
    Observer, ObserverId, RotationController, DEFAULT_INTERVAL, DEFAULT_SUPPRESSION,
};
pub use error::RotationError;
pub use intent::RotationIntent;
pub use keys::{key_command, InputFocus, KeyCommand, KeyDisposition};
pub use reducer::RotationReducer;
pub use scheduler::{TimerId, TimerScheduler, TokioScheduler};
pub use signals::{CarouselId, KeySource, SignalBus, VisibilitySource};
pub use state::{Direction, RotationPhase, RotationSnapshot, RotationState};
