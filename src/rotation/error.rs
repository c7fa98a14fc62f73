use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// Jump target is not a slide of this controller.
    #[error("slide index {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("rotation interval must be greater than zero")]
    ZeroInterval,
}
