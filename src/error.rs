use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NnError>;

/// Errors raised by layers, losses, networks and the training loop.
///
/// Every variant aborts the current forward/backward step; nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum NnError {
    /// Two tensors with incompatible dimensions met in `op`.
    #[error("shape mismatch in {op}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// `backward` was called on a layer with no cached forward input.
    #[error("{layer}: backward called without a preceding forward")]
    UndefinedInput { layer: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
