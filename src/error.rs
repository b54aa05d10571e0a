use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the whole engine.
pub type Result<T> = std::result::Result<T, EngineErr>;

/// The engine's error type.
///
/// Numeric divergence during training is deliberately *not* represented
/// here: a run that overflows still returns the weights it reached (see
/// `FitOutcome::diverged_at`).
#[derive(Debug)]
pub enum EngineErr {
    /// A hyperparameter is outside its valid range. Rejected before any
    /// computation, never clamped.
    InvalidHyperparameter { param: &'static str, got: f64 },

    /// A loss or gradient computation was asked to run over zero samples.
    EmptyPartition(&'static str),

    /// A weight or gradient buffer does not match the model's parameter count.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for EngineErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineErr::InvalidHyperparameter { param, got } => {
                write!(f, "invalid hyperparameter {param}: got {got}")
            }
            EngineErr::EmptyPartition(msg) => write!(f, "empty partition: {msg}"),
            EngineErr::SizeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "size mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for EngineErr {}
