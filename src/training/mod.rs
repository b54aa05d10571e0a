mod session;
mod trainer;

pub use session::{SessionPhase, StepReport, TrainingSession};
pub use trainer::{FitOutcome, Trainer};
