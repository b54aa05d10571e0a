pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod request;
pub mod training;

pub use config::Hyperparameters;
pub use dataset::{DataPoint, Dataset, Domain, LineSpec};
pub use diagnostics::{assess, FitLabel, Thresholds};
pub use error::{EngineErr, Result};
pub use loss::{evaluate, LossFn, Mse};
pub use model::{Model, PolynomialModel};
pub use optimization::{GradientDescent, Optimizer};
pub use request::{handle, TrainRequest, TrainResponse};
pub use training::{FitOutcome, SessionPhase, StepReport, Trainer, TrainingSession};
