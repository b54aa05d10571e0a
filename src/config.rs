use crate::error::{EngineErr, Result};

/// Hyperparameters for one training run.
///
/// Supplied by the caller per run; the engine keeps no state between runs.
/// `iterations` and `degree` are `usize`, so negative values are
/// unrepresentable here; the wire layer rejects negative JSON numbers when
/// deserializing a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    /// Step size of each gradient descent update. Must be positive.
    pub learning_rate: f64,

    /// Number of batch gradient descent iterations.
    pub iterations: usize,

    /// Degree of the polynomial basis; the model fits `degree + 1` weights.
    pub degree: usize,

    /// L2 regularization strength. Must be non-negative.
    pub lambda: f64,

    /// Amplitude of the uniform noise added to generated samples.
    /// Must be non-negative.
    pub noise_level: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            iterations: 150,
            degree: 2,
            lambda: 0.0,
            noise_level: 5.0,
        }
    }
}

impl Hyperparameters {
    /// Checks every hyperparameter against its valid range.
    ///
    /// # Errors
    /// Returns `EngineErr::InvalidHyperparameter` naming the first offending
    /// parameter. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(EngineErr::InvalidHyperparameter {
                param: "learning_rate",
                got: self.learning_rate,
            });
        }

        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(EngineErr::InvalidHyperparameter {
                param: "lambda",
                got: self.lambda,
            });
        }

        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(EngineErr::InvalidHyperparameter {
                param: "noise_level",
                got: self.noise_level,
            });
        }

        Ok(())
    }
}
