use crate::error::Result;

/// Dictates how parameters change given a gradient.
pub trait Optimizer {
    /// Updates the parameters according to the algorithm's learning rule.
    ///
    /// # Arguments
    /// * `grad` - The gradient used for taking the step, already averaged
    ///   over the batch.
    /// * `params` - The parameters that are going to be modified.
    ///
    /// # Errors
    /// Returns `EngineErr::SizeMismatch` if the two buffers disagree in
    /// length.
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()>;
}
