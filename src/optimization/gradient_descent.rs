use super::Optimizer;
use crate::error::{EngineErr, Result};

/// Gradient descent with uniform L2 weight decay.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
    weight_decay: f64,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    /// * `weight_decay` - L2 strength; each step also pulls every parameter
    ///   toward zero in proportion to its current value. The decay applies
    ///   to every coefficient uniformly, the bias included.
    pub fn new(learning_rate: f64, weight_decay: f64) -> Self {
        Self {
            learning_rate,
            weight_decay,
        }
    }
}

impl Optimizer for GradientDescent {
    /// Takes a step in the opposite direction of the gradient:
    /// `p -= learning_rate * (g + weight_decay * p)`.
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()> {
        if grad.len() != params.len() {
            return Err(EngineErr::SizeMismatch {
                what: "params",
                got: params.len(),
                expected: grad.len(),
            });
        }

        let lr = self.learning_rate;
        let wd = self.weight_decay;

        for (p, g) in params.iter_mut().zip(grad) {
            *p -= lr * (g + wd * *p);
        }

        Ok(())
    }
}
