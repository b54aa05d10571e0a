use log::{trace, warn};

use crate::{
    dataset::DataPoint,
    error::{EngineErr, Result},
    loss::{self, LossFn},
    model::Model,
    optimization::Optimizer,
};

/// Result of a finished batch training run.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    /// The fitted weight vector, `degree + 1` entries.
    pub weights: Vec<f64>,

    /// Training MSE recorded after each completed iteration, truncated at
    /// the first non-finite value.
    pub history: Vec<f64>,

    /// Iteration at which the training loss turned non-finite, if it did.
    pub diverged_at: Option<usize>,
}

/// Batch gradient descent over a model, an optimizer and a loss function.
///
/// Contains the components needed for training and a reusable gradient
/// buffer; the weight vector itself is owned by each run.
pub struct Trainer<M: Model, O: Optimizer, L: LossFn> {
    model: M,
    optimizer: O,
    loss_fn: L,
    grad: Vec<f64>,
}

impl<M: Model, O: Optimizer, L: LossFn> Trainer<M, O, L> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - The optimizer that dictates how to update the
    ///   weights on each gradient calculation.
    /// * `loss_fn` - The loss function used to measure the difference
    ///   between the model's output and the expected one.
    pub fn new(model: M, optimizer: O, loss_fn: L) -> Self {
        let grad = vec![0.0; model.num_params()];
        Self {
            model,
            optimizer,
            loss_fn,
            grad,
        }
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[inline]
    pub fn loss_fn(&self) -> &L {
        &self.loss_fn
    }

    /// Executes one batch iteration: accumulates the gradient over every
    /// training point, averages it, lets the optimizer update the weights,
    /// and returns the training loss measured with the fresh weights.
    ///
    /// # Errors
    /// Returns `EmptyPartition` for an empty training partition (the
    /// gradient average would divide by zero) and `SizeMismatch` if
    /// `weights` does not match the model's parameter count.
    pub fn step(&mut self, weights: &mut [f64], train: &[DataPoint]) -> Result<f64> {
        if train.is_empty() {
            return Err(EngineErr::EmptyPartition("training partition is empty"));
        }

        if weights.len() != self.grad.len() {
            return Err(EngineErr::SizeMismatch {
                what: "weights",
                got: weights.len(),
                expected: self.grad.len(),
            });
        }

        self.grad.fill(0.0);

        for point in train {
            let error = self.model.forward(weights, point.x) - point.y;
            self.model.backward(point.x, error, &mut self.grad);
        }

        let scale = 1.0 / train.len() as f64;
        for g in self.grad.iter_mut() {
            *g *= scale;
        }

        self.optimizer.update_params(&self.grad, weights)?;

        loss::evaluate(&self.model, weights, train, &self.loss_fn)
    }

    /// Runs `iterations` batch iterations from zero-initialized weights.
    ///
    /// Weights are not reset between iterations; they accumulate updates
    /// across the whole run. If the training loss turns non-finite the run
    /// stops early: the history is truncated before the non-finite entry
    /// and the weights reached so far are returned. Divergence is a
    /// caller-tunable risk, not a failure.
    ///
    /// `iterations = 0` returns the zero vector untouched.
    ///
    /// # Errors
    /// Returns `EmptyPartition` for an empty training partition.
    pub fn fit(&mut self, train: &[DataPoint], iterations: usize) -> Result<FitOutcome> {
        let mut weights = vec![0.0; self.model.num_params()];
        let mut history = Vec::with_capacity(iterations);
        let mut diverged_at = None;

        for iteration in 0..iterations {
            let mse = self.step(&mut weights, train)?;

            if !mse.is_finite() {
                warn!("training loss turned non-finite at iteration {iteration}, stopping");
                diverged_at = Some(iteration);
                break;
            }

            trace!("iteration {iteration}: training loss {mse:.6}");
            history.push(mse);
        }

        Ok(FitOutcome {
            weights,
            history,
            diverged_at,
        })
    }
}
