use log::{debug, warn};

use crate::{
    dataset::DataPoint,
    error::Result,
    loss::LossFn,
    model::Model,
    optimization::Optimizer,
};

/// Lifecycle states of a progressive training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
}

/// What a single progressive step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Zero-based index of the iteration that just ran.
    pub iteration: usize,

    /// Training loss measured after the iteration's weight update. May be
    /// non-finite when the run diverges.
    pub loss: f64,
}

/// A steppable training run: one gradient descent iteration per `step`
/// call, so a caller can animate convergence and read live weights at its
/// own cadence.
///
/// Only one run can be in flight per session; `start` while `Running` is
/// ignored. Abandoning a run mid-flight via `cancel` keeps whatever
/// weights were last computed.
pub struct TrainingSession<M: Model, O: Optimizer, L: LossFn> {
    trainer: super::Trainer<M, O, L>,
    phase: SessionPhase,
    train: Vec<DataPoint>,
    weights: Vec<f64>,
    history: Vec<f64>,
    planned: usize,
    completed: usize,
    diverged: bool,
}

impl<M: Model, O: Optimizer, L: LossFn> TrainingSession<M, O, L> {
    /// Wraps a trainer into an idle session.
    pub fn new(trainer: super::Trainer<M, O, L>) -> Self {
        let weights = vec![0.0; trainer.model().num_params()];
        Self {
            trainer,
            phase: SessionPhase::Idle,
            train: Vec::new(),
            weights,
            history: Vec::new(),
            planned: 0,
            completed: 0,
            diverged: false,
        }
    }

    /// Begins a new run over `train`, resetting weights to zero.
    ///
    /// Returns `false` — and changes nothing — when a run is already in
    /// flight. A run with `iterations = 0` finishes immediately and the
    /// session stays `Idle`.
    pub fn start(&mut self, train: &[DataPoint], iterations: usize) -> bool {
        if self.phase == SessionPhase::Running {
            debug!("ignoring start request: a training run is already in flight");
            return false;
        }

        self.train = train.to_vec();
        self.weights = vec![0.0; self.trainer.model().num_params()];
        self.history.clear();
        self.planned = iterations;
        self.completed = 0;
        self.diverged = false;

        if iterations > 0 {
            self.phase = SessionPhase::Running;
        }

        true
    }

    /// Executes exactly one training iteration.
    ///
    /// Returns `None` when no run is in flight. After the planned
    /// iterations complete — or the loss turns non-finite — the session
    /// transitions back to `Idle`; a diverged run keeps the weights it
    /// reached and stops recording history.
    ///
    /// # Errors
    /// Propagates trainer errors (e.g. a run started over an empty
    /// training partition).
    pub fn step(&mut self) -> Result<Option<StepReport>> {
        if self.phase != SessionPhase::Running {
            return Ok(None);
        }

        let loss = self.trainer.step(&mut self.weights, &self.train)?;
        let iteration = self.completed;
        self.completed += 1;

        if !loss.is_finite() {
            warn!("training loss turned non-finite at iteration {iteration}, stopping");
            self.diverged = true;
            self.phase = SessionPhase::Idle;
        } else {
            self.history.push(loss);
            if self.completed == self.planned {
                self.phase = SessionPhase::Idle;
            }
        }

        Ok(Some(StepReport { iteration, loss }))
    }

    /// Abandons the in-flight run, freezing the weights at their
    /// last-updated value. No rollback. A no-op when idle.
    pub fn cancel(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Live weights, readable between steps.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Training loss per completed iteration, truncated at divergence.
    #[inline]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    #[inline]
    pub fn diverged(&self) -> bool {
        self.diverged
    }

    /// Iterations completed so far in the current (or last) run.
    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }
}
