use ndarray::Array1;

use crate::dataset::DataPoint;

/// A pure computational model.
///
/// A `Model` defines how to evaluate a prediction and accumulate parameter
/// gradients. It does not own parameters, access datasets, or implement
/// training loops.
pub trait Model {
    /// Returns the number of scalar parameters expected in weight and
    /// gradient buffers.
    fn num_params(&self) -> usize;

    /// Computes the model output for a single input.
    fn forward(&self, weights: &[f64], x: f64) -> f64;

    /// Accumulates the gradient of the prediction error into `grads`.
    ///
    /// Implementations must add to `grads` rather than overwrite it, so a
    /// trainer can accumulate over a whole batch before updating.
    fn backward(&self, x: f64, error: f64, grads: &mut [f64]);
}

/// A polynomial of fixed degree over a scalar input: the input `x` is
/// expanded into the basis `[x^0, x^1, …, x^degree]` and the model is
/// linear over those features.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialModel {
    degree: usize,
}

impl PolynomialModel {
    /// Returns a new `PolynomialModel`.
    ///
    /// # Arguments
    /// * `degree` - Highest power of `x` in the basis; degree 0 is a
    ///   constant model.
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Expands a scalar into its polynomial feature vector
    /// `[x^0, x^1, …, x^degree]`. Degree 0 yields `[1.0]`.
    pub fn features(&self, x: f64) -> Array1<f64> {
        let mut features = Vec::with_capacity(self.degree + 1);
        let mut power = 1.0;

        for _ in 0..=self.degree {
            features.push(power);
            power *= x;
        }

        Array1::from_vec(features)
    }

    /// Samples the fitted curve at `samples` evenly spaced inputs over
    /// `[lo, hi]`, ready for chart rendering.
    pub fn sample_curve(&self, weights: &[f64], lo: f64, hi: f64, samples: usize) -> Vec<DataPoint> {
        Array1::linspace(lo, hi, samples)
            .iter()
            .map(|&x| DataPoint {
                x,
                y: self.forward(weights, x),
            })
            .collect()
    }
}

impl Model for PolynomialModel {
    fn num_params(&self) -> usize {
        self.degree + 1
    }

    /// `Σ weights[d] · x^d`, computed with successive powers, no allocation.
    fn forward(&self, weights: &[f64], x: f64) -> f64 {
        let mut prediction = 0.0;
        let mut power = 1.0;

        for w in weights {
            prediction += w * power;
            power *= x;
        }

        prediction
    }

    /// The partial derivative of the prediction with respect to
    /// `weights[d]` is `x^d`, so each entry receives `error · x^d`.
    fn backward(&self, x: f64, error: f64, grads: &mut [f64]) {
        let mut power = 1.0;

        for g in grads.iter_mut() {
            *g += error * power;
            power *= x;
        }
    }
}
