use ndarray::{Array1, ArrayView1};

use crate::{
    dataset::DataPoint,
    error::{EngineErr, Result},
    model::Model,
};

/// Measures the difference between predictions and targets.
pub trait LossFn {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|e| e.powi(2))
            .mean()
            .unwrap_or_default()
    }
}

/// Scores a weight vector against a data partition.
///
/// # Arguments
/// * `model` - The model producing predictions.
/// * `weights` - The weight vector to score.
/// * `points` - The partition to evaluate over.
/// * `loss_fn` - The loss function.
///
/// # Returns
/// The mean loss over the partition. Non-negative for `Mse`, and zero iff
/// every prediction matches its target exactly.
///
/// # Errors
/// Returns `EngineErr::EmptyPartition` for an empty partition; the mean is
/// undefined there.
pub fn evaluate<M, L>(model: &M, weights: &[f64], points: &[DataPoint], loss_fn: &L) -> Result<f64>
where
    M: Model,
    L: LossFn,
{
    if points.is_empty() {
        return Err(EngineErr::EmptyPartition(
            "cannot evaluate a loss over zero samples",
        ));
    }

    let y_pred = Array1::from_iter(points.iter().map(|p| model.forward(weights, p.x)));
    let y = Array1::from_iter(points.iter().map(|p| p.y));

    Ok(loss_fn.loss(y_pred.view(), y.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PolynomialModel;

    fn line_points() -> Vec<DataPoint> {
        (0..10)
            .map(|i| DataPoint {
                x: i as f64,
                y: 2.0 * i as f64 + 5.0,
            })
            .collect()
    }

    #[test]
    fn zero_iff_predictions_exact() {
        let model = PolynomialModel::new(1);
        let points = line_points();

        let exact = evaluate(&model, &[5.0, 2.0], &points, &Mse).unwrap();
        assert_eq!(exact, 0.0);

        let off = evaluate(&model, &[5.0, 2.1], &points, &Mse).unwrap();
        assert!(off > 0.0);
    }

    #[test]
    fn non_negative_for_arbitrary_weights() {
        let model = PolynomialModel::new(2);
        let points = line_points();

        for weights in [[0.0, 0.0, 0.0], [-3.0, 1.0, -0.5], [100.0, -50.0, 2.0]] {
            let mse = evaluate(&model, &weights, &points, &Mse).unwrap();
            assert!(mse >= 0.0);
        }
    }

    #[test]
    fn rejects_empty_partition() {
        let model = PolynomialModel::new(1);
        let result = evaluate(&model, &[0.0, 0.0], &[], &Mse);

        assert!(matches!(result, Err(EngineErr::EmptyPartition(_))));
    }

    #[test]
    fn zero_weights_score_mean_squared_targets() {
        let model = PolynomialModel::new(1);
        let points = line_points();

        let expected =
            points.iter().map(|p| p.y * p.y).sum::<f64>() / points.len() as f64;
        let got = evaluate(&model, &[0.0, 0.0], &points, &Mse).unwrap();

        assert!((got - expected).abs() < 1e-9);
    }
}
