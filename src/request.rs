use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    config::Hyperparameters,
    dataset::LineSpec,
    error::Result,
    loss::{self, Mse},
    model::PolynomialModel,
    optimization::GradientDescent,
    training::Trainer,
};

/// One training run as requested by the serving layer.
///
/// `seed` is optional and additive: `None` draws OS entropy, `Some` makes
/// the generated dataset — and therefore the whole run — reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRequest {
    pub learning_rate: f64,
    pub iterations: usize,
    pub degree: usize,
    pub lambda: f64,
    pub noise_level: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// The answer to a `TrainRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainResponse {
    pub weights: Vec<f64>,
    pub train_loss: f64,
    pub test_loss: f64,
}

impl From<&TrainRequest> for Hyperparameters {
    fn from(request: &TrainRequest) -> Self {
        Self {
            learning_rate: request.learning_rate,
            iterations: request.iterations,
            degree: request.degree,
            lambda: request.lambda,
            noise_level: request.noise_level,
        }
    }
}

/// Runs one full synchronous training pass over a freshly generated
/// dataset: validate, generate, fit from zero weights, score both
/// partitions.
///
/// # Errors
/// Returns `InvalidHyperparameter` before any computation if the request
/// is out of range. A diverged run is not an error; its non-finite losses
/// are reported as-is.
pub fn handle(request: &TrainRequest) -> Result<TrainResponse> {
    let hyper = Hyperparameters::from(request);
    hyper.validate()?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let dataset = LineSpec::default().generate(hyper.noise_level, &mut rng);

    info!(
        "training degree-{} model: lr={}, iterations={}, lambda={}",
        hyper.degree, hyper.learning_rate, hyper.iterations, hyper.lambda
    );

    let mut trainer = Trainer::new(
        PolynomialModel::new(hyper.degree),
        GradientDescent::new(hyper.learning_rate, hyper.lambda),
        Mse,
    );

    let outcome = trainer.fit(dataset.train(), hyper.iterations)?;

    if let Some(iteration) = outcome.diverged_at {
        warn!("run diverged at iteration {iteration}; reporting the weights reached so far");
    }

    let train_loss = loss::evaluate(trainer.model(), &outcome.weights, dataset.train(), &Mse)?;
    let test_loss = loss::evaluate(trainer.model(), &outcome.weights, dataset.test(), &Mse)?;

    info!("finished: train_loss={train_loss:.6}, test_loss={test_loss:.6}");

    Ok(TrainResponse {
        weights: outcome.weights,
        train_loss,
        test_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineErr;

    fn request() -> TrainRequest {
        TrainRequest {
            learning_rate: 0.01,
            iterations: 0,
            degree: 1,
            lambda: 0.0,
            noise_level: 0.0,
            seed: Some(11),
        }
    }

    #[test]
    fn zero_iterations_score_the_raw_targets() {
        let response = handle(&request()).unwrap();

        assert_eq!(response.weights, vec![0.0, 0.0]);

        // noiseless y = 2x + 5 over x = 0..19, split 14/6: the losses are
        // the mean squared targets of each partition
        let train_expected = (0..14)
            .map(|x| (2.0 * x as f64 + 5.0).powi(2))
            .sum::<f64>()
            / 14.0;
        let test_expected = (14..20)
            .map(|x| (2.0 * x as f64 + 5.0).powi(2))
            .sum::<f64>()
            / 6.0;

        assert!((response.train_loss - train_expected).abs() < 1e-9);
        assert!((response.test_loss - test_expected).abs() < 1e-9);
    }

    #[test]
    fn long_noiseless_run_recovers_the_line() {
        let mut req = request();
        req.iterations = 2000;

        let response = handle(&req).unwrap();

        assert!((response.weights[0] - 5.0).abs() < 0.5);
        assert!((response.weights[1] - 2.0).abs() < 0.5);
        assert!(response.train_loss < 0.01);
        assert!(response.test_loss < 0.01);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut req = request();
        req.iterations = 100;
        req.noise_level = 5.0;

        let a = handle(&req).unwrap();
        let b = handle(&req).unwrap();

        assert_eq!(a.weights, b.weights);
        assert_eq!(a.train_loss, b.train_loss);
        assert_eq!(a.test_loss, b.test_loss);
    }

    #[test]
    fn invalid_request_is_rejected_before_training() {
        let mut req = request();
        req.learning_rate = -1.0;

        assert!(matches!(
            handle(&req),
            Err(EngineErr::InvalidHyperparameter {
                param: "learning_rate",
                ..
            })
        ));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = r#"{
            "learningRate": 0.001,
            "iterations": 150,
            "degree": 2,
            "lambda": 0.05,
            "noiseLevel": 5
        }"#;

        let req: TrainRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.learning_rate, 0.001);
        assert_eq!(req.noise_level, 5.0);
        assert_eq!(req.seed, None);

        let response = TrainResponse {
            weights: vec![0.0, 0.0],
            train_loss: 1.0,
            test_loss: 2.0,
        };
        let out = serde_json::to_string(&response).unwrap();
        assert!(out.contains("\"weights\""));
        assert!(out.contains("\"trainLoss\""));
        assert!(out.contains("\"testLoss\""));
    }

    #[test]
    fn negative_iterations_fail_deserialization() {
        let json = r#"{
            "learningRate": 0.001,
            "iterations": -5,
            "degree": 2,
            "lambda": 0,
            "noiseLevel": 5
        }"#;

        assert!(serde_json::from_str::<TrainRequest>(json).is_err());
    }
}
