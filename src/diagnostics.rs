use std::fmt::{self, Display};

/// Classification of a finished fit from its train/test losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitLabel {
    /// Both losses are uniformly high: the model is too simple for the data.
    HighBias,

    /// Test loss substantially exceeds train loss: the model memorized the
    /// training partition.
    HighVariance,

    Balanced,
}

impl Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitLabel::HighBias => "High Bias (Underfitting)",
            FitLabel::HighVariance => "High Variance (Overfitting)",
            FitLabel::Balanced => "Balanced",
        };

        write!(f, "{s}")
    }
}

/// Domain constants for the classification. The defaults are tuned for
/// the synthetic 20-point line, not universal.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// A fit overfits when `test_loss > train_loss * overfit_ratio`.
    pub overfit_ratio: f64,

    /// A fit underfits when both losses exceed this floor.
    pub underfit_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            overfit_ratio: 1.2,
            underfit_floor: 20.0,
        }
    }
}

/// Labels a finished fit. The underfitting check runs first, so when both
/// conditions hold the fit is reported as `HighBias`.
pub fn assess(train_loss: f64, test_loss: f64, thresholds: &Thresholds) -> FitLabel {
    if train_loss > thresholds.underfit_floor && test_loss > thresholds.underfit_floor {
        FitLabel::HighBias
    } else if test_loss > train_loss * thresholds.overfit_ratio {
        FitLabel::HighVariance
    } else {
        FitLabel::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniformly_high_losses_mean_underfitting() {
        let label = assess(25.0, 24.0, &Thresholds::default());
        assert_eq!(label, FitLabel::HighBias);
    }

    #[test]
    fn test_loss_blowup_means_overfitting() {
        let label = assess(1.0, 2.0, &Thresholds::default());
        assert_eq!(label, FitLabel::HighVariance);
    }

    #[test]
    fn close_losses_are_balanced() {
        let label = assess(1.0, 1.1, &Thresholds::default());
        assert_eq!(label, FitLabel::Balanced);
    }

    #[test]
    fn underfitting_wins_when_both_conditions_hold() {
        // 100 > 25 * 1.2 would also flag overfitting; the floor check runs first
        let label = assess(25.0, 100.0, &Thresholds::default());
        assert_eq!(label, FitLabel::HighBias);
    }

    #[test]
    fn thresholds_are_configurable() {
        let strict = Thresholds {
            overfit_ratio: 1.0,
            underfit_floor: 1000.0,
        };

        assert_eq!(assess(1.0, 1.05, &strict), FitLabel::HighVariance);
        assert_eq!(assess(999.0, 999.0, &strict), FitLabel::Balanced);
    }

    #[test]
    fn labels_render_for_display() {
        assert_eq!(FitLabel::HighBias.to_string(), "High Bias (Underfitting)");
        assert_eq!(
            FitLabel::HighVariance.to_string(),
            "High Variance (Overfitting)"
        );
        assert_eq!(FitLabel::Balanced.to_string(), "Balanced");
    }
}
