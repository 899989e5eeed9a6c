//! Published performance figures for the detection models.
//!
//! These are static numbers plus representative ROC / precision-recall
//! points used to draw the curves.

use crate::domain::{MissionModel, ModelPerformance};

pub fn model_performance(model: MissionModel) -> ModelPerformance {
    match model {
        MissionModel::Kepler => ModelPerformance {
            precision: 0.91,
            recall: 0.87,
            f1score: 0.89,
            performance: 89.0,
        },
        MissionModel::Tess => ModelPerformance {
            precision: 0.88,
            recall: 0.85,
            f1score: 0.86,
            performance: 86.0,
        },
    }
}

/// ROC curve points as `(false positive rate, true positive rate)`.
pub const ROC_CURVE: [(f64, f64); 5] = [(0.0, 0.0), (0.1, 0.7), (0.2, 0.85), (0.3, 0.9), (1.0, 1.0)];

/// Precision-recall points as `(recall, precision)`.
pub const PR_CURVE: [(f64, f64); 5] = [(0.0, 1.0), (0.4, 0.9), (0.6, 0.85), (0.8, 0.8), (1.0, 0.7)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f1_is_consistent_with_precision_and_recall() {
        for model in MissionModel::ALL {
            let p = model_performance(model);
            let f1 = 2.0 * p.precision * p.recall / (p.precision + p.recall);
            assert!(
                (f1 - p.f1score).abs() < 0.01,
                "{}: f1 {f1:.3} vs published {:.3}",
                model.display_name(),
                p.f1score
            );
        }
    }

    #[test]
    fn curves_are_monotone_in_x() {
        for curve in [ROC_CURVE, PR_CURVE] {
            assert!(curve.windows(2).all(|w| w[0].0 <= w[1].0));
        }
    }
}
