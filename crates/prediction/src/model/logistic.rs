use serde::{Deserialize, Serialize};

use super::{check_width, Classifier};
use crate::errors::{ShapeMismatchError, ValidationError};
use crate::math::{dot, sigmoid};

/// Binary logistic regression: `P(fire) = σ(w · x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Human-readable model identifier.
    #[serde(default)]
    pub model_id: String,
    /// One weight per scaled feature, in feature-order.
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.coef.is_empty() {
            return Err(ValidationError::EmptyParameters("coef"));
        }
        // Check for NaN/Inf
        for (index, &value) in self.coef.iter().enumerate() {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite {
                    name: "weight",
                    index,
                    value,
                });
            }
        }
        if !self.intercept.is_finite() {
            return Err(ValidationError::NonFiniteIntercept(self.intercept));
        }
        Ok(())
    }
}

impl Classifier for LogisticRegression {
    fn kind_name(&self) -> &'static str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2], ShapeMismatchError> {
        check_width(self.n_features(), row)?;
        let fire = sigmoid(dot(&self.coef, row) + self.intercept);
        Ok([1.0 - fire, fire])
    }
}
