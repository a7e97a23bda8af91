use serde::{Deserialize, Serialize};

use crate::errors::{InferenceStage, ShapeMismatchError, ValidationError};

/// Fitted per-feature numeric transform, applied before the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Standard { .. } => "standard",
            Self::MinMax { .. } => "min_max",
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            Self::Standard { mean, .. } => mean.len(),
            Self::MinMax { min, .. } => min.len(),
        }
    }

    /// Structural check run at load time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (offset_name, offset, scale) = match self {
            Self::Standard { mean, scale } => ("mean", mean, scale),
            Self::MinMax { min, scale } => ("min", min, scale),
        };
        if offset.is_empty() {
            return Err(ValidationError::EmptyParameters(offset_name));
        }
        if offset.len() != scale.len() {
            return Err(ValidationError::LengthMismatch {
                name: "scale",
                expected: offset.len(),
                got: scale.len(),
            });
        }
        for (name, values) in [(offset_name, offset), ("scale", scale)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::NonFinite {
                    name,
                    index,
                    value: values[index],
                });
            }
        }
        if matches!(self, Self::Standard { .. }) {
            if let Some(index) = scale.iter().position(|v| *v == 0.0) {
                return Err(ValidationError::ZeroScale { index });
            }
        }
        Ok(())
    }

    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ShapeMismatchError> {
        let expected = self.n_features();
        if row.len() != expected {
            return Err(ShapeMismatchError {
                stage: InferenceStage::Scaler,
                expected,
                got: row.len(),
            });
        }

        let scaled = match self {
            Self::Standard { mean, scale } => row
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            Self::MinMax { min, scale } => row
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests;
