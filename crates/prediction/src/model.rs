//! Classifier artifacts.
//!
//! The predictor treats the model as a black box behind [`Classifier`]. The
//! concrete evaluators here only exist so exported models can run without
//! the training runtime; they perform inference, never training.

mod forest;
mod logistic;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{InferenceStage, ShapeMismatchError, ValidationError};
use crate::math::argmax;
use crate::types::FireLabel;

pub use forest::{DecisionTree, RandomForest};
pub use logistic::LogisticRegression;

/// Binary fire / no-fire classifier over a scaled feature row.
pub trait Classifier: fmt::Debug + Send + Sync {
    fn kind_name(&self) -> &'static str;

    /// Row width the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// `[P(no fire), P(fire)]` for one scaled row.
    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2], ShapeMismatchError>;

    /// Class with the higher probability; ties go to no fire.
    fn predict(&self, row: &[f64]) -> Result<FireLabel, ShapeMismatchError> {
        let proba = self.predict_proba(row)?;
        Ok(FireLabel::from_class(argmax(&proba)).unwrap_or(FireLabel::NoFire))
    }
}

/// On-disk classifier document, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
}

impl ClassifierArtifact {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::LogisticRegression(m) => m.validate(),
            Self::RandomForest(m) => m.validate(),
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            Self::LogisticRegression(m) => m,
            Self::RandomForest(m) => m,
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn kind_name(&self) -> &'static str {
        self.inner().kind_name()
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2], ShapeMismatchError> {
        self.inner().predict_proba(row)
    }

    fn predict(&self, row: &[f64]) -> Result<FireLabel, ShapeMismatchError> {
        self.inner().predict(row)
    }
}

pub(crate) fn check_width(expected: usize, row: &[f64]) -> Result<(), ShapeMismatchError> {
    if row.len() != expected {
        return Err(ShapeMismatchError {
            stage: InferenceStage::Classifier,
            expected,
            got: row.len(),
        });
    }
    Ok(())
}
