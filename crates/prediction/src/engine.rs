use std::sync::Arc;

use tracing::debug;

use crate::artifacts::ArtifactBundle;
use crate::assembler::{assemble, RawInputRecord};
use crate::errors::PredictError;
use crate::model::Classifier;
use crate::schema::FeatureSchema;
use crate::types::{FireObservation, Prediction};

/// Inference Invoker. Stateless; holds a shared read-only artifact bundle.
#[derive(Debug, Clone)]
pub struct FirePredictor {
    artifacts: Arc<ArtifactBundle>,
}

impl FirePredictor {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &ArtifactBundle {
        &self.artifacts
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.artifacts.schema()
    }

    /// Scale an assembled row, then ask the classifier for label and
    /// probabilities. NaN and infinities are rejected before scaling.
    pub fn predict_row(&self, row: &[f64]) -> Result<Prediction, PredictError> {
        if let Some(index) = row.iter().position(|v| !v.is_finite()) {
            let name = self
                .schema()
                .entries()
                .get(index)
                .map_or_else(|| format!("position {index}"), |e| e.name.clone());
            return Err(PredictError::NonFiniteInput { name });
        }

        let scaled = self.artifacts.scaler().transform(row)?;
        let classifier = self.artifacts.classifier();
        let label = classifier.predict(&scaled)?;
        let probabilities = classifier.predict_proba(&scaled)?;

        debug!(
            label = %label,
            fire_probability = probabilities[1],
            "prediction computed"
        );
        Ok(Prediction {
            label,
            probabilities,
        })
    }

    pub fn predict_record(&self, record: &RawInputRecord) -> Result<Prediction, PredictError> {
        let row = assemble(self.schema(), record);
        self.predict_row(&row)
    }

    /// Fields outside their accepted range are refused rather than scored.
    pub fn predict_observation(
        &self,
        observation: &FireObservation,
    ) -> Result<Prediction, PredictError> {
        let fields = observation.out_of_range();
        if !fields.is_empty() {
            return Err(PredictError::OutOfRange { fields });
        }
        let record = RawInputRecord::from_observation(self.schema(), observation);
        self.predict_record(&record)
    }
}

impl From<ArtifactBundle> for FirePredictor {
    fn from(value: ArtifactBundle) -> Self {
        Self::new(Arc::new(value))
    }
}
