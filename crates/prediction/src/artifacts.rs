//! Artifact Loader.
//!
//! Reads the classifier, the fitted scaler and the feature order from one
//! directory. Any missing or malformed file is fatal; there is no degraded
//! mode and no retry.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::constants::{FEATURE_ORDER_FILE, MODEL_FILE, SCALER_FILE};
use crate::errors::{ArtifactKind, LoadError, LoadErrorReason};
use crate::model::{Classifier, ClassifierArtifact};
use crate::scaler::Scaler;
use crate::schema::FeatureSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub scaler: PathBuf,
    pub feature_order: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            classifier: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
            feature_order: dir.join(FEATURE_ORDER_FILE),
        }
    }
}

/// Everything inference needs, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    schema: FeatureSchema,
    scaler: Scaler,
    classifier: ClassifierArtifact,
}

impl ArtifactBundle {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, LoadError> {
        let classifier: ClassifierArtifact =
            load_json(ArtifactKind::Classifier, &paths.classifier)?;
        classifier
            .validate()
            .map_err(|err| LoadError::invalid(ArtifactKind::Classifier, &paths.classifier, err))?;

        let scaler: Scaler = load_json(ArtifactKind::Scaler, &paths.scaler)?;
        scaler
            .validate()
            .map_err(|err| LoadError::invalid(ArtifactKind::Scaler, &paths.scaler, err))?;

        let raw = read_artifact(ArtifactKind::FeatureOrder, &paths.feature_order)?;
        let schema = parse_feature_order(&raw).map_err(|reason| {
            LoadError::new(ArtifactKind::FeatureOrder, &paths.feature_order, reason)
        })?;

        let bundle = Self::from_parts(schema, scaler, classifier);
        info!(
            features = bundle.schema.len(),
            scaler = bundle.scaler.kind_name(),
            classifier = bundle.classifier.kind_name(),
            feature_order = %paths.feature_order.display(),
            "prediction artifacts loaded"
        );
        Ok(bundle)
    }

    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load(&ArtifactPaths::in_dir(dir))
    }

    /// Assemble a bundle from already-validated parts.
    pub fn from_parts(
        schema: FeatureSchema,
        scaler: Scaler,
        classifier: ClassifierArtifact,
    ) -> Self {
        let width = schema.len();
        if scaler.n_features() != width || classifier.n_features() != width {
            warn!(
                schema = width,
                scaler = scaler.n_features(),
                classifier = classifier.n_features(),
                "artifact widths disagree; every prediction will fail with a shape mismatch"
            );
        }
        let unsupplied = schema.unsupplied_names();
        if !unsupplied.is_empty() {
            info!(
                columns = ?unsupplied,
                "feature order has columns the form never fills; they stay 0.0"
            );
        }
        Self {
            schema,
            scaler,
            classifier,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &ClassifierArtifact {
        &self.classifier
    }
}

/// Parse the feature-order document. Anything but a non-empty JSON array
/// of strings is rejected.
pub fn parse_feature_order(raw: &str) -> Result<FeatureSchema, LoadErrorReason> {
    let value: Value = serde_json::from_str(raw).map_err(LoadErrorReason::Parse)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadErrorReason::InvalidShape(format!(
                "expected an ordered list of feature names, found {}",
                json_type_name(&other)
            )))
        }
    };
    if items.is_empty() {
        return Err(LoadErrorReason::InvalidShape(
            "feature order is empty".to_string(),
        ));
    }

    let mut names = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::String(name) => names.push(name),
            other => {
                return Err(LoadErrorReason::InvalidShape(format!(
                    "entry {i} is {}, expected a string",
                    json_type_name(&other)
                )))
            }
        }
    }
    Ok(FeatureSchema::from_names(names))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

fn read_artifact(artifact: ArtifactKind, path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|err| {
        let reason = if err.kind() == std::io::ErrorKind::NotFound {
            LoadErrorReason::NotFound
        } else {
            LoadErrorReason::Io(err)
        };
        LoadError::new(artifact, path, reason)
    })
}

fn load_json<T: DeserializeOwned>(artifact: ArtifactKind, path: &Path) -> Result<T, LoadError> {
    let raw = read_artifact(artifact, path)?;
    serde_json::from_str(&raw)
        .map_err(|err| LoadError::new(artifact, path, LoadErrorReason::Parse(err)))
}
