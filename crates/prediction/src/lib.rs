//! Forest fire occurrence prediction: feature-vector assembly and the
//! inference contract around a pre-trained classifier.
//!
//! ```text
//! raw fields ─→ assemble ─→ [x₁..xₙ] ─→ scaler ─→ classifier ─→ (label, [P₀, P₁])
//! ```
//!
//! The classifier, the scaler and the feature order are produced by an
//! offline training pipeline and loaded once through [`ArtifactBundle`].

mod artifacts;
mod assembler;
pub mod constants;
mod engine;
mod errors;
mod math;
pub mod model;
mod scaler;
mod schema;
mod types;

pub use artifacts::{parse_feature_order, ArtifactBundle, ArtifactPaths};
pub use assembler::{assemble, flag_totals, RawInputRecord};
pub use engine::FirePredictor;
pub use errors::{
    ArtifactKind, AssembleError, InferenceStage, LoadError, LoadErrorReason, PredictError,
    ShapeMismatchError, TreeDefect, ValidationError,
};
pub use model::{Classifier, ClassifierArtifact, DecisionTree, LogisticRegression, RandomForest};
pub use scaler::Scaler;
pub use schema::{FeatureKind, FeatureSchema, SchemaEntry};
pub use types::{
    CategoryGroup, FireLabel, FireObservation, Month, NumericField, Prediction, Weekday,
};

#[cfg(test)]
mod test_support;
