use std::fmt;
use std::path::PathBuf;

use crate::types::{CategoryGroup, NumericField};

/// The three persisted artifacts the predictor depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Classifier,
    Scaler,
    FeatureOrder,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier => write!(f, "classifier"),
            Self::Scaler => write!(f, "scaler"),
            Self::FeatureOrder => write!(f, "feature order"),
        }
    }
}

#[derive(Debug)]
pub enum LoadErrorReason {
    NotFound,
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidShape(String),
    Validation(ValidationError),
}

/// Startup failure: an artifact is absent, unreadable or malformed.
#[derive(Debug)]
pub struct LoadError {
    pub artifact: ArtifactKind,
    pub path: PathBuf,
    pub reason: LoadErrorReason,
}

impl LoadError {
    pub fn new(artifact: ArtifactKind, path: impl Into<PathBuf>, reason: LoadErrorReason) -> Self {
        Self {
            artifact,
            path: path.into(),
            reason,
        }
    }

    pub fn invalid(artifact: ArtifactKind, path: impl Into<PathBuf>, err: ValidationError) -> Self {
        Self::new(artifact, path, LoadErrorReason::Validation(err))
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (artifact, path) = (self.artifact, self.path.display());
        match &self.reason {
            LoadErrorReason::NotFound => {
                write!(f, "{artifact} artifact {path} not found")
            }
            LoadErrorReason::Io(err) => {
                write!(f, "{artifact} artifact {path} unreadable: {err}")
            }
            LoadErrorReason::Parse(err) => {
                write!(f, "{artifact} artifact {path} failed to parse: {err}")
            }
            LoadErrorReason::InvalidShape(detail) => {
                write!(f, "{artifact} artifact {path} has an invalid shape: {detail}")
            }
            LoadErrorReason::Validation(err) => {
                write!(f, "{artifact} artifact {path} failed validation: {err}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            LoadErrorReason::Io(err) => Some(err),
            LoadErrorReason::Parse(err) => Some(err),
            LoadErrorReason::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Pipeline stage that rejected a row of the wrong width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceStage {
    Scaler,
    Classifier,
}

impl fmt::Display for InferenceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaler => write!(f, "scaler"),
            Self::Classifier => write!(f, "classifier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatchError {
    pub stage: InferenceStage,
    pub expected: usize,
    pub got: usize,
}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expects {} features, row has {}",
            self.stage, self.expected, self.got
        )
    }
}

impl std::error::Error for ShapeMismatchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    UnknownCategory { group: CategoryGroup, value: String },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { group, value } => {
                write!(f, "unknown {group} selection {value:?}")
            }
        }
    }
}

impl std::error::Error for AssembleError {}

/// Failure of a full record-to-prediction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// A row position holds NaN or an infinity.
    NonFiniteInput { name: String },
    /// Typed observation fields outside their accepted ranges.
    OutOfRange { fields: Vec<NumericField> },
    ShapeMismatch(ShapeMismatchError),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteInput { name } => write!(f, "non-finite value for {name}"),
            Self::OutOfRange { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.feature_name()).collect();
                write!(f, "out of range: {}", names.join(", "))
            }
            Self::ShapeMismatch(err) => write!(f, "shape mismatch: {err}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeMismatch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeMismatchError> for PredictError {
    fn from(value: ShapeMismatchError) -> Self {
        Self::ShapeMismatch(value)
    }
}

/// Structural defect in a scaler or classifier document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyParameters(&'static str),
    LengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },
    NonFiniteIntercept(f64),
    ZeroScale { index: usize },
    ZeroFeatures,
    EmptyForest,
    Tree { tree: usize, defect: TreeDefect },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParameters(name) => write!(f, "{name} is empty"),
            Self::LengthMismatch {
                name,
                expected,
                got,
            } => write!(f, "{name} has {got} entries, expected {expected}"),
            Self::NonFinite { name, index, value } => {
                write!(f, "non-finite {name} at index {index}: {value}")
            }
            Self::NonFiniteIntercept(v) => write!(f, "non-finite intercept: {v}"),
            Self::ZeroScale { index } => write!(f, "zero scale at index {index}"),
            Self::ZeroFeatures => write!(f, "random forest declares zero features"),
            Self::EmptyForest => write!(f, "random forest has no trees"),
            Self::Tree { tree, defect } => write!(f, "tree {tree}: {defect}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// What is wrong with one array-encoded decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeDefect {
    NoNodes,
    InconsistentLengths,
    SingleChild { node: usize },
    InvalidChild { node: usize, child: i32 },
    UnknownFeature { node: usize, feature: i32 },
    NonFiniteThreshold { node: usize },
    InvalidLeafWeights { node: usize },
    EmptyLeaf { node: usize },
}

impl fmt::Display for TreeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNodes => write!(f, "tree has no nodes"),
            Self::InconsistentLengths => write!(f, "inconsistent node array lengths"),
            Self::SingleChild { node } => write!(f, "node {node} has exactly one child"),
            Self::InvalidChild { node, child } => {
                write!(f, "node {node} points at invalid child {child}")
            }
            Self::UnknownFeature { node, feature } => {
                write!(f, "node {node} splits on unknown feature {feature}")
            }
            Self::NonFiniteThreshold { node } => {
                write!(f, "node {node} has a non-finite threshold")
            }
            Self::InvalidLeafWeights { node } => {
                write!(f, "leaf {node} has invalid class weights")
            }
            Self::EmptyLeaf { node } => write!(f, "leaf {node} has no class weight"),
        }
    }
}
