use std::path::PathBuf;

use prediction::ArtifactPaths;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the three prediction artifacts.
    pub artifact_dir: PathBuf,
    pub model_file: String,
    pub scaler_file: String,
    pub feature_order_file: String,
    /// Decimal places used when rendering a probability.
    pub probability_decimals: usize,
    /// Offer another prediction after each result.
    pub repeat: bool,
    /// Config file that was applied, if any.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            classifier: self.artifact_dir.join(&self.model_file),
            scaler: self.artifact_dir.join(&self.scaler_file),
            feature_order: self.artifact_dir.join(&self.feature_order_file),
        }
    }
}
