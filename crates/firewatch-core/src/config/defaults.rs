use std::path::{Path, PathBuf};

use prediction::constants::{FEATURE_ORDER_FILE, MODEL_FILE, SCALER_FILE};

use super::constants::DEFAULT_PROBABILITY_DECIMALS;
use super::types::AppConfig;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_dir: default_artifact_dir(),
            model_file: MODEL_FILE.to_string(),
            scaler_file: SCALER_FILE.to_string(),
            feature_order_file: FEATURE_ORDER_FILE.to_string(),
            probability_decimals: DEFAULT_PROBABILITY_DECIMALS,
            repeat: true,
            source: None,
        }
    }
}

/// Artifacts live alongside the running executable.
pub(super) fn default_artifact_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
