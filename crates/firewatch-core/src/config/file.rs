use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::paths::resolve_config_path;
use super::types::AppConfig;
use super::util::{clamp_decimals, non_empty};

impl AppConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path()? else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_artifacts(file_cfg.artifacts);
        self.apply_file_form(file_cfg.form);
        self.source = Some(path);

        Ok(true)
    }

    fn apply_file_artifacts(&mut self, artifacts: Option<FileArtifactsConfig>) {
        let Some(artifacts) = artifacts else {
            return;
        };

        if let Some(v) = non_empty(artifacts.dir) {
            self.artifact_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.model_file) {
            self.model_file = v;
        }
        if let Some(v) = non_empty(artifacts.scaler_file) {
            self.scaler_file = v;
        }
        if let Some(v) = non_empty(artifacts.feature_order_file) {
            self.feature_order_file = v;
        }
    }

    fn apply_file_form(&mut self, form: Option<FileFormConfig>) {
        let Some(form) = form else {
            return;
        };
        if let Some(v) = form.probability_decimals {
            self.probability_decimals = clamp_decimals(v);
        }
        if let Some(v) = form.repeat {
            self.repeat = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    artifacts: Option<FileArtifactsConfig>,
    #[serde(default)]
    form: Option<FileFormConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileArtifactsConfig {
    #[serde(default)]
    dir: Option<String>,
    #[serde(default)]
    model_file: Option<String>,
    #[serde(default)]
    scaler_file: Option<String>,
    #[serde(default)]
    feature_order_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileFormConfig {
    #[serde(default)]
    probability_decimals: Option<usize>,
    #[serde(default)]
    repeat: Option<bool>,
}
