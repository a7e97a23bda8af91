use anyhow::Result;
use tracing::info;

use super::types::AppConfig;

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        info!(
            source = ?cfg.source,
            artifact_dir = %cfg.artifact_dir.display(),
            "configuration resolved"
        );
        Ok(cfg)
    }
}
