use std::path::PathBuf;

use super::types::AppConfig;
use super::util::{clamp_decimals, env_non_empty, parse_bool};

impl AppConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_artifacts();
        self.apply_env_form();
    }

    fn apply_env_artifacts(&mut self) {
        if let Some(v) = env_non_empty("FIREWATCH_ARTIFACT_DIR") {
            self.artifact_dir = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty("FIREWATCH_MODEL_FILE") {
            self.model_file = v;
        }
        if let Some(v) = env_non_empty("FIREWATCH_SCALER_FILE") {
            self.scaler_file = v;
        }
        if let Some(v) = env_non_empty("FIREWATCH_FEATURE_ORDER_FILE") {
            self.feature_order_file = v;
        }
    }

    fn apply_env_form(&mut self) {
        if let Some(v) = env_non_empty("FIREWATCH_PROBABILITY_DECIMALS") {
            if let Ok(parsed) = v.parse::<usize>() {
                self.probability_decimals = clamp_decimals(parsed);
            }
        }
        if let Some(v) = env_non_empty("FIREWATCH_FORM_REPEAT") {
            self.repeat = parse_bool(&v);
        }
    }
}
