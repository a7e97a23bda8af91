use std::path::{Path, PathBuf};

use prediction::constants::{FEATURE_ORDER_FILE, MODEL_FILE, SCALER_FILE};
use prediction::{
    ArtifactBundle, ClassifierArtifact, DecisionTree, FeatureSchema, RandomForest, Scaler,
};

use crate::config::AppConfig;

pub(crate) fn feature_order() -> Vec<String> {
    let mut names: Vec<String> = [
        "X", "Y", "FFMC", "DMC", "DC", "ISI", "temp", "RH", "wind", "rain", "area",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    names.extend(prediction::Month::ALL.iter().map(|m| m.flag_name()));
    names.extend(prediction::Weekday::ALL.iter().map(|d| d.flag_name()));
    names
}

fn scaler(width: usize) -> Scaler {
    let mut mean = vec![0.0; width];
    let mut scale = vec![1.0; width];
    mean[2] = 90.6;
    scale[2] = 5.5;
    mean[6] = 18.9;
    scale[6] = 5.8;
    Scaler::Standard { mean, scale }
}

/// Stumps on scaled temperature and FFMC: hot and dry → 0.775 fire.
pub(crate) fn forest(width: usize) -> ClassifierArtifact {
    let stump = |feature: i32, low: [f64; 2], high: [f64; 2]| DecisionTree {
        feature: vec![feature, -2, -2],
        threshold: vec![0.0, -2.0, -2.0],
        left: vec![1, -1, -1],
        right: vec![2, -1, -1],
        value: vec![[0.0, 0.0], low, high],
    };
    ClassifierArtifact::RandomForest(RandomForest {
        model_id: "core-fixture".to_string(),
        n_features: width,
        trees: vec![
            stump(6, [30.0, 10.0], [8.0, 32.0]),
            stump(2, [18.0, 2.0], [5.0, 15.0]),
        ],
    })
}

pub(crate) fn bundle() -> ArtifactBundle {
    let schema = FeatureSchema::from_names(feature_order());
    let width = schema.len();
    ArtifactBundle::from_parts(schema, scaler(width), forest(width))
}

pub(crate) fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "firewatch-core-{tag}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub(crate) fn write_artifacts(dir: &Path) {
    let width = feature_order().len();
    std::fs::write(
        dir.join(FEATURE_ORDER_FILE),
        serde_json::to_string(&feature_order()).expect("serialize feature order"),
    )
    .expect("write feature order");
    std::fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string(&scaler(width)).expect("serialize scaler"),
    )
    .expect("write scaler");
    std::fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string(&forest(width)).expect("serialize model"),
    )
    .expect("write model");
}

pub(crate) fn config_for(dir: &Path) -> AppConfig {
    AppConfig {
        artifact_dir: dir.to_path_buf(),
        probability_decimals: 3,
        repeat: false,
        ..AppConfig::default()
    }
}

/// Answers for month, day and the ten numeric fields, newline-terminated.
pub(crate) fn answers(fields: &[&str]) -> String {
    let mut out = fields.join("\n");
    out.push('\n');
    out
}
