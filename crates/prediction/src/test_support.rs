use std::path::PathBuf;

use crate::{
    ArtifactBundle, ClassifierArtifact, DecisionTree, FeatureSchema, LogisticRegression,
    RandomForest, Scaler,
};

/// Column layout of the training frame: raw columns, then one-hot dummies
/// in alphabetical order.
pub(crate) fn training_feature_order() -> Vec<String> {
    let mut names: Vec<String> = [
        "X", "Y", "FFMC", "DMC", "DC", "ISI", "temp", "RH", "wind", "rain", "area",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for m in [
        "apr", "aug", "dec", "feb", "jan", "jul", "jun", "mar", "may", "nov", "oct", "sep",
    ] {
        names.push(format!("month_{m}"));
    }
    for d in ["fri", "mon", "sat", "sun", "thu", "tue", "wed"] {
        names.push(format!("day_{d}"));
    }
    names
}

pub(crate) fn training_schema() -> FeatureSchema {
    FeatureSchema::from_names(training_feature_order())
}

pub(crate) fn standard_scaler(width: usize) -> Scaler {
    let mut mean = vec![0.0; width];
    let mut scale = vec![1.0; width];
    // FFMC, DMC, DC, temp, RH get realistic centering.
    for (i, m, s) in [
        (2, 90.6, 5.5),
        (3, 110.9, 64.0),
        (4, 547.9, 248.1),
        (6, 18.9, 5.8),
        (7, 44.3, 16.3),
    ] {
        if i < width {
            mean[i] = m;
            scale[i] = s;
        }
    }
    Scaler::Standard { mean, scale }
}

/// Logistic model that leans on dryness and temperature.
pub(crate) fn logistic_model(width: usize) -> ClassifierArtifact {
    let mut coef = vec![0.0; width];
    for (i, w) in [(2, 0.9), (3, 0.4), (4, 0.3), (6, 0.8), (7, -0.5), (9, -1.2)] {
        if i < width {
            coef[i] = w;
        }
    }
    ClassifierArtifact::LogisticRegression(LogisticRegression {
        model_id: "fixture-logit".to_string(),
        coef,
        intercept: -0.2,
    })
}

/// Two stumps on scaled temperature (index 6) and FFMC (index 2).
pub(crate) fn forest_model(width: usize) -> ClassifierArtifact {
    let stump = |feature: i32, threshold: f64, low: [f64; 2], high: [f64; 2]| DecisionTree {
        feature: vec![feature, -2, -2],
        threshold: vec![threshold, -2.0, -2.0],
        left: vec![1, -1, -1],
        right: vec![2, -1, -1],
        value: vec![[0.0, 0.0], low, high],
    };
    ClassifierArtifact::RandomForest(RandomForest {
        model_id: "fixture-forest".to_string(),
        n_features: width,
        trees: vec![
            stump(6, 0.0, [30.0, 10.0], [8.0, 32.0]),
            stump(2, 0.0, [18.0, 2.0], [5.0, 15.0]),
        ],
    })
}

pub(crate) fn logistic_bundle() -> ArtifactBundle {
    let schema = training_schema();
    let width = schema.len();
    ArtifactBundle::from_parts(schema, standard_scaler(width), logistic_model(width))
}

pub(crate) fn forest_bundle() -> ArtifactBundle {
    let schema = training_schema();
    let width = schema.len();
    ArtifactBundle::from_parts(schema, standard_scaler(width), forest_model(width))
}

/// Fresh, unique scratch directory under the system temp dir.
pub(crate) fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "firewatch-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub(crate) fn write_bundle(dir: &std::path::Path, bundle: &ArtifactBundle) {
    let names: Vec<&str> = bundle.schema().names().collect();
    std::fs::write(
        dir.join(crate::constants::FEATURE_ORDER_FILE),
        serde_json::to_string(&names).expect("serialize feature order"),
    )
    .expect("write feature order");
    std::fs::write(
        dir.join(crate::constants::SCALER_FILE),
        serde_json::to_string(bundle.scaler()).expect("serialize scaler"),
    )
    .expect("write scaler");
    std::fs::write(
        dir.join(crate::constants::MODEL_FILE),
        serde_json::to_string(bundle.classifier()).expect("serialize classifier"),
    )
    .expect("write classifier");
}
