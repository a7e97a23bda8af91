//! Acceptance fixtures for the end-to-end prediction scenarios in `tests/`.
//!
//! Artifacts are written the way the training export lays them out on disk,
//! so the scenarios exercise the same loader a deployment uses.

use std::path::{Path, PathBuf};

use prediction::{FireObservation, Month, Weekday};

/// Training frame column order: raw columns, then alphabetical dummies.
pub const EXPORTED_FEATURE_ORDER: &str = r#"[
    "X", "Y", "FFMC", "DMC", "DC", "ISI", "temp", "RH", "wind", "rain", "area",
    "month_apr", "month_aug", "month_dec", "month_feb", "month_jan", "month_jul",
    "month_jun", "month_mar", "month_may", "month_nov", "month_oct", "month_sep",
    "day_fri", "day_mon", "day_sat", "day_sun", "day_thu", "day_tue", "day_wed"
]"#;

pub const EXPORTED_WIDTH: usize = 30;

const MONTH_AUG: usize = 12;
const MONTH_DEC: usize = 13;

/// `(index, mean, scale, weight)` for the raw columns.
const RAW_COLUMNS: [(usize, f64, f64, f64); 11] = [
    (0, 4.7, 2.3, 0.05),
    (1, 4.3, 1.2, 0.02),
    (2, 90.6, 5.5, 0.35),
    (3, 110.9, 64.0, 0.25),
    (4, 547.9, 248.1, 0.2),
    (5, 9.0, 4.6, 0.1),
    (6, 18.9, 5.8, 0.45),
    (7, 44.3, 16.3, -0.3),
    (8, 4.0, 1.8, 0.1),
    (9, 0.02, 0.3, -0.4),
    (10, 12.8, 63.6, 0.0),
];

pub fn scratch_dir(tag: &str) -> std::io::Result<PathBuf> {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let dir = std::env::temp_dir().join(format!(
        "firewatch-ac-{tag}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write a standard scaler, a logistic regression and the feature order
/// into `dir` under their default file names.
pub fn write_exported_artifacts(dir: &Path) -> std::io::Result<()> {
    let mut mean = vec![0.0; EXPORTED_WIDTH];
    let mut scale = vec![1.0; EXPORTED_WIDTH];
    let mut coef = vec![0.0; EXPORTED_WIDTH];
    for (i, m, s, w) in RAW_COLUMNS {
        mean[i] = m;
        scale[i] = s;
        coef[i] = w;
    }
    coef[MONTH_AUG] = 0.6;
    coef[MONTH_DEC] = -0.8;

    let scaler = serde_json::json!({ "kind": "standard", "mean": mean, "scale": scale });
    let model = serde_json::json!({
        "kind": "logistic_regression",
        "model_id": "fires-logit-v1",
        "coef": coef,
        "intercept": -0.1,
    });
    std::fs::write(
        dir.join(prediction::constants::FEATURE_ORDER_FILE),
        EXPORTED_FEATURE_ORDER,
    )?;
    std::fs::write(dir.join(prediction::constants::SCALER_FILE), scaler.to_string())?;
    std::fs::write(dir.join(prediction::constants::MODEL_FILE), model.to_string())?;
    Ok(())
}

/// The reference hot, dry late-summer reading.
pub fn august_friday() -> FireObservation {
    FireObservation {
        month: Month::Aug,
        day: Weekday::Fri,
        x: 7,
        y: 4,
        ffmc: 91.0,
        dmc: 120.0,
        dc: 550.0,
        isi: 10.0,
        temp: 22.0,
        rh: 40,
        wind: 3.5,
        rain: 0.0,
    }
}
