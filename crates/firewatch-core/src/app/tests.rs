use std::io::Cursor;

use super::*;
use crate::test_support::{answers, config_for, scratch_dir, write_artifacts};

#[test]
fn run_loads_artifacts_and_renders_prediction() {
    let dir = scratch_dir("app-ok");
    write_artifacts(&dir);
    let config = config_for(&dir);

    let input = answers(&[
        "aug", "fri", "7", "4", "91", "120", "550", "10", "22", "40", "3.5", "0",
    ]);
    let mut output = Vec::new();
    let rendered = run(&config, Cursor::new(input.into_bytes()), &mut output).expect("run");

    assert_eq!(rendered, 1);
    let out = String::from_utf8(output).expect("utf8");
    assert!(out.contains("Fire likely to occur (Probability: 0.775)"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn invalid_feature_order_halts_before_the_form() {
    let dir = scratch_dir("app-mapping");
    write_artifacts(&dir);
    std::fs::write(dir.join("feature_order.json"), r#"{"X": 0}"#).expect("write");
    let config = config_for(&dir);

    let mut output = Vec::new();
    let err = run(&config, Cursor::new(Vec::new()), &mut output).unwrap_err();

    assert!(output.is_empty(), "no input controls may be shown");
    let chain = format!("{err:#}");
    assert!(chain.contains("failed loading prediction artifacts"));
    assert!(chain.contains("feature order artifact"));
    assert!(chain.contains("found a mapping"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_artifact_names_the_file() {
    let dir = scratch_dir("app-missing");
    write_artifacts(&dir);
    std::fs::remove_file(dir.join("fire_model.json")).expect("remove model");

    let err = load_predictor(&config_for(&dir)).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("classifier artifact"));
    assert!(chain.contains("fire_model.json"));
    assert!(chain.contains("not found"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn custom_file_names_are_honoured() {
    let dir = scratch_dir("app-names");
    write_artifacts(&dir);
    std::fs::rename(dir.join("scaler.json"), dir.join("std_scaler.json")).expect("rename");

    let mut config = config_for(&dir);
    assert!(load_predictor(&config).is_err());
    config.scaler_file = "std_scaler.json".to_string();
    let predictor = load_predictor(&config).expect("load with custom name");
    assert_eq!(predictor.schema().len(), 30);

    let _ = std::fs::remove_dir_all(dir);
}
