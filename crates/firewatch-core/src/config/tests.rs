use super::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    let vars = [
        "FIREWATCH_CONFIG",
        "FIREWATCH_ARTIFACT_DIR",
        "FIREWATCH_MODEL_FILE",
        "FIREWATCH_SCALER_FILE",
        "FIREWATCH_FEATURE_ORDER_FILE",
        "FIREWATCH_PROBABILITY_DECIMALS",
        "FIREWATCH_FORM_REPEAT",
    ];
    for v in vars {
        std::env::remove_var(v);
    }
}

fn temp_config_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "firewatch-config-{}.toml",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ))
}

#[test]
fn defaults_point_next_to_the_executable() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let cfg = AppConfig::default();
    let exe_dir = std::env::current_exe()
        .expect("current exe")
        .parent()
        .expect("exe dir")
        .to_path_buf();
    assert_eq!(cfg.artifact_dir, exe_dir);
    assert_eq!(cfg.probability_decimals, 2);
    assert!(cfg.repeat);

    let paths = cfg.artifact_paths();
    assert_eq!(paths.classifier, exe_dir.join("fire_model.json"));
    assert_eq!(paths.scaler, exe_dir.join("scaler.json"));
    assert_eq!(paths.feature_order, exe_dir.join("feature_order.json"));
}

#[test]
fn file_config_is_loaded() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(
        f,
        "[artifacts]\ndir=\"/srv/firewatch\"\nmodel_file=\"forest.json\"\n[form]\nprobability_decimals=3\nrepeat=false"
    )
    .expect("write file");

    std::env::set_var("FIREWATCH_CONFIG", &path);
    let cfg = AppConfig::load().expect("load config");

    assert_eq!(cfg.artifact_dir, PathBuf::from("/srv/firewatch"));
    assert_eq!(cfg.model_file, "forest.json");
    assert_eq!(cfg.scaler_file, "scaler.json");
    assert_eq!(cfg.probability_decimals, 3);
    assert!(!cfg.repeat);
    assert_eq!(cfg.source.as_deref(), Some(path.as_path()));

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn env_overrides_file_config() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(f, "[artifacts]\ndir=\"/srv/firewatch\"").expect("write file");

    std::env::set_var("FIREWATCH_CONFIG", &path);
    std::env::set_var("FIREWATCH_ARTIFACT_DIR", "/opt/models");
    std::env::set_var("FIREWATCH_PROBABILITY_DECIMALS", "42");
    std::env::set_var("FIREWATCH_FORM_REPEAT", "off");
    let cfg = AppConfig::load().expect("load config");

    assert_eq!(cfg.artifact_dir, PathBuf::from("/opt/models"));
    assert_eq!(cfg.probability_decimals, 6, "decimals are clamped");
    assert!(!cfg.repeat);

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_configured_file_is_an_error() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    std::env::set_var("FIREWATCH_CONFIG", "/definitely/not/here/firewatch.toml");
    let err = AppConfig::load().unwrap_err();
    assert!(err.to_string().contains("FIREWATCH_CONFIG"));

    clear_env();
}

#[test]
fn malformed_toml_reports_the_path() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    std::fs::write(&path, "[artifacts\ndir=").expect("write file");
    std::env::set_var("FIREWATCH_CONFIG", &path);

    let err = AppConfig::load().unwrap_err();
    assert!(format!("{err:#}").contains("failed parsing TOML config"));

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on ", "enabled"] {
        assert!(parse_bool(raw), "{raw}");
    }
    for raw in ["0", "false", "no", "off", ""] {
        assert!(!parse_bool(raw), "{raw}");
    }
}
