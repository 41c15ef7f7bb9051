use std::path::PathBuf;

use tempfile::TempDir;
use wrapdb_core::errors::{ExError, ExErrorKind};
use wrapdb_store::{ConfigError, DbTarget, StoreConfig};

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wrapdb.toml");
    std::fs::write(
        &config_path,
        r#"
path = "data/entries.db"
journal_mode = "delete"
busy_timeout_ms = 250
ensure_schema = false
"#,
    )
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();

    assert_eq!(config.target(), DbTarget::File(PathBuf::from("data/entries.db")));
    assert_eq!(config.journal_mode, "delete");
    assert_eq!(config.busy_timeout_ms, 250);
    assert!(!config.ensure_schema);
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = StoreConfig::load(temp_dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Io);
    assert_eq!(ex.op(), Some("load_config"));
}

#[test]
fn test_unknown_field_rejected() {
    let err = StoreConfig::from_toml_str("pool_size = 4").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Config);
}

#[test]
fn test_invalid_journal_mode_rejected() {
    let err = StoreConfig::from_toml_str(r#"journal_mode = "fast""#).unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "journal_mode"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_path_rejected() {
    let err = StoreConfig::from_toml_str(r#"path = """#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { field: "path", .. }));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = StoreConfig::in_memory();
    let rendered = toml::to_string(&config).unwrap();
    assert_eq!(StoreConfig::from_toml_str(&rendered).unwrap(), config);
}

#[test]
fn test_busy_timeout_beyond_i32_rejected() {
    let err = StoreConfig::from_toml_str("path = \":memory:\"\nbusy_timeout_ms = 3000000000")
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "busy_timeout_ms",
            ..
        }
    ));

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Config);
}

#[test]
fn test_busy_timeout_at_i32_max_accepted() {
    let config =
        StoreConfig::from_toml_str(&format!("busy_timeout_ms = {}", i32::MAX)).unwrap();
    assert_eq!(config.busy_timeout_ms, i32::MAX as u64);
}
