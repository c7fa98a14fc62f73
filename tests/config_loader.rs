use showreel::config::{Config, ConfigError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.rotation.hero.interval_ms, 5000);
    assert_eq!(config.rotation.testimonials.interval_ms, 3500);
    assert_eq!(config.rotation.hero.suppression_ms, 8000);
    assert_eq!(config.rotation.testimonials.suppression(), Duration::from_secs(8));
    assert!(config.rotation.hero.autoplay);
    assert_eq!(config.contact.submit_delay_ms, 1200);
    assert_eq!(config.contact.reset_after_ms, 3000);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("showreel/config.toml"));
    assert!(Config::default_log_path().ends_with("showreel/showreel.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[rotation.testimonials]
interval_ms = 6000
autoplay = false

[logging]
level = "showreel=debug"
file = "/tmp/showreel-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.rotation.testimonials.interval_ms, 6000);
    assert_eq!(config.rotation.testimonials.suppression_ms, 8000);
    assert!(!config.rotation.testimonials.autoplay);
    assert_eq!(config.rotation.hero.interval_ms, 5000);
    assert_eq!(config.contact.submit_delay_ms, 1200);
    assert_eq!(config.logging.level, "showreel=debug");
    assert_eq!(
        config.log_path(),
        std::path::PathBuf::from("/tmp/showreel-test.log")
    );
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = write_config("[rotation.hero]\ninterval_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("rotation.hero.interval_ms"), "{message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_blank_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "  ".into();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_toml_reports_path() {
    let (_dir, path) = write_config("[rotation.hero\ninterval_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let (_dir, path) = write_config("[contact]\nsubmit_delay_ms = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
