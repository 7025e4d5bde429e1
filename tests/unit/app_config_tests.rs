/*!
 * Tests for application configuration
 */

use anyhow::Result;
use std::fs;
use subcore::app_config::{Config, LogLevel};
use subcore::domain::NewlineType;

use crate::common;

/// Test the default configuration values
#[test]
fn test_default_shouldUseDocumentedValues() {
    let config = Config::default();
    assert_eq!(config.input_frame_rate, 25.0);
    assert_eq!(config.fallback_encoding, "windows-1252");
    assert_eq!(config.encoding, None);
    assert_eq!(config.max_file_size, Some(1_000_000));
    assert!(!config.include_incomplete_subtitles);
    assert_eq!(config.time_between_subtitles().num_milliseconds(), 100);
    assert_eq!(config.newline_type, NewlineType::Unix);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a partial file keeps defaults for missing fields
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "input_frame_rate": 23.976, "max_file_size": null, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.input_frame_rate, 23.976);
    assert_eq!(config.max_file_size, None);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.fallback_encoding, "windows-1252");
    Ok(())
}

/// Test that an invalid file is rejected
#[test]
fn test_from_file_withInvalidValues_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let negative_gap = common::create_test_file(&dir, "gap.json", r#"{ "time_between_subtitles_ms": -1 }"#)?;
    assert!(Config::from_file(&negative_gap).is_err());

    let bad_json = common::create_test_file(&dir, "bad.json", "{ not json")?;
    assert!(Config::from_file(&bad_json).is_err());

    assert!(Config::from_file(dir.join("missing.json")).is_err());
    Ok(())
}

/// Test that a missing file is created with the defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf").join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(fs::read_to_string(&path)?.contains("\"fallback_encoding\""));
    assert_eq!(Config::load_or_create(&path)?, config);
    Ok(())
}

/// Test that log levels parse case-insensitively
#[test]
fn test_log_level_from_str_shouldIgnoreCase() {
    assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert_eq!("trace".parse::<LogLevel>().unwrap().to_level_filter(), log::LevelFilter::Trace);
    assert!("loud".parse::<LogLevel>().is_err());
}
