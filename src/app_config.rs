use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::NewlineType;
use crate::encoding::TextEncoding;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    // @field: Frame rate assumed for frame-based input
    #[serde(default = "default_input_frame_rate")]
    pub input_frame_rate: f64,

    // @field: Encoding used when none is detected
    #[serde(default = "default_fallback_encoding")]
    pub fallback_encoding: String,

    // @field: Forced encoding, skipping detection
    #[serde(default)]
    pub encoding: Option<String>,

    // @field: Size limit in bytes, null disables it
    #[serde(default = "default_max_file_size")]
    pub max_file_size: Option<u64>,

    // @field: Collect text that could not be parsed
    #[serde(default)]
    pub include_incomplete_subtitles: bool,

    // @field: Gap used by split and by translation import
    #[serde(default = "default_time_between_subtitles_ms")]
    pub time_between_subtitles_ms: i64,

    // @field: Newline convention for new files
    #[serde(default = "default_newline_type")]
    pub newline_type: NewlineType,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

fn default_input_frame_rate() -> f64 {
    25.0
}

fn default_fallback_encoding() -> String {
    "windows-1252".to_string()
}

fn default_max_file_size() -> Option<u64> {
    Some(1_000_000)
}

fn default_time_between_subtitles_ms() -> i64 {
    100
}

fn default_newline_type() -> NewlineType {
    NewlineType::Unix
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.input_frame_rate.is_finite() || self.input_frame_rate <= 0.0 {
            return Err(anyhow!("Input frame rate must be positive, got {}", self.input_frame_rate));
        }

        TextEncoding::from_label(&self.fallback_encoding)
            .with_context(|| format!("Invalid fallback encoding: {}", self.fallback_encoding))?;
        if let Some(encoding) = &self.encoding {
            TextEncoding::from_label(encoding)
                .with_context(|| format!("Invalid encoding: {}", encoding))?;
        }

        if self.time_between_subtitles_ms < 0 {
            return Err(anyhow!(
                "Time between subtitles cannot be negative, got {} ms",
                self.time_between_subtitles_ms
            ));
        }

        if self.max_file_size == Some(0) {
            return Err(anyhow!("Maximum file size must be greater than zero"));
        }

        Ok(())
    }

    // @returns: Gap between subtitles as a duration
    pub fn time_between_subtitles(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.time_between_subtitles_ms)
    }

    /// Load the configuration from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        FileManager::write_to_file(path, &content)
    }

    /// Load the configuration, writing the defaults first when the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if FileManager::file_exists(&path) {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.save(&path)?;
            Ok(config)
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_frame_rate: default_input_frame_rate(),
            fallback_encoding: default_fallback_encoding(),
            encoding: None,
            max_file_size: default_max_file_size(),
            include_incomplete_subtitles: false,
            time_between_subtitles_ms: default_time_between_subtitles_ms(),
            newline_type: default_newline_type(),
            log_level: LogLevel::default(),
        }
    }
}
