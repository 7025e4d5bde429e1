/*!
 * Error types for the subcore library.
 *
 * Hard failures (unknown format, unsupported encoding, oversized files, I/O)
 * are typed with thiserror. Operator precondition failures are not errors:
 * operators return `false` and leave the subtitles untouched.
 */

use thiserror::Error;

/// Errors raised while opening, parsing or saving subtitles
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// No registered format matched the text
    #[error("Unknown subtitle format")]
    UnknownSubtitleFormat,

    /// A candidate encoding has no decoder
    #[error("Encoding not supported: {0}")]
    EncodingNotSupported(String),

    /// The file exceeds the configured size limit
    #[error("The file size ({size} bytes) is larger than the maximum limit ({max} bytes)")]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// A format pattern could not be compiled
    #[error("Invalid subtitle pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
