/*!
 * Tests for error types
 */

use std::io;
use subcore::errors::{AppError, SubtitleError};

/// Test the error messages shown to users
#[test]
fn test_subtitle_error_display_shouldDescribeProblem() {
    assert_eq!(SubtitleError::UnknownSubtitleFormat.to_string(), "Unknown subtitle format");
    assert_eq!(
        SubtitleError::EncodingNotSupported("klingon".to_string()).to_string(),
        "Encoding not supported: klingon"
    );
    assert_eq!(
        SubtitleError::FileTooLarge { size: 2000, max: 1000 }.to_string(),
        "The file size (2000 bytes) is larger than the maximum limit (1000 bytes)"
    );
}

/// Test conversions into the error types
#[test]
fn test_from_conversions_shouldWrapSources() {
    let error: SubtitleError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(error, SubtitleError::Io(_)));

    let error: SubtitleError = regex::Regex::new("(").unwrap_err().into();
    assert!(matches!(error, SubtitleError::InvalidPattern(_)));

    let app_error: AppError = SubtitleError::UnknownSubtitleFormat.into();
    assert_eq!(app_error.to_string(), "Subtitle error: Unknown subtitle format");

    let app_error: AppError = io::Error::new(io::ErrorKind::Other, "disk").into();
    assert!(matches!(app_error, AppError::File(_)));
}

/// Test the messages of failures reported by the command line
#[test]
fn test_app_error_display_shouldNameFailureKind() {
    assert_eq!(
        AppError::Config("Input frame rate must be positive, got 0".to_string()).to_string(),
        "Configuration error: Input frame rate must be positive, got 0"
    );
    assert_eq!(
        AppError::File("Input path does not exist: \"missing.srt\"".to_string()).to_string(),
        "File error: Input path does not exist: \"missing.srt\""
    );
}
