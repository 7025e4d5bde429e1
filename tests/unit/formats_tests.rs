/*!
 * Tests for the format registry and detection
 */

use subcore::domain::{available_types, available_types_sorted, is_subtitle_extension, SubtitleMode, SubtitleType};
use subcore::errors::SubtitleError;
use subcore::formats;

use crate::common;

/// Test that a SubRip text is detected as SubRip
#[test]
fn test_detect_withSubRipText_shouldReturnSubRip() {
    let format = formats::detect(common::SUBRIP_SAMPLE).unwrap();
    assert_eq!(format.subtitle_type, SubtitleType::SubRip);
    assert_eq!(format.mode, SubtitleMode::Times);
}

/// Test that a MicroDVD text is detected as MicroDVD
#[test]
fn test_detect_withMicroDvdText_shouldReturnMicroDvd() {
    let format = formats::detect(common::MICRODVD_SAMPLE).unwrap();
    assert_eq!(format.subtitle_type, SubtitleType::MicroDVD);
    assert_eq!(format.mode, SubtitleMode::Frames);
}

/// Test that an MPSub text is detected through its headers
#[test]
fn test_detect_withMpsubText_shouldReturnMpsub() {
    let text = "TITLE=Movie\nAUTHOR=Someone\nFORMAT=TIME\n\n1 2\nHello\n";
    let format = formats::detect(text).unwrap();
    assert_eq!(format.subtitle_type, SubtitleType::MPSub);
    assert_eq!(format.mode, SubtitleMode::Both);
}

/// Test that text matching no format fails with an unknown format error
#[test]
fn test_detect_withPlainProse_shouldFail() {
    let result = formats::detect("Once upon a time there was no subtitle here.");
    assert!(matches!(result, Err(SubtitleError::UnknownSubtitleFormat)));
}

/// Test that detection only looks at the beginning of the text
#[test]
fn test_detect_withEntryPastDetectionLength_shouldFail() {
    let mut text = "x".repeat(formats::DETECTION_LENGTH + 10);
    text.push('\n');
    text.push_str(common::MICRODVD_SAMPLE);
    assert!(formats::detect(&text).is_err());
}

/// Test that the registry holds every type once, in registration order
#[test]
fn test_formats_shouldMatchTypeOrder() {
    let types: Vec<SubtitleType> = formats::formats().iter().map(|f| f.subtitle_type).collect();
    assert_eq!(types, SubtitleType::ALL.to_vec());
    assert!(formats::get_format(SubtitleType::Unknown).is_none());
}

/// Test that every pattern of every format compiles
#[test]
fn test_formats_patternsShouldCompile() {
    for format in formats::formats() {
        assert!(formats::compile(format.detection).is_ok(), "{}", format.name);
        for header in format.headers {
            assert!(formats::compile(header).is_ok(), "{} header {}", format.name, header);
        }
    }
}

/// Test the format listing helpers
#[test]
fn test_available_types_shouldDescribeFormats() {
    assert_eq!(available_types().len(), SubtitleType::ALL.len());

    let sorted = available_types_sorted();
    let names: Vec<&str> = sorted.iter().map(|t| t.subtitle_type.as_str()).collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);

    let subrip = sorted.iter().find(|t| t.subtitle_type == SubtitleType::SubRip).unwrap();
    assert_eq!(subrip.preferred_extension(), "srt");
    assert_eq!(subrip.to_string(), "SubRip (*.srt)");
}

/// Test extension lookup with and without a leading dot
#[test]
fn test_is_subtitle_extension_shouldIgnoreDot() {
    assert!(is_subtitle_extension("srt"));
    assert!(is_subtitle_extension(".sub"));
    assert!(!is_subtitle_extension("mkv"));
}

/// Test that type names parse case-insensitively
#[test]
fn test_subtitle_type_from_str_shouldIgnoreCase() {
    assert_eq!("subrip".parse::<SubtitleType>().unwrap(), SubtitleType::SubRip);
    assert_eq!("MICRODVD".parse::<SubtitleType>().unwrap(), SubtitleType::MicroDVD);
    assert!("Unknown".parse::<SubtitleType>().is_err());
}
