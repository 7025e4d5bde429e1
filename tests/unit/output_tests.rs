/*!
 * Tests for the template based output builder
 */

use subcore::domain::{FileProperties, NewlineType, Style, SubtitleText, SubtitleTextType, SubtitleType, TimingMode};
use subcore::encoding::TextEncoding;
use subcore::formats;
use subcore::io::SubtitleOutput;
use subcore::SubtitleFactory;

use crate::common;

fn file_properties(subtitle_type: SubtitleType, newline_type: NewlineType) -> FileProperties {
    FileProperties::new("out", TextEncoding::Utf8, subtitle_type, TimingMode::Times, newline_type)
}

/// Test that SubRip output numbers subtitles and writes full times
#[test]
fn test_build_withSubRip_shouldWriteNumberedEntries() {
    let subtitles = common::subtitles(&[("Hello\nworld", 1000, 3500), ("Bye", 3_723_045, 3_724_000)]);
    let format = formats::get_format(SubtitleType::SubRip).unwrap();

    let text = SubtitleOutput::new(format, SubtitleTextType::Text).build(
        &subtitles.collection,
        &subtitles.properties,
        &file_properties(SubtitleType::SubRip, NewlineType::Unix),
    );

    assert_eq!(
        text,
        "1\n00:00:01,000 --> 00:00:03,500\nHello\nworld\n\n2\n01:02:03,045 --> 01:02:04,000\nBye\n\n"
    );
}

/// Test that MicroDVD output writes frames, the line break and style
#[test]
fn test_build_withMicroDvd_shouldWriteFramesAndStyle() {
    let mut subtitles = common::subtitles(&[("Hello\nworld", 1000, 3600)]);
    subtitles.collection.get_mut(0).unwrap().style = Style::new(false, true, false);
    let format = formats::get_format(SubtitleType::MicroDVD).unwrap();

    let text = SubtitleOutput::new(format, SubtitleTextType::Text).build(
        &subtitles.collection,
        &subtitles.properties,
        &file_properties(SubtitleType::MicroDVD, NewlineType::Unix),
    );

    assert_eq!(text, "{25}{90}{Y:i}Hello|world\n");
}

/// Test that Windows newlines are written when the file uses them
#[test]
fn test_build_withWindowsNewlines_shouldConvertLineEnds() {
    let subtitles = common::subtitles(&[("One\nTwo", 0, 1000)]);
    let format = formats::get_format(SubtitleType::SubRip).unwrap();

    let text = SubtitleOutput::new(format, SubtitleTextType::Text).build(
        &subtitles.collection,
        &subtitles.properties,
        &file_properties(SubtitleType::SubRip, NewlineType::Windows),
    );

    assert!(text.contains("One\r\nTwo\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

/// Test that building the translation writes translation lines
#[test]
fn test_build_withTranslationTextType_shouldWriteTranslation() {
    let mut subtitles = common::subtitles(&[("Hello", 1000, 2000), ("Untranslated", 3000, 4000)]);
    subtitles
        .collection
        .get_mut(0)
        .unwrap()
        .set_translation(SubtitleText::from_plain("Bonjour"));
    let format = formats::get_format(SubtitleType::MicroDVD).unwrap();

    let text = SubtitleOutput::new(format, SubtitleTextType::Translation).build(
        &subtitles.collection,
        &subtitles.properties,
        &file_properties(SubtitleType::MicroDVD, NewlineType::Unix),
    );

    assert_eq!(text, "{25}{50}Bonjour\n{75}{100}\n");
}

/// Test that every format reads back what it writes and detects itself
#[test]
fn test_build_withEveryFormat_shouldParseAndDetectBack() {
    let entries = [("First line", 1000, 2000), ("Second line", 3000, 5000)];
    let subtitles = common::subtitles(&entries);
    let factory = SubtitleFactory::default();

    for format in formats::formats() {
        let text = SubtitleOutput::new(format, SubtitleTextType::Text).build(
            &subtitles.collection,
            &subtitles.properties,
            &file_properties(format.subtitle_type, NewlineType::Unix),
        );

        let opened = factory
            .open_bytes("out", text.as_bytes())
            .unwrap_or_else(|error| panic!("{} output could not be read back: {}", format.name, error));

        assert_eq!(opened.file_properties.subtitle_type, format.subtitle_type, "{}", format.name);
        assert_eq!(common::times_ms(&opened.subtitles), vec![(1000, 2000), (3000, 5000)], "{}", format.name);
        assert_eq!(
            common::texts(&opened.subtitles),
            vec!["First line".to_string(), "Second line".to_string()],
            "{}",
            format.name
        );
    }
}

/// Test that centiseconds rounding up to a full second carry into the seconds
#[test]
fn test_build_withSsaCentisecondsNearNextSecond_shouldReadBackRounded() {
    let subtitles = common::subtitles(&[("Hello", 1996, 3994)]);
    let format = formats::get_format(SubtitleType::SubStationAlpha).unwrap();

    let text = SubtitleOutput::new(format, SubtitleTextType::Text).build(
        &subtitles.collection,
        &subtitles.properties,
        &file_properties(SubtitleType::SubStationAlpha, NewlineType::Unix),
    );
    assert!(text.contains("0:00:02.00,0:00:03.99"), "{}", text);

    let opened = SubtitleFactory::default().open_bytes("out.ssa", text.as_bytes()).unwrap();
    assert_eq!(common::times_ms(&opened.subtitles), vec![(2000, 3990)]);
}
