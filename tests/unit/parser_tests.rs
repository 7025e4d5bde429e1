/*!
 * Tests for the subtitle parser and the plain text parser
 */

use anyhow::Result;
use chrono::Duration;
use subcore::domain::{SubtitleType, TimingMode};
use subcore::formats;
use subcore::io::{PlainTextParser, SubtitleParser};

use crate::common;

fn parse(text: &str, subtitle_type: SubtitleType, include_incomplete: bool) -> Result<subcore::io::ParsedSubtitles> {
    let format = formats::get_format(subtitle_type).unwrap();
    Ok(SubtitleParser::new(include_incomplete).parse(text, format, 25.0)?)
}

/// Test that a bare SubRip entry gives its times and text
#[test]
fn test_parse_withSubRipEntry_shouldReadTimesAndText() -> Result<()> {
    let parsed = parse("00:00:01,000 --> 00:00:03,500\nHello world", SubtitleType::SubRip, false)?;

    assert_eq!(parsed.collection.len(), 1);
    let subtitle = parsed.collection.get(0).unwrap();
    assert_eq!(subtitle.times().start(), Duration::milliseconds(1000));
    assert_eq!(subtitle.times().end(), Duration::milliseconds(3500));
    assert_eq!(subtitle.text.get("\n"), "Hello world");
    assert_eq!(parsed.properties.timing_mode, TimingMode::Times);
    Ok(())
}

/// Test that multi-line entries and style markup are read
#[test]
fn test_parse_withSubRipSample_shouldReadLinesAndStyle() -> Result<()> {
    let parsed = parse(common::SUBRIP_SAMPLE, SubtitleType::SubRip, false)?;

    assert_eq!(parsed.collection.len(), 3);
    let second = parsed.collection.get(1).unwrap();
    assert_eq!(second.text.lines(), ["It contains", "multiple lines."]);

    let third = parsed.collection.get(2).unwrap();
    assert_eq!(third.text.get("\n"), "For testing purposes.");
    assert!(third.style.italic);
    assert!(!third.style.bold);
    Ok(())
}

/// Test that MicroDVD frames are read along with line breaks and style
#[test]
fn test_parse_withMicroDvd_shouldReadFrames() -> Result<()> {
    let parsed = parse(common::MICRODVD_SAMPLE, SubtitleType::MicroDVD, false)?;

    assert_eq!(parsed.properties.timing_mode, TimingMode::Frames);
    assert_eq!(parsed.collection.len(), 2);

    let first = parsed.collection.get(0).unwrap();
    assert_eq!(first.frames().start(), 25);
    assert_eq!(first.frames().end(), 100);
    assert_eq!(first.text.lines(), ["First line", "Second line"]);

    let second = parsed.collection.get(1).unwrap();
    assert!(second.style.bold);
    assert_eq!(second.text.get("\n"), "Bold one");
    Ok(())
}

/// Test that an MPSub frame header selects frame timing
#[test]
fn test_parse_withMpsubFrameHeader_shouldUseFrames() -> Result<()> {
    let text = "TITLE=Movie\nFORMAT=25\n\n10 40\nFirst\n\n5 20\nSecond\n";
    let parsed = parse(text, SubtitleType::MPSub, false)?;

    assert_eq!(parsed.properties.timing_mode, TimingMode::Frames);
    assert_eq!(parsed.collection.len(), 2);
    let second = parsed.collection.get(1).unwrap();
    assert_eq!(second.frames().start(), 55);
    assert_eq!(second.frames().end(), 75);
    Ok(())
}

/// Test that empty text gives no subtitles and no error
#[test]
fn test_parse_withEmptyText_shouldReturnEmptyCollection() -> Result<()> {
    let parsed = parse("", SubtitleType::SubRip, true)?;
    assert!(parsed.collection.is_empty());
    assert!(parsed.incomplete.is_empty());
    Ok(())
}

/// Test that unparsed text is only collected when requested
#[test]
fn test_parse_withTrailingGarbage_shouldReportIncompleteOnRequest() -> Result<()> {
    let text = "{25}{50}Hello\nthis line is not a subtitle\n";

    let parsed = parse(text, SubtitleType::MicroDVD, true)?;
    assert_eq!(parsed.collection.len(), 1);
    assert_eq!(parsed.incomplete.len(), 1);
    let incomplete = parsed.incomplete.iter().next().unwrap();
    assert_eq!(incomplete.subtitles_before, 1);
    assert!(incomplete.text.contains("not a subtitle"));

    let parsed = parse(text, SubtitleType::MicroDVD, false)?;
    assert!(parsed.incomplete.is_empty());
    Ok(())
}

/// Test that without character names a line is kept whole
#[test]
fn test_plain_text_parse_withoutCharacterNames_shouldKeepColons() {
    let parser = PlainTextParser::default();
    let (collection, properties) = parser.parse("Time: 10:00\n   \nSecond line\n", TimingMode::Frames);

    assert_eq!(properties.timing_mode, TimingMode::Frames);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(0).unwrap().text.get("\n"), "Time: 10:00");
    assert_eq!(collection.get(1).unwrap().text.get("\n"), "Second line");
}

/// Test that a time field too large to represent is read as absent
#[test]
fn test_parse_withHugeTimeField_shouldNotPanic() -> Result<()> {
    let text = "1\n99999999999999999:00:01,000 --> 00:00:04,000\nHello\n\n2\n00:00:05,000 --> 99999999999999:00:06,000\nBye\n";
    let parsed = parse(text, SubtitleType::SubRip, false)?;

    assert_eq!(parsed.collection.len(), 2);
    let first = parsed.collection.get(0).unwrap();
    assert_eq!(first.times().start(), Duration::milliseconds(1000));
    assert_eq!(first.times().end(), Duration::milliseconds(4000));
    assert_eq!(parsed.collection.get(1).unwrap().times().start(), Duration::milliseconds(5000));
    Ok(())
}

/// Test that an MPSub file without FORMAT line is read with the chosen timing mode
#[test]
fn test_parse_withMpsubDefaultFrames_shouldReadFrames() -> Result<()> {
    let format = formats::get_format(SubtitleType::MPSub).unwrap();
    let parsed = SubtitleParser::new(false)
        .with_default_timing_mode(TimingMode::Frames)
        .parse("TITLE=Movie\n\n25 25\nHello\n", format, 25.0)?;

    assert_eq!(parsed.properties.timing_mode, TimingMode::Frames);
    let subtitle = parsed.collection.get(0).unwrap();
    assert_eq!(subtitle.times().start(), Duration::milliseconds(1000));
    assert_eq!(subtitle.times().end(), Duration::milliseconds(2000));
    Ok(())
}
