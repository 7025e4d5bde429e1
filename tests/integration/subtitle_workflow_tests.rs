/*!
 * End-to-end tests: open a file, edit it, save it and open it again
 */

use anyhow::Result;
use chrono::Duration;
use std::fs;
use subcore::app_config::Config;
use subcore::domain::{FileProperties, NewlineType, SubtitleTextType, SubtitleType, TimingMode};
use subcore::encoding::TextEncoding;
use subcore::errors::SubtitleError;
use subcore::file_utils::FileManager;
use subcore::timing::ShiftOperator;
use subcore::{SubtitleFactory, SubtitleSaver};

use crate::common;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test that a SubRip file survives open, shift, save and reopen
#[test]
fn test_open_shift_save_withSubRip_shouldKeepContent() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;

    let factory = SubtitleFactory::default();
    let mut opened = factory.open(&input)?;
    assert_eq!(opened.file_properties.subtitle_type, SubtitleType::SubRip);
    assert_eq!(opened.file_properties.encoding, TextEncoding::Utf8);
    assert_eq!(opened.file_properties.newline_type, NewlineType::Unix);
    assert_eq!(opened.subtitles.collection.len(), 3);

    ShiftOperator::new(&mut opened.subtitles).shift_times(Duration::milliseconds(500));

    let output = FileProperties {
        path: dir.join("shifted.srt"),
        ..opened.file_properties.clone()
    };
    SubtitleSaver::new().save(&opened.subtitles, &output, SubtitleTextType::Text)?;

    let reopened = factory.open(&output.path)?;
    assert_eq!(
        common::times_ms(&reopened.subtitles),
        vec![(1500, 4500), (5500, 9500), (10_500, 14_500)]
    );
    assert_eq!(common::texts(&reopened.subtitles), common::texts(&opened.subtitles));
    assert!(reopened.subtitles.collection.get(2).unwrap().style.italic);
    Ok(())
}

/// Test that converting SubRip to MicroDVD keeps text, style and timing
#[test]
fn test_save_withOtherFormat_shouldConvert() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;

    let factory = SubtitleFactory::default();
    let opened = factory.open(&input)?;
    let output = FileProperties {
        path: FileManager::with_extension(&input, "sub"),
        subtitle_type: SubtitleType::MicroDVD,
        ..opened.file_properties.clone()
    };
    let saved = SubtitleSaver::new().save(&opened.subtitles, &output, SubtitleTextType::Text)?;
    assert_eq!(saved.timing_mode, TimingMode::Frames);

    let content = fs::read_to_string(&output.path)?;
    assert!(content.starts_with("{25}{100}This is a test subtitle.\n"));
    assert!(content.contains("It contains|multiple lines."));

    let reopened = factory.open(&output.path)?;
    assert_eq!(reopened.file_properties.subtitle_type, SubtitleType::MicroDVD);
    assert_eq!(common::times_ms(&reopened.subtitles), common::times_ms(&opened.subtitles));
    assert_eq!(common::texts(&reopened.subtitles), common::texts(&opened.subtitles));
    assert!(reopened.subtitles.collection.get(2).unwrap().style.italic);
    Ok(())
}

/// Test that Windows newlines and a single-byte encoding are kept on save
#[test]
fn test_save_shouldKeepEncodingAndNewlines() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin.sub");
    fs::write(&path, b"{25}{50}Caf\xE9\r\n{75}{100}Cr\xE8me\r\n")?;

    let opened = SubtitleFactory::default().open(&path)?;
    assert_eq!(opened.file_properties.encoding, TextEncoding::Windows1252);
    assert_eq!(opened.file_properties.newline_type, NewlineType::Windows);
    assert_eq!(common::texts(&opened.subtitles), vec!["Café", "Crème"]);

    SubtitleSaver::new().save(&opened.subtitles, &opened.file_properties, SubtitleTextType::Text)?;

    assert_eq!(fs::read(&path)?, b"{25}{50}Caf\xE9\r\n{75}{100}Cr\xE8me\r\n".to_vec());
    Ok(())
}

/// Test that a file over the size limit is rejected before parsing
#[test]
fn test_open_withOversizedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(&temp_dir.path().to_path_buf(), "big.srt")?;

    let factory = SubtitleFactory {
        max_file_size: Some(10),
        ..SubtitleFactory::default()
    };
    let result = factory.open(&input);
    assert!(matches!(result, Err(SubtitleError::FileTooLarge { max: 10, .. })));

    let unlimited = SubtitleFactory {
        max_file_size: None,
        ..SubtitleFactory::default()
    };
    assert!(unlimited.open(&input).is_ok());
    Ok(())
}

/// Test that a file in no known format is rejected
#[test]
fn test_open_withUnknownFormat_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "notes.txt", "Shopping list\nMilk\n")?;

    let result = SubtitleFactory::default().open(&input);
    assert!(matches!(result, Err(SubtitleError::UnknownSubtitleFormat)));
    Ok(())
}

/// Test that a known type skips detection
#[test]
fn test_open_withForcedType_shouldParseWithoutDetection() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "bare.srt",
        "00:00:01,000 --> 00:00:03,500\nHello world\n",
    )?;

    let factory = SubtitleFactory {
        subtitle_type: SubtitleType::SubRip,
        ..SubtitleFactory::default()
    };
    let opened = factory.open(&input)?;

    assert_eq!(common::times_ms(&opened.subtitles), vec![(1000, 3500)]);
    assert_eq!(common::texts(&opened.subtitles), vec!["Hello world"]);
    assert_eq!(opened.subtitles.collection.get(0).unwrap().frames().start(), 25);
    Ok(())
}

/// Test that a factory built from a config uses its reading options
#[test]
fn test_from_config_withForcedEncoding_shouldUseIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("movie.sub");
    fs::write(&input, b"{0}{25}Caf\xE9\n")?;

    let config = Config {
        encoding: Some("iso-8859-1".to_string()),
        input_frame_rate: 50.0,
        ..Config::default()
    };
    let factory = SubtitleFactory::from_config(&config)?;
    let opened = factory.open(&input)?;

    assert_eq!(opened.file_properties.encoding, TextEncoding::Iso8859_1);
    assert_eq!(common::texts(&opened.subtitles), vec!["Café"]);
    assert_eq!(opened.subtitles.frame_rate(), 50.0);
    assert_eq!(common::times_ms(&opened.subtitles), vec![(0, 500)]);
    Ok(())
}

/// Test that a plain text file gives one untimed subtitle per line
#[test]
fn test_open_plain_withCharacterNames_shouldReadLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "script.txt",
        "ANNA: Hello|there\r\nBOB: Hi\r\n",
    )?;

    let opened = SubtitleFactory::default().open_plain(&input, true, TimingMode::Times, "|")?;

    assert_eq!(opened.file_properties.subtitle_type, SubtitleType::Unknown);
    assert_eq!(opened.file_properties.newline_type, NewlineType::Windows);
    assert_eq!(common::texts(&opened.subtitles), vec!["Hello\nthere", "Hi"]);
    Ok(())
}

/// Test that an empty file opens as an empty document
#[test]
fn test_open_withEmptyFile_shouldGiveEmptyDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "empty.srt", "")?;

    let opened = SubtitleFactory::default().open(&input)?;

    assert!(opened.subtitles.collection.is_empty());
    assert_eq!(opened.file_properties.subtitle_type, SubtitleType::Unknown);
    Ok(())
}
