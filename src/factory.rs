/*!
 * Opening subtitle files.
 *
 * The factory reads raw bytes, picks an encoding, detects the format and
 * hands the text to the parser. It then completes the timing view the file
 * did not carry, so every subtitle has both times and frames.
 */

use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::app_config::Config;
use crate::domain::{
    FileProperties, IncompleteSubtitles, NewlineType, SubtitleCollection, SubtitleProperties,
    SubtitleType, Subtitles, TimingMode,
};
use crate::encoding::TextEncoding;
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::formats::{self, SubtitleFormat};
use crate::io::{PlainTextParser, SubtitleParser};
use crate::domain::constants::DEFAULT_FRAME_RATE;

/// An opened document and what was learned about its file
#[derive(Debug, Clone)]
pub struct OpenedSubtitles {
    pub subtitles: Subtitles,
    pub file_properties: FileProperties,

    // @field: Text spans that could not be parsed, when requested
    pub incomplete: IncompleteSubtitles,
}

/// Decoded file text, ready to parse
struct DecodedText {
    text: String,
    encoding: TextEncoding,
    newline_type: NewlineType,
}

/// Opens subtitle files with a fixed set of reading options
#[derive(Debug, Clone)]
pub struct SubtitleFactory {
    // @field: Forced encoding; None detects it
    pub encoding: Option<TextEncoding>,

    // @field: Used when nothing could be detected
    pub fallback_encoding: TextEncoding,

    // @field: Known format; Unknown detects it
    pub subtitle_type: SubtitleType,

    // @field: Frame rate of frame-based files
    pub input_frame_rate: f64,

    // @field: Size limit in bytes; None disables the check
    pub max_file_size: Option<u64>,

    pub include_incomplete_subtitles: bool,

    // @field: Timing mode of formats supporting both when the file does not say
    pub default_timing_mode: TimingMode,
}

impl Default for SubtitleFactory {
    fn default() -> Self {
        Self {
            encoding: None,
            fallback_encoding: TextEncoding::Windows1252,
            subtitle_type: SubtitleType::Unknown,
            input_frame_rate: DEFAULT_FRAME_RATE,
            max_file_size: Some(1_000_000),
            include_incomplete_subtitles: false,
            default_timing_mode: TimingMode::Times,
        }
    }
}

impl SubtitleFactory {
    /// Factory using the reading options of a configuration
    pub fn from_config(config: &Config) -> Result<Self, SubtitleError> {
        let encoding = config
            .encoding
            .as_deref()
            .map(TextEncoding::from_label)
            .transpose()?;

        Ok(Self {
            encoding,
            fallback_encoding: TextEncoding::from_label(&config.fallback_encoding)?,
            subtitle_type: SubtitleType::Unknown,
            input_frame_rate: config.input_frame_rate,
            max_file_size: config.max_file_size,
            include_incomplete_subtitles: config.include_incomplete_subtitles,
            default_timing_mode: TimingMode::Times,
        })
    }

    pub fn with_default_timing_mode(mut self, timing_mode: TimingMode) -> Self {
        self.default_timing_mode = timing_mode;
        self
    }

    // @returns: Empty document with default properties
    pub fn new_subtitles(&self) -> Subtitles {
        Subtitles::new(SubtitleCollection::new(), SubtitleProperties::default())
    }

    /// Opens a subtitle file.
    ///
    /// Fails before reading when the file exceeds the size limit.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<OpenedSubtitles, SubtitleError> {
        let path = path.as_ref();
        self.check_file_size(path)?;
        let bytes = fs::read(path)?;
        self.open_bytes(path, &bytes)
    }

    /// Opens subtitle content already read from `path`.
    ///
    /// Each candidate encoding is tried in turn; when all fail, the error of
    /// the most probable one is returned.
    pub fn open_bytes<P: AsRef<Path>>(&self, path: P, bytes: &[u8]) -> Result<OpenedSubtitles, SubtitleError> {
        let path = path.as_ref();
        let candidates = self.candidate_encodings(bytes);

        let mut first_error = None;
        for encoding in candidates {
            let decoded = decode(bytes, encoding);
            if is_text_empty(&decoded.text) {
                return Ok(self.empty_subtitles(path));
            }
            match self.subtitle_format(&decoded.text) {
                Ok(format) => return self.parsed_subtitles(path, decoded, format),
                Err(error) => {
                    warn!("Could not read {:?} as {}: {}", path, encoding, error);
                    first_error.get_or_insert(error);
                }
            }
        }

        Err(first_error.unwrap_or(SubtitleError::UnknownSubtitleFormat))
    }

    /// Opens a plain text file with one subtitle per line.
    ///
    /// With character names, a `Name:` prefix is dropped from every line.
    /// `line_separator` splits one line into several subtitle lines.
    pub fn open_plain<P: AsRef<Path>>(
        &self,
        path: P,
        with_character_names: bool,
        timing_mode: TimingMode,
        line_separator: &str,
    ) -> Result<OpenedSubtitles, SubtitleError> {
        let path = path.as_ref();
        self.check_file_size(path)?;
        let bytes = fs::read(path)?;

        let encoding = self
            .candidate_encodings(&bytes)
            .into_iter()
            .next()
            .unwrap_or(self.fallback_encoding);
        let decoded = decode(&bytes, encoding);
        if is_text_empty(&decoded.text) {
            return Ok(self.empty_subtitles(path));
        }

        let parser = PlainTextParser::new(with_character_names, line_separator);
        let (collection, parsing) = parser.parse(&decoded.text, timing_mode);
        let parsed_timing_mode = parsing.timing_mode;
        let mut subtitles = Subtitles::new(collection, SubtitleProperties::from_parsing(parsing));
        complete_timings(&mut subtitles, parsed_timing_mode);

        let file_properties = FileProperties::new(
            path,
            decoded.encoding,
            SubtitleType::Unknown,
            parsed_timing_mode,
            decoded.newline_type,
        );
        info!("Opened plain text {:?} with encoding {}", path, decoded.encoding);

        Ok(OpenedSubtitles {
            subtitles,
            file_properties,
            incomplete: IncompleteSubtitles::new(),
        })
    }

    fn check_file_size(&self, path: &Path) -> Result<(), SubtitleError> {
        if let Some(max) = self.max_file_size {
            let size = fs::metadata(path)?.len();
            if size > max {
                return Err(SubtitleError::FileTooLarge { size, max });
            }
        }
        Ok(())
    }

    // @returns: Encodings to try, most probable first
    fn candidate_encodings(&self, bytes: &[u8]) -> Vec<TextEncoding> {
        if let Some(encoding) = self.encoding {
            return vec![encoding];
        }

        let candidates = TextEncoding::detect_candidates(bytes);
        if candidates.is_empty() {
            info!(
                "No encoding was detected, using the fallback encoding {}",
                self.fallback_encoding
            );
            vec![self.fallback_encoding]
        } else {
            candidates
        }
    }

    fn subtitle_format(&self, text: &str) -> Result<&'static SubtitleFormat, SubtitleError> {
        if self.subtitle_type == SubtitleType::Unknown {
            debug!("Trying to detect the subtitle format");
            formats::detect(text)
        } else {
            debug!("Trying subtitle format {}", self.subtitle_type);
            formats::get_format(self.subtitle_type).ok_or(SubtitleError::UnknownSubtitleFormat)
        }
    }

    fn parsed_subtitles(
        &self,
        path: &Path,
        decoded: DecodedText,
        format: &SubtitleFormat,
    ) -> Result<OpenedSubtitles, SubtitleError> {
        let parser = SubtitleParser::new(self.include_incomplete_subtitles)
            .with_default_timing_mode(self.default_timing_mode);
        let parsed = parser.parse(&decoded.text, format, self.input_frame_rate)?;

        let timing_mode = parsed.properties.timing_mode;
        let properties = SubtitleProperties::from_parsing(parsed.properties);
        let mut subtitles = Subtitles::new(parsed.collection, properties);
        complete_timings(&mut subtitles, timing_mode);

        let file_properties = FileProperties::new(
            path,
            decoded.encoding,
            format.subtitle_type,
            timing_mode,
            decoded.newline_type,
        );
        info!(
            "Opened {:?} with encoding {}, format {}, timing mode {:?} and frame rate {} (input frame rate was {})",
            path,
            decoded.encoding,
            format.name,
            timing_mode,
            subtitles.frame_rate(),
            self.input_frame_rate
        );

        Ok(OpenedSubtitles {
            subtitles,
            file_properties,
            incomplete: parsed.incomplete,
        })
    }

    fn empty_subtitles(&self, path: &Path) -> OpenedSubtitles {
        info!("Opened {:?}, which holds no text", path);
        OpenedSubtitles {
            subtitles: self.new_subtitles(),
            file_properties: FileProperties::new(
                path,
                TextEncoding::Utf8,
                SubtitleType::Unknown,
                TimingMode::Times,
                NewlineType::Unknown,
            ),
            incomplete: IncompleteSubtitles::new(),
        }
    }
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> DecodedText {
    debug!("Trying encoding {}", encoding);
    let raw = encoding.decode(bytes);
    DecodedText {
        newline_type: FileManager::detect_newline_type(&raw),
        text: FileManager::normalize_newlines(&raw),
        encoding,
    }
}

fn is_text_empty(text: &str) -> bool {
    text.trim().is_empty()
}

/// Fills in the timing view the file did not carry, at the original rate
fn complete_timings(subtitles: &mut Subtitles, timing_mode: TimingMode) {
    let frame_rate = subtitles.properties.original_frame_rate();
    match timing_mode {
        TimingMode::Times => subtitles.update_frames_from_times(frame_rate),
        TimingMode::Frames => subtitles.update_times_from_frames(frame_rate),
    }
}
