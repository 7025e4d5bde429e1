/*!
 * Subtitle format descriptors, the built-in registry and format detection.
 *
 * A format is a static, declarative description: a detection pattern, the
 * pattern that reads one subtitle, the template that writes one, and a few
 * optional extras (headers, comments, body markers, style markup). The parser
 * and the output builder interpret these descriptors; formats never run code
 * of their own except through the hooks stored in the descriptor.
 */

pub mod catalog;
pub mod headers;
pub mod style;

use log::debug;
use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::domain::{
    FileProperties, ParsingProperties, Subtitle, SubtitleMode, SubtitleProperties, SubtitleType,
    TimingMode,
};
use crate::errors::SubtitleError;

pub use catalog::{GlobalInput, BUILT_IN_FORMATS};
pub use style::StyleRule;

/// Number of characters examined when detecting a format
pub const DETECTION_LENGTH: usize = 2000;

/// Pattern used to read one subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleIn {
    Fixed(&'static str),
    /// Formats supporting both timing modes read each mode differently
    ByTimingMode {
        times: &'static str,
        frames: &'static str,
    },
}

/// Template used to write one subtitle
#[derive(Debug, Clone, Copy)]
pub enum SubtitleOut {
    Fixed(&'static str),
    ByTimingMode {
        times: &'static str,
        frames: &'static str,
    },
    /// Built from the current frame rate
    ByFrameRate(fn(f64) -> String),
}

/// Multi-line subtitle text that ends where `boundary` next matches, or at
/// the end of the input.
///
/// Used where the text can only be delimited by what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock {
    // @field: Pattern marking the start of the next subtitle
    pub boundary: &'static str,

    // @field: Whether the text must start on the line after the timing
    pub leading_newline: bool,
}

/// Declarative description of one on-disk subtitle format
#[derive(Debug, Clone, Copy)]
pub struct SubtitleFormat {
    pub name: &'static str,
    pub subtitle_type: SubtitleType,
    pub mode: SubtitleMode,
    pub extensions: &'static [&'static str],

    // @field: Separator between text lines inside one subtitle
    pub line_break: &'static str,

    // @field: Pattern proving a text is in this format
    pub detection: &'static str,

    pub subtitle_in: SubtitleIn,
    pub text_block: Option<TextBlock>,
    pub subtitle_out: SubtitleOut,

    // @field: One pattern per header field; empty when the format has no headers
    pub headers: &'static [&'static str],

    pub comments: Option<&'static str>,
    pub body_begin_out: &'static str,
    pub body_end_in: &'static str,
    pub body_end_out: &'static str,
    pub style: StyleRule,

    // @field: Properties read from the whole input text
    pub global_input: GlobalInput,
}

impl SubtitleFormat {
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn has_body_begin(&self) -> bool {
        !self.body_begin_out.is_empty()
    }

    pub fn has_body_end(&self) -> bool {
        !self.body_end_out.is_empty()
    }

    // @returns: Fixed timing mode; only meaningful when the mode is not Both
    pub fn mode_as_timing_mode(&self) -> TimingMode {
        self.mode.as_timing_mode()
    }

    pub fn preferred_extension(&self) -> &'static str {
        self.extensions.first().copied().unwrap_or("")
    }

    // @returns: Subtitle pattern for the given timing mode
    pub fn subtitle_in_pattern(&self, timing_mode: TimingMode) -> &'static str {
        match self.subtitle_in {
            SubtitleIn::Fixed(pattern) => pattern,
            SubtitleIn::ByTimingMode { times, frames } => match timing_mode {
                TimingMode::Times => times,
                TimingMode::Frames => frames,
            },
        }
    }

    /// Template used to write each subtitle.
    ///
    /// Formats supporting both timing modes follow the file's timing mode.
    pub fn subtitle_out_template(&self, properties: &SubtitleProperties, file_timing_mode: TimingMode) -> String {
        match self.subtitle_out {
            SubtitleOut::Fixed(template) => template.to_string(),
            SubtitleOut::ByTimingMode { times, frames } => match file_timing_mode {
                TimingMode::Times => times.to_string(),
                TimingMode::Frames => frames.to_string(),
            },
            SubtitleOut::ByFrameRate(build) => build(properties.current_frame_rate()),
        }
    }

    pub fn style_to_string(&self, style: &crate::domain::Style) -> String {
        self.style.style_to_string(style)
    }

    pub fn end_of_style_to_string(&self, style: &crate::domain::Style) -> String {
        self.style.end_of_style_to_string(style)
    }

    /// Format-specific cleanup applied to every parsed subtitle
    pub fn subtitle_input_post_process(&self, subtitle: &mut Subtitle) {
        self.style.post_process(subtitle, self.line_break);
    }

    /// Reads properties that depend on the whole input text
    pub fn global_input_properties(&self, text: &str, properties: &mut ParsingProperties) {
        self.global_input.apply(text, properties);
    }

    /// Stores one matched header; see [`headers::parse_header`]
    pub fn parse_header(&self, captures: &regex::Captures, properties: &mut ParsingProperties) -> bool {
        headers::parse_header(self.subtitle_type, captures, properties)
    }

    pub fn headers_to_string(&self, properties: &SubtitleProperties, file_properties: &FileProperties) -> String {
        headers::headers_to_string(self.subtitle_type, properties, file_properties)
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subtitle_type)
    }
}

/// Compiles a format pattern the way every format pattern is matched:
/// case-insensitively.
pub fn compile(pattern: &str) -> Result<Regex, SubtitleError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

// @returns: Every built-in format, in registration order
pub fn formats() -> &'static [SubtitleFormat] {
    &BUILT_IN_FORMATS
}

// @returns: Built-in format of the given type, None for Unknown
pub fn get_format(subtitle_type: SubtitleType) -> Option<&'static SubtitleFormat> {
    BUILT_IN_FORMATS
        .iter()
        .find(|format| format.subtitle_type == subtitle_type)
}

/// Detects the format of a subtitle text.
///
/// Only the first [`DETECTION_LENGTH`] characters are examined. Formats are
/// tried in registration order and the first whose detection pattern matches
/// wins.
pub fn detect(text: &str) -> Result<&'static SubtitleFormat, SubtitleError> {
    let sample = detection_sample(text);
    for format in formats() {
        let regex = compile(format.detection)?;
        if regex.is_match(sample) {
            debug!("Detected subtitle format {}", format.name);
            return Ok(format);
        }
    }

    debug!("No subtitle format matched the text");
    Err(SubtitleError::UnknownSubtitleFormat)
}

fn detection_sample(text: &str) -> &str {
    match text.char_indices().nth(DETECTION_LENGTH) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Parses an integer field. Anything unparsable counts as absent.
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parses a decimal field, accepting a comma as decimal separator
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
