use std::fmt;

use super::constants::DEFAULT_FRAME_RATE;
use super::enums::TimingMode;
use super::headers::Headers;

/// Per-collection metadata: headers plus the input and output frame rates
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleProperties {
    // @field: Header fields read from, or written to, the file
    pub headers: Headers,
    original_frame_rate: f64,
    current_frame_rate: f64,
}

impl Default for SubtitleProperties {
    fn default() -> Self {
        Self {
            headers: Headers::default(),
            original_frame_rate: DEFAULT_FRAME_RATE,
            current_frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl SubtitleProperties {
    pub fn new(headers: Headers, original_frame_rate: f64, current_frame_rate: f64) -> Self {
        Self {
            headers,
            original_frame_rate,
            current_frame_rate,
        }
    }

    /// Builds properties from a parse; both rates start at the input rate
    pub fn from_parsing(parsing: ParsingProperties) -> Self {
        Self {
            headers: parsing.headers,
            original_frame_rate: parsing.input_frame_rate,
            current_frame_rate: parsing.input_frame_rate,
        }
    }

    // @returns: Frame rate the file was read with
    pub fn original_frame_rate(&self) -> f64 {
        self.original_frame_rate
    }

    // @returns: Frame rate used for output and frame display
    pub fn current_frame_rate(&self) -> f64 {
        self.current_frame_rate
    }

    pub(crate) fn set_original_frame_rate(&mut self, frame_rate: f64) {
        self.original_frame_rate = frame_rate;
    }

    pub(crate) fn set_current_frame_rate(&mut self, frame_rate: f64) {
        self.current_frame_rate = frame_rate;
    }
}

impl fmt::Display for SubtitleProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original FPS = {}, Current FPS = {}",
            self.original_frame_rate, self.current_frame_rate
        )
    }
}

/// Transient result of a parse, consumed to build [`SubtitleProperties`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingProperties {
    pub headers: Headers,
    pub timing_mode: TimingMode,
    pub input_frame_rate: f64,
}

impl ParsingProperties {
    pub fn new(input_frame_rate: f64) -> Self {
        Self {
            headers: Headers::default(),
            timing_mode: TimingMode::Times,
            input_frame_rate,
        }
    }
}

impl Default for ParsingProperties {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}
