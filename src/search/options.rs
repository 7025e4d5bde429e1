use regex::Regex;

use crate::domain::SubtitleTextType;

/// What to search for and where the search starts.
///
/// Indices are character positions within the text of one subtitle, its
/// lines joined with `line_break`.
#[derive(Debug, Clone)]
pub struct SubtitleSearchOptions {
    pub regex: Regex,

    // @field: Field the search starts in
    pub text_type: SubtitleTextType,
    pub line_break: String,
    pub start_subtitle: usize,
    pub start_index: usize,

    // @field: Continue from the other end of the collection
    pub wrap: bool,
    pub backwards: bool,
}

impl SubtitleSearchOptions {
    /// Options starting at the beginning of the text of subtitle 0, forward
    /// and without wrapping
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            text_type: SubtitleTextType::Text,
            line_break: "\n".to_string(),
            start_subtitle: 0,
            start_index: 0,
            wrap: false,
            backwards: false,
        }
    }

    pub fn starting_at(mut self, subtitle: usize, index: usize, text_type: SubtitleTextType) -> Self {
        self.start_subtitle = subtitle;
        self.start_index = index;
        self.text_type = text_type;
        self
    }

    pub fn with_line_break(mut self, line_break: &str) -> Self {
        self.line_break = line_break.to_string();
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_backwards(mut self, backwards: bool) -> Self {
        self.backwards = backwards;
        self
    }
}
