use std::fmt;

use crate::domain::SubtitleTextType;

/// Where a search matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtitleSearchResults {
    pub subtitle: usize,
    pub text_type: SubtitleTextType,

    // @field: Character index of the match in the joined text
    pub index: usize,

    // @field: Match length in characters
    pub length: usize,
}

impl SubtitleSearchResults {
    pub fn new(subtitle: usize, text_type: SubtitleTextType, index: usize, length: usize) -> Self {
        Self {
            subtitle,
            text_type,
            index,
            length,
        }
    }
}

impl fmt::Display for SubtitleSearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subtitle {} ({}) at {}, length {}",
            self.subtitle + 1,
            self.text_type,
            self.index,
            self.length
        )
    }
}

/// Content of a subtitle before a replace-all changed it.
///
/// A field is None when no replacement happened in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleReplaceResult {
    pub subtitle: usize,
    pub old_text: Option<String>,
    pub old_translation: Option<String>,
}
