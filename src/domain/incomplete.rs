use std::fmt;

/// Text that could not be read as a subtitle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteSubtitle {
    // @field: Number of subtitles parsed before this text; 0 means before the first
    pub subtitles_before: usize,

    // @field: Raw unparsed text
    pub text: String,
}

impl IncompleteSubtitle {
    pub fn new(subtitles_before: usize, text: impl Into<String>) -> Self {
        Self {
            subtitles_before,
            text: text.into(),
        }
    }
}

impl fmt::Display for IncompleteSubtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* After {}: {}", self.subtitles_before, self.text)
    }
}

/// Diagnostic list of unparsed text spans, in file order
pub type IncompleteSubtitles = Vec<IncompleteSubtitle>;
