use crate::domain::{ParsingProperties, Style, Subtitle, SubtitleCollection, SubtitleText, TimingMode};

/// Reads plain text with one subtitle per line
#[derive(Debug, Clone)]
pub struct PlainTextParser {
    // @field: Whether lines start with a "Name:" prefix to drop
    with_character_names: bool,

    // @field: Separator splitting one line into subtitle lines
    line_separator: String,
}

impl PlainTextParser {
    pub fn new(with_character_names: bool, line_separator: impl Into<String>) -> Self {
        Self {
            with_character_names,
            line_separator: line_separator.into(),
        }
    }

    /// Creates one untimed subtitle per non-empty line
    pub fn parse(&self, text: &str, timing_mode: TimingMode) -> (SubtitleCollection, ParsingProperties) {
        let properties = ParsingProperties {
            timing_mode,
            ..Default::default()
        };

        let mut collection = SubtitleCollection::new();
        for line in text.split('\n') {
            let subtitle_text = self.parse_line(line);
            if !subtitle_text.is_empty() {
                collection.add(Subtitle::new(subtitle_text, Style::default()));
            }
        }
        (collection, properties)
    }

    fn parse_line(&self, line: &str) -> SubtitleText {
        let text = if self.with_character_names {
            // Keeps the text after the first colon
            let mut pieces = line.split(':');
            let first = pieces.next().unwrap_or("");
            pieces.next().unwrap_or(first)
        } else {
            line
        };

        if text.is_empty() {
            SubtitleText::new()
        } else {
            SubtitleText::from_text(text, &self.line_separator, true)
        }
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new(false, "\n")
    }
}
