use regex::Regex;
use std::fmt;

/// Line-oriented text content of a subtitle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubtitleText {
    lines: Vec<String>,
}

impl SubtitleText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds text by splitting on `line_break`, see [`SubtitleText::set`]
    pub fn from_text(text: &str, line_break: &str, trim_lines: bool) -> Self {
        let mut subtitle_text = Self::new();
        subtitle_text.set(text, line_break, trim_lines);
        subtitle_text
    }

    /// Builds text from a `\n` separated string, without trimming
    pub fn from_plain(text: &str) -> Self {
        Self::from_text(text, "\n", false)
    }

    // @returns: Whether there is no line, or only one empty line
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || (self.lines.len() == 1 && self.lines[0].is_empty())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    // @returns: Line at index, empty when out of range
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }

    /// Joins all lines with `line_break`
    pub fn get(&self, line_break: &str) -> String {
        self.lines.join(line_break)
    }

    /// Joins all lines with `\n`
    pub fn get_plain(&self) -> String {
        self.get("\n")
    }

    /// Joins lines, substituting `replacement` for empty ones
    pub fn get_replace_empty_lines(&self, replacement: &str, line_break: &str) -> String {
        if self.is_empty() {
            return replacement.to_string();
        }
        self.lines
            .iter()
            .map(|line| if line.is_empty() { replacement } else { line.as_str() })
            .collect::<Vec<_>>()
            .join(line_break)
    }

    /// Joins the trimmed, non-empty lines with `line_break`
    pub fn get_trim_lines(&self, line_break: &str) -> String {
        self.lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(line_break)
    }

    /// Replaces the content by splitting `text` on `line_break`.
    ///
    /// When trimming, the whole text is trimmed first and any whitespace around
    /// a line break is swallowed with it, so runs of blank lines collapse.
    pub fn set(&mut self, text: &str, line_break: &str, trim_lines: bool) {
        self.lines = split_lines(text, line_break, trim_lines);
    }

    /// Appends the trimmed, non-empty lines given
    pub fn add<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.lines.extend(
            lines
                .iter()
                .map(|line| line.as_ref().trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
}

fn split_lines(text: &str, line_break: &str, trim_lines: bool) -> Vec<String> {
    if line_break.is_empty() {
        let text = if trim_lines { text.trim() } else { text };
        return vec![text.to_string()];
    }
    if !trim_lines {
        return text.split(line_break).map(str::to_string).collect();
    }

    let text = text.trim();
    let pattern = format!(r"\s*{}\s*", regex::escape(line_break));
    match Regex::new(&pattern) {
        Ok(separator) => separator.split(text).map(str::to_string).collect(),
        Err(_) => text
            .split(line_break)
            .map(|line| line.trim().to_string())
            .collect(),
    }
}

impl fmt::Display for SubtitleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, line) in self.lines.iter().enumerate() {
            writeln!(f, "\t{}. {}", number + 1, line)?;
        }
        Ok(())
    }
}
