use std::cmp::Ordering;
use std::fmt;

use super::{SubtitleMode, SubtitleType};
use crate::formats::{self, SubtitleFormat};

/// Public summary of a built-in subtitle format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTypeInfo {
    pub name: &'static str,
    pub subtitle_type: SubtitleType,
    pub mode: SubtitleMode,
    pub extensions: &'static [&'static str],
}

impl SubtitleTypeInfo {
    pub fn from_format(format: &SubtitleFormat) -> Self {
        Self {
            name: format.name,
            subtitle_type: format.subtitle_type,
            mode: format.mode,
            extensions: format.extensions,
        }
    }

    // @returns: First listed extension, without the dot
    pub fn preferred_extension(&self) -> &'static str {
        self.extensions.first().copied().unwrap_or("")
    }

    /// Exact comparison against the listed extensions, without the dot
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|candidate| *candidate == extension)
    }

    // Sorts by type name
    fn compare(&self, other: &Self) -> Ordering {
        self.subtitle_type.as_str().cmp(other.subtitle_type.as_str())
    }
}

impl fmt::Display for SubtitleTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extensions: Vec<String> = self.extensions.iter().map(|e| format!("*.{}", e)).collect();
        write!(f, "{} ({})", self.name, extensions.join(", "))
    }
}

// @returns: Info for every built-in format, in registration order
pub fn available_types() -> Vec<SubtitleTypeInfo> {
    formats::formats().iter().map(SubtitleTypeInfo::from_format).collect()
}

// @returns: Info for every built-in format, sorted by type name
pub fn available_types_sorted() -> Vec<SubtitleTypeInfo> {
    let mut types = available_types();
    types.sort_by(SubtitleTypeInfo::compare);
    types
}

pub fn available_type(subtitle_type: SubtitleType) -> Option<SubtitleTypeInfo> {
    formats::get_format(subtitle_type).map(SubtitleTypeInfo::from_format)
}

/// Whether any built-in format uses an extension. A leading dot is ignored.
pub fn is_subtitle_extension(extension: &str) -> bool {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    formats::formats()
        .iter()
        .any(|format| format.extensions.contains(&extension))
}
