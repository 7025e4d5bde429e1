use std::path::{Path, PathBuf};

use super::enums::{NewlineType, SubtitleType, TimingMode};
use crate::encoding::TextEncoding;

/// What is known about a subtitle file on disk after opening or saving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProperties {
    pub path: PathBuf,
    pub encoding: TextEncoding,
    pub subtitle_type: SubtitleType,
    pub timing_mode: TimingMode,
    pub newline_type: NewlineType,
}

impl FileProperties {
    pub fn new<P: AsRef<Path>>(
        path: P,
        encoding: TextEncoding,
        subtitle_type: SubtitleType,
        timing_mode: TimingMode,
        newline_type: NewlineType,
    ) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            encoding,
            subtitle_type,
            timing_mode,
            newline_type,
        }
    }

    // @returns: File name, empty when the path has none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl Default for FileProperties {
    fn default() -> Self {
        Self::new(
            PathBuf::new(),
            TextEncoding::Utf8,
            SubtitleType::Unknown,
            TimingMode::Times,
            NewlineType::Unknown,
        )
    }
}
