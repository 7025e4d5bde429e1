use log::info;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::domain::{FileProperties, SubtitleMode, SubtitleTextType, Subtitles};
use crate::errors::SubtitleError;
use crate::formats;
use crate::io::SubtitleOutput;

/// Writes subtitles to disk in the format recorded in their file properties
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleSaver;

impl SubtitleSaver {
    pub fn new() -> Self {
        Self
    }

    /// Builds the file text, without writing it
    pub fn build(
        &self,
        subtitles: &Subtitles,
        file_properties: &FileProperties,
        text_type: SubtitleTextType,
    ) -> Result<String, SubtitleError> {
        let format = formats::get_format(file_properties.subtitle_type)
            .ok_or(SubtitleError::UnknownSubtitleFormat)?;
        let output = SubtitleOutput::new(format, text_type);
        Ok(output.build(&subtitles.collection, &subtitles.properties, file_properties))
    }

    /// Saves the text or the translation of the subtitles.
    ///
    /// The file is replaced atomically. Returns the file properties as they
    /// are after saving: formats with a fixed timing mode impose it.
    pub fn save(
        &self,
        subtitles: &Subtitles,
        file_properties: &FileProperties,
        text_type: SubtitleTextType,
    ) -> Result<FileProperties, SubtitleError> {
        let text = self.build(subtitles, file_properties, text_type)?;
        let bytes = file_properties.encoding.encode(&text);
        write_atomically(&file_properties.path, &bytes)?;

        let updated = updated_file_properties(file_properties)?;
        info!(
            "Saved {} {:?} with encoding {}, format {} and frame rate {}",
            text_type,
            updated.path,
            updated.encoding,
            updated.subtitle_type,
            subtitles.frame_rate()
        );
        Ok(updated)
    }
}

fn updated_file_properties(file_properties: &FileProperties) -> Result<FileProperties, SubtitleError> {
    let format = formats::get_format(file_properties.subtitle_type)
        .ok_or(SubtitleError::UnknownSubtitleFormat)?;
    let timing_mode = if format.mode == SubtitleMode::Both {
        file_properties.timing_mode
    } else {
        format.mode_as_timing_mode()
    };

    Ok(FileProperties {
        timing_mode,
        ..file_properties.clone()
    })
}

// Writes next to the target, then renames over it
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), SubtitleError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| SubtitleError::Io(e.error))?;
    Ok(())
}
