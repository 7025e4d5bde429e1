use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::{is_subtitle_extension, NewlineType};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @returns: File size in bytes
    pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to read metadata: {:?}", path.as_ref()))?;
        Ok(metadata.len())
    }

    /// Read a whole file as raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Newline convention of a text, judged by the first line ending
    pub fn detect_newline_type(text: &str) -> NewlineType {
        match text.find(&['\r', '\n'][..]) {
            Some(index) if text[index..].starts_with("\r\n") => NewlineType::Windows,
            Some(index) if text[index..].starts_with('\r') => NewlineType::Macintosh,
            Some(_) => NewlineType::Unix,
            None => NewlineType::Unknown,
        }
    }

    // @returns: Text with every line ending turned into `\n`
    pub fn normalize_newlines(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    // @returns: Text with `\n` turned into the convention's sequence
    pub fn convert_newlines(text: &str, newline_type: NewlineType) -> String {
        match newline_type.sequence() {
            Some(sequence) => text.replace('\n', sequence),
            None => text.to_string(),
        }
    }

    /// Find files with a subtitle extension in a directory, sorted by path
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if is_subtitle_extension(&ext.to_string_lossy().to_lowercase()) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    // @generates: Sibling path with another extension
    pub fn with_extension<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        path.as_ref().with_extension(extension)
    }
}
