/*!
 * Common test utilities for the subcore test suite
 */

use anyhow::Result;
use chrono::Duration;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use subcore::domain::{Subtitle, SubtitleCollection, SubtitleProperties, SubtitleText, Subtitles};

/// A three-entry SubRip file
pub const SUBRIP_SAMPLE: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains
multiple lines.

3
00:00:10,000 --> 00:00:14,000
<i>For testing purposes.</i>
";

/// A two-entry MicroDVD file, frames at 25 fps
pub const MICRODVD_SAMPLE: &str = "{25}{100}First line|Second line\n{125}{200}{Y:b}Bold one\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the SubRip sample file
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SUBRIP_SAMPLE)
}

/// Builds a subtitle with `\n` separated text and times in milliseconds
pub fn subtitle(text: &str, start_ms: i64, end_ms: i64) -> Subtitle {
    let mut subtitle = Subtitle::with_times(
        Duration::milliseconds(start_ms),
        Duration::milliseconds(end_ms),
        25.0,
    );
    subtitle.text = SubtitleText::from_text(text, "\n", false);
    subtitle
}

/// Builds a subtitle collection at 25 fps from (text, start, end) entries
pub fn subtitles(entries: &[(&str, i64, i64)]) -> Subtitles {
    let collection: Vec<Subtitle> = entries
        .iter()
        .map(|&(text, start, end)| subtitle(text, start, end))
        .collect();
    Subtitles::new(SubtitleCollection::from(collection), SubtitleProperties::default())
}

/// Start and end of every subtitle, in milliseconds
pub fn times_ms(subtitles: &Subtitles) -> Vec<(i64, i64)> {
    subtitles
        .collection
        .iter()
        .map(|s| (s.times().start().num_milliseconds(), s.times().end().num_milliseconds()))
        .collect()
}

/// Primary text of every subtitle, lines joined by `\n`
pub fn texts(subtitles: &Subtitles) -> Vec<String> {
    subtitles.collection.iter().map(|s| s.text.get("\n")).collect()
}
