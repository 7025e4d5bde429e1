/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use subcore::file_utils::FileManager;

use crate::common;

/// Test file and directory existence checks
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let file_path = common::create_test_file(&dir_path, "test.srt", "content")?;

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(&dir_path));
    assert!(FileManager::dir_exists(&dir_path));
    assert!(!FileManager::file_exists(dir_path.join("missing.srt")));
    Ok(())
}

/// Test that writing creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&file_path, "hello")?;

    assert_eq!(fs::read_to_string(&file_path)?, "hello");
    assert_eq!(FileManager::file_size(&file_path)?, 5);
    assert_eq!(FileManager::read_bytes(&file_path)?, b"hello");
    Ok(())
}

/// Test that only files with subtitle extensions are found, sorted
#[test]
fn test_find_subtitle_files_shouldFilterAndSort() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let nested = dir_path.join("season1");
    FileManager::ensure_dir(&nested)?;

    common::create_test_file(&dir_path, "b.srt", "")?;
    common::create_test_file(&dir_path, "a.SUB", "")?;
    common::create_test_file(&dir_path, "movie.mkv", "")?;
    common::create_test_file(&nested, "c.ass", "")?;

    let files = FileManager::find_subtitle_files(&dir_path)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(&dir_path).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.SUB", "b.srt", "season1/c.ass"]);
    Ok(())
}

/// Test that a missing directory is an error
#[test]
fn test_find_subtitle_files_withMissingDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(FileManager::find_subtitle_files(temp_dir.path().join("nope")).is_err());
    Ok(())
}

/// Test extension replacement with and without a leading dot
#[test]
fn test_with_extension_shouldReplaceExtension() {
    assert_eq!(FileManager::with_extension("dir/movie.srt", "sub").to_string_lossy(), "dir/movie.sub");
    assert_eq!(FileManager::with_extension("movie.srt", ".ssa").to_string_lossy(), "movie.ssa");
}
