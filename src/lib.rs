/*!
 * # subcore - subtitle format and timing core
 *
 * A Rust library for reading, writing and retiming subtitle files.
 *
 * ## Features
 *
 * - Detection and parsing of 22 subtitle formats:
 *   - SubRip, MicroDVD, Sub Station Alpha and Advanced Sub Station Alpha
 *   - MPlayer, MPSub, SubViewer, LRC and a dozen more
 * - Output through per-format templates
 * - Timing operators: shift, adjust, synchronize, merge, split and frame rate changes
 * - Regex search and replace over texts and translations
 * - Encoding and newline detection when opening files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `domain`: Subtitle values, collections and properties
 * - `formats`: Format descriptors, the built-in registry and detection
 * - `io`: Parser, plain text parser and output builder
 * - `timing`: Timing conversions and operators
 * - `search`: Find, replace-all and time lookups
 * - `factory` / `saver`: Opening and saving files
 * - `translations`: Importing and clearing translations
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `encoding`: Text encodings
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod domain;
pub mod encoding;
pub mod errors;
pub mod factory;
pub mod file_utils;
pub mod formats;
pub mod io;
pub mod saver;
pub mod search;
pub mod timing;
pub mod translations;

// Re-export main types for easier usage
pub use app_config::Config;
pub use domain::{
    FileProperties, Subtitle, SubtitleCollection, SubtitleProperties, SubtitleTextType,
    SubtitleType, Subtitles, TimingMode,
};
pub use errors::{AppError, SubtitleError};
pub use factory::{OpenedSubtitles, SubtitleFactory};
pub use saver::SubtitleSaver;
pub use search::{SearchOperator, SubtitleSearchOptions, SubtitleSearchResults};
