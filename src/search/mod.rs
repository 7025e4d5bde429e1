/*!
 * Text search over a subtitle collection.
 *
 * Finds the next or previous regex match across texts and translations,
 * replaces every match, and looks subtitles up by time.
 */

pub mod operator;
pub mod options;
pub mod results;

pub use operator::SearchOperator;
pub use options::SubtitleSearchOptions;
pub use results::{SubtitleReplaceResult, SubtitleSearchResults};
