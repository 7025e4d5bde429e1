/*!
 * Reading and writing subtitle text.
 *
 * - `parser`: format-driven subtitle parser
 * - `plain_text`: one subtitle per line of plain text
 * - `output`: template-driven output builder
 */

pub mod output;
pub mod parser;
pub mod plain_text;

pub use output::SubtitleOutput;
pub use parser::{ParsedSubtitles, SubtitleParser};
pub use plain_text::PlainTextParser;
