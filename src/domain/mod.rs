/*!
 * Subtitle domain model.
 *
 * Value types shared by the parser, the output builder and the operators:
 * - `Subtitle`, `SubtitleText`, `Style`, `Times`, `Frames`
 * - `SubtitleCollection` and the `Subtitles` document
 * - properties, headers, sync points and incomplete-text diagnostics
 */

pub mod collection;
pub mod constants;
pub mod enums;
pub mod file_properties;
pub mod headers;
pub mod incomplete;
pub mod properties;
pub mod style;
pub mod subtitle;
pub mod subtitle_text;
pub mod subtitles;
pub mod sync_points;
pub mod times;
pub mod type_info;

pub use collection::{default_gap, SubtitleCollection};
pub use enums::{NewlineType, SubtitleMode, SubtitleTextType, SubtitleType, TimingMode};
pub use file_properties::FileProperties;
pub use headers::Headers;
pub use incomplete::{IncompleteSubtitle, IncompleteSubtitles};
pub use properties::{ParsingProperties, SubtitleProperties};
pub use style::Style;
pub use subtitle::Subtitle;
pub use subtitle_text::SubtitleText;
pub use subtitles::Subtitles;
pub use sync_points::{SyncPoint, SyncPoints};
pub use times::{Frames, Times, Timing};
pub use type_info::{available_type, available_types, available_types_sorted, is_subtitle_extension, SubtitleTypeInfo};
