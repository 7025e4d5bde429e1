use std::fmt;

use super::collection::SubtitleCollection;
use super::enums::SubtitleTextType;
use super::properties::SubtitleProperties;
use super::subtitle_text::SubtitleText;

/// A subtitle document: the collection together with its properties.
///
/// Operators borrow this mutably for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subtitles {
    pub collection: SubtitleCollection,
    pub properties: SubtitleProperties,
}

impl Subtitles {
    pub fn new(collection: SubtitleCollection, properties: SubtitleProperties) -> Self {
        Self {
            collection,
            properties,
        }
    }

    // @returns: Frame rate the subtitles are currently expressed in
    pub fn frame_rate(&self) -> f64 {
        self.properties.current_frame_rate()
    }

    pub fn update_frames_from_times(&mut self, frame_rate: f64) {
        self.collection.update_frames_from_times(frame_rate);
    }

    pub fn update_times_from_frames(&mut self, frame_rate: f64) {
        self.collection.update_times_from_frames(frame_rate);
    }

    /// Text or translation of a subtitle, None when the subtitle or the
    /// translation does not exist
    pub fn subtitle_text(&self, index: usize, text_type: SubtitleTextType) -> Option<&SubtitleText> {
        let subtitle = self.collection.get(index)?;
        match text_type {
            SubtitleTextType::Text => Some(&subtitle.text),
            SubtitleTextType::Translation => subtitle.translation(),
        }
    }

    // @returns: Whether any subtitle has a non-empty translation
    pub fn has_translations(&self) -> bool {
        self.collection.iter().any(|s| s.has_translation())
    }
}

impl fmt::Display for Subtitles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n-------------------------------------------\n{}",
            self.collection, self.properties
        )
    }
}
