use log::debug;

use crate::domain::Subtitles;

/// Merges a range of subtitles into the first one of the range.
///
/// The other subtitles are left in place; removing them is up to the caller.
pub struct MergeOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> MergeOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Appends the lines of subtitles `first + 1..=last` to subtitle `first`
    /// and extends it to end with subtitle `last`.
    pub fn merge(&mut self, first: usize, last: usize) -> bool {
        if !self.is_operation_valid(first, last) {
            return false;
        }

        let mut text_lines = Vec::new();
        let mut translation_lines = Vec::new();
        for subtitle in self.subtitles.collection.iter().skip(first + 1).take(last - first) {
            text_lines.extend_from_slice(subtitle.text.lines());
            if let Some(translation) = subtitle.translation().filter(|_| subtitle.has_translation()) {
                translation_lines.extend_from_slice(translation.lines());
            }
        }
        let Some(end) = self.subtitles.collection.get(last).map(|s| s.times().precise_end()) else {
            return false;
        };

        let frame_rate = self.subtitles.frame_rate();
        let Some(merged) = self.subtitles.collection.get_mut(first) else {
            return false;
        };
        merged.text.add(&text_lines);
        if !translation_lines.is_empty() {
            merged.translation_mut().add(&translation_lines);
        }
        merged.set_end_time(end, frame_rate);

        debug!("Merged subtitles {}..={}", first, last);
        true
    }

    fn is_operation_valid(&self, first: usize, last: usize) -> bool {
        if first > last {
            return false;
        }
        match (self.subtitles.collection.get(first), self.subtitles.collection.get(last)) {
            (Some(first), Some(last)) => first.times().start() <= last.times().end(),
            _ => false,
        }
    }
}
