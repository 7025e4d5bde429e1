use chrono::Duration;

use super::timing_util;
use crate::domain::{Subtitle, SubtitleText, Subtitles};

/// Splits a multi-line subtitle into one subtitle per line
pub struct SplitOperator<'a> {
    subtitles: &'a Subtitles,

    // @field: Gap left between consecutive pieces
    time_between_subtitles: Duration,
}

impl<'a> SplitOperator<'a> {
    pub fn new(subtitles: &'a Subtitles, time_between_subtitles: Duration) -> Self {
        Self {
            subtitles,
            time_between_subtitles,
        }
    }

    /// Builds the pieces of a subtitle, leaving the subtitle itself untouched.
    ///
    /// The duration is shared evenly between the non-empty lines, with the
    /// gap between pieces. The gap is dropped when a piece would be shorter
    /// than it. Translation lines go one per piece and extra ones end up in
    /// the last piece. Returns None for fewer than two non-empty lines.
    pub fn split(&self, subtitle: &Subtitle) -> Option<Vec<Subtitle>> {
        let lines = non_empty_lines(&subtitle.text);
        let count = lines.len();
        if count < 2 || subtitle.times().precise_end() < subtitle.times().precise_start() {
            return None;
        }

        let total = timing_util::duration_to_millis_f64(subtitle.times().precise_duration());
        let mut gap = timing_util::duration_to_millis_f64(self.time_between_subtitles).max(0.0);
        let mut piece = (total - (count - 1) as f64 * gap) / count as f64;
        if piece < gap {
            gap = 0.0;
            piece = total / count as f64;
        }

        let translation_lines = subtitle
            .translation()
            .map(non_empty_lines)
            .unwrap_or_default();

        let frame_rate = self.subtitles.frame_rate();
        let start = subtitle.times().precise_start();
        let pieces = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let piece_start = start + timing_util::duration_from_millis_f64(index as f64 * (piece + gap));
                let piece_end = if index + 1 == count {
                    subtitle.times().precise_end()
                } else {
                    piece_start + timing_util::duration_from_millis_f64(piece)
                };

                let mut new_subtitle = Subtitle::with_times(piece_start, piece_end, frame_rate);
                new_subtitle.text = SubtitleText::from_plain(line);
                new_subtitle.style = subtitle.style;

                let translation = if index + 1 == count {
                    translation_lines.get(index..).unwrap_or_default()
                } else {
                    translation_lines.get(index..=index).unwrap_or_default()
                };
                if !translation.is_empty() {
                    let mut text = SubtitleText::new();
                    text.add(translation);
                    new_subtitle.set_translation(text);
                }
                new_subtitle
            })
            .collect();
        Some(pieces)
    }
}

fn non_empty_lines(text: &SubtitleText) -> Vec<String> {
    text.lines()
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
