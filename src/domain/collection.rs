use chrono::Duration;
use std::fmt;

use super::constants;
use super::subtitle::Subtitle;
use crate::timing::timing_util;

// @module: Ordered, index-addressable list of subtitles

/// Gap used by the `add_new_*` helpers when none is given
pub fn default_gap() -> Duration {
    timing_util::duration_from_seconds_f64(constants::MIN_TIME_BETWEEN_SUBTITLES)
}

fn average_duration() -> Duration {
    timing_util::duration_from_seconds_f64(constants::AVERAGE_SUBTITLE_DURATION)
}

/// Ordered sequence of subtitles. Indices run from 0 to `len() - 1` and
/// shift down by one after a removal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtitleCollection {
    subtitles: Vec<Subtitle>,
}

impl SubtitleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subtitles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Subtitle> {
        self.subtitles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Subtitle> {
        self.subtitles.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subtitle> {
        self.subtitles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Subtitle> {
        self.subtitles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Subtitle] {
        &self.subtitles
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.subtitles.len()
    }

    /// Appends a subtitle at the end
    pub fn add(&mut self, subtitle: Subtitle) {
        self.subtitles.push(subtitle);
    }

    /// Inserts a subtitle at `index`; returns false when `index > len()`
    pub fn insert(&mut self, index: usize, subtitle: Subtitle) -> bool {
        if index > self.subtitles.len() {
            return false;
        }
        self.subtitles.insert(index, subtitle);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Subtitle> {
        if self.contains(index) {
            Some(self.subtitles.remove(index))
        } else {
            None
        }
    }

    /// Removes `count` subtitles starting at `start`. Nothing is removed when
    /// the range does not fit in the collection.
    pub fn remove_range(&mut self, start: usize, count: usize) -> bool {
        match start.checked_add(count) {
            Some(end) if end <= self.subtitles.len() => {
                self.subtitles.drain(start..end);
                true
            }
            _ => false,
        }
    }

    /// Inserts a synthesized subtitle ending `gap` before the one at `index`.
    ///
    /// Both ends are clamped at zero.
    pub fn add_new_before(&mut self, index: usize, gap: Duration, frame_rate: f64) -> bool {
        let Some(existing) = self.get(index) else {
            return false;
        };

        let end = (existing.times().start() - gap).max(Duration::zero());
        let start = (end - average_duration()).max(Duration::zero());

        self.subtitles
            .insert(index, Subtitle::with_times(start, end, frame_rate));
        true
    }

    /// Inserts a synthesized subtitle starting `gap` after the one at `index`
    pub fn add_new_after(&mut self, index: usize, gap: Duration, frame_rate: f64) -> bool {
        let Some(existing) = self.get(index) else {
            return false;
        };

        let start = existing.times().end() + gap;
        let end = start + average_duration();

        self.subtitles
            .insert(index + 1, Subtitle::with_times(start, end, frame_rate));
        true
    }

    /// Inserts a synthesized subtitle at time zero
    pub fn add_new_at(&mut self, index: usize, frame_rate: f64) -> bool {
        self.add_new_at_time(index, Duration::zero(), frame_rate)
    }

    /// Inserts a synthesized subtitle starting at `start`
    pub fn add_new_at_time(&mut self, index: usize, start: Duration, frame_rate: f64) -> bool {
        if index > self.subtitles.len() {
            return false;
        }
        let end = start + average_duration();
        self.subtitles
            .insert(index, Subtitle::with_times(start, end, frame_rate));
        true
    }

    pub(crate) fn update_frames_from_times(&mut self, frame_rate: f64) {
        for subtitle in &mut self.subtitles {
            subtitle.update_frames_from_times(frame_rate);
        }
    }

    pub(crate) fn update_times_from_frames(&mut self, frame_rate: f64) {
        for subtitle in &mut self.subtitles {
            subtitle.update_times_from_frames(frame_rate);
        }
    }
}

impl From<Vec<Subtitle>> for SubtitleCollection {
    fn from(subtitles: Vec<Subtitle>) -> Self {
        Self { subtitles }
    }
}

impl<'a> IntoIterator for &'a SubtitleCollection {
    type Item = &'a Subtitle;
    type IntoIter = std::slice::Iter<'a, Subtitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.subtitles.iter()
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t* SUBTITLE LIST *")?;
        for subtitle in &self.subtitles {
            write!(f, "{}", subtitle)?;
        }
        Ok(())
    }
}
