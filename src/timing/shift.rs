use chrono::Duration;
use log::debug;

use crate::domain::Subtitles;

/// Moves subtitles by a constant time or frame delta
pub struct ShiftOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> ShiftOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Shifts every subtitle by a time delta
    pub fn shift_times(&mut self, delta: Duration) {
        let frame_rate = self.subtitles.frame_rate();
        for subtitle in self.subtitles.collection.iter_mut() {
            subtitle.shift_times(delta, frame_rate);
        }
    }

    /// Shifts subtitles `start..=end` by a time delta.
    ///
    /// Returns false, changing nothing, when the range is invalid.
    pub fn shift_times_range(&mut self, delta: Duration, start: usize, end: usize) -> bool {
        if !self.is_range_valid(start, end) {
            return false;
        }
        let frame_rate = self.subtitles.frame_rate();
        for index in start..=end {
            if let Some(subtitle) = self.subtitles.collection.get_mut(index) {
                subtitle.shift_times(delta, frame_rate);
            }
        }
        debug!("Shifted subtitles {}..={} by {} ms", start, end, delta.num_milliseconds());
        true
    }

    /// Shifts every subtitle by a frame delta
    pub fn shift_frames(&mut self, delta: i64) {
        let frame_rate = self.subtitles.frame_rate();
        for subtitle in self.subtitles.collection.iter_mut() {
            subtitle.shift_frames(delta, frame_rate);
        }
    }

    /// Shifts subtitles `start..=end` by a frame delta
    pub fn shift_frames_range(&mut self, delta: i64, start: usize, end: usize) -> bool {
        if !self.is_range_valid(start, end) {
            return false;
        }
        let frame_rate = self.subtitles.frame_rate();
        for index in start..=end {
            if let Some(subtitle) = self.subtitles.collection.get_mut(index) {
                subtitle.shift_frames(delta, frame_rate);
            }
        }
        debug!("Shifted subtitles {}..={} by {} frames", start, end, delta);
        true
    }

    fn is_range_valid(&self, start: usize, end: usize) -> bool {
        let count = self.subtitles.collection.len();
        count > 0 && start <= end && end < count
    }
}
