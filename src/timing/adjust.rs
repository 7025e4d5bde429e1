use chrono::Duration;

use super::sync_util;
use crate::domain::Subtitles;

/// Two-point linear correction of subtitle timings.
///
/// After a successful adjust the start subtitle begins at the start time, the
/// end subtitle at the end time, and every subtitle between them is
/// interpolated.
pub struct AdjustOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> AdjustOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Adjusts the whole collection from its first to its last subtitle
    pub fn adjust_times(&mut self, start_time: Duration, end_time: Duration) -> bool {
        let Some(last) = self.subtitles.collection.len().checked_sub(1) else {
            return false;
        };
        self.adjust_times_range(0, start_time, last, end_time)
    }

    pub fn adjust_times_range(&mut self, start_index: usize, start_time: Duration, end_index: usize, end_time: Duration) -> bool {
        sync_util::sync_times(self.subtitles, start_index, start_time, end_index, end_time, true)
    }

    pub fn adjust_frames(&mut self, start_frame: i64, end_frame: i64) -> bool {
        let Some(last) = self.subtitles.collection.len().checked_sub(1) else {
            return false;
        };
        self.adjust_frames_range(0, start_frame, last, end_frame)
    }

    pub fn adjust_frames_range(&mut self, start_index: usize, start_frame: i64, end_index: usize, end_frame: i64) -> bool {
        sync_util::sync_frames(self.subtitles, start_index, start_frame, end_index, end_frame, true)
    }
}
