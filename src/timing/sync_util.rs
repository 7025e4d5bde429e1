/*!
 * Two-point synchronization shared by the adjust and synchronize operators.
 *
 * A range of subtitles is first shifted so the start subtitle begins at its
 * correct time, then scaled around that time so the end subtitle begins at
 * its correct time. With `sync_last` off, the end subtitle is left out of
 * the range and only serves as the second anchor.
 */

use chrono::Duration;
use log::debug;

use crate::domain::{SyncPoint, Subtitles};
use super::timing_util;

// @returns: Whether two indices can anchor a synchronization
pub fn are_sync_indices_valid(subtitle_count: usize, start_index: usize, end_index: usize) -> bool {
    subtitle_count >= 2
        && start_index < end_index
        && start_index < subtitle_count - 1
        && end_index < subtitle_count
}

/// Both the time and the frame of two points must move forward
pub fn are_sync_points_valid(subtitle_count: usize, start: &SyncPoint, end: &SyncPoint) -> bool {
    are_sync_indices_valid(subtitle_count, start.subtitle_number, end.subtitle_number)
        && start.correct.time < end.correct.time
        && start.correct.frame < end.correct.frame
}

/// Synchronizes the subtitles between two sync points using their correct times
pub fn sync_points(subtitles: &mut Subtitles, start: &SyncPoint, end: &SyncPoint, sync_last: bool) -> bool {
    sync_times(
        subtitles,
        start.subtitle_number,
        start.correct.time,
        end.subtitle_number,
        end.correct.time,
        sync_last,
    )
}

pub fn sync_times(
    subtitles: &mut Subtitles,
    start_index: usize,
    start_time: Duration,
    end_index: usize,
    end_time: Duration,
    sync_last: bool,
) -> bool {
    if !are_sync_indices_valid(subtitles.collection.len(), start_index, end_index) || start_time >= end_time {
        return false;
    }
    let (Some(start_subtitle), Some(end_subtitle)) =
        (subtitles.collection.get(start_index), subtitles.collection.get(end_index))
    else {
        return false;
    };

    let shift = start_time - start_subtitle.times().precise_start();
    let end_current = end_subtitle.times().precise_start() + shift;
    let span = timing_util::duration_to_millis_f64(end_current - start_time);
    if span == 0.0 {
        return false;
    }
    let factor = timing_util::duration_to_millis_f64(end_time - start_time) / span;

    let last_index = if sync_last { end_index } else { end_index - 1 };
    let frame_rate = subtitles.frame_rate();
    for index in start_index..=last_index {
        if let Some(subtitle) = subtitles.collection.get_mut(index) {
            subtitle.shift_times(shift, frame_rate);
            subtitle.scale_times(factor, start_time, frame_rate);
        }
    }

    debug!(
        "Synchronized subtitles {}..={} with shift {} ms and factor {}",
        start_index,
        last_index,
        shift.num_milliseconds(),
        factor
    );
    true
}

pub fn sync_frames(
    subtitles: &mut Subtitles,
    start_index: usize,
    start_frame: i64,
    end_index: usize,
    end_frame: i64,
    sync_last: bool,
) -> bool {
    if !are_sync_indices_valid(subtitles.collection.len(), start_index, end_index) || start_frame >= end_frame {
        return false;
    }
    let (Some(start_subtitle), Some(end_subtitle)) =
        (subtitles.collection.get(start_index), subtitles.collection.get(end_index))
    else {
        return false;
    };

    let start_frame = start_frame as f64;
    let shift = start_frame - start_subtitle.frames().precise_start();
    let span = end_subtitle.frames().precise_start() + shift - start_frame;
    if span == 0.0 {
        return false;
    }
    let factor = (end_frame as f64 - start_frame) / span;

    let last_index = if sync_last { end_index } else { end_index - 1 };
    let frame_rate = subtitles.frame_rate();
    for index in start_index..=last_index {
        if let Some(subtitle) = subtitles.collection.get_mut(index) {
            subtitle.frames_mut().shift(shift);
            subtitle.scale_frames(factor, start_frame, frame_rate);
        }
    }
    true
}
