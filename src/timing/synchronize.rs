use chrono::Duration;
use log::debug;

use super::{sync_util, timing_util};
use crate::domain::{SyncPoint, SyncPoints, Subtitles, Timing};

/// Multi-point synchronization: every consecutive pair of sync points is
/// synchronized in turn.
pub struct SynchronizeOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> SynchronizeOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Synchronizes using the given points.
    ///
    /// With `sync_all`, points are added for the first and last subtitles
    /// when missing, projected from the nearest pair of real points, so the
    /// whole collection moves.
    pub fn sync(&mut self, sync_points: &SyncPoints, sync_all: bool) -> bool {
        let points = if sync_all {
            self.with_edge_points(sync_points)
        } else {
            sync_points.iter().copied().collect()
        };
        if !self.are_points_valid(&points) {
            return false;
        }

        let pairs = points.len() - 1;
        let mut synced = true;
        for (position, pair) in points.windows(2).enumerate() {
            let sync_last = position + 1 == pairs;
            synced &= sync_util::sync_points(self.subtitles, &pair[0], &pair[1], sync_last);
        }
        debug!("Synchronized with {} sync points", points.len());
        synced
    }

    fn are_points_valid(&self, points: &[SyncPoint]) -> bool {
        let count = self.subtitles.collection.len();
        let Some(last) = points.last() else {
            return false;
        };
        points.len() >= 2
            && last.subtitle_number < count
            && points.windows(2).all(|pair| {
                sync_util::are_sync_points_valid(count, &pair[0], &pair[1]) && self.starts_increase(&pair[0], &pair[1])
            })
    }

    // The subtitles of two points must currently start one after the other
    fn starts_increase(&self, start: &SyncPoint, end: &SyncPoint) -> bool {
        let collection = &self.subtitles.collection;
        match (collection.get(start.subtitle_number), collection.get(end.subtitle_number)) {
            (Some(first), Some(second)) => first.times().precise_start() < second.times().precise_start(),
            _ => false,
        }
    }

    fn with_edge_points(&self, sync_points: &SyncPoints) -> Vec<SyncPoint> {
        let real: Vec<SyncPoint> = sync_points.iter().copied().collect();
        let mut adapted = sync_points.clone();
        let count = self.subtitles.collection.len();
        let frame_rate = self.subtitles.frame_rate();

        if count > 0 && !adapted.contains(0) {
            if let Some(first) = self.subtitles.collection.get(0) {
                let current = first.times().precise_start();
                let correct = match real.as_slice() {
                    [a, b, ..] => project(a, b, current).max(Duration::zero()),
                    _ => current,
                };
                adapted.add(edge_point(0, current, correct, frame_rate));
            }
        }

        let last_number = count.saturating_sub(1);
        if count > 1 && !adapted.contains(last_number) {
            if let Some(last) = self.subtitles.collection.get(last_number) {
                let current = last.times().precise_start();
                // Only the first projection is clamped at zero
                let correct = match real.as_slice() {
                    [.., a, b] => project(a, b, current),
                    _ => current,
                };
                adapted.add(edge_point(last_number, current, correct, frame_rate));
            }
        }

        adapted.iter().copied().collect()
    }
}

fn edge_point(subtitle_number: usize, current: Duration, correct: Duration, frame_rate: f64) -> SyncPoint {
    SyncPoint::new(
        subtitle_number,
        Timing::from_time(current, frame_rate),
        Timing::from_time(correct, frame_rate),
    )
}

/// Projects a time with the linear correction defined by two sync points
fn project(a: &SyncPoint, b: &SyncPoint, time: Duration) -> Duration {
    let current_span = timing_util::duration_to_millis_f64(b.current.time - a.current.time);
    let correct_span = timing_util::duration_to_millis_f64(b.correct.time - a.correct.time);
    let factor = if current_span == 0.0 { 1.0 } else { correct_span / current_span };

    let offset = timing_util::duration_to_millis_f64(time - a.current.time);
    a.correct.time + timing_util::duration_from_millis_f64(offset * factor)
}
