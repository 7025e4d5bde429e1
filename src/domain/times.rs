use chrono::Duration;
use std::fmt;

use crate::timing::timing_util;

// @module: Time and frame views of a subtitle's timing

/// Start and end of a subtitle as wall-clock durations.
///
/// The precise values keep nanosecond resolution so repeated shifts and
/// scales do not accumulate rounding error. The public accessors round to
/// the millisecond, which is the resolution every format writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Times {
    start: Duration,
    end: Duration,
}

impl Default for Times {
    fn default() -> Self {
        Self {
            start: Duration::zero(),
            end: Duration::zero(),
        }
    }
}

impl Times {
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    // @returns: Start rounded to the millisecond
    pub fn start(&self) -> Duration {
        timing_util::round_to_millis(self.start)
    }

    // @returns: End rounded to the millisecond
    pub fn end(&self) -> Duration {
        timing_util::round_to_millis(self.end)
    }

    pub fn duration(&self) -> Duration {
        self.end() - self.start()
    }

    pub fn precise_start(&self) -> Duration {
        self.start
    }

    pub fn precise_end(&self) -> Duration {
        self.end
    }

    pub fn precise_duration(&self) -> Duration {
        self.end - self.start
    }

    pub(crate) fn set_precise_start(&mut self, start: Duration) {
        self.start = start;
    }

    pub(crate) fn set_precise_end(&mut self, end: Duration) {
        self.end = end;
    }

    pub(crate) fn set_precise_duration(&mut self, duration: Duration) {
        self.end = self.start + duration;
    }

    pub(crate) fn shift(&mut self, delta: Duration) {
        self.start = self.start + delta;
        self.end = self.end + delta;
    }

    /// Scales both ends around `base` by `factor`
    pub(crate) fn scale(&mut self, factor: f64, base: Duration) {
        let base_ms = timing_util::duration_to_millis_f64(base);
        let scale = |value: Duration| {
            let ms = timing_util::duration_to_millis_f64(value);
            timing_util::duration_from_millis_f64(base_ms + (ms - base_ms) * factor)
        };
        self.start = scale(self.start);
        self.end = scale(self.end);
    }

    // @returns: Whether the time lies within [start, end]
    pub fn contains(&self, time: Duration) -> bool {
        time >= self.start() && time <= self.end()
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}",
            timing_util::format_duration(self.start()),
            timing_util::format_duration(self.end())
        )
    }
}

/// Start and end of a subtitle as frame numbers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frames {
    start: f64,
    end: f64,
}

impl Frames {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    // @returns: Start rounded to the nearest frame
    pub fn start(&self) -> i64 {
        self.start.round() as i64
    }

    // @returns: End rounded to the nearest frame
    pub fn end(&self) -> i64 {
        self.end.round() as i64
    }

    pub fn duration(&self) -> i64 {
        self.end() - self.start()
    }

    pub fn precise_start(&self) -> f64 {
        self.start
    }

    pub fn precise_end(&self) -> f64 {
        self.end
    }

    pub fn precise_duration(&self) -> f64 {
        self.end - self.start
    }

    pub(crate) fn set_precise_start(&mut self, start: f64) {
        self.start = start;
    }

    pub(crate) fn set_precise_end(&mut self, end: f64) {
        self.end = end;
    }

    pub(crate) fn set_precise_duration(&mut self, duration: f64) {
        self.end = self.start + duration;
    }

    pub(crate) fn shift(&mut self, delta: f64) {
        self.start += delta;
        self.end += delta;
    }

    pub(crate) fn scale(&mut self, factor: f64, base: f64) {
        self.start = base + (self.start - base) * factor;
        self.end = base + (self.end - base) * factor;
    }
}

impl fmt::Display for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start(), self.end())
    }
}

/// A single instant expressed both as a frame and as a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub frame: i64,
    pub time: Duration,
}

impl Timing {
    pub fn new(frame: i64, time: Duration) -> Self {
        Self { frame, time }
    }

    /// Builds a timing from a time, deriving the frame at the given rate
    pub fn from_time(time: Duration, frame_rate: f64) -> Self {
        let frame = timing_util::time_to_frames(time, frame_rate).round() as i64;
        Self { frame, time }
    }
}

impl PartialOrd for Timing {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timing {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time.cmp(&other.time)
    }
}
