/*!
 * Conversions between frame counts and durations.
 *
 * Every frame/time conversion in the crate goes through these functions so
 * that rounding happens in exactly one place. Durations keep nanosecond
 * precision; frame counts are kept as `f64` until they are displayed.
 */

use chrono::Duration;

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Builds a duration from fractional milliseconds, rounded to the nanosecond
pub fn duration_from_millis_f64(milliseconds: f64) -> Duration {
    if !milliseconds.is_finite() {
        return Duration::zero();
    }
    Duration::nanoseconds((milliseconds * NANOS_PER_MILLI).round() as i64)
}

/// Builds a duration from fractional seconds
pub fn duration_from_seconds_f64(seconds: f64) -> Duration {
    duration_from_millis_f64(seconds * 1000.0)
}

/// Total milliseconds of a duration, keeping the sub-millisecond part
pub fn duration_to_millis_f64(duration: Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_MILLI,
        None => duration.num_milliseconds() as f64,
    }
}

/// Total seconds of a duration, keeping the fractional part
pub fn duration_to_seconds_f64(duration: Duration) -> f64 {
    duration_to_millis_f64(duration) / 1000.0
}

/// Rounds a duration to the nearest millisecond
pub fn round_to_millis(duration: Duration) -> Duration {
    Duration::milliseconds(duration_to_millis_f64(duration).round() as i64)
}

// @returns: Time at which the given frame is shown
pub fn frames_to_time(frames: f64, frame_rate: f64) -> Duration {
    duration_from_seconds_f64(frames / frame_rate)
}

// @returns: Fractional frame shown at the given time
pub fn time_to_frames(time: Duration, frame_rate: f64) -> f64 {
    duration_to_seconds_f64(time) * frame_rate
}

// @returns: Fractional frames for a time given in seconds
pub fn seconds_to_frames(seconds: f64, frame_rate: f64) -> f64 {
    seconds * frame_rate
}

// @returns: Fractional frames for a time given in milliseconds
pub fn time_milliseconds_to_frames(milliseconds: f64, frame_rate: f64) -> f64 {
    (milliseconds / 1000.0) * frame_rate
}

/// Formats a duration as `HH:MM:SS.mmm`, used for display and logging
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration_to_millis_f64(duration).round() as i64;
    let sign = if total_ms < 0 { "-" } else { "" };
    let total_ms = total_ms.abs();

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    format!("{}{:02}:{:02}:{:02}.{:03}", sign, hours, minutes, seconds, millis)
}

/// Parses `[-]HH:MM:SS[.mmm]`, `MM:SS[.mmm]` or plain seconds into a duration
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let mut seconds = 0.0;
    for part in text.split(':') {
        let value: f64 = part.trim().replace(',', ".").parse().ok()?;
        seconds = seconds * 60.0 + value;
    }

    let duration = duration_from_seconds_f64(seconds);
    Some(if negative { -duration } else { duration })
}
