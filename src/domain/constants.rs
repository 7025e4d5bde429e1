/*!
 * Subtitling constants.
 *
 * Durations are expressed in seconds unless stated otherwise.
 */

/// Average duration of a subtitle, used for synthesized subtitles
pub const AVERAGE_SUBTITLE_DURATION: f64 = 1.5;

/// Minimum time between two consecutive subtitles
pub const MIN_TIME_BETWEEN_SUBTITLES: f64 = 0.25;

/// Frame rate assumed when nothing else is known
pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// PAL frame rate
pub const PAL_FRAME_RATE: f64 = 25.0;

/// NTSC frame rate
pub const NTSC_FRAME_RATE: f64 = 29.97;
