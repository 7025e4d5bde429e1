use chrono::Duration;
use std::fmt;

use super::style::Style;
use super::subtitle_text::SubtitleText;
use super::times::{Frames, Times};
use crate::timing::timing_util;

// @module: A single caption unit

/// One subtitle: text, optional translation, style and timing.
///
/// Times and frames are two views of the same timing. The setters below take
/// the frame rate of the owning collection and keep the other view in sync.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subtitle {
    // @field: Primary text
    pub text: SubtitleText,

    // @field: Bold, italic and underline flags
    pub style: Style,

    translation: Option<SubtitleText>,
    times: Times,
    frames: Frames,
}

impl Subtitle {
    pub fn new(text: SubtitleText, style: Style) -> Self {
        Self {
            text,
            style,
            ..Default::default()
        }
    }

    /// Creates an empty subtitle spanning the given times
    pub fn with_times(start: Duration, end: Duration, frame_rate: f64) -> Self {
        let mut subtitle = Self::default();
        subtitle.times = Times::new(start, end);
        subtitle.update_frames_from_times(frame_rate);
        subtitle
    }

    /// Creates an empty subtitle spanning the given frames
    pub fn with_frames(start: i64, end: i64, frame_rate: f64) -> Self {
        let mut subtitle = Self::default();
        subtitle.frames = Frames::new(start as f64, end as f64);
        subtitle.update_times_from_frames(frame_rate);
        subtitle
    }

    pub fn times(&self) -> &Times {
        &self.times
    }

    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    pub(crate) fn times_mut(&mut self) -> &mut Times {
        &mut self.times
    }

    pub(crate) fn frames_mut(&mut self) -> &mut Frames {
        &mut self.frames
    }

    pub fn set_start_time(&mut self, start: Duration, frame_rate: f64) {
        self.times.set_precise_start(start);
        self.frames
            .set_precise_start(timing_util::time_to_frames(start, frame_rate));
    }

    pub fn set_end_time(&mut self, end: Duration, frame_rate: f64) {
        self.times.set_precise_end(end);
        self.frames
            .set_precise_end(timing_util::time_to_frames(end, frame_rate));
    }

    pub fn set_duration(&mut self, duration: Duration, frame_rate: f64) {
        let end = self.times.start() + duration;
        self.set_end_time(end, frame_rate);
    }

    pub fn set_start_frame(&mut self, start: i64, frame_rate: f64) {
        self.frames.set_precise_start(start as f64);
        self.times
            .set_precise_start(timing_util::frames_to_time(start as f64, frame_rate));
    }

    pub fn set_end_frame(&mut self, end: i64, frame_rate: f64) {
        self.frames.set_precise_end(end as f64);
        self.times
            .set_precise_end(timing_util::frames_to_time(end as f64, frame_rate));
    }

    /// Moves both ends by a time delta
    pub fn shift_times(&mut self, delta: Duration, frame_rate: f64) {
        self.times.shift(delta);
        self.update_frames_from_times(frame_rate);
    }

    /// Moves both ends by a frame delta
    pub fn shift_frames(&mut self, delta: i64, frame_rate: f64) {
        self.frames.shift(delta as f64);
        self.update_times_from_frames(frame_rate);
    }

    pub fn scale_times(&mut self, factor: f64, base: Duration, frame_rate: f64) {
        self.times.scale(factor, base);
        self.update_frames_from_times(frame_rate);
    }

    pub fn scale_frames(&mut self, factor: f64, base: f64, frame_rate: f64) {
        self.frames.scale(factor, base);
        self.update_times_from_frames(frame_rate);
    }

    /// Recomputes frames from the precise times
    pub fn update_frames_from_times(&mut self, frame_rate: f64) {
        self.frames.set_precise_start(timing_util::time_to_frames(
            self.times.precise_start(),
            frame_rate,
        ));
        self.frames.set_precise_end(timing_util::time_to_frames(
            self.times.precise_end(),
            frame_rate,
        ));
    }

    /// Recomputes times from the precise frames
    pub fn update_times_from_frames(&mut self, frame_rate: f64) {
        self.times.set_precise_start(timing_util::frames_to_time(
            self.frames.precise_start(),
            frame_rate,
        ));
        self.times.set_precise_end(timing_util::frames_to_time(
            self.frames.precise_end(),
            frame_rate,
        ));
    }

    pub fn translation(&self) -> Option<&SubtitleText> {
        self.translation.as_ref()
    }

    // @returns: Translation, created empty when missing
    pub fn translation_mut(&mut self) -> &mut SubtitleText {
        self.translation.get_or_insert_with(SubtitleText::new)
    }

    pub fn set_translation(&mut self, translation: SubtitleText) {
        self.translation = Some(translation);
    }

    // @returns: Whether a non-empty translation exists
    pub fn has_translation(&self) -> bool {
        self.translation.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn clear_translation(&mut self) {
        self.translation = None;
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* {} ({}){}", self.times, self.frames, self.style)?;
        write!(f, "{}", self.text)
    }
}
