use log::info;

use crate::domain::Subtitles;

/// Changes the current or the original frame rate of a document
pub struct FrameRateOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> FrameRateOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Recomputes frames from times at the new rate; times do not change.
    ///
    /// Returns false for a frame rate that is not positive.
    pub fn change_current(&mut self, frame_rate: f64) -> bool {
        if !is_valid(frame_rate) {
            return false;
        }
        if self.subtitles.properties.current_frame_rate() != frame_rate {
            self.subtitles.properties.set_current_frame_rate(frame_rate);
            self.subtitles.update_frames_from_times(frame_rate);
            info!("Current frame rate changed to {}", frame_rate);
        }
        true
    }

    /// Reinterprets the file as made for another frame rate.
    ///
    /// Frames are recomputed at `current * original / new`, then times are
    /// recomputed from those frames at the current rate, so times change.
    pub fn change_original(&mut self, frame_rate: f64) -> bool {
        if !is_valid(frame_rate) {
            return false;
        }
        let original = self.subtitles.properties.original_frame_rate();
        let current = self.subtitles.properties.current_frame_rate();
        if original != frame_rate {
            let conversion = current * original / frame_rate;
            self.subtitles.update_frames_from_times(conversion);
            self.subtitles.update_times_from_frames(current);
            self.subtitles.properties.set_original_frame_rate(frame_rate);
            info!("Original frame rate changed from {} to {}", original, frame_rate);
        }
        true
    }
}

fn is_valid(frame_rate: f64) -> bool {
    frame_rate.is_finite() && frame_rate > 0.0
}
