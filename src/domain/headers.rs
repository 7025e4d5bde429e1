use serde::{Deserialize, Serialize};

// @module: Free-form header fields shared by all formats

pub const MEDIA_TYPE_VIDEO: &str = "VIDEO";
pub const MEDIA_TYPE_AUDIO: &str = "AUDIO";

/// Flat bag of header fields. Each format reads and writes the subset it
/// knows about; everything else keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers {
    pub title: String,
    pub author: String,
    pub movie_author: String,
    pub artist: String,
    pub album: String,
    pub file_creator: String,
    pub video_source: String,
    pub subtitles_source: String,
    pub program: String,
    pub version: String,
    pub comment: String,
    pub font_color: String,
    pub font_style: String,
    pub font_name: String,
    pub file_properties: String,
    media_type: String,
    pub original_script: String,
    pub original_translation: String,
    pub original_editing: String,
    pub original_timing: String,
    pub original_script_checking: String,
    pub script_updated_by: String,
    pub collisions: String,
    pub timer: String,
    pub frame_rate: String,
    pub date: String,
    pub play_res_x: i32,
    pub play_res_y: i32,
    pub play_depth: i32,
    pub font_size: i32,
    pub delay: i32,
    pub cd_track: i32,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            movie_author: String::new(),
            artist: String::new(),
            album: String::new(),
            file_creator: String::new(),
            video_source: String::new(),
            subtitles_source: String::new(),
            program: String::new(),
            version: String::new(),
            comment: String::new(),
            font_color: "&HFFFFFF".to_string(),
            font_style: "bd".to_string(),
            font_name: "Tahoma".to_string(),
            file_properties: String::new(),
            media_type: MEDIA_TYPE_VIDEO.to_string(),
            original_script: "<unknown>".to_string(),
            original_translation: String::new(),
            original_editing: String::new(),
            original_timing: String::new(),
            original_script_checking: String::new(),
            script_updated_by: String::new(),
            collisions: String::new(),
            timer: String::new(),
            frame_rate: String::new(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            play_res_x: 0,
            play_res_y: 0,
            play_depth: 0,
            font_size: 24,
            delay: 0,
            cd_track: 0,
        }
    }
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Sets the media type; only VIDEO and AUDIO (any case) are accepted
    pub fn set_media_type(&mut self, media_type: &str) -> bool {
        let media_type = media_type.trim().to_uppercase();
        if media_type == MEDIA_TYPE_VIDEO || media_type == MEDIA_TYPE_AUDIO {
            self.media_type = media_type;
            true
        } else {
            false
        }
    }
}
