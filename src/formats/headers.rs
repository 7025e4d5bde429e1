/*!
 * Header readers and writers.
 *
 * Each format with a header section gets one reader, picked by a single
 * match on its type. A reader receives the captures of one header pattern
 * and stores the first named group it recognises.
 */

use regex::Captures;

use super::{parse_float, parse_int};
use crate::domain::{FileProperties, Headers, ParsingProperties, SubtitleProperties, SubtitleType, TimingMode};

// @const: Style sections written after the Sub Station Alpha script info
const SSA_STYLE_SECTION: &str = "[V4 Styles]\nFormat: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding\nStyle: Default,Tahoma,24,16777215,16777215,16777215,0,-1,0,1,1,1,2,10,10,30,0,0\n\n";
const ASS_STYLE_SECTION: &str = "[V4+ Styles]\nFormat: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\nStyle: Default,Tahoma,24,&H00FFFFFF,&H00FFFFFF,&H00FFFFFF,&H00C0C0C0,-1,0,0,0,100,100,0,0.00,1,2,3,2,20,20,20,1\n\n";

fn text_group(captures: &Captures, name: &str) -> Option<String> {
    captures.name(name).map(|m| m.as_str().trim().to_string())
}

fn int_group(captures: &Captures, name: &str) -> Option<i32> {
    captures
        .name(name)
        .and_then(|m| parse_int(m.as_str()))
        .and_then(|value| i32::try_from(value).ok())
}

/// Stores the header captured by one header pattern.
///
/// Returns false when the format has no header reader or no known group
/// matched.
pub fn parse_header(subtitle_type: SubtitleType, captures: &Captures, properties: &mut ParsingProperties) -> bool {
    match subtitle_type {
        SubtitleType::SubViewer1 => parse_sub_viewer(captures, &mut properties.headers),
        SubtitleType::SubViewer2 => parse_sub_viewer2(captures, &mut properties.headers),
        SubtitleType::KaraokeLyricsLRC => parse_lrc(captures, &mut properties.headers),
        SubtitleType::KaraokeLyricsVKT => parse_vkt(captures, &mut properties.headers),
        SubtitleType::MPSub => parse_mpsub(captures, properties),
        SubtitleType::SubStationAlpha | SubtitleType::AdvancedSubStationAlpha => {
            parse_sub_station_alpha(captures, &mut properties.headers)
        }
        _ => false,
    }
}

fn parse_sub_viewer(captures: &Captures, headers: &mut Headers) -> bool {
    if let Some(value) = text_group(captures, "Title") {
        headers.title = value;
    } else if let Some(value) = text_group(captures, "Author") {
        headers.author = value;
    } else if let Some(value) = text_group(captures, "Source") {
        headers.video_source = value;
    } else if let Some(value) = text_group(captures, "Program") {
        headers.program = value;
    } else if let Some(value) = text_group(captures, "FilePath") {
        headers.subtitles_source = value;
    } else if let Some(value) = int_group(captures, "Delay") {
        headers.delay = value;
    } else if let Some(value) = int_group(captures, "CdTrack") {
        headers.cd_track = value;
    } else {
        return false;
    }
    true
}

fn parse_sub_viewer2(captures: &Captures, headers: &mut Headers) -> bool {
    if parse_sub_viewer(captures, headers) {
        return true;
    }

    if let Some(value) = text_group(captures, "Comment") {
        headers.comment = value;
    } else if let Some(value) = text_group(captures, "FontName") {
        headers.font_name = value;
    } else if let Some(value) = text_group(captures, "FontColor") {
        headers.font_color = value;
    } else if let Some(value) = text_group(captures, "FontStyle") {
        headers.font_style = value;
    } else if let Some(value) = int_group(captures, "FontSize") {
        headers.font_size = value;
    } else {
        return false;
    }
    true
}

fn parse_vkt(captures: &Captures, headers: &mut Headers) -> bool {
    if let Some(value) = text_group(captures, "FrameRate") {
        headers.frame_rate = value;
    } else if let Some(value) = text_group(captures, "Author") {
        headers.author = value;
    } else if let Some(value) = text_group(captures, "Source") {
        headers.video_source = value;
    } else if let Some(value) = text_group(captures, "Date") {
        headers.date = value;
    } else {
        return false;
    }
    true
}

fn parse_lrc(captures: &Captures, headers: &mut Headers) -> bool {
    if let Some(value) = text_group(captures, "Title") {
        headers.title = value;
    } else if let Some(value) = text_group(captures, "Author") {
        headers.author = value;
    } else if let Some(value) = text_group(captures, "Artist") {
        headers.artist = value;
    } else if let Some(value) = text_group(captures, "Album") {
        headers.album = value;
    } else if let Some(value) = text_group(captures, "Maker") {
        headers.file_creator = value;
    } else if let Some(value) = text_group(captures, "Version") {
        headers.version = value;
    } else if let Some(value) = text_group(captures, "Program") {
        headers.program = value;
    } else {
        return false;
    }
    true
}

fn parse_mpsub(captures: &Captures, properties: &mut ParsingProperties) -> bool {
    let headers = &mut properties.headers;
    if let Some(value) = text_group(captures, "Title") {
        headers.title = value;
    } else if let Some(value) = text_group(captures, "File") {
        headers.file_properties = value;
    } else if let Some(value) = text_group(captures, "Author") {
        headers.author = value;
    } else if let Some(value) = text_group(captures, "MediaType") {
        headers.set_media_type(&value);
    } else if let Some(value) = text_group(captures, "Note") {
        headers.comment = value;
    } else if captures.name("TimingModeTimes").is_some() {
        properties.timing_mode = TimingMode::Times;
    } else if let Some(frame_rate) = captures
        .name("TimingModeFrames")
        .and_then(|m| parse_float(m.as_str()))
    {
        properties.timing_mode = TimingMode::Frames;
        properties.input_frame_rate = frame_rate;
    } else {
        return false;
    }
    true
}

fn parse_sub_station_alpha(captures: &Captures, headers: &mut Headers) -> bool {
    if let Some(value) = text_group(captures, "Title") {
        headers.title = value;
    } else if let Some(value) = text_group(captures, "OriginalScript") {
        headers.original_script = value;
    } else if let Some(value) = text_group(captures, "OriginalTranslation") {
        headers.original_translation = value;
    } else if let Some(value) = text_group(captures, "OriginalEditing") {
        headers.original_editing = value;
    } else if let Some(value) = text_group(captures, "OriginalTiming") {
        headers.original_timing = value;
    } else if let Some(value) = text_group(captures, "OriginalScriptChecking") {
        headers.original_script_checking = value;
    } else if let Some(value) = text_group(captures, "ScriptUpdatedBy") {
        headers.script_updated_by = value;
    } else if let Some(value) = text_group(captures, "Collisions") {
        headers.collisions = value;
    } else if let Some(value) = int_group(captures, "PlayResX") {
        headers.play_res_x = value;
    } else if let Some(value) = int_group(captures, "PlayResY") {
        headers.play_res_y = value;
    } else if let Some(value) = int_group(captures, "PlayDepth") {
        headers.play_depth = value;
    } else if let Some(value) = text_group(captures, "Timer") {
        headers.timer = value;
    } else {
        return false;
    }
    true
}

/// Renders the header section written before the subtitles.
///
/// Empty for formats without headers.
pub fn headers_to_string(
    subtitle_type: SubtitleType,
    properties: &SubtitleProperties,
    file_properties: &FileProperties,
) -> String {
    let headers = &properties.headers;
    match subtitle_type {
        SubtitleType::SubStationAlpha => sub_station_alpha_headers(headers, "v4.00", SSA_STYLE_SECTION),
        SubtitleType::AdvancedSubStationAlpha => {
            sub_station_alpha_headers(headers, "v4.00+", ASS_STYLE_SECTION)
        }
        SubtitleType::MPSub => {
            let format = match file_properties.timing_mode {
                TimingMode::Times => "TIME".to_string(),
                TimingMode::Frames => properties.current_frame_rate().to_string(),
            };
            format!(
                "TITLE={}\nFILE={}\nAUTHOR={}\nTYPE={}\nFORMAT={}\nNOTE={}\n\n",
                headers.title,
                headers.file_properties,
                headers.author,
                headers.media_type(),
                format,
                headers.comment
            )
        }
        SubtitleType::SubViewer1 => format!(
            "[TITLE]\n{}\n[AUTHOR]\n{}\n[SOURCE]\n{}\n[PRG]\n{}\n[FILEPATH]\n{}\n[DELAY]\n{}\n[CD TRACK]\n{}\n",
            headers.title,
            headers.author,
            headers.video_source,
            headers.program,
            headers.subtitles_source,
            headers.delay,
            headers.cd_track
        ),
        SubtitleType::SubViewer2 => format!(
            "[INFORMATION]\n[TITLE]{}\n[AUTHOR]{}\n[SOURCE]{}\n[PRG]{}\n[FILEPATH]{}\n[DELAY]{}\n[CD TRACK]{}\n[COMMENT]{}\n[END INFORMATION]\n[SUBTITLE]\n[COLF]{},[STYLE]{},[SIZE]{},[FONT]{}\n",
            headers.title,
            headers.author,
            headers.video_source,
            headers.program,
            headers.subtitles_source,
            headers.delay,
            headers.cd_track,
            headers.comment,
            headers.font_color,
            headers.font_style,
            headers.font_size,
            headers.font_name
        ),
        SubtitleType::KaraokeLyricsVKT => format!(
            "# <HEAD>\n# FRAME RATE={}\n# CREATOR={}\n# VIDEO SOURCE={}\n# DATE={}\n# </HEAD>\n#\n",
            headers.frame_rate, headers.author, headers.video_source, headers.date
        ),
        SubtitleType::KaraokeLyricsLRC => format!(
            "[ti: {}]\n[au:{}]\n[ar:{}]\n[al:{}]\n[by:{}]\n[ve:{}]\n[re:{}]\n",
            headers.title,
            headers.author,
            headers.artist,
            headers.album,
            headers.file_creator,
            headers.version,
            headers.program
        ),
        _ => String::new(),
    }
}

fn sub_station_alpha_headers(headers: &Headers, script_type: &str, style_section: &str) -> String {
    let mut text = String::from("[Script Info]\n");
    text.push_str(&header_or_default("Title:", &headers.title, "<untitled>"));
    text.push_str(&header_or_default("Original Script:", &headers.original_script, "<unknown>"));
    text.push_str(&format!("Script Type: {}\n", script_type));
    text.push_str(&optional_header("Original Translation:", &headers.original_translation));
    text.push_str(&optional_header("Original Editing:", &headers.original_editing));
    text.push_str(&optional_header("Original Timing:", &headers.original_timing));
    text.push_str(&optional_header("Original Script Checking:", &headers.original_script_checking));
    text.push_str(&optional_header("Script Updated By:", &headers.script_updated_by));
    text.push_str(&optional_header("Collisions:", &headers.collisions));
    text.push_str(&format!("PlayResX: {}\n", headers.play_res_x));
    text.push_str(&format!("PlayResY: {}\n", headers.play_res_y));
    text.push_str(&format!("PlayDepth: {}\n", headers.play_depth));
    text.push_str(&optional_header("Timer:", &headers.timer));
    text.push('\n');
    text.push_str(style_section);
    text
}

fn header_or_default(intro: &str, value: &str, default: &str) -> String {
    let value = if value.is_empty() { default } else { value };
    format!("{} {}\n", intro, value)
}

fn optional_header(intro: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{} {}\n", intro, value)
    }
}
