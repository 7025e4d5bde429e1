/*!
 * Regex-driven subtitle parser.
 *
 * The parser interprets a [`SubtitleFormat`] descriptor:
 * - comments are removed first;
 * - headers are read from the text before the first subtitle;
 * - subtitles are matched one after the other from the body start;
 * - a body end marker and any remaining text close the parse.
 *
 * Text between matches can be kept as incomplete subtitles for diagnostics.
 */

use chrono::Duration;
use log::{debug, warn};
use regex::{Captures, Regex};

use crate::domain::{
    Frames, IncompleteSubtitle, IncompleteSubtitles, ParsingProperties, Style, Subtitle,
    SubtitleCollection, SubtitleMode, SubtitleText, Times, TimingMode,
};
use crate::errors::SubtitleError;
use crate::formats::{self, SubtitleFormat, TextBlock, parse_float, parse_int};
use crate::timing::timing_util;

/// Everything a parse produces
#[derive(Debug, Clone, Default)]
pub struct ParsedSubtitles {
    pub collection: SubtitleCollection,
    pub properties: ParsingProperties,
    pub incomplete: IncompleteSubtitles,
}

/// Compiled subtitle patterns for one parse
struct SubtitleReader {
    head: Regex,
    block: Option<(Regex, TextBlock)>,
}

/// One subtitle match: the named groups of the head pattern plus, for
/// formats with a text block, the text found after it.
struct SubtitleMatch<'t> {
    captures: Captures<'t>,
    block_text: Option<&'t str>,
    uses_block: bool,
    start: usize,
    end: usize,
}

impl<'t> SubtitleMatch<'t> {
    // @returns: Trimmed group value, None when the group did not take part
    fn group(&self, name: &str) -> Option<&'t str> {
        if self.uses_block && name == "Text" {
            return self.block_text.map(str::trim);
        }
        self.captures.name(name).map(|m| m.as_str().trim())
    }

    fn int_group(&self, name: &str) -> Option<i64> {
        self.group(name).and_then(parse_int)
    }

    fn float_group(&self, name: &str) -> Option<f64> {
        self.group(name).and_then(parse_float)
    }
}

impl SubtitleReader {
    fn new(format: &SubtitleFormat, timing_mode: TimingMode) -> Result<Self, SubtitleError> {
        let pattern = format.subtitle_in_pattern(timing_mode);
        match format.text_block {
            // Whitespace after the block is skipped by hand
            Some(block) => Ok(Self {
                head: formats::compile(pattern)?,
                block: Some((formats::compile(block.boundary)?, block)),
            }),
            // Spaces between subtitles are ignored
            None => Ok(Self {
                head: formats::compile(&format!(r"{}\s*", pattern))?,
                block: None,
            }),
        }
    }

    fn find_at<'t>(&self, text: &'t str, position: usize) -> Option<SubtitleMatch<'t>> {
        let captures = self.head.captures_at(text, position)?;
        let whole = captures.get(0)?;
        let (start, head_end) = (whole.start(), whole.end());

        let Some((boundary, block)) = &self.block else {
            return Some(SubtitleMatch {
                captures,
                block_text: None,
                uses_block: false,
                start,
                end: head_end,
            });
        };

        let (block_text, block_end) = read_text_block(text, head_end, boundary, block);
        let end = skip_whitespace(text, block_end);
        Some(SubtitleMatch {
            captures,
            block_text,
            uses_block: true,
            start,
            end,
        })
    }
}

/// Reads the text that follows a head match, up to the next boundary match.
///
/// Returns the text, None when empty, and the index right after it.
fn read_text_block<'t>(
    text: &'t str,
    head_end: usize,
    boundary: &Regex,
    block: &TextBlock,
) -> (Option<&'t str>, usize) {
    let start = if block.leading_newline {
        if !text[head_end..].starts_with('\n') {
            return (None, head_end);
        }
        head_end + 1
    } else {
        head_end
    };

    let limit = boundary
        .find_at(text, head_end)
        .map(|m| m.start())
        .unwrap_or(text.len())
        .max(start);

    let region = text[start..limit].trim_end();
    if region.is_empty() {
        (None, head_end)
    } else {
        (Some(region), start + region.len())
    }
}

fn skip_whitespace(text: &str, position: usize) -> usize {
    let rest = &text[position..];
    position + (rest.len() - rest.trim_start().len())
}

/// Parses subtitle text with a format descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleParser {
    // @field: Whether unparsed text spans are collected
    include_incomplete: bool,

    // @field: Timing mode of formats supporting both when no header picks one
    default_timing_mode: TimingMode,
}

impl SubtitleParser {
    pub fn new(include_incomplete: bool) -> Self {
        Self {
            include_incomplete,
            default_timing_mode: TimingMode::Times,
        }
    }

    pub fn with_default_timing_mode(mut self, timing_mode: TimingMode) -> Self {
        self.default_timing_mode = timing_mode;
        self
    }

    /// Parses already decoded text with `\n` newlines.
    ///
    /// Only the timing view matching the detected timing mode is filled in;
    /// callers complete the other view once the frame rate is final.
    pub fn parse(
        &self,
        text: &str,
        format: &SubtitleFormat,
        input_frame_rate: f64,
    ) -> Result<ParsedSubtitles, SubtitleError> {
        let mut properties = ParsingProperties::new(input_frame_rate);
        let mut collection = SubtitleCollection::new();
        let mut incomplete = IncompleteSubtitles::new();

        let text = clear_comments(text, format)?;
        let text = text.as_str();

        let (reader, body_index) = if format.mode == SubtitleMode::Both {
            // The headers decide whether the body uses times or frames
            properties.timing_mode = self.default_timing_mode;
            let last_header_index = read_headers(text, text.len(), format, &mut properties)?;
            let reader = SubtitleReader::new(format, properties.timing_mode)?;
            let body_index = find_body_index(text, format, &reader).max(last_header_index);
            (reader, body_index)
        } else {
            properties.timing_mode = format.mode_as_timing_mode();
            let reader = SubtitleReader::new(format, properties.timing_mode)?;
            let body_index = find_body_index(text, format, &reader);
            read_headers(text, body_index, format, &mut properties)?;
            (reader, body_index)
        };
        debug!("{} body starts at {}", format.name, body_index);

        format.global_input_properties(text, &mut properties);

        let mut position = self.read_subtitles(
            text,
            body_index,
            &reader,
            format,
            &properties,
            &mut collection,
            &mut incomplete,
        );
        position = self.read_body_end(text, position, format, collection.len(), &mut incomplete)?;

        if position < text.len() && self.include_incomplete {
            self.add_incomplete(&mut incomplete, &text[position..], collection.len());
        }

        debug!(
            "Parsed {} subtitles as {} in {:?} mode",
            collection.len(),
            format.name,
            properties.timing_mode
        );
        if !incomplete.is_empty() {
            warn!("{} text spans could not be read as subtitles", incomplete.len());
        }

        Ok(ParsedSubtitles {
            collection,
            properties,
            incomplete,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn read_subtitles(
        &self,
        text: &str,
        mut position: usize,
        reader: &SubtitleReader,
        format: &SubtitleFormat,
        properties: &ParsingProperties,
        collection: &mut SubtitleCollection,
        incomplete: &mut IncompleteSubtitles,
    ) -> usize {
        while position < text.len() {
            let Some(found) = reader.find_at(text, position) else {
                break;
            };
            if found.end <= position {
                break;
            }

            if found.start > position {
                self.add_incomplete(incomplete, &text[position..found.start], collection.len());
            }

            let subtitle = parse_subtitle(&found, format, properties, collection.as_slice().last());
            collection.add(subtitle);
            position = found.end;
        }
        position
    }

    fn read_body_end(
        &self,
        text: &str,
        position: usize,
        format: &SubtitleFormat,
        subtitle_count: usize,
        incomplete: &mut IncompleteSubtitles,
    ) -> Result<usize, SubtitleError> {
        if format.body_end_in.is_empty() || position >= text.len() {
            return Ok(position);
        }

        let body_end = formats::compile(&format!(r"{}\s*", format.body_end_in))?;
        match body_end.find_at(text, position) {
            Some(found) => {
                if found.start() > position {
                    self.add_incomplete(incomplete, &text[position..found.start()], subtitle_count);
                }
                Ok(found.end())
            }
            None => Ok(position),
        }
    }

    fn add_incomplete(&self, incomplete: &mut IncompleteSubtitles, text: &str, subtitles_before: usize) {
        if self.include_incomplete && !text.trim().is_empty() {
            incomplete.push(IncompleteSubtitle::new(subtitles_before, text));
        }
    }
}

fn clear_comments(text: &str, format: &SubtitleFormat) -> Result<String, SubtitleError> {
    match format.comments {
        Some(comments) => Ok(formats::compile(comments)?.replace_all(text, "").into_owned()),
        None => Ok(text.to_string()),
    }
}

/// Start of the subtitle body: the first subtitle match for formats with a
/// header or a body preamble, the start of the text otherwise.
fn find_body_index(text: &str, format: &SubtitleFormat, reader: &SubtitleReader) -> usize {
    if format.has_headers() || format.has_body_begin() {
        if let Some(found) = reader.find_at(text, 0) {
            return found.start;
        }
    }
    0
}

/// Reads every header pattern from the text before `body_index`.
///
/// Returns the index right after the last header match.
fn read_headers(
    text: &str,
    body_index: usize,
    format: &SubtitleFormat,
    properties: &mut ParsingProperties,
) -> Result<usize, SubtitleError> {
    if !format.has_headers() || body_index == 0 {
        return Ok(0);
    }

    let header_text = &text[..body_index];
    let mut last_index = 0;
    for pattern in format.headers {
        let regex = formats::compile(pattern)?;
        if let Some(captures) = regex.captures(header_text) {
            if let Some(whole) = captures.get(0) {
                last_index = last_index.max(whole.end());
            }
            format.parse_header(&captures, properties);
        }
    }
    Ok(last_index)
}

fn parse_subtitle(
    found: &SubtitleMatch,
    format: &SubtitleFormat,
    properties: &ParsingProperties,
    previous: Option<&Subtitle>,
) -> Subtitle {
    let text = match found.group("Text") {
        Some(text) => SubtitleText::from_text(text, format.line_break, true),
        None => SubtitleText::new(),
    };
    let style = found
        .group("Style")
        .map(Style::from_style_text)
        .unwrap_or_default();

    let mut subtitle = Subtitle::new(text, style);
    match properties.timing_mode {
        TimingMode::Frames => parse_frames(found, subtitle.frames_mut(), previous.map(Subtitle::frames)),
        TimingMode::Times => parse_times(
            found,
            subtitle.times_mut(),
            previous.map(Subtitle::times),
            properties.input_frame_rate,
        ),
    }

    format.subtitle_input_post_process(&mut subtitle);
    subtitle
}

// @const: Milliseconds in one unit of each time component
const TIME_COMPONENTS: [(&str, i64); 6] = [
    ("Hours", 3_600_000),
    ("Minutes", 60_000),
    ("Seconds", 1000),
    ("Deciseconds", 100),
    ("Centiseconds", 10),
    ("Milliseconds", 1),
];

/// Sums every time component present for one end ("Start" or "End").
///
/// A component whose value does not fit in a duration counts as absent.
/// Returns None when no component took part in the match.
fn sum_time_fields(found: &SubtitleMatch, prefix: &str, input_frame_rate: f64) -> Option<Duration> {
    let field = |name: &str| found.int_group(&format!("{}{}", prefix, name));
    let mut total_ms: i64 = 0;
    let mut defined = false;

    for (name, unit) in TIME_COMPONENTS {
        let sum = field(name)
            .and_then(|value| value.checked_mul(unit))
            .and_then(|ms| total_ms.checked_add(ms));
        if let Some(sum) = sum {
            total_ms = sum;
            defined = true;
        }
    }
    let mut total = Duration::try_milliseconds(total_ms)?;

    if let Some(frames) = field("MillisecondsAsFrames") {
        let time = timing_util::frames_to_time(frames as f64, input_frame_rate);
        if let Some(sum) = total.checked_add(&time) {
            total = sum;
            defined = true;
        }
    }

    defined.then_some(total)
}

// @returns: The sum, None on overflow
fn add_durations(durations: &[Duration]) -> Option<Duration> {
    durations
        .iter()
        .try_fold(Duration::zero(), |total, duration| total.checked_add(duration))
}

fn parse_times(found: &SubtitleMatch, times: &mut Times, previous: Option<&Times>, input_frame_rate: f64) {
    let mut start = sum_time_fields(found, "Start", input_frame_rate);
    if let Some(elapsed) = found.float_group("StartElapsedTime") {
        let base = previous.map(Times::precise_end).unwrap_or_else(Duration::zero);
        let elapsed = timing_util::duration_from_seconds_f64(elapsed);
        start = add_durations(&[start.unwrap_or_else(Duration::zero), base, elapsed]).or(start);
    }
    if let Some(start) = start {
        times.set_precise_start(start);
    }

    let mut end = sum_time_fields(found, "End", input_frame_rate);
    if let Some(elapsed) = found.float_group("EndElapsedTime") {
        let elapsed = timing_util::duration_from_seconds_f64(elapsed);
        end = add_durations(&[end.unwrap_or_else(Duration::zero), times.precise_start(), elapsed]).or(end);
    }
    if let Some(end) = end {
        times.set_precise_end(end);
    }
}

fn parse_frames(found: &SubtitleMatch, frames: &mut Frames, previous: Option<&Frames>) {
    if let Some(start) = found.int_group("StartFrame") {
        frames.set_precise_start(start as f64);
    } else if let Some(elapsed) = found.int_group("StartElapsedFrames") {
        let base = previous.map(Frames::precise_end).unwrap_or(0.0);
        frames.set_precise_start(base + elapsed as f64);
    }

    if let Some(end) = found.int_group("EndFrame") {
        frames.set_precise_end(end as f64);
    } else if let Some(duration) = found.int_group("EndElapsedFrames") {
        frames.set_precise_duration(duration as f64);
    }
}
