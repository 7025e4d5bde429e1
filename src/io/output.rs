use chrono::Duration;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::constants::{NTSC_FRAME_RATE, PAL_FRAME_RATE};
use crate::domain::{
    FileProperties, Subtitle, SubtitleCollection, SubtitleProperties, SubtitleText,
    SubtitleTextType,
};
use crate::formats::SubtitleFormat;
use crate::timing::timing_util;

// @module: Renders a subtitle collection with a format's output template

// @const: <<Field>> or <<Field,Width>> placeholders
static FIELD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<<(?<Field>\w+)(,(?<Width>\d+))?>>").expect("Invalid field regex"));

/// Builds the text of a subtitle file
#[derive(Debug, Clone, Copy)]
pub struct SubtitleOutput<'f> {
    format: &'f SubtitleFormat,
    text_type: SubtitleTextType,
}

/// What the field evaluator sees while one subtitle is rendered
struct FieldContext<'a> {
    subtitle: &'a Subtitle,
    previous: Option<&'a Subtitle>,
    number: usize,
    current_frame_rate: f64,
    // @field: Milliseconds in the finest fraction of a second the template writes
    fraction_unit: i64,
}

impl<'f> SubtitleOutput<'f> {
    pub fn new(format: &'f SubtitleFormat, text_type: SubtitleTextType) -> Self {
        Self { format, text_type }
    }

    /// Writes headers, body markers and one template per subtitle, then
    /// converts `\n` to the file's newline convention.
    pub fn build(
        &self,
        collection: &SubtitleCollection,
        properties: &SubtitleProperties,
        file_properties: &FileProperties,
    ) -> String {
        let mut output = String::new();
        if self.format.has_headers() {
            output.push_str(&self.format.headers_to_string(properties, file_properties));
        }
        if self.format.has_body_begin() {
            output.push_str(self.format.body_begin_out);
        }

        let template = self
            .format
            .subtitle_out_template(properties, file_properties.timing_mode);
        let unit = fraction_unit(&template);

        let mut previous = None;
        for (index, subtitle) in collection.iter().enumerate() {
            let context = FieldContext {
                subtitle,
                previous,
                number: index + 1,
                current_frame_rate: properties.current_frame_rate(),
                fraction_unit: unit,
            };
            let rendered = FIELD_PATTERN.replace_all(&template, |captures: &Captures| {
                self.evaluate_field(captures, &context)
            });
            output.push_str(&rendered);
            output.push('\n');
            previous = Some(subtitle);
        }

        if self.format.has_body_end() {
            output.push_str(self.format.body_end_out);
        }

        match file_properties.newline_type.sequence() {
            Some(newline) => output.replace('\n', newline),
            None => output,
        }
    }

    fn evaluate_field(&self, captures: &Captures, context: &FieldContext) -> String {
        let field = captures.name("Field").map(|m| m.as_str()).unwrap_or("");
        let width = captures
            .name("Width")
            .and_then(|m| m.as_str().parse::<usize>().ok());

        let subtitle = context.subtitle;
        let times = subtitle.times();
        let frames = subtitle.frames();

        if let Some(name) = field.strip_prefix("Start") {
            if let Some(value) = self.time_field(name, times.start(), width, context) {
                return value;
            }
        }
        if let Some(name) = field.strip_prefix("End") {
            if let Some(value) = self.time_field(name, times.end(), width, context) {
                return value;
            }
        }

        match field {
            "StartFrame" => optional_width(frames.start(), width),
            "EndFrame" => optional_width(frames.end(), width),
            "StartElapsedFrames" => {
                let previous_end = context.previous.map(|p| p.frames().end()).unwrap_or(0);
                optional_width(frames.start() - previous_end, width)
            }
            "EndElapsedFrames" => optional_width(frames.duration(), width),
            "StartElapsedTime" => {
                let previous_end = context
                    .previous
                    .map(|p| p.times().end())
                    .unwrap_or_else(Duration::zero);
                format_seconds(times.start() - previous_end)
            }
            "EndElapsedTime" => format_seconds(times.duration()),
            "SubtitleNumber" => optional_width(context.number as i64, width),
            "Text" => self
                .text_of(subtitle)
                .map(|text| text.get_trim_lines(self.format.line_break))
                .unwrap_or_default(),
            "Style" => self.format.style_to_string(&subtitle.style),
            "EndOfStyle" => self.format.end_of_style_to_string(&subtitle.style),
            _ => captures
                .get(0)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Time component fields shared by the start and the end.
    ///
    /// The time is rounded to the template's fraction unit before it is
    /// split, so a rounded fraction carries into the seconds.
    fn time_field(&self, name: &str, time: Duration, width: Option<usize>, context: &FieldContext) -> Option<String> {
        let total_ms = divide_and_round(time.num_milliseconds(), context.fraction_unit) * context.fraction_unit;
        let ms = total_ms % 1000;
        let value = match name {
            "Hours" => dimension(total_ms / 3_600_000, width.unwrap_or(2)),
            "Minutes" => dimension((total_ms / 60_000) % 60, width.unwrap_or(2)),
            "Seconds" => dimension((total_ms / 1000) % 60, width.unwrap_or(2)),
            "Deciseconds" => dimension(ms / 100, width.unwrap_or(1)),
            "TotalDeciseconds" => divide_and_round(time.num_milliseconds(), 100).to_string(),
            "Centiseconds" => dimension(ms / 10, width.unwrap_or(2)),
            "Milliseconds" => dimension(ms, width.unwrap_or(3)),
            "MillisecondsAsFrames" => dimension(ms_as_frames(ms, context.current_frame_rate), width.unwrap_or(2)),
            "MillisecondsAsFramesPAL" => dimension(ms_as_frames(ms, PAL_FRAME_RATE), width.unwrap_or(2)),
            "MillisecondsAsFramesNTSC" => dimension(ms_as_frames(ms, NTSC_FRAME_RATE), width.unwrap_or(2)),
            _ => return None,
        };
        Some(value)
    }

    fn text_of<'s>(&self, subtitle: &'s Subtitle) -> Option<&'s SubtitleText> {
        match self.text_type {
            SubtitleTextType::Text => Some(&subtitle.text),
            SubtitleTextType::Translation => subtitle.translation(),
        }
    }
}

// @returns: 100 for deciseconds, 10 for centiseconds, 1 otherwise
fn fraction_unit(template: &str) -> i64 {
    FIELD_PATTERN
        .captures_iter(template)
        .filter_map(|captures| captures.name("Field"))
        .filter_map(|field| {
            let field = field.as_str();
            field.strip_prefix("Start").or_else(|| field.strip_prefix("End"))
        })
        .filter_map(|name| match name {
            "Deciseconds" => Some(100),
            "Centiseconds" => Some(10),
            "Milliseconds" => Some(1),
            _ => None,
        })
        .min()
        .unwrap_or(1)
}

fn ms_as_frames(milliseconds: i64, frame_rate: f64) -> i64 {
    timing_util::time_milliseconds_to_frames(milliseconds as f64, frame_rate) as i64
}

// Rounds half to even
fn divide_and_round(number: i64, denominator: i64) -> i64 {
    (number as f64 / denominator as f64).round_ties_even() as i64
}

fn optional_width(value: i64, width: Option<usize>) -> String {
    match width {
        Some(width) => dimension(value, width),
        None => value.to_string(),
    }
}

/// Zero-pads a number to `width` digits, then keeps only the first `width`
/// characters.
fn dimension(value: i64, width: usize) -> String {
    let padded = if value < 0 {
        format!("-{:0width$}", value.unsigned_abs(), width = width)
    } else {
        format!("{:0width$}", value, width = width)
    };
    padded.chars().take(width).collect()
}

/// Seconds with up to three decimals and no trailing zeros
fn format_seconds(duration: Duration) -> String {
    let seconds = timing_util::duration_to_seconds_f64(duration);
    let text = format!("{:.3}", seconds);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}
