use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::domain::{Style, Subtitle};

// @module: Style markup written and stripped by the formats that carry it

fn style_regex(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("Invalid style regex")
}

// @const: {Y:ubi} blocks
static MICRO_DVD_STYLE: Lazy<Regex> = Lazy::new(|| style_regex(r"\{[^Y]*Y[^:]*:\w*\}"));

// @const: Opening and closing tags such as <b> and </b>
static MARKUP_STYLE: Lazy<Regex> = Lazy::new(|| style_regex(r"</?\w*>"));

// @const: Opening <u>, <b> and <i> tags
static OPENING_MARKUP_STYLE: Lazy<Regex> = Lazy::new(|| style_regex(r"<[ubi]\w*>"));

// @const: Override blocks such as {\b1}
static SUB_STATION_ALPHA_STYLE: Lazy<Regex> = Lazy::new(|| style_regex(r"\{\\[ubi]\d\}"));

/// How a format encodes bold, italic and underline inside subtitle text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleRule {
    /// The format has no style markup
    #[default]
    None,
    /// `{Y:ubi}` before the text
    MicroDvd,
    /// `<u><b><i>` before the text and the matching closing tags after it
    Markup,
    /// `<u><b><i>` before the text, never closed
    OpeningMarkup,
    /// `{\u1}{\b1}{\i1}` before the text and `{\u0}{\b0}{\i0}` after it
    SubStationAlpha,
}

impl StyleRule {
    // @returns: Markup written before the text
    pub fn style_to_string(&self, style: &Style) -> String {
        match self {
            Self::None => String::new(),
            Self::MicroDvd => {
                if !style.is_enabled() {
                    return String::new();
                }
                let mut text = String::from("{Y:");
                if style.underline {
                    text.push('u');
                }
                if style.bold {
                    text.push('b');
                }
                if style.italic {
                    text.push('i');
                }
                text.push('}');
                text
            }
            Self::Markup | Self::OpeningMarkup => tags(style, "<u>", "<b>", "<i>"),
            Self::SubStationAlpha => tags(style, r"{\u1}", r"{\b1}", r"{\i1}"),
        }
    }

    // @returns: Markup written after the text
    pub fn end_of_style_to_string(&self, style: &Style) -> String {
        match self {
            Self::Markup => tags(style, "</u>", "</b>", "</i>"),
            Self::SubStationAlpha => tags(style, r"{\u0}", r"{\b0}", r"{\i0}"),
            _ => String::new(),
        }
    }

    fn pattern(&self) -> Option<&'static Regex> {
        match self {
            Self::None => None,
            Self::MicroDvd => Some(&MICRO_DVD_STYLE),
            Self::Markup => Some(&MARKUP_STYLE),
            Self::OpeningMarkup => Some(&OPENING_MARKUP_STYLE),
            Self::SubStationAlpha => Some(&SUB_STATION_ALPHA_STYLE),
        }
    }

    /// Moves style markup found in a parsed subtitle's text into its style.
    ///
    /// All markup is concatenated and read with [`Style::from_style_text`],
    /// then stripped from the text, which is re-split and trimmed.
    pub fn post_process(&self, subtitle: &mut Subtitle, line_break: &str) {
        let Some(pattern) = self.pattern() else {
            return;
        };

        let text = subtitle.text.get(line_break);
        let style_text: String = pattern.find_iter(&text).map(|m| m.as_str()).collect();
        subtitle.style = Style::from_style_text(&style_text);

        let stripped = pattern.replace_all(&text, "");
        subtitle.text.set(&stripped, line_break, true);
    }
}

fn tags(style: &Style, underline: &str, bold: &str, italic: &str) -> String {
    let mut text = String::new();
    if style.underline {
        text.push_str(underline);
    }
    if style.bold {
        text.push_str(bold);
    }
    if style.italic {
        text.push_str(italic);
    }
    text
}
