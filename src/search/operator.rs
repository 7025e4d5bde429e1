use std::ops::Range;

use chrono::Duration;
use log::debug;
use regex::{Captures, Regex};

use super::options::SubtitleSearchOptions;
use super::results::{SubtitleReplaceResult, SubtitleSearchResults};
use crate::domain::{SubtitleTextType, Subtitles};

/// Part of a field that a search looks at
#[derive(Debug, Clone, Copy)]
enum Bounds {
    Whole,
    // Resume from a cursor, moving in the search direction
    From(usize),
    // Finish a wrapped search with the matches From skipped at the cursor
    Till(usize),
}

/// Finds and replaces text in a subtitle collection
pub struct SearchOperator<'a> {
    subtitles: &'a mut Subtitles,
}

impl<'a> SearchOperator<'a> {
    pub fn new(subtitles: &'a mut Subtitles) -> Self {
        Self { subtitles }
    }

    /// Finds the next match after the cursor, or the previous one when
    /// searching backwards.
    ///
    /// Forward, the text of a subtitle is searched before its translation;
    /// backwards the translation comes first. A wrapped search goes around
    /// the collection and ends where it started, so a single match is found
    /// whatever the cursor.
    pub fn find(&self, options: &SubtitleSearchOptions) -> Option<SubtitleSearchResults> {
        if options.start_subtitle >= self.subtitles.collection.len() {
            return None;
        }
        if options.backwards {
            self.find_backward(options)
        } else {
            self.find_forward(options)
        }
    }

    /// Replaces every match in texts and translations, lines joined by `\n`
    pub fn replace_all(&mut self, regex: &Regex, replacement: &str) -> Vec<SubtitleReplaceResult> {
        self.replace_all_with_line_break(regex, replacement, "\n")
    }

    /// Replaces every match in texts and translations.
    ///
    /// The replacement is literal. A field counts as replaced whenever the
    /// regex matched in it, even if the new content equals the old one.
    /// Returns the previous content of every subtitle that changed.
    pub fn replace_all_with_line_break(
        &mut self,
        regex: &Regex,
        replacement: &str,
        line_break: &str,
    ) -> Vec<SubtitleReplaceResult> {
        let mut replaced = Vec::new();
        let mut match_count = 0;

        for (number, subtitle) in self.subtitles.collection.iter_mut().enumerate() {
            let old_text = subtitle.text.get(line_break);
            let text_to_store = replace_text(&old_text, regex, replacement, &mut match_count).map(|new_text| {
                subtitle.text.set(&new_text, line_break, false);
                old_text
            });

            let translation_to_store = match subtitle.translation() {
                Some(translation) => {
                    let old_translation = translation.get(line_break);
                    replace_text(&old_translation, regex, replacement, &mut match_count).map(|new_translation| {
                        subtitle.translation_mut().set(&new_translation, line_break, false);
                        old_translation
                    })
                }
                None => None,
            };

            if text_to_store.is_some() || translation_to_store.is_some() {
                replaced.push(SubtitleReplaceResult {
                    subtitle: number,
                    old_text: text_to_store,
                    old_translation: translation_to_store,
                });
            }
        }

        debug!("Replaced {} matches in {} subtitles", match_count, replaced.len());
        replaced
    }

    // @returns: First subtitle whose [start, end] contains the time
    pub fn find_with_time(&self, time: Duration) -> Option<usize> {
        self.subtitles
            .collection
            .iter()
            .position(|subtitle| subtitle.times().contains(time))
    }

    /// Subtitle containing the time, or else the nearest one.
    ///
    /// Between two subtitles the one whose start is nearer wins, the earlier
    /// one on a tie. Times before the first subtitle give the first one and
    /// times after the last give the last. None only for an empty collection.
    pub fn find_near_time(&self, time: Duration) -> Option<usize> {
        let subtitles = self.subtitles.collection.as_slice();
        if subtitles.is_empty() {
            return None;
        }
        if let Some(index) = self.find_with_time(time) {
            return Some(index);
        }

        let next = subtitles.iter().position(|subtitle| time < subtitle.times().start());
        match next {
            Some(0) => Some(0),
            None => Some(subtitles.len() - 1),
            Some(next) => {
                let previous = next - 1;
                let to_previous = (time - subtitles[previous].times().start()).abs();
                let to_next = (subtitles[next].times().start() - time).abs();
                Some(if to_previous <= to_next { previous } else { next })
            }
        }
    }

    fn find_forward(&self, options: &SubtitleSearchOptions) -> Option<SubtitleSearchResults> {
        let count = self.subtitles.collection.len();
        let start = options.start_subtitle;

        self.find_in_subtitle_from_index(options)
            .or_else(|| (start + 1..count).find_map(|number| self.find_in_subtitle(options, number)))
            .or_else(|| {
                if !options.wrap {
                    return None;
                }
                (0..start)
                    .find_map(|number| self.find_in_subtitle(options, number))
                    .or_else(|| self.find_in_subtitle_till_index(options))
            })
    }

    fn find_backward(&self, options: &SubtitleSearchOptions) -> Option<SubtitleSearchResults> {
        let count = self.subtitles.collection.len();
        let start = options.start_subtitle;

        self.find_in_subtitle_from_index(options)
            .or_else(|| (0..start).rev().find_map(|number| self.find_in_subtitle(options, number)))
            .or_else(|| {
                if !options.wrap {
                    return None;
                }
                (start + 1..count)
                    .rev()
                    .find_map(|number| self.find_in_subtitle(options, number))
                    .or_else(|| self.find_in_subtitle_till_index(options))
            })
    }

    // Both fields of a subtitle, in search order
    fn find_in_subtitle(&self, options: &SubtitleSearchOptions, number: usize) -> Option<SubtitleSearchResults> {
        let (first, second) = field_order(options.backwards);
        self.find_in_field(options, number, first, Bounds::Whole)
            .or_else(|| self.find_in_field(options, number, second, Bounds::Whole))
    }

    // The starting subtitle, from the cursor to the end of the search order
    fn find_in_subtitle_from_index(&self, options: &SubtitleSearchOptions) -> Option<SubtitleSearchResults> {
        let number = options.start_subtitle;
        let (first, second) = field_order(options.backwards);
        let found = self.find_in_field(options, number, options.text_type, Bounds::From(options.start_index));
        if options.text_type == first {
            found.or_else(|| self.find_in_field(options, number, second, Bounds::Whole))
        } else {
            found
        }
    }

    // The starting subtitle, from the start of the search order to the cursor
    fn find_in_subtitle_till_index(&self, options: &SubtitleSearchOptions) -> Option<SubtitleSearchResults> {
        let number = options.start_subtitle;
        let (first, _) = field_order(options.backwards);
        if options.text_type == first {
            self.find_in_field(options, number, first, Bounds::Till(options.start_index))
        } else {
            self.find_in_field(options, number, first, Bounds::Whole).or_else(|| {
                self.find_in_field(options, number, options.text_type, Bounds::Till(options.start_index))
            })
        }
    }

    fn find_in_field(
        &self,
        options: &SubtitleSearchOptions,
        number: usize,
        text_type: SubtitleTextType,
        bounds: Bounds,
    ) -> Option<SubtitleSearchResults> {
        let text = self
            .subtitles
            .subtitle_text(number, text_type)?
            .get(&options.line_break);
        let range = search_range(&text, bounds, options.backwards)?;

        let found = if options.backwards {
            last_match(&options.regex, &text, range)
        } else {
            first_match(&options.regex, &text, range)
        }?;
        if !is_left_for_wrap(&text, &found, bounds, options.backwards) {
            return None;
        }

        let index = text[..found.start].chars().count();
        let length = text[found.clone()].chars().count();
        Some(SubtitleSearchResults::new(number, text_type, index, length))
    }
}

// @returns: Field searched first and second in each direction
fn field_order(backwards: bool) -> (SubtitleTextType, SubtitleTextType) {
    if backwards {
        (SubtitleTextType::Translation, SubtitleTextType::Text)
    } else {
        (SubtitleTextType::Text, SubtitleTextType::Translation)
    }
}

// @returns: Byte range of the text covered by the bounds, None when a
// forward cursor lies past the end of the text
fn search_range(text: &str, bounds: Bounds, backwards: bool) -> Option<Range<usize>> {
    let range = match (bounds, backwards) {
        (Bounds::Whole, _) | (Bounds::Till(_), _) => 0..text.len(),
        (Bounds::From(index), false) => byte_offset(text, index)?..text.len(),
        (Bounds::From(index), true) => 0..byte_offset(text, index).unwrap_or(text.len()),
    };
    Some(range)
}

// A forward From search only sees matches starting at the cursor and a
// backward one only matches ending before it. Till keeps the rest.
fn is_left_for_wrap(text: &str, found: &Range<usize>, bounds: Bounds, backwards: bool) -> bool {
    match bounds {
        Bounds::Till(index) => {
            let cursor = byte_offset(text, index).unwrap_or(text.len());
            if backwards {
                found.end > cursor
            } else {
                found.start < cursor
            }
        }
        _ => true,
    }
}

// Character index to byte offset; the end of the text is a valid index
fn byte_offset(text: &str, char_index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
}

fn first_match(regex: &Regex, text: &str, range: Range<usize>) -> Option<Range<usize>> {
    regex.find_at(&text[..range.end], range.start).map(|m| m.range())
}

// Last of the successive matches inside the range
fn last_match(regex: &Regex, text: &str, range: Range<usize>) -> Option<Range<usize>> {
    let haystack = &text[..range.end];
    let mut position = range.start;
    let mut last = None;

    while let Some(found) = regex.find_at(haystack, position) {
        last = Some(found.range());
        position = if found.end() > found.start() {
            found.end()
        } else {
            match haystack[found.end()..].chars().next() {
                Some(next) => found.end() + next.len_utf8(),
                None => break,
            }
        };
    }
    last
}

// @returns: The new text, None when the regex did not match
fn replace_text(text: &str, regex: &Regex, replacement: &str, match_count: &mut usize) -> Option<String> {
    let mut matches = 0;
    let new_text = regex.replace_all(text, |_: &Captures| {
        matches += 1;
        replacement.to_string()
    });
    *match_count += matches;
    (matches > 0).then(|| new_text.into_owned())
}
