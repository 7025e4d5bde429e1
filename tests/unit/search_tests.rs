/*!
 * Tests for find, replace-all and time lookups
 */

use chrono::Duration;
use regex::Regex;
use subcore::domain::{SubtitleText, SubtitleTextType};
use subcore::search::{SearchOperator, SubtitleSearchOptions};

use crate::common;

fn with_translation(mut subtitles: subcore::Subtitles, index: usize, translation: &str) -> subcore::Subtitles {
    subtitles
        .collection
        .get_mut(index)
        .unwrap()
        .set_translation(SubtitleText::from_plain(translation));
    subtitles
}

/// Test that a wrapped search finds a single match from any cursor
#[test]
fn test_find_withWrapAndSingleMatch_shouldFindItFromAnyCursor() {
    let mut subtitles = common::subtitles(&[("alpha", 0, 1000), ("beta gamma", 2000, 3000), ("delta", 4000, 5000)]);
    let operator = SearchOperator::new(&mut subtitles);
    let lengths = [5, 10, 5];

    for backwards in [false, true] {
        for (start_subtitle, &length) in lengths.iter().enumerate() {
            for start_index in 0..=length {
                let options = SubtitleSearchOptions::new(Regex::new("gamma").unwrap())
                    .starting_at(start_subtitle, start_index, SubtitleTextType::Text)
                    .with_wrap(true)
                    .with_backwards(backwards);

                let found = operator.find(&options).unwrap_or_else(|| {
                    panic!("no match from {}:{} backwards={}", start_subtitle, start_index, backwards)
                });
                assert_eq!(found.subtitle, 1);
                assert_eq!(found.index, 5);
                assert_eq!(found.length, 5);
            }
        }
    }
}

/// Test that a search without wrap stops at the end of the collection
#[test]
fn test_find_withoutWrap_shouldNotGoAround() {
    let mut subtitles = common::subtitles(&[("target", 0, 1000), ("nothing", 2000, 3000)]);
    let operator = SearchOperator::new(&mut subtitles);

    let options = SubtitleSearchOptions::new(Regex::new("target").unwrap())
        .starting_at(1, 0, SubtitleTextType::Text);
    assert!(operator.find(&options).is_none());

    let options = options.with_wrap(true);
    assert_eq!(operator.find(&options).map(|r| r.subtitle), Some(0));
}

/// Test that forward search checks the text before the translation
#[test]
fn test_find_forward_shouldSearchTextBeforeTranslation() {
    let subtitles = common::subtitles(&[("cat here", 0, 1000)]);
    let mut subtitles = with_translation(subtitles, 0, "a cat too");
    let operator = SearchOperator::new(&mut subtitles);

    let options = SubtitleSearchOptions::new(Regex::new("cat").unwrap());
    let first = operator.find(&options).unwrap();
    assert_eq!(first.text_type, SubtitleTextType::Text);
    assert_eq!(first.index, 0);

    let options = options.starting_at(0, first.index + first.length, first.text_type);
    let second = operator.find(&options).unwrap();
    assert_eq!(second.text_type, SubtitleTextType::Translation);
    assert_eq!(second.index, 2);
}

/// Test that backward search checks the translation before the text and
/// returns the match nearest to the cursor
#[test]
fn test_find_backward_shouldSearchTranslationFirst() {
    let subtitles = common::subtitles(&[("cat cat", 0, 1000), ("dog", 2000, 3000)]);
    let mut subtitles = with_translation(subtitles, 0, "cat");
    let operator = SearchOperator::new(&mut subtitles);

    let options = SubtitleSearchOptions::new(Regex::new("cat").unwrap())
        .starting_at(1, 0, SubtitleTextType::Text)
        .with_backwards(true);
    let found = operator.find(&options).unwrap();
    assert_eq!(found.subtitle, 0);
    assert_eq!(found.text_type, SubtitleTextType::Translation);

    let options = options.starting_at(0, 0, SubtitleTextType::Translation);
    let found = operator.find(&options).unwrap();
    assert_eq!(found.text_type, SubtitleTextType::Text);
    assert_eq!(found.index, 4);
}

/// Test that indices count characters, with lines joined by the line break
#[test]
fn test_find_withMultiByteText_shouldReportCharacterIndex() {
    let mut subtitles = common::subtitles(&[("héllo\nwörld", 0, 1000)]);
    let operator = SearchOperator::new(&mut subtitles);

    let options = SubtitleSearchOptions::new(Regex::new("wö").unwrap()).with_line_break("|");
    let found = operator.find(&options).unwrap();
    assert_eq!(found.index, 6);
    assert_eq!(found.length, 2);
}

/// Test that a replace-all without matches changes nothing
#[test]
fn test_replace_all_withNoMatch_shouldReturnEmptyList() {
    let mut subtitles = common::subtitles(&[("one", 0, 1000), ("two", 2000, 3000)]);
    let before = subtitles.clone();

    let replaced = SearchOperator::new(&mut subtitles).replace_all(&Regex::new("zzz").unwrap(), "x");

    assert!(replaced.is_empty());
    assert_eq!(subtitles, before);
}

/// Test that a replace-all reports the previous content of each changed subtitle
#[test]
fn test_replace_all_withOneMatchEach_shouldReturnPriorTexts() {
    let mut subtitles = common::subtitles(&[("red car", 0, 1000), ("no match", 2000, 3000), ("red\nhat", 4000, 5000)]);

    let replaced = SearchOperator::new(&mut subtitles).replace_all(&Regex::new("red").unwrap(), "blue");

    assert_eq!(replaced.len(), 2);
    assert_eq!(replaced[0].subtitle, 0);
    assert_eq!(replaced[0].old_text.as_deref(), Some("red car"));
    assert_eq!(replaced[0].old_translation, None);
    assert_eq!(replaced[1].subtitle, 2);
    assert_eq!(replaced[1].old_text.as_deref(), Some("red\nhat"));
    assert_eq!(common::texts(&subtitles), vec!["blue car", "no match", "blue\nhat"]);
}

/// Test that a replacement giving identical text still counts as a change
#[test]
fn test_replace_all_withIdenticalReplacement_shouldRecordChange() {
    let subtitles = common::subtitles(&[("same", 0, 1000)]);
    let mut subtitles = with_translation(subtitles, 0, "same here");

    let replaced = SearchOperator::new(&mut subtitles).replace_all(&Regex::new("same").unwrap(), "same");

    assert_eq!(replaced.len(), 1);
    assert_eq!(replaced[0].old_text.as_deref(), Some("same"));
    assert_eq!(replaced[0].old_translation.as_deref(), Some("same here"));
}

/// Test that a time inside a subtitle finds that subtitle
#[test]
fn test_find_with_time_shouldReturnContainingSubtitle() {
    let mut subtitles = common::subtitles(&[("a", 1000, 2000), ("b", 3000, 4000)]);
    let operator = SearchOperator::new(&mut subtitles);

    assert_eq!(operator.find_with_time(Duration::milliseconds(1500)), Some(0));
    assert_eq!(operator.find_with_time(Duration::milliseconds(4000)), Some(1));
    assert_eq!(operator.find_with_time(Duration::milliseconds(2500)), None);
}

/// Test that a time between subtitles gives the subtitle with the nearer
/// start, the earlier one on a tie
#[test]
fn test_find_near_time_shouldReturnNearestSubtitle() {
    let mut subtitles = common::subtitles(&[("a", 1000, 1200), ("b", 3000, 4000), ("c", 10_000, 11_000)]);
    let operator = SearchOperator::new(&mut subtitles);

    assert_eq!(operator.find_near_time(Duration::zero()), Some(0));
    assert_eq!(operator.find_near_time(Duration::milliseconds(1500)), Some(0));
    assert_eq!(operator.find_near_time(Duration::milliseconds(2000)), Some(0));
    assert_eq!(operator.find_near_time(Duration::milliseconds(2500)), Some(1));
    assert_eq!(operator.find_near_time(Duration::milliseconds(3500)), Some(1));
    assert_eq!(operator.find_near_time(Duration::milliseconds(8000)), Some(2));
    assert_eq!(operator.find_near_time(Duration::seconds(60)), Some(2));
}

/// Test that find near time agrees with find with time whenever a subtitle
/// contains the time
#[test]
fn test_find_near_time_shouldAgreeWithFindWithTime() {
    let mut subtitles = common::subtitles(&[("a", 1000, 2000), ("b", 3000, 4000), ("c", 6000, 6500)]);
    let operator = SearchOperator::new(&mut subtitles);

    for ms in (0..8000).step_by(250) {
        let time = Duration::milliseconds(ms);
        let near = operator.find_near_time(time);
        assert!(near.is_some_and(|index| index < 3));
        if let Some(index) = operator.find_with_time(time) {
            assert_eq!(near, Some(index));
        }
    }
}

/// Test that an empty collection has no subtitle near any time
#[test]
fn test_find_near_time_withEmptyCollection_shouldReturnNone() {
    let mut subtitles = common::subtitles(&[]);
    assert_eq!(SearchOperator::new(&mut subtitles).find_near_time(Duration::zero()), None);
}
