/*!
 * Tests for the timing operators
 */

use chrono::Duration;
use subcore::domain::{SyncPoint, SyncPoints, Timing};
use subcore::timing::{
    timing_util, AdjustOperator, FrameRateOperator, MergeOperator, ShiftOperator, SplitOperator,
    SynchronizeOperator,
};

use crate::common;

fn three_subtitles() -> subcore::Subtitles {
    common::subtitles(&[("One", 1000, 2000), ("Two", 2500, 4000), ("Three", 5000, 5800)])
}

/// Test that shifting by 500 ms moves every subtitle and keeps durations
#[test]
fn test_shift_times_withHalfSecond_shouldMoveEverySubtitle() {
    let mut subtitles = three_subtitles();

    ShiftOperator::new(&mut subtitles).shift_times(Duration::milliseconds(500));

    assert_eq!(
        common::times_ms(&subtitles),
        vec![(1500, 2500), (3000, 4500), (5500, 6300)]
    );
}

/// Test that a shift followed by the opposite shift restores the timings
#[test]
fn test_shift_times_range_thenReverse_shouldRestoreTimings() {
    let mut subtitles = three_subtitles();
    let before = subtitles.clone();
    let delta = Duration::milliseconds(1234);

    let mut operator = ShiftOperator::new(&mut subtitles);
    assert!(operator.shift_times_range(delta, 1, 2));
    assert!(operator.shift_times_range(-delta, 1, 2));

    assert_eq!(common::times_ms(&subtitles), common::times_ms(&before));
    assert_eq!(
        subtitles.collection.get(2).unwrap().frames().start(),
        before.collection.get(2).unwrap().frames().start()
    );
}

/// Test that an out of bounds range is rejected without changes
#[test]
fn test_shift_times_range_withOutOfBoundsRange_shouldChangeNothing() {
    let mut subtitles = three_subtitles();
    let before = subtitles.clone();

    assert!(!ShiftOperator::new(&mut subtitles).shift_times_range(Duration::seconds(1), 1, 3));
    assert_eq!(subtitles, before);
}

/// Test that adjust hits both reference points and interpolates between them
#[test]
fn test_adjust_times_range_shouldInterpolateLinearly() {
    let mut subtitles = common::subtitles(&[("A", 0, 500), ("B", 1000, 1500), ("C", 2000, 2500), ("D", 3000, 3500)]);

    assert!(AdjustOperator::new(&mut subtitles).adjust_times_range(
        0,
        Duration::milliseconds(500),
        3,
        Duration::milliseconds(6500)
    ));

    assert_eq!(
        common::times_ms(&subtitles),
        vec![(500, 1500), (2500, 3500), (4500, 5500), (6500, 7500)]
    );
}

/// Test that adjust rejects end times that do not come after the start time
#[test]
fn test_adjust_times_withDecreasingTimes_shouldFail() {
    let mut subtitles = three_subtitles();
    let before = subtitles.clone();

    let mut operator = AdjustOperator::new(&mut subtitles);
    assert!(!operator.adjust_times(Duration::seconds(5), Duration::seconds(5)));
    assert!(!operator.adjust_times(Duration::seconds(6), Duration::seconds(2)));
    assert_eq!(subtitles, before);
}

/// Test that adjust needs at least two subtitles
#[test]
fn test_adjust_times_withSingleSubtitle_shouldFail() {
    let mut subtitles = common::subtitles(&[("Alone", 0, 1000)]);
    assert!(!AdjustOperator::new(&mut subtitles).adjust_times(Duration::seconds(1), Duration::seconds(2)));
}

/// Test that synchronize with two points behaves like adjust
#[test]
fn test_synchronize_withTwoPoints_shouldMatchAdjust() {
    let entries = [("A", 0, 500), ("B", 1000, 1500), ("C", 2000, 2500), ("D", 3000, 3500)];
    let mut synchronized = common::subtitles(&entries);
    let mut adjusted = common::subtitles(&entries);

    let points: SyncPoints = vec![
        SyncPoint::new(
            0,
            Timing::from_time(Duration::zero(), 25.0),
            Timing::from_time(Duration::milliseconds(500), 25.0),
        ),
        SyncPoint::new(
            3,
            Timing::from_time(Duration::milliseconds(3000), 25.0),
            Timing::from_time(Duration::milliseconds(6500), 25.0),
        ),
    ]
    .into_iter()
    .collect();

    assert!(SynchronizeOperator::new(&mut synchronized).sync(&points, false));
    assert!(AdjustOperator::new(&mut adjusted).adjust_times_range(
        0,
        Duration::milliseconds(500),
        3,
        Duration::milliseconds(6500)
    ));
    assert_eq!(common::times_ms(&synchronized), common::times_ms(&adjusted));
}

/// Test that merge joins lines into the first subtitle and extends it
#[test]
fn test_merge_shouldJoinLinesAndKeepOthers() {
    let mut subtitles = common::subtitles(&[("A", 0, 1000), ("B\nC", 1500, 2500), ("D", 3000, 4000)]);

    assert!(MergeOperator::new(&mut subtitles).merge(0, 2));

    assert_eq!(subtitles.collection.len(), 3);
    let merged = subtitles.collection.get(0).unwrap();
    assert_eq!(merged.text.lines(), ["A", "B", "C", "D"]);
    assert_eq!(merged.times().start(), Duration::zero());
    assert_eq!(merged.times().end(), Duration::milliseconds(4000));
}

/// Test that merge rejects a reversed range
#[test]
fn test_merge_withReversedRange_shouldFail() {
    let mut subtitles = three_subtitles();
    let before = subtitles.clone();
    assert!(!MergeOperator::new(&mut subtitles).merge(2, 1));
    assert_eq!(subtitles, before);
}

/// Test that splitting two lines over four seconds leaves a 100 ms gap
#[test]
fn test_split_withTwoLines_shouldShareDurationAroundGap() {
    let subtitles = common::subtitles(&[("Line one\nLine two", 0, 4000)]);
    let original = subtitles.collection.get(0).unwrap();

    let pieces = SplitOperator::new(&subtitles, Duration::milliseconds(100)).split(original).unwrap();

    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].text.get("\n"), "Line one");
    assert_eq!(pieces[1].text.get("\n"), "Line two");
    assert_eq!(pieces[0].times().start(), Duration::zero());
    assert_eq!(pieces[0].times().end(), Duration::milliseconds(1950));
    assert_eq!(pieces[1].times().start(), Duration::milliseconds(2050));
    assert_eq!(pieces[1].times().end(), Duration::milliseconds(4000));
}

/// Test that a subtitle with one non-empty line is not split
#[test]
fn test_split_withSingleLine_shouldReturnNone() {
    let subtitles = common::subtitles(&[("Only line\n   ", 0, 4000)]);
    let original = subtitles.collection.get(0).unwrap();
    assert!(SplitOperator::new(&subtitles, Duration::milliseconds(100)).split(original).is_none());
}

/// Test that changing the current frame rate keeps times and moves frames
#[test]
fn test_change_current_frame_rate_shouldKeepTimes() {
    let mut subtitles = common::subtitles(&[("A", 2000, 4000)]);

    assert!(FrameRateOperator::new(&mut subtitles).change_current(50.0));

    let subtitle = subtitles.collection.get(0).unwrap();
    assert_eq!(subtitle.times().start(), Duration::milliseconds(2000));
    assert_eq!(subtitle.frames().start(), 100);
    assert_eq!(subtitles.properties.current_frame_rate(), 50.0);
}

/// Test that changing the original frame rate rescales times
#[test]
fn test_change_original_frame_rate_shouldRescaleTimes() {
    let mut subtitles = common::subtitles(&[("A", 2000, 4000)]);

    assert!(FrameRateOperator::new(&mut subtitles).change_original(50.0));

    let subtitle = subtitles.collection.get(0).unwrap();
    assert_eq!(subtitle.times().start(), Duration::milliseconds(1000));
    assert_eq!(subtitle.times().end(), Duration::milliseconds(2000));
    assert_eq!(subtitles.properties.original_frame_rate(), 50.0);
    assert!(!FrameRateOperator::new(&mut subtitles).change_original(0.0));
}

/// Test the frame and time conversions
#[test]
fn test_timing_util_conversions_shouldBeInverse() {
    let time = timing_util::frames_to_time(50.0, 25.0);
    assert_eq!(time, Duration::seconds(2));
    assert_eq!(timing_util::time_to_frames(time, 25.0), 50.0);
    assert_eq!(timing_util::seconds_to_frames(1.5, 30.0), 45.0);
}

/// Test duration text formatting and parsing
#[test]
fn test_timing_util_duration_text_shouldRoundTrip() {
    let duration = Duration::milliseconds(90_500);
    let text = timing_util::format_duration(duration);
    assert_eq!(text, "00:01:30.500");
    assert_eq!(timing_util::parse_duration(&text), Some(duration));
    assert_eq!(timing_util::parse_duration("garbage"), None);
}
