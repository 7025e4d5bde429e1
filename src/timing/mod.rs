/*!
 * Timing operators.
 *
 * Operators borrow a [`Subtitles`](crate::domain::Subtitles) document mutably
 * for one operation and report precondition failures with a `false` return;
 * nothing is changed when a precondition fails.
 */

pub mod adjust;
pub mod frame_rate;
pub mod merge;
pub mod shift;
pub mod split;
pub mod sync_util;
pub mod synchronize;
pub mod timing_util;

pub use adjust::AdjustOperator;
pub use frame_rate::FrameRateOperator;
pub use merge::MergeOperator;
pub use shift::ShiftOperator;
pub use split::SplitOperator;
pub use synchronize::SynchronizeOperator;
