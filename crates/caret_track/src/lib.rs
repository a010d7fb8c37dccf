//! # caret_track
//!
//! Caret preservation across reformatting of phone input values.
//!
//! Every keystroke replaces the whole display string of a phone field, and
//! formatting characters appear and disappear depending on how much of the
//! number has been typed. This crate maps the user's selection from the old
//! display string onto the new one so the caret rides along with the edit
//! point instead of jumping to either end.
//!
//! Two algorithms are provided:
//! - [`predict_selection`]: a local index-shift heuristic. Fast and simple;
//!   handles formatting inserted or removed before the selection by
//!   counting, then slides the caret off any formatting run it landed on.
//! - [`align_selection`]: a single-pass alignment walk between the old and
//!   new strings. More robust when formatting moves in the middle of the
//!   value, at the cost of possible misalignment on repeated digit
//!   sequences (see the module docs of [`align`]).
//! - [`unformat_selection`] covers the degenerate case where the new value
//!   is the old one stripped of its formatting characters.
//!
//! Both are pure, re-entrant functions over character offsets; neither
//! holds state between calls.

pub mod align;
pub mod heuristic;
pub mod reset;

pub use align::align_selection;
pub use heuristic::predict_selection;
pub use reset::unformat_selection;
