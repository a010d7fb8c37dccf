//! Character classification shared by the formatter and the caret tracker.
//!
//! Both halves of the engine must agree on what counts as a formatting
//! character; keeping the predicate in one place prevents the two
//! definitions from drifting apart.

use std::borrow::Cow;

/// Returns `true` for characters the formatter may insert or remove on its
/// own: `(`, `)`, `-` and space.
///
/// The user never types these as dialable content; the caret tracker treats
/// them as transparent when mapping a selection between display strings.
#[inline]
pub fn is_formatting_char(c: char) -> bool {
    matches!(c, '(' | ')' | '-' | ' ')
}

/// Returns `true` for characters that are meaningful in a dialed number:
/// ASCII digits plus `#` and `*`.
#[inline]
pub fn is_dialable_char(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Returns `true` if `s` contains `#` or `*` — dialable symbols that
/// punctuation formatters do not understand.
#[inline]
pub fn has_unformattable_symbols(s: &str) -> bool {
    s.contains(['#', '*'])
}

/// Returns `true` if `s` contains any formatting character.
#[inline]
pub fn has_formatting_chars(s: &str) -> bool {
    s.chars().any(is_formatting_char)
}

/// Remove every formatting character from `s`.
///
/// Returns `Cow::Borrowed` when there is nothing to strip (fast path).
pub fn strip_formatting(s: &str) -> Cow<'_, str> {
    if !has_formatting_chars(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&c| !is_formatting_char(c)).collect())
}
