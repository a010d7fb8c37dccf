//! Selection mapping for a display string that loses its formatting.
//!
//! When a reformat produces a bare value (too short or too long to
//! punctuate) while the field still shows a punctuated one, the new string
//! is the old one minus its formatting characters. The selection maps by
//! dropping one position per formatting character at or before it; no
//! alignment walk is needed.

use phone_types::{Selection, is_formatting_char};

/// Map `selection` from `value` onto `value` stripped of its formatting
/// characters.
///
/// Comparisons use the *initial* offsets throughout and are inclusive: a
/// caret sitting exactly on a formatting character counts that character
/// and lands before it in the stripped string. This differs from the first
/// phase of [`predict_selection`](crate::predict_selection), which counts
/// only characters strictly before the caret.
pub fn unformat_selection(value: &str, selection: Selection) -> Selection {
    let initial_start = selection.start as i64;
    let initial_end = selection.end as i64;
    let mut start = initial_start;
    let mut end = initial_end;

    for (i, c) in value.chars().enumerate() {
        if !is_formatting_char(c) {
            continue;
        }
        let i = i as i64;
        if initial_start >= i {
            start -= 1;
            end -= 1;
        } else if initial_end >= i {
            end -= 1;
        }
    }

    let stripped_len = value.chars().filter(|&c| !is_formatting_char(c)).count();
    let clamp = |offset: i64| (offset.max(0) as usize).min(stripped_len);
    Selection::new(clamp(start), clamp(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_drops_preceding_formatting() {
        // "(415) 555" stripped is "415555"; a caret at the end rides along.
        let sel = unformat_selection("(415) 555", Selection::caret(9));
        assert_eq!(sel, Selection::caret(6));
    }

    #[test]
    fn caret_on_formatting_char_counts_it() {
        // Caret at offset 5 sits on the space; inclusive comparison counts
        // "(", ")" and the space itself, landing after "41".
        let sel = unformat_selection("(415) 555", Selection::caret(5));
        assert_eq!(sel, Selection::caret(2));
    }

    #[test]
    fn range_endpoints_shift_independently() {
        // Start sees only "("; end additionally sees ")" and the space.
        let sel = unformat_selection("(415) 555", Selection::new(2, 7));
        assert_eq!(sel, Selection::new(1, 4));
    }

    #[test]
    fn caret_at_origin_stays_clamped() {
        let sel = unformat_selection("(415", Selection::caret(0));
        assert_eq!(sel, Selection::caret(0));
    }

    #[test]
    fn unformatted_value_is_untouched() {
        let sel = unformat_selection("4155", Selection::caret(3));
        assert_eq!(sel, Selection::caret(3));
    }
}
