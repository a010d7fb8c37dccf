//! Alignment-walk caret preservation.
//!
//! Walks the old value up to the selection end while keeping a cursor into
//! the new value, shifting the selection right for characters the new value
//! inserted and pulling it back for characters that disappeared. This
//! tracks formatting that moves in the middle of the string better than the
//! index-shift heuristic, but it is a single forward pass with no
//! backtracking: when the same digit recurs around a formatting boundary
//! the walk can re-anchor on a later occurrence and overshoot (see the
//! `vanished_character_overshoots` test).

use phone_types::Selection;

/// Map `old_selection` from `old_value` onto `new_value`.
///
/// Both offsets of the result are clamped into `[0, new_value_len]`.
pub fn align_selection(old_value: &str, new_value: &str, old_selection: Selection) -> Selection {
    let old: Vec<char> = old_value.chars().collect();
    let new: Vec<char> = new_value.chars().collect();

    let mut start = old_selection.start as i64;
    let mut end = old_selection.end as i64;
    let walk_end = (end.max(0) as usize).min(old.len());

    let mut new_cursor = 0usize;
    for &current in old.iter().take(walk_end) {
        if new.get(new_cursor) == Some(&current) {
            new_cursor += 1;
            continue;
        }
        if new_cursor >= new.len() {
            continue;
        }

        // Search forward for the next occurrence of `current`; everything
        // skipped on the way was inserted before the selection and pushes
        // the offsets right.
        let mut j = new_cursor;
        let mut shifted_start = start;
        let mut shifted_end = end;
        while j < new.len() && new[j] != current {
            if (j as i64) <= shifted_start {
                shifted_start += 1;
            }
            if (j as i64) <= shifted_end {
                shifted_end += 1;
            }
            j += 1;
        }

        if j < new.len() {
            start = shifted_start;
            end = shifted_end;
            new_cursor = j + 1;
        } else {
            // `current` no longer exists anywhere ahead in the new value.
            start -= 1;
            end -= 1;
        }
    }

    let clamp = |v: i64| (v.max(0) as usize).min(new.len());
    Selection::new(clamp(start), clamp(end))
}
