//! Index-shift caret prediction.
//!
//! Maps a selection from the previously displayed value onto a freshly
//! formatted value in three passes: normalize the old formatting characters
//! out of the offsets, re-project onto the new formatting, then slide a
//! caret resting on a formatting character off it.

use phone_types::{KeyHint, Selection, is_formatting_char};

/// Predict where `old_selection` lands in `new_value`.
///
/// `old_raw` is the field value as displayed before this reformat,
/// including its own formatting characters and whatever the user just
/// typed or deleted. `None` for the selection means the host field has no
/// live caret (unfocused widget, headless evaluation); it is passed through
/// untouched rather than treated as an error.
///
/// The mapping is intentionally greedy and local: formatting characters
/// strictly before an offset shift it, everything else leaves it alone. No
/// full alignment between the two strings is attempted here; see
/// [`align_selection`](crate::align_selection) for that trade-off.
pub fn predict_selection(
    old_raw: &str,
    old_selection: Option<Selection>,
    new_value: &str,
    key: KeyHint,
) -> Option<Selection> {
    let sel = old_selection?;
    let mut start = sel.start as i64;
    let mut end = sel.end as i64;

    // Pass 1: convert from old display offsets to pure-content offsets.
    // A formatting character ahead of the selection will not exist in the
    // pure coordinate space, so it pulls the offsets left.
    let (init_start, init_end) = (start, end);
    for (i, c) in old_raw.chars().enumerate() {
        if !is_formatting_char(c) {
            continue;
        }
        let i = i as i64;
        if init_start > i {
            start -= 1;
            end -= 1;
        } else if init_end > i {
            end -= 1;
        }
    }

    let new_chars: Vec<char> = new_value.chars().collect();

    // Pass 2: push the selection right past formatting characters the new
    // value inserts before it. The scan is bounded by the live `end`, so
    // each shift extends the window.
    let mut i = 0i64;
    while (i as usize) < new_chars.len() && i <= end {
        if is_formatting_char(new_chars[i as usize]) {
            if start > i {
                start += 1;
                end += 1;
            } else if end > i {
                end += 1;
            }
        }
        i += 1;
    }

    // Pass 3: a caret resting on a formatting character slides off it,
    // backward when deleting and forward otherwise. Whether the selection
    // is collapsed is sampled here, after pass 2.
    let collapsed = start == end;
    let step: i64 = if key.settles_backward() { -1 } else { 1 };
    let mut idx = (end - 1).max(0);
    while idx >= 0
        && (idx as usize) < new_chars.len()
        && is_formatting_char(new_chars[idx as usize])
    {
        end += step;
        if collapsed {
            start += step;
        }
        idx += step;
    }

    Some(clamped(start, end, new_chars.len()))
}

fn clamped(start: i64, end: i64, len: usize) -> Selection {
    let clamp = |v: i64| (v.max(0) as usize).min(len);
    Selection::new(clamp(start), clamp(end))
}
