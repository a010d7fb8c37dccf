#![no_main]

use caret_track::{align_selection, predict_selection};
use libfuzzer_sys::fuzz_target;
use phone_types::{KeyHint, Selection};

fuzz_target!(|data: &[u8]| {
    // Layout: [start][end][key][old...|new...] with a NUL splitting the
    // two values.
    if data.len() < 4 {
        return;
    }
    let start = data[0] as usize;
    let end = data[1] as usize;
    let key = match data[2] % 3 {
        0 => KeyHint::Backspace,
        1 => KeyHint::Unknown,
        _ => KeyHint::Other,
    };
    let rest = &data[3..];
    let split = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    let (Ok(old_value), Ok(new_value)) = (
        std::str::from_utf8(&rest[..split]),
        std::str::from_utf8(&rest[split.min(rest.len() - 1) + 1..]),
    ) else {
        return;
    };

    let selection = Selection::new(start, end);
    let new_len = new_value.chars().count();

    if let Some(sel) = predict_selection(old_value, Some(selection), new_value, key) {
        assert!(sel.start <= sel.end);
        assert!(sel.end <= new_len, "heuristic out of bounds: {sel:?}");
    }

    let sel = align_selection(old_value, new_value, selection);
    assert!(sel.start <= sel.end);
    assert!(sel.end <= new_len, "alignment out of bounds: {sel:?}");
});
