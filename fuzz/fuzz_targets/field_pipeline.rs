#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_field::{ApplyPolicy, FieldId, PhoneFieldStore, StoreConfig, TrackerStrategy};
use phone_format::{PhoneFormatter, TemplateFormatter};
use phone_types::{CountryCode, KeyHint, Selection};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let config = StoreConfig {
        tracker: if data[0] & 1 == 0 {
            TrackerStrategy::Heuristic
        } else {
            TrackerStrategy::Alignment
        },
        apply_policy: if data[0] & 2 == 0 {
            ApplyPolicy::Immediate
        } else {
            ApplyPolicy::AfterSettle
        },
    };
    let mut store = PhoneFieldStore::with_config(PhoneFormatter::new(TemplateFormatter::new()), config);
    let id = FieldId::from_raw(1);
    store.set_country(id, CountryCode::new("US"));

    // Each byte is one edit: low bits pick a character, high bit picks the
    // key hint. The field content grows and shrinks like real typing.
    let mut field = String::new();
    for &b in &data[1..] {
        let key = if b & 0x80 == 0 {
            KeyHint::Other
        } else {
            KeyHint::Backspace
        };
        store.note_key(id, key);
        if key == KeyHint::Backspace {
            field.pop();
        } else {
            let c = match b & 0x0f {
                10 => '#',
                11 => '*',
                12 => '+',
                13 => '(',
                14 => '-',
                15 => ' ',
                d => char::from(b'0' + d),
            };
            field.push(c);
        }

        let caret = field.chars().count();
        let update = store.handle_input(id, &field, Some(Selection::caret(caret)));
        let len = update.value.number_formatted.chars().count();
        if let Some(sel) = update.selection {
            assert!(sel.start <= sel.end);
            assert!(sel.end <= len, "selection out of bounds: {sel:?}");
        }
        if update.deferred {
            // Settling on the value just produced must always succeed.
            let settled = store.take_settled(id, &update.value.number_formatted);
            assert!(settled.is_some_and(|sel| sel.end <= len));
        }
        field = update.value.number_formatted;
    }
});
