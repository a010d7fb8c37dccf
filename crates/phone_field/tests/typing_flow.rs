//! End-to-end typing flows through a fake text field.

use phone_field::{
    ApplyPolicy, FieldBackend, FieldId, PhoneFieldStore, StoreConfig, pump_input, pump_settled,
};
use phone_format::{PhoneFormatter, TemplateFormatter};
use phone_types::{CountryCode, KeyHint, Selection};

/// In-memory stand-in for a host text field.
#[derive(Default)]
struct FakeField {
    value: String,
    selection: Option<Selection>,
}

impl FakeField {
    fn caret(&self) -> usize {
        self.selection.map(|sel| sel.end).unwrap_or(0)
    }

    /// Simulate typing `c` at the caret, as the host field would before
    /// the input event fires.
    fn type_char(&mut self, c: char) {
        let at = self.caret();
        let mut chars: Vec<char> = self.value.chars().collect();
        chars.insert(at.min(chars.len()), c);
        self.value = chars.into_iter().collect();
        self.selection = Some(Selection::caret(at + 1));
    }

    /// Simulate a backspace at the caret.
    fn press_backspace(&mut self) {
        let at = self.caret();
        if at == 0 {
            return;
        }
        let mut chars: Vec<char> = self.value.chars().collect();
        chars.remove(at - 1);
        self.value = chars.into_iter().collect();
        self.selection = Some(Selection::caret(at - 1));
    }
}

impl FieldBackend for FakeField {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }
}

fn store() -> PhoneFieldStore<TemplateFormatter> {
    PhoneFieldStore::new(PhoneFormatter::new(TemplateFormatter::new()))
}

fn us() -> Option<CountryCode> {
    CountryCode::new("US")
}

#[test]
fn typing_a_us_number_keeps_the_caret_at_the_end() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    for digit in "4155550123".chars() {
        store.note_key(id, KeyHint::Other);
        field.type_char(digit);
        pump_input(&mut store, id, &mut field);
        // The caret rides the end of the display through every reformat.
        assert_eq!(
            field.selection,
            Some(Selection::caret(field.value.chars().count())),
            "caret lost at {:?}",
            field.value
        );
    }

    assert_eq!(field.value, "(415) 555-0123");
    assert_eq!(store.number(id), Some("4155550123"));
}

#[test]
fn punctuation_appears_at_the_fourth_digit() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    for digit in "415".chars() {
        store.note_key(id, KeyHint::Other);
        field.type_char(digit);
        pump_input(&mut store, id, &mut field);
    }
    assert_eq!(field.value, "415");

    store.note_key(id, KeyHint::Other);
    field.type_char('5');
    pump_input(&mut store, id, &mut field);
    assert_eq!(field.value, "(415) 5");
    assert_eq!(field.selection, Some(Selection::caret(7)));
}

#[test]
fn backspace_collapses_dangling_punctuation() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    for digit in "4155550".chars() {
        store.note_key(id, KeyHint::Other);
        field.type_char(digit);
        pump_input(&mut store, id, &mut field);
    }
    assert_eq!(field.value, "(415) 555-0");

    // Deleting the digit after the hyphen drops the hyphen too, and the
    // caret lands on the last remaining digit.
    store.note_key(id, KeyHint::Backspace);
    field.press_backspace();
    pump_input(&mut store, id, &mut field);
    assert_eq!(field.value, "(415) 555");
    assert_eq!(field.selection, Some(Selection::caret(9)));

    store.note_key(id, KeyHint::Backspace);
    field.press_backspace();
    pump_input(&mut store, id, &mut field);
    assert_eq!(field.value, "(415) 55");
    assert_eq!(field.selection, Some(Selection::caret(8)));
}

#[test]
fn pasted_number_with_dialing_prefix() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());
    store.set_ignored_prefix(id, "1");

    // Paste the whole national number in one input event.
    field.set_value("4155550123");
    field.set_selection(Selection::caret(10));
    store.note_key(id, KeyHint::Other);
    let update = pump_input(&mut store, id, &mut field);

    assert_eq!(field.value, "(415) 555-0123");
    assert_eq!(field.selection, Some(Selection::caret(14)));
    assert_eq!(update.value.number, "14155550123");
}

#[test]
fn typing_digit_by_digit_with_dialing_prefix() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());
    store.set_ignored_prefix(id, "1");

    for digit in "4155550123".chars() {
        store.note_key(id, KeyHint::Other);
        field.type_char(digit);
        pump_input(&mut store, id, &mut field);
        // The prefix digit never surfaces in the display, and the display
        // never ends in half-stripped punctuation.
        assert!(!field.value.starts_with('1'), "prefix leaked into {:?}", field.value);
        assert!(
            field.value.ends_with(|c: char| c.is_ascii_digit()),
            "dangling punctuation in {:?}",
            field.value
        );
        assert_eq!(
            field.selection,
            Some(Selection::caret(field.value.chars().count())),
            "caret lost at {:?}",
            field.value
        );
    }

    assert_eq!(field.value, "(415) 555-0123");
    assert_eq!(store.number(id), Some("14155550123"));
}

#[test]
fn clearing_a_prefixed_field_yields_empty() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());
    store.set_ignored_prefix(id, "1");

    field.set_value("");
    field.set_selection(Selection::caret(0));
    let update = pump_input(&mut store, id, &mut field);

    assert!(update.value.is_empty());
    assert_eq!(field.value, "");
    assert_eq!(store.number(id), Some(""));
}

#[test]
fn service_codes_pass_through_unpunctuated() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    for c in "*31#".chars() {
        store.note_key(id, KeyHint::Other);
        field.type_char(c);
        pump_input(&mut store, id, &mut field);
    }

    assert_eq!(field.value, "*31#");
    assert_eq!(field.selection, Some(Selection::caret(4)));
    assert_eq!(store.number(id), Some("*31#"));
}

#[test]
fn no_country_leaves_the_field_alone() {
    let mut store = store();
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);

    field.set_value("(415) abc");
    field.set_selection(Selection::caret(9));
    pump_input(&mut store, id, &mut field);

    assert_eq!(field.value, "(415) abc");
    assert_eq!(store.number(id), Some("(415) abc"));
}

#[test]
fn deferred_selection_applies_once_settled() {
    let mut store = PhoneFieldStore::with_config(
        PhoneFormatter::new(TemplateFormatter::new()),
        StoreConfig {
            apply_policy: ApplyPolicy::AfterSettle,
            ..StoreConfig::default()
        },
    );
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    field.set_value("4155");
    field.set_selection(Selection::caret(4));
    store.note_key(id, KeyHint::Other);
    let update = pump_input(&mut store, id, &mut field);

    // Value applied, caret parked.
    assert!(update.deferred);
    assert_eq!(field.value, "(415) 5");
    assert_eq!(field.selection, Some(Selection::caret(4)));

    assert!(pump_settled(&mut store, id, &mut field));
    assert_eq!(field.selection, Some(Selection::caret(7)));

    // Nothing left to collect.
    assert!(!pump_settled(&mut store, id, &mut field));
}

#[test]
fn stale_deferred_selection_never_applies() {
    let mut store = PhoneFieldStore::with_config(
        PhoneFormatter::new(TemplateFormatter::new()),
        StoreConfig {
            apply_policy: ApplyPolicy::AfterSettle,
            ..StoreConfig::default()
        },
    );
    let mut field = FakeField::default();
    let id = FieldId::from_raw(1);
    store.set_country(id, us());

    field.set_value("4155");
    field.set_selection(Selection::caret(4));
    pump_input(&mut store, id, &mut field);

    // The field content changed again before the settle callback ran.
    field.set_value("(415) 55");
    field.set_selection(Selection::caret(8));
    assert!(!pump_settled(&mut store, id, &mut field));
    assert_eq!(field.selection, Some(Selection::caret(8)));
}
