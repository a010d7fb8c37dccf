//! Host text-field seam.
//!
//! [`FieldBackend`] is the minimal surface the pipeline needs from a real
//! widget: read value and selection, write them back. The pump functions
//! wire a backend to a [`PhoneFieldStore`] so integration layers stay a
//! few lines long.

use crate::id::FieldId;
use crate::store::{FieldUpdate, PhoneFieldStore};
use phone_format::IncompleteNumberFormatter;
use phone_types::Selection;

/// One host text field.
///
/// Selection offsets count characters, matching
/// [`Selection`](phone_types::Selection).
pub trait FieldBackend {
    fn value(&self) -> &str;
    /// `None` when the field has no live caret (unfocused, headless).
    fn selection(&self) -> Option<Selection>;
    fn set_value(&mut self, value: &str);
    fn set_selection(&mut self, selection: Selection);
}

/// Push a [`FieldUpdate`] into the backend. The selection, if any, is
/// clamped to the value actually in the field.
pub fn apply_update<B: FieldBackend>(backend: &mut B, update: &FieldUpdate) {
    backend.set_value(&update.value.number_formatted);
    if let Some(selection) = update.selection {
        let len = backend.value().chars().count();
        backend.set_selection(selection.clamp_to(len));
    }
}

/// Run the pipeline for the backend's current state and write the result
/// back. Call on every input event.
pub fn pump_input<F, B>(store: &mut PhoneFieldStore<F>, id: FieldId, backend: &mut B) -> FieldUpdate
where
    F: IncompleteNumberFormatter,
    B: FieldBackend,
{
    let raw = backend.value().to_string();
    let selection = backend.selection();
    let update = store.handle_input(id, &raw, selection);
    apply_update(backend, &update);
    update
}

/// Collect a deferred selection once the host reports the field settled.
/// Returns `true` if a selection was applied.
pub fn pump_settled<F, B>(store: &mut PhoneFieldStore<F>, id: FieldId, backend: &mut B) -> bool
where
    F: IncompleteNumberFormatter,
    B: FieldBackend,
{
    let Some(selection) = store.take_settled(id, backend.value()) else {
        return false;
    };
    let len = backend.value().chars().count();
    backend.set_selection(selection.clamp_to(len));
    true
}
