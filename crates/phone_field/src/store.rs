//! Central store for phone field state.
//!
//! The store is UI-agnostic: it never touches a widget. Hosts feed it the
//! raw field value and selection after each edit; it hands back the
//! formatted value and the selection to restore. Per-field state (country,
//! ignored prefix, last key, pending selection) lives here so hosts stay
//! stateless.

use crate::id::FieldId;
use caret_track::{align_selection, predict_selection, unformat_selection};
use log::trace;
use phone_format::{IncompleteNumberFormatter, PhoneFormatter};
use phone_types::{CountryCode, KeyHint, PhoneValue, Selection, has_formatting_chars};
use std::collections::HashMap;

/// Which caret mapping runs after a reformat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerStrategy {
    /// Greedy index-shift mapping; cheap, good for edits at the end.
    #[default]
    Heuristic,
    /// Character-alignment walk; better for mid-string formatting shifts.
    Alignment,
}

/// When the predicted selection reaches the host field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplyPolicy {
    /// Selection is part of the [`FieldUpdate`] and applied right away.
    #[default]
    Immediate,
    /// Selection is parked until the host reports the value has settled.
    /// For toolkits that render the new value asynchronously and would
    /// clobber an immediately-applied caret.
    AfterSettle,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StoreConfig {
    pub tracker: TrackerStrategy,
    pub apply_policy: ApplyPolicy,
}

/// A selection waiting for the host field to settle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSelection {
    pub selection: Selection,
    /// Display string the prediction was computed against. If the field
    /// shows anything else by settle time the prediction is stale.
    pub expected_value: String,
}

#[derive(Clone, Debug, Default)]
struct FieldState {
    country: Option<CountryCode>,
    ignored_prefix: String,
    last_key: KeyHint,
    value: PhoneValue,
    value_rev: u64,
    pending: Option<PendingSelection>,
}

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldUpdate {
    pub value: PhoneValue,
    /// Where the caret should go. `None` when the host reported no live
    /// selection, or when the move was deferred.
    pub selection: Option<Selection>,
    /// `true` when the selection is parked; collect it with
    /// [`PhoneFieldStore::take_settled`].
    pub deferred: bool,
}

/// Formatter plus per-field state, keyed by [`FieldId`].
pub struct PhoneFieldStore<F> {
    formatter: PhoneFormatter<F>,
    config: StoreConfig,
    fields: HashMap<FieldId, FieldState>,
}

impl<F: IncompleteNumberFormatter> PhoneFieldStore<F> {
    pub fn new(formatter: PhoneFormatter<F>) -> Self {
        Self::with_config(formatter, StoreConfig::default())
    }

    pub fn with_config(formatter: PhoneFormatter<F>, config: StoreConfig) -> Self {
        Self {
            formatter,
            config,
            fields: HashMap::new(),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Ensure an entry exists; if missing, inserts one seeded with
    /// `initial` as the field content (echoed, no country yet).
    pub fn ensure_initial(&mut self, id: FieldId, initial: &str) {
        let Self {
            formatter, fields, ..
        } = self;
        fields.entry(id).or_insert_with(|| FieldState {
            value: formatter.format(initial, None, ""),
            ..FieldState::default()
        });
    }

    /// Record the key that is about to produce an input event.
    ///
    /// Consumed by the next [`handle_input`](Self::handle_input) call and
    /// reset to [`KeyHint::Unknown`] afterwards.
    pub fn note_key(&mut self, id: FieldId, key: KeyHint) {
        self.fields.entry(id).or_default().last_key = key;
    }

    /// Run the full pipeline for one edit.
    ///
    /// `raw` is the field content as the host sees it after the edit,
    /// `selection` the post-edit selection (in characters), or `None` when
    /// the field has no live caret.
    pub fn handle_input(
        &mut self,
        id: FieldId,
        raw: &str,
        selection: Option<Selection>,
    ) -> FieldUpdate {
        let Self {
            formatter,
            config,
            fields,
        } = self;
        let st = fields.entry(id).or_default();
        let key = std::mem::take(&mut st.last_key);

        let value = formatter.format(raw, st.country, &st.ignored_prefix);
        let predicted = match config.tracker {
            TrackerStrategy::Heuristic => {
                predict_selection(raw, selection, &value.number_formatted, key)
            }
            TrackerStrategy::Alignment => selection.map(|sel| {
                if has_formatting_chars(raw) && !has_formatting_chars(&value.number_formatted) {
                    // Punctuation no longer applies; the new value is the
                    // old one minus its formatting characters.
                    unformat_selection(raw, sel)
                } else {
                    align_selection(raw, &value.number_formatted, sel)
                }
            }),
        };
        trace!(
            "field {id:?}: {raw:?} -> {:?}, selection {selection:?} -> {predicted:?}",
            value.number_formatted
        );

        st.value = value.clone();
        st.value_rev = st.value_rev.wrapping_add(1);

        match (config.apply_policy, predicted) {
            (ApplyPolicy::AfterSettle, Some(sel)) => {
                st.pending = Some(PendingSelection {
                    selection: sel,
                    expected_value: value.number_formatted.clone(),
                });
                FieldUpdate {
                    value,
                    selection: None,
                    deferred: true,
                }
            }
            (_, predicted) => {
                st.pending = None;
                FieldUpdate {
                    value,
                    selection: predicted,
                    deferred: false,
                }
            }
        }
    }

    /// Collect a parked selection once the host reports the field settled
    /// on `current_value`. A stale prediction (the field moved on) is
    /// dropped, never applied.
    pub fn take_settled(&mut self, id: FieldId, current_value: &str) -> Option<Selection> {
        let st = self.fields.get_mut(&id)?;
        let pending = st.pending.take()?;
        if pending.expected_value != current_value {
            trace!(
                "field {id:?}: stale pending selection dropped (expected {:?}, field shows {current_value:?})",
                pending.expected_value
            );
            return None;
        }
        Some(pending.selection)
    }

    /// Re-run formatting on the current content, e.g. on blur. Any parked
    /// selection is dropped.
    pub fn reformat(&mut self, id: FieldId) -> Option<FieldUpdate> {
        if !self.fields.contains_key(&id) {
            return None;
        }
        Some(self.reformat_current(id))
    }

    /// Switch the field's country and reformat the current content.
    pub fn set_country(&mut self, id: FieldId, country: Option<CountryCode>) -> FieldUpdate {
        self.fields.entry(id).or_default().country = country;
        self.reformat_current(id)
    }

    /// Change the ignored dialing prefix and reformat the current content.
    pub fn set_ignored_prefix(&mut self, id: FieldId, prefix: &str) -> FieldUpdate {
        self.fields.entry(id).or_default().ignored_prefix = prefix.to_string();
        self.reformat_current(id)
    }

    fn reformat_current(&mut self, id: FieldId) -> FieldUpdate {
        let Self {
            formatter, fields, ..
        } = self;
        let st = fields.entry(id).or_default();
        // The display string is the right re-input: the ignored prefix is
        // not part of it, so formatting will not double it up.
        let raw = st.value.number_formatted.clone();
        let value = formatter.format(&raw, st.country, &st.ignored_prefix);
        if value != st.value {
            st.value = value.clone();
            st.value_rev = st.value_rev.wrapping_add(1);
        }
        st.pending = None;
        FieldUpdate {
            value,
            selection: None,
            deferred: false,
        }
    }

    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn value(&self, id: FieldId) -> Option<&PhoneValue> {
        self.fields.get(&id).map(|st| &st.value)
    }

    /// The pure dialable number, prefix included.
    pub fn number(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|st| st.value.number.as_str())
    }

    pub fn formatted(&self, id: FieldId) -> Option<&str> {
        self.fields
            .get(&id)
            .map(|st| st.value.number_formatted.as_str())
    }

    /// Monotonic revision counter for the field's value.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|st| st.value_rev).unwrap_or(0)
    }

    pub fn pending(&self, id: FieldId) -> Option<&PendingSelection> {
        self.fields.get(&id).and_then(|st| st.pending.as_ref())
    }

    /// Drop all field state, typically on navigation.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
