//! # phone_field
//!
//! Field-level glue for the phone input engine: per-field state keyed by
//! [`FieldId`], the format-then-track pipeline, and the seam to host text
//! fields.
//!
//! The flow per input event:
//!
//! 1. the host records the pressed key with
//!    [`PhoneFieldStore::note_key`] (keydown),
//! 2. after the edit lands it calls
//!    [`PhoneFieldStore::handle_input`] with the raw value and selection,
//! 3. the returned [`FieldUpdate`] carries the formatted value and the
//!    selection to restore, either inline or deferred until the field
//!    settles depending on [`ApplyPolicy`].
//!
//! Hosts with a concrete text widget implement [`FieldBackend`] and use
//! [`pump_input`]/[`pump_settled`] instead of driving the store by hand.

mod backend;
mod id;
mod store;

pub use backend::{FieldBackend, apply_update, pump_input, pump_settled};
pub use id::FieldId;
pub use store::{
    ApplyPolicy, FieldUpdate, PendingSelection, PhoneFieldStore, StoreConfig, TrackerStrategy,
};
