//! # phone_format
//!
//! Incremental phone number punctuation.
//!
//! The centerpiece is [`PhoneFormatter`]: given a raw field value, a
//! country and an ignored dialing prefix, it strips the value down to
//! dialable content and produces a [`PhoneValue`](phone_types::PhoneValue)
//! holding both the pure number and the punctuated display string.
//!
//! Punctuation itself is delegated to an [`IncompleteNumberFormatter`]
//! collaborator. Such formatters routinely fail on partial or odd input;
//! the contract here is graceful degradation: a fault never escapes, the
//! display string just falls back to the unformatted pure number so typing
//! is never blocked.
//!
//! [`TemplateFormatter`] is the built-in collaborator, driven by a small
//! per-country template table behind the [`CountryDirectory`] seam. Hosts
//! with a full metadata-driven formatting library plug it in through the
//! same trait.

mod country;
mod formatter;
mod template;

pub use country::{BuiltinDirectory, CountryDirectory, CountryInfo};
pub use formatter::{
    FormatFault, IncompleteNumberFormatter, PhoneFormatter, clear_invalid_characters,
};
pub use template::TemplateFormatter;
