//! # phone_types
//!
//! Shared leaf types for the phone input engine.
//!
//! This crate holds the vocabulary the formatter and the caret tracker have
//! to agree on:
//! - [`Selection`]: a caret or highlighted range as character offsets
//! - [`PhoneValue`]: the pure-number/display-string pair
//! - [`CountryCode`]: ISO 3166-1 alpha-2 country identifier
//! - [`KeyHint`]: the last-pressed-key hint driving caret settling
//! - [`is_formatting_char`]: the single source of truth for what counts as
//!   a formatting character
//!
//! It depends only on `std` so both halves of the engine (and host
//! integrations) can share it without pulling anything else in.

mod chars;
mod country;
mod key;
mod selection;
mod value;

pub use chars::{
    has_formatting_chars, has_unformattable_symbols, is_dialable_char, is_formatting_char,
    strip_formatting,
};
pub use country::CountryCode;
pub use key::KeyHint;
pub use selection::Selection;
pub use value::PhoneValue;
