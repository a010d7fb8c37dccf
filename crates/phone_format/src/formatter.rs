//! Raw field value to [`PhoneValue`] conversion.

use log::debug;
use phone_types::{CountryCode, PhoneValue, has_unformattable_symbols, is_dialable_char};
use std::fmt;

/// Fault raised by an [`IncompleteNumberFormatter`] collaborator.
///
/// Faults never escape [`PhoneFormatter::format`]; they are degraded to
/// the unformatted pure number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatFault {
    /// No metadata for this country.
    UnknownCountry(CountryCode),
    /// More digits than the target pattern can hold.
    TooLong,
    /// The input cannot be punctuated at all (unrecognized calling code,
    /// non-digit content, ...).
    Unformattable,
}

impl fmt::Display for FormatFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry(code) => write!(f, "no formatting metadata for country {code}"),
            Self::TooLong => write!(f, "number exceeds the format pattern"),
            Self::Unformattable => write!(f, "input cannot be punctuated"),
        }
    }
}

impl std::error::Error for FormatFault {}

/// Punctuation collaborator: turns a pure number into a display string.
///
/// Implementations may fail on partial or malformed input; callers must
/// treat any fault as "no formatting possible", never as fatal.
pub trait IncompleteNumberFormatter {
    /// Punctuate `pure` (digits, `#`, `*`, optional leading `+`) for
    /// `country`.
    fn format_incomplete(&self, pure: &str, country: CountryCode) -> Result<String, FormatFault>;
}

impl<F> IncompleteNumberFormatter for F
where
    F: Fn(&str, CountryCode) -> Result<String, FormatFault>,
{
    fn format_incomplete(&self, pure: &str, country: CountryCode) -> Result<String, FormatFault> {
        self(pure, country)
    }
}

/// Strip `raw` down to dialable content: digits, `#`, `*`, plus a `+` kept
/// only from the first position.
pub fn clear_invalid_characters(raw: &str) -> String {
    let plus_first = raw.starts_with('+');
    let cleared: String = raw.chars().filter(|&c| is_dialable_char(c)).collect();
    if plus_first {
        format!("+{cleared}")
    } else {
        cleared
    }
}

/// The formatter half of the engine.
///
/// Owns the punctuation collaborator and implements the full raw-value to
/// [`PhoneValue`] contract, including the ignored-prefix handling: the
/// prefix is prepended before punctuation (so the collaborator sees the
/// complete number) and stripped back out of the display string.
pub struct PhoneFormatter<F> {
    inner: F,
}

impl<F: IncompleteNumberFormatter> PhoneFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// Format `raw` for `country`.
    ///
    /// Never fails:
    /// - without a country the value is echoed back untouched,
    /// - `#`/`*` content bypasses punctuation (the collaborator would drop
    ///   those symbols),
    /// - a collaborator fault falls back to the pure number.
    pub fn format(
        &self,
        raw: &str,
        country: Option<CountryCode>,
        ignored_prefix: &str,
    ) -> PhoneValue {
        let Some(country) = country else {
            return PhoneValue {
                number: raw.to_string(),
                number_formatted: raw.to_string(),
            };
        };

        let cleared = clear_invalid_characters(raw);
        let pure_number = format!("{ignored_prefix}{cleared}");
        if pure_number == ignored_prefix {
            // The user cleared the field; the prefix alone is not content.
            return PhoneValue::empty();
        }

        let number_formatted = if has_unformattable_symbols(raw) {
            strip_prefix_chars(&pure_number, ignored_prefix)
        } else {
            match self.inner.format_incomplete(&pure_number, country) {
                Ok(formatted) => strip_prefix_chars(&formatted, ignored_prefix),
                Err(fault) => {
                    debug!("punctuation failed for {country}: {fault}; using pure number");
                    pure_number.clone()
                }
            }
        };

        PhoneValue {
            number: pure_number,
            number_formatted,
        }
    }
}

/// Drop the first `prefix.chars().count()` characters of `formatted`, then
/// trim surrounding whitespace. The prefix is stripped by length, not by
/// content: punctuation may have been woven through it.
fn strip_prefix_chars(formatted: &str, prefix: &str) -> String {
    let skip = prefix.chars().count();
    let rest: String = formatted.chars().skip(skip).collect();
    rest.trim().to_string()
}
