//! Template-driven incomplete-number punctuation.
//!
//! Each country carries a national template (`"(XXX) XXX-XXXX"`) where `X`
//! marks a digit slot. Punctuation is buffered while filling and only
//! emitted when another digit follows, so a partial number never ends in a
//! dangling `"-"` or `") "` run.

use crate::country::{BuiltinDirectory, CountryDirectory, CountryInfo};
use crate::formatter::{FormatFault, IncompleteNumberFormatter};
use phone_types::CountryCode;

/// Below this many digits the input is returned bare; punctuating one or
/// two digits just gets in the way of editing.
const MIN_DIGITS_FOR_PUNCTUATION: usize = 4;

/// Built-in [`IncompleteNumberFormatter`] backed by a [`CountryDirectory`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateFormatter<D = BuiltinDirectory> {
    directory: D,
}

impl TemplateFormatter<BuiltinDirectory> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: CountryDirectory> TemplateFormatter<D> {
    pub fn with_directory(directory: D) -> Self {
        Self { directory }
    }

    /// `+`-prefixed input: resolve the calling code, punctuate the national
    /// remainder with that country's template.
    fn format_international(&self, digits: &str) -> Result<String, FormatFault> {
        if digits.is_empty() {
            return Ok("+".to_string());
        }
        let info = self
            .directory
            .match_calling_code(digits)
            .ok_or(FormatFault::Unformattable)?;
        let national = &digits[info.phone_number_code.len()..];
        if national.is_empty() {
            return Ok(format!("+{}", info.phone_number_code));
        }
        let filled = format_national(national, info)?;
        Ok(format!("+{} {filled}", info.phone_number_code))
    }
}

impl<D: CountryDirectory> IncompleteNumberFormatter for TemplateFormatter<D> {
    fn format_incomplete(&self, pure: &str, country: CountryCode) -> Result<String, FormatFault> {
        if let Some(rest) = pure.strip_prefix('+') {
            if !rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(FormatFault::Unformattable);
            }
            return self.format_international(rest);
        }

        if !pure.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormatFault::Unformattable);
        }
        let info = self
            .directory
            .lookup(country)
            .ok_or(FormatFault::UnknownCountry(country))?;
        format_with_trunk(pure, info)
    }
}

/// National formatting with the calling code or a trunk `0` split off
/// whenever the digits carry one, not only on slot overflow. The split
/// digits stay out of the template's slots, so a caller stripping a
/// dialing prefix by length removes exactly those digits and never cuts
/// into punctuation.
fn format_with_trunk(digits: &str, info: &CountryInfo) -> Result<String, FormatFault> {
    let trunk = if digits.starts_with(info.phone_number_code) {
        info.phone_number_code
    } else if digits.starts_with('0') {
        "0"
    } else {
        return format_national(digits, info);
    };
    let national = &digits[trunk.len()..];
    if national.is_empty() {
        return Ok(digits.to_string());
    }
    let filled = format_national(national, info)?;
    Ok(format!("{trunk} {filled}"))
}

fn format_national(digits: &str, info: &CountryInfo) -> Result<String, FormatFault> {
    if digits.len() < MIN_DIGITS_FOR_PUNCTUATION {
        return Ok(digits.to_string());
    }
    if digits.len() > slot_count(info.national_template) {
        return Err(FormatFault::TooLong);
    }
    Ok(fill_template(digits, info.national_template))
}

fn slot_count(template: &str) -> usize {
    template.chars().filter(|&c| c == 'X').count()
}

/// Fill `template` left to right. Punctuation is held in `pending` and
/// flushed only when a digit lands after it. `digits` must fit; the caller
/// checked the slot count.
fn fill_template(digits: &str, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut pending = String::new();
    let mut feed = digits.chars();

    for slot in template.chars() {
        if slot != 'X' {
            pending.push(slot);
            continue;
        }
        let Some(digit) = feed.next() else {
            break;
        };
        out.push_str(&pending);
        pending.clear();
        out.push(digit);
    }
    out
}
