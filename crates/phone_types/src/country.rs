//! ISO 3166-1 alpha-2 country identifier.

use std::fmt;
use std::str::FromStr;

/// Two-letter country code, normalized to upper case.
///
/// Absence of a country is modeled as `Option<CountryCode>` at call sites;
/// an "empty" code is not representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse from a two-letter code. Returns `None` unless `s` is exactly
    /// two ASCII letters.
    pub fn new(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Some(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => None,
        }
    }

    /// Const constructor for static tables; `code` must be two ASCII
    /// letters.
    pub const fn from_ascii(code: [u8; 2]) -> Self {
        Self([code[0].to_ascii_uppercase(), code[1].to_ascii_uppercase()])
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({self})")
    }
}

impl FromStr for CountryCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(())
    }
}
