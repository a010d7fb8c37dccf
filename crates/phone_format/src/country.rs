//! Country metadata seam.
//!
//! The engine only ever consumes a resolved [`CountryInfo`] entry; where
//! the set of countries comes from (static table, host-provided list) is
//! the directory implementation's concern. The built-in directory is
//! deliberately tiny — just enough for the built-in template formatter —
//! and is not a substitute for a full metadata catalogue.

use phone_types::CountryCode;

/// Per-country metadata consumed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code.
    pub code: CountryCode,
    /// International calling code, digits only (`"1"`, `"44"`, ...).
    pub phone_number_code: &'static str,
    /// National as-you-type template; `X` marks a digit slot, everything
    /// else is punctuation.
    pub national_template: &'static str,
}

/// Resolves country metadata.
pub trait CountryDirectory {
    /// All known countries.
    fn entries(&self) -> &[CountryInfo];

    /// Look up a country by its alpha-2 code.
    fn lookup(&self, code: CountryCode) -> Option<&CountryInfo> {
        self.entries().iter().find(|c| c.code == code)
    }

    /// Longest calling-code prefix match for a digit string (no `+`).
    fn match_calling_code(&self, digits: &str) -> Option<&CountryInfo> {
        self.entries()
            .iter()
            .filter(|c| digits.starts_with(c.phone_number_code))
            .max_by_key(|c| c.phone_number_code.len())
    }
}

const BUILTIN: &[CountryInfo] = &[
    CountryInfo {
        code: CountryCode::from_ascii(*b"US"),
        phone_number_code: "1",
        national_template: "(XXX) XXX-XXXX",
    },
    CountryInfo {
        code: CountryCode::from_ascii(*b"CA"),
        phone_number_code: "1",
        national_template: "(XXX) XXX-XXXX",
    },
    CountryInfo {
        code: CountryCode::from_ascii(*b"GB"),
        phone_number_code: "44",
        national_template: "XXXX XXX XXXX",
    },
    CountryInfo {
        code: CountryCode::from_ascii(*b"DE"),
        phone_number_code: "49",
        national_template: "XXXXX XXXXXXX",
    },
    CountryInfo {
        code: CountryCode::from_ascii(*b"FR"),
        phone_number_code: "33",
        national_template: "X XX XX XX XX",
    },
    CountryInfo {
        code: CountryCode::from_ascii(*b"RO"),
        phone_number_code: "40",
        national_template: "XXX XXX XXX",
    },
];

/// Minimal built-in directory backing [`TemplateFormatter`]'s defaults.
///
/// [`TemplateFormatter`]: crate::TemplateFormatter
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinDirectory;

impl CountryDirectory for BuiltinDirectory {
    fn entries(&self) -> &[CountryInfo] {
        BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        let us = CountryCode::new("US").unwrap();
        let info = BuiltinDirectory.lookup(us).unwrap();
        assert_eq!(info.phone_number_code, "1");

        let zz = CountryCode::new("ZZ").unwrap();
        assert!(BuiltinDirectory.lookup(zz).is_none());
    }

    #[test]
    fn calling_code_prefers_longest_match() {
        // "44..." must resolve to GB ("44"), not a hypothetical "4".
        let info = BuiltinDirectory.match_calling_code("442079460958").unwrap();
        assert_eq!(info.code, CountryCode::new("GB").unwrap());

        let info = BuiltinDirectory.match_calling_code("14155550123").unwrap();
        assert_eq!(info.phone_number_code, "1");

        assert!(BuiltinDirectory.match_calling_code("999").is_none());
    }
}
