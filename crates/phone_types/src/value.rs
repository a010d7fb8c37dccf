//! The two views of a phone number kept in sync by the formatter.

/// Normalized number plus its punctuated display form.
///
/// `number` holds only digits, `#`, `*` and at most a single leading `+`
/// (with any ignored prefix prepended); `number_formatted` is what the text
/// field displays, derived deterministically from `number`, the country
/// code and the ignored prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneValue {
    /// Pure dialable content, prefix included.
    pub number: String,
    /// Punctuated display string, prefix stripped back out.
    pub number_formatted: String,
}

impl PhoneValue {
    /// The empty value (cleared field).
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if there is no user content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number.is_empty() && self.number_formatted.is_empty()
    }
}
