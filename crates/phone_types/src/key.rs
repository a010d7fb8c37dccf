//! Last-pressed-key hint.

/// Hint about the key that produced the current input event.
///
/// The caret tracker only needs to know which way the caret should settle
/// when it lands on a run of formatting characters. With no key
/// information at all it settles backward, the same as a backspace, so a
/// caret never gets pushed past content it did not touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyHint {
    /// Backward deletion.
    Backspace,
    /// No key information available.
    #[default]
    Unknown,
    /// Any other key (typed character, Delete, paste, ...).
    Other,
}

impl KeyHint {
    /// `true` if the caret settles backward over formatting runs.
    #[inline]
    pub fn settles_backward(self) -> bool {
        matches!(self, Self::Backspace | Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_direction() {
        assert!(KeyHint::Backspace.settles_backward());
        assert!(KeyHint::Unknown.settles_backward());
        assert!(!KeyHint::Other.settles_backward());
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(KeyHint::default(), KeyHint::Unknown);
    }
}
