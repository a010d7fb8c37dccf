//! Caret/selection representation for phone input fields.

/// A text selection as a pair of character offsets.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// selection (`start == end`) is a plain caret. Offsets count characters,
/// not bytes; formatted phone values are ASCII so the two coincide there,
/// but raw field values are not guaranteed to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Start offset of the selection (inclusive).
    pub start: usize,
    /// End offset of the selection (exclusive).
    pub end: usize,
}

impl Selection {
    /// Create a new selection, normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection at `at`.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if the selection is collapsed (zero-width).
    #[inline]
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selection in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the selection is zero-width.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clamp both offsets into `[0, len]`.
    #[inline]
    pub fn clamp_to(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}
