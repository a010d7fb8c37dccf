//! Generic, UI-agnostic identifier for phone fields.
//!
//! A plain `u64` on purpose: no coupling to any DOM or widget-toolkit
//! identifier type. Integration layers provide `From` implementations for
//! their native IDs.

/// Opaque handle for a field within a
/// [`PhoneFieldStore`](crate::PhoneFieldStore).
///
/// The value has no semantic meaning in this crate, it is just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}
