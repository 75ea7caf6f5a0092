//! Transient value holders crossing the get/set boundary.

use crate::element::FixedWidthElement;

/// A nullable value holder: a tri-state validity flag plus a raw value.
///
/// The flag is negative for an invalid holder (rejected by `set`), zero for
/// null and positive for a present value. Holders are plain values passed
/// into setters and returned from getters; they are never retained by a
/// vector. When the flag is zero or negative the `value` field carries no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullableHolder<T: FixedWidthElement> {
    pub is_set: i32,
    pub value: T,
}

impl<T: FixedWidthElement> NullableHolder<T> {
    /// Creates a holder carrying a present value.
    #[inline]
    pub fn of(value: T) -> NullableHolder<T> {
        NullableHolder { is_set: 1, value }
    }

    /// Creates a null holder.
    #[inline]
    pub fn null() -> NullableHolder<T> {
        NullableHolder {
            is_set: 0,
            value: T::zeroed(),
        }
    }

    /// Returns `true` if the holder carries a present value.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.is_set > 0
    }

    /// Returns `true` if the holder represents null.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_set == 0
    }

    /// Converts the holder into an optional value, mapping both null and
    /// invalid states to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.is_present().then_some(self.value)
    }
}

impl<T: FixedWidthElement> From<Option<T>> for NullableHolder<T> {
    fn from(value: Option<T>) -> NullableHolder<T> {
        match value {
            Some(value) => NullableHolder::of(value),
            None => NullableHolder::null(),
        }
    }
}

/// A non-nullable value holder; no null path exists for this holder kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holder<T: FixedWidthElement> {
    pub value: T,
}

impl<T: FixedWidthElement> Holder<T> {
    /// Creates a holder carrying `value`.
    #[inline]
    pub fn of(value: T) -> Holder<T> {
        Holder { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_holder_states() {
        let present = NullableHolder::of(42i64);
        assert!(present.is_present());
        assert!(!present.is_null());
        assert_eq!(present.into_option(), Some(42));

        let null = NullableHolder::<i64>::null();
        assert!(!null.is_present());
        assert!(null.is_null());
        assert_eq!(null.into_option(), None);

        let invalid = NullableHolder { is_set: -1, value: 7i64 };
        assert!(!invalid.is_present());
        assert!(!invalid.is_null());
        assert_eq!(invalid.into_option(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(NullableHolder::from(Some(1i32)), NullableHolder::of(1i32));
        assert_eq!(NullableHolder::from(None::<i32>), NullableHolder::null());
    }
}
