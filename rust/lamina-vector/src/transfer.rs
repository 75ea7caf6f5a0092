//! Buffer ownership transfer between two vectors of the same type.

use crate::element::FixedWidthElement;
use crate::vector::FixedWidthVector;

/// A single-use binding between a source vector and a target vector of the
/// same element type.
///
/// A full [`transfer`](TransferPair::transfer) moves the value buffer and
/// validity bitmap wholesale; no element bytes are duplicated and the
/// source is left in the empty state, still usable as an empty vector.
/// A [`split_and_transfer`](TransferPair::split_and_transfer) copies a
/// sub-range instead, leaving the source untouched. Both consume the pair
/// and yield the target.
///
/// The pair borrows the source mutably for its whole lifetime, so exactly
/// one of source and target owns any buffer at every point; there is no
/// intermediate state with two owners.
#[derive(Debug)]
pub struct TransferPair<'a, T: FixedWidthElement> {
    source: &'a mut FixedWidthVector<T>,
    target: FixedWidthVector<T>,
}

impl<'a, T: FixedWidthElement> TransferPair<'a, T> {
    pub(crate) fn new(
        source: &'a mut FixedWidthVector<T>,
        target: FixedWidthVector<T>,
    ) -> TransferPair<'a, T> {
        debug_assert!(target.is_empty());
        TransferPair { source, target }
    }

    /// Returns the target vector without transferring anything.
    pub fn into_target(self) -> FixedWidthVector<T> {
        self.target
    }

    /// Moves the source's buffers and length into the target and resets the
    /// source to the empty state. No payload bytes are copied.
    pub fn transfer(mut self) -> FixedWidthVector<T> {
        self.target.values = std::mem::take(&mut self.source.values);
        self.target.validity = std::mem::take(&mut self.source.validity);
        self.target.len = self.source.len;
        self.source.len = 0;
        self.target
    }

    /// Copies the slots `[start, start + count)` of the source into the
    /// target, which is sized to exactly `count` slots. The source is left
    /// unmodified, and the two vectors evolve independently afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `start + count` exceeds the source length.
    pub fn split_and_transfer(mut self, start: usize, count: usize) -> FixedWidthVector<T> {
        assert!(
            start + count <= self.source.len,
            "split range {start}..{} exceeds source length {}",
            start + count,
            self.source.len,
        );
        self.target.allocate_new(count);
        self.target.values.copy_range(&self.source.values, start, 0, count);
        self.target.validity.copy_range(&self.source.validity, start, 0, count);
        self.target.len = count;
        self.target
    }

    /// Copies one slot of the source into the target, growing the target
    /// as needed.
    pub fn copy_value_safe(&mut self, from_index: usize, to_index: usize) {
        self.target.copy_from_safe(self.source, from_index, to_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ElementType, Field};
    use crate::holder::NullableHolder;

    fn populated(name: &str) -> FixedWidthVector<i64> {
        let mut vector =
            FixedWidthVector::new(Field::nullable(name, ElementType::TimestampMicro));
        vector.allocate_new(8);
        for i in 0..6 {
            if i % 3 == 1 {
                vector.set(i, &NullableHolder::null()).unwrap();
            } else {
                vector.set(i, &NullableHolder::of(i as i64 * 1_000)).unwrap();
            }
        }
        vector.set_len(6);
        vector
    }

    #[test]
    fn test_full_transfer_moves_contents() {
        let mut source = populated("src");
        let before: Vec<_> = (0..6).map(|i| source.get(i).into_option()).collect();
        let capacity = source.capacity();

        let target = source.get_transfer_pair("dst").transfer();
        assert_eq!(target.name(), "dst");
        assert_eq!(target.len(), 6);
        assert_eq!(target.capacity(), capacity);
        for (i, want) in before.iter().enumerate() {
            assert_eq!(target.get(i).into_option(), *want);
        }

        // The source behaves as an empty vector afterwards.
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
        assert!(source.is_empty());
    }

    #[test]
    fn test_emptied_source_is_reusable() {
        let mut source = populated("src");
        let _target = source.get_transfer_pair("dst").transfer();

        source.set_safe(0, &NullableHolder::of(5)).unwrap();
        source.set_len(1);
        assert_eq!(source.get(0).into_option(), Some(5));
    }

    #[test]
    fn test_split_and_transfer_copies_range() {
        let mut source = populated("src");
        let target = source.get_transfer_pair("split").split_and_transfer(2, 3);

        assert_eq!(target.len(), 3);
        // Source slots 2, 3, 4 hold 2000, 3000, null.
        assert_eq!(target.get(0).into_option(), Some(2_000));
        assert_eq!(target.get(1).into_option(), Some(3_000));
        assert!(target.get(2).is_null());

        // Source is untouched.
        assert_eq!(source.len(), 6);
        assert_eq!(source.get(2).into_option(), Some(2_000));
        assert!(source.get(4).is_null());
    }

    #[test]
    fn test_split_independence() {
        let mut source = populated("src");
        let mut target = source.get_transfer_pair("split").split_and_transfer(0, 2);

        target.set(0, &NullableHolder::of(-1)).unwrap();
        assert_eq!(source.get(0).into_option(), Some(0));

        source.set(1, &NullableHolder::of(99)).unwrap();
        assert!(target.get(1).is_null());
    }

    #[test]
    #[should_panic(expected = "exceeds source length")]
    fn test_split_beyond_length_panics() {
        let mut source = populated("src");
        let _ = source.get_transfer_pair("split").split_and_transfer(4, 3);
    }

    #[test]
    fn test_copy_value_safe() {
        let mut source = populated("src");
        let mut pair = source.get_transfer_pair("dst");
        pair.copy_value_safe(0, 0);
        pair.copy_value_safe(1, 1);
        pair.copy_value_safe(5, 2);
        let mut target = pair.into_target();
        target.set_len(3);

        assert_eq!(target.get(0).into_option(), Some(0));
        assert!(target.get(1).is_null());
        assert_eq!(target.get(2).into_option(), Some(5_000));
    }

    #[test]
    fn test_transfer_pair_with_field() {
        let mut source = populated("src");
        let field = Field::new("renamed", ElementType::TimestampMicro, true);
        let target = source.get_transfer_pair_with_field(field).transfer();
        assert_eq!(target.name(), "renamed");
        assert_eq!(target.field().element_type(), ElementType::TimestampMicro);
    }

    #[test]
    fn test_make_transfer_pair_with_existing_target() {
        let mut source = populated("src");
        let target =
            FixedWidthVector::<i64>::new(Field::nullable("dst", ElementType::TimestampMicro));
        let pair = source.make_transfer_pair(target).unwrap();
        let target = pair.transfer();
        assert_eq!(target.len(), 6);
        assert_eq!(source.len(), 0);
    }
}
