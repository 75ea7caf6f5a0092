//! Bit-packed validity tracking, one bit per logical slot.

use lamina_bits::bitops;
use lamina_bytes::buffer::AlignedByteVec;

/// A packed bit array tracking the null state of each slot: bit `i` set
/// means slot `i` holds a value, clear means the slot is null.
///
/// The bitmap grows independently of the value buffer it accompanies and
/// always exposes at least `capacity` addressable bits. Single-bit access
/// performs no bounds checking beyond a debug assertion; the owning vector
/// guarantees the range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityBitmap {
    bits: AlignedByteVec,
    capacity: usize,
}

impl ValidityBitmap {
    /// Creates an empty bitmap without allocating.
    pub fn new() -> ValidityBitmap {
        ValidityBitmap {
            bits: AlignedByteVec::new(),
            capacity: 0,
        }
    }

    /// Creates a bitmap of `capacity` bits, all clear (null).
    pub fn with_capacity(capacity: usize) -> ValidityBitmap {
        ValidityBitmap {
            bits: AlignedByteVec::zeroed(capacity.div_ceil(8)),
            capacity,
        }
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Marks slot `index` valid.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        bitops::set_bit(&mut self.bits, index);
    }

    /// Marks slot `index` null.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        bitops::unset_bit(&mut self.bits, index);
    }

    /// Returns `true` if slot `index` is valid.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.capacity);
        bitops::get_bit(&self.bits, index)
    }

    /// Grows the bitmap to at least `new_capacity` bits. Newly added bits
    /// are clear (null); existing bits are preserved. Never shrinks.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.bits.resize(new_capacity.div_ceil(8), 0);
        self.capacity = new_capacity;
    }

    /// Counts the valid slots among the first `len` bits.
    pub fn count_set(&self, len: usize) -> usize {
        assert!(len <= self.capacity);
        bitops::count_set_bits(&self.bits, len)
    }

    /// Copies `count` bits from `src` starting at `src_start` into this
    /// bitmap starting at `dst_start`. Bits outside the destination range
    /// are untouched.
    pub fn copy_range(&mut self, src: &ValidityBitmap, src_start: usize, dst_start: usize, count: usize) {
        assert!(src_start + count <= src.capacity);
        assert!(dst_start + count <= self.capacity);
        bitops::copy_bits(&src.bits, src_start, &mut self.bits, dst_start, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bits_are_null() {
        let bitmap = ValidityBitmap::with_capacity(20);
        assert_eq!(bitmap.capacity(), 20);
        for i in 0..20 {
            assert!(!bitmap.get(i));
        }
    }

    #[test]
    fn test_set_unset_get() {
        let mut bitmap = ValidityBitmap::with_capacity(16);
        bitmap.set(0);
        bitmap.set(9);
        bitmap.set(15);
        assert!(bitmap.get(0));
        assert!(!bitmap.get(1));
        assert!(bitmap.get(9));
        assert!(bitmap.get(15));

        bitmap.unset(9);
        assert!(!bitmap.get(9));
        assert!(bitmap.get(0));
        assert!(bitmap.get(15));
    }

    #[test]
    fn test_grow_preserves_and_nulls() {
        let mut bitmap = ValidityBitmap::with_capacity(4);
        bitmap.set(1);
        bitmap.set(3);

        bitmap.grow(100);
        assert_eq!(bitmap.capacity(), 100);
        assert!(!bitmap.get(0));
        assert!(bitmap.get(1));
        assert!(!bitmap.get(2));
        assert!(bitmap.get(3));
        for i in 4..100 {
            assert!(!bitmap.get(i));
        }

        // Growing to a smaller capacity is a no-op.
        bitmap.grow(10);
        assert_eq!(bitmap.capacity(), 100);
    }

    #[test]
    fn test_count_set() {
        let mut bitmap = ValidityBitmap::with_capacity(12);
        for i in [0, 2, 4, 10] {
            bitmap.set(i);
        }
        assert_eq!(bitmap.count_set(12), 4);
        assert_eq!(bitmap.count_set(5), 3);
        assert_eq!(bitmap.count_set(0), 0);
    }

    #[test]
    fn test_copy_range() {
        let mut src = ValidityBitmap::with_capacity(16);
        for i in [1, 3, 5, 7, 11] {
            src.set(i);
        }
        let mut dst = ValidityBitmap::with_capacity(8);
        dst.set(0);
        dst.copy_range(&src, 3, 1, 6);
        // Source bits 3..9 are 1,0,1,0,1,0.
        assert!(dst.get(0));
        assert!(dst.get(1));
        assert!(!dst.get(2));
        assert!(dst.get(3));
        assert!(!dst.get(4));
        assert!(dst.get(5));
        assert!(!dst.get(6));
        assert!(!dst.get(7));
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut bitmap = ValidityBitmap::with_capacity(8);
        bitmap.set(2);
        let taken = std::mem::take(&mut bitmap);
        assert_eq!(taken.capacity(), 8);
        assert!(taken.get(2));
        assert_eq!(bitmap.capacity(), 0);
    }
}
