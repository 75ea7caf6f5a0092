//! Typed positional storage over a raw byte buffer.

use std::marker::PhantomData;

use lamina_bytes::buffer::AlignedByteVec;

use crate::element::FixedWidthElement;

/// A byte region interpreted as an array of `T`, translating a slot index
/// to the byte offset `index * size_of::<T>()`.
///
/// The buffer carries no null semantics; every slot below `capacity` is
/// readable and writable regardless of validity. The backing bytes always
/// span exactly `capacity * size_of::<T>()`, zero-filled on growth.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthBuffer<T: FixedWidthElement> {
    data: AlignedByteVec,
    _type: PhantomData<T>,
}

impl<T: FixedWidthElement> Default for FixedWidthBuffer<T> {
    fn default() -> Self {
        FixedWidthBuffer::new()
    }
}

impl<T: FixedWidthElement> FixedWidthBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> FixedWidthBuffer<T> {
        FixedWidthBuffer {
            data: AlignedByteVec::new(),
            _type: PhantomData,
        }
    }

    /// Creates a buffer of `capacity` zeroed slots.
    pub fn with_capacity(capacity: usize) -> FixedWidthBuffer<T> {
        FixedWidthBuffer {
            data: AlignedByteVec::zeroed(capacity * T::WIDTH),
            _type: PhantomData,
        }
    }

    /// Returns the number of addressable slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len() / T::WIDTH
    }

    /// Reads the value at `index`.
    #[inline]
    pub fn read(&self, index: usize) -> T {
        self.data.typed_data::<T>()[index]
    }

    /// Writes `value` at `index`.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) {
        self.data.typed_data_mut::<T>()[index] = value;
    }

    /// Returns all slots as a typed slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.typed_data::<T>()
    }

    /// Grows the buffer to at least `new_capacity` slots, zero-filling the
    /// added region and preserving existing slot bytes. Never shrinks.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.data.resize_zeroed::<T>(new_capacity);
    }

    /// Copies `count` slots from `src` starting at `src_start` into this
    /// buffer starting at `dst_start`.
    pub fn copy_range(
        &mut self,
        src: &FixedWidthBuffer<T>,
        src_start: usize,
        dst_start: usize,
        count: usize,
    ) {
        let dst = &mut self.data.typed_data_mut::<T>()[dst_start..dst_start + count];
        dst.copy_from_slice(&src.data.typed_data::<T>()[src_start..src_start + count]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let mut buffer = FixedWidthBuffer::<i64>::with_capacity(4);
        assert_eq!(buffer.capacity(), 4);
        buffer.write(0, -1);
        buffer.write(3, i64::MAX);
        assert_eq!(buffer.read(0), -1);
        assert_eq!(buffer.read(1), 0);
        assert_eq!(buffer.read(3), i64::MAX);
        assert_eq!(buffer.as_slice(), &[-1, 0, 0, i64::MAX]);
    }

    #[test]
    fn test_grow_preserves_prefix() {
        let mut buffer = FixedWidthBuffer::<i32>::with_capacity(2);
        buffer.write(0, 10);
        buffer.write(1, 20);
        buffer.grow(8);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.as_slice(), &[10, 20, 0, 0, 0, 0, 0, 0]);

        buffer.grow(4);
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn test_copy_range() {
        let mut src = FixedWidthBuffer::<u16>::with_capacity(5);
        for i in 0..5 {
            src.write(i, (i * 100) as u16);
        }
        let mut dst = FixedWidthBuffer::<u16>::with_capacity(3);
        dst.copy_range(&src, 2, 0, 3);
        assert_eq!(dst.as_slice(), &[200, 300, 400]);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = FixedWidthBuffer::<f64>::new();
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.as_slice().is_empty());
    }
}
