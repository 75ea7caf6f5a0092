//! Read-only traversal cursors bound to a vector.

use crate::codec::TypeCodec;
use crate::element::FixedWidthElement;
use crate::vector::FixedWidthVector;

/// A cursor over the logical length of a vector, yielding `None` for null
/// slots and `Some(value)` otherwise — the same null semantics as
/// [`FixedWidthVector::get`].
pub struct FixedWidthReader<'a, T: FixedWidthElement> {
    vector: &'a FixedWidthVector<T>,
    position: usize,
}

impl<'a, T: FixedWidthElement> FixedWidthReader<'a, T> {
    pub(crate) fn new(vector: &'a FixedWidthVector<T>) -> FixedWidthReader<'a, T> {
        FixedWidthReader {
            vector,
            position: 0,
        }
    }

    /// Returns the zero-based position of the next slot to be read.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T: FixedWidthElement> Iterator for FixedWidthReader<'a, T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Option<T>> {
        if self.position >= self.vector.len() {
            return None;
        }
        let item = self.vector.get(self.position).into_option();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, T: FixedWidthElement> ExactSizeIterator for FixedWidthReader<'a, T> {}

/// A cursor yielding codec-decoded values, null slots as `None`.
pub struct DecodedReader<'a, C: TypeCodec> {
    inner: FixedWidthReader<'a, C::Raw>,
}

impl<'a, C: TypeCodec> DecodedReader<'a, C> {
    pub(crate) fn new(vector: &'a FixedWidthVector<C::Raw>) -> DecodedReader<'a, C> {
        DecodedReader {
            inner: FixedWidthReader::new(vector),
        }
    }

    /// Returns the zero-based position of the next slot to be read.
    pub fn position(&self) -> usize {
        self.inner.position()
    }
}

impl<'a, C: TypeCodec> Iterator for DecodedReader<'a, C> {
    type Item = Option<C::Value>;

    fn next(&mut self) -> Option<Option<C::Value>> {
        self.inner.next().map(|item| item.map(C::decode))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, C: TypeCodec> ExactSizeIterator for DecodedReader<'a, C> {}
