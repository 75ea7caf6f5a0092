//! Codec-decoded vectors layered over the raw storage by composition.

use lamina_common::result::Result;

use crate::codec::{
    TimestampMicroCodec, TimestampMilliCodec, TimestampNanoCodec, TimestampSecCodec, TypeCodec,
};
use crate::field::Field;
use crate::holder::{Holder, NullableHolder};
use crate::reader::DecodedReader;
use crate::vector::FixedWidthVector;

/// A fixed-width vector whose slots decode to a domain value through a
/// stateless [`TypeCodec`].
///
/// The codec applies only at the object access boundary
/// ([`get_object`](DecodedVector::get_object) /
/// [`set_object`](DecodedVector::set_object)); the storage contract,
/// growth and transfer behavior are exactly those of the wrapped
/// [`FixedWidthVector`].
pub struct DecodedVector<C: TypeCodec> {
    inner: FixedWidthVector<C::Raw>,
}

/// Vector of epoch-second timestamps decoding to UTC calendar instants.
pub type TimestampSecVector = DecodedVector<TimestampSecCodec>;

/// Vector of epoch-millisecond timestamps decoding to UTC calendar instants.
pub type TimestampMilliVector = DecodedVector<TimestampMilliCodec>;

/// Vector of epoch-microsecond timestamps decoding to UTC calendar instants.
pub type TimestampMicroVector = DecodedVector<TimestampMicroCodec>;

/// Vector of epoch-nanosecond timestamps decoding to UTC calendar instants.
pub type TimestampNanoVector = DecodedVector<TimestampNanoCodec>;

impl<C: TypeCodec> DecodedVector<C> {
    /// Creates an empty nullable vector named `name` carrying the codec's
    /// type descriptor. No memory is allocated.
    pub fn new(name: impl Into<String>) -> DecodedVector<C> {
        DecodedVector {
            inner: FixedWidthVector::new(Field::nullable(name, C::element_type())),
        }
    }

    /// Creates an empty vector from an existing field descriptor.
    pub fn from_field(field: Field) -> DecodedVector<C> {
        DecodedVector {
            inner: FixedWidthVector::new(field),
        }
    }

    /// Creates a vector with buffers pre-allocated for `capacity` slots.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> DecodedVector<C> {
        let mut vector = DecodedVector::new(name);
        vector.inner.allocate_new(capacity);
        vector
    }

    /// Returns the decoded value at slot `index`, or `None` if the slot is
    /// null. The only entry point that applies the codec on read.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`, or if the stored raw value lies
    /// outside the codec's documented domain (raw holders accept any bit
    /// pattern; only decoding constrains the range).
    pub fn get_object(&self, index: usize) -> Option<C::Value> {
        self.inner.get(index).into_option().map(C::decode)
    }

    /// Encodes `value` and stores it at slot `index`, marking it valid.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn set_object(&mut self, index: usize, value: &C::Value) {
        self.inner.set_value(index, Holder::of(C::encode(value)));
    }

    /// Same as [`set_object`](DecodedVector::set_object), growing the
    /// buffers as needed.
    pub fn set_object_safe(&mut self, index: usize, value: &C::Value) {
        self.inner.set_value_safe(index, Holder::of(C::encode(value)));
    }

    /// Retrieves the raw holder at slot `index`.
    pub fn get(&self, index: usize) -> NullableHolder<C::Raw> {
        self.inner.get(index)
    }

    /// Sets slot `index` from a raw nullable holder.
    pub fn set(&mut self, index: usize, holder: &NullableHolder<C::Raw>) -> Result<()> {
        self.inner.set(index, holder)
    }

    /// Sets slot `index` from a raw nullable holder, growing as needed.
    pub fn set_safe(&mut self, index: usize, holder: &NullableHolder<C::Raw>) -> Result<()> {
        self.inner.set_safe(index, holder)
    }

    /// Returns a cursor yielding decoded values over the logical length.
    pub fn reader(&self) -> DecodedReader<'_, C> {
        DecodedReader::new(&self.inner)
    }

    /// Returns the wrapped raw vector.
    pub fn inner(&self) -> &FixedWidthVector<C::Raw> {
        &self.inner
    }

    /// Returns the wrapped raw vector mutably, e.g. to construct transfer
    /// pairs.
    pub fn inner_mut(&mut self) -> &mut FixedWidthVector<C::Raw> {
        &mut self.inner
    }

    /// Consumes the wrapper and yields the raw vector.
    pub fn into_inner(self) -> FixedWidthVector<C::Raw> {
        self.inner
    }

    /// Wraps an existing raw vector, e.g. a transfer target.
    pub fn from_inner(inner: FixedWidthVector<C::Raw>) -> DecodedVector<C> {
        DecodedVector { inner }
    }
}

impl<C: TypeCodec> std::ops::Deref for DecodedVector<C> {
    type Target = FixedWidthVector<C::Raw>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C: TypeCodec> std::ops::DerefMut for DecodedVector<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
