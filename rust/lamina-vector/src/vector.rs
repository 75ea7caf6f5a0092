//! The primary fixed-width vector contract.

use lamina_common::error::Error;
use lamina_common::result::Result;
use lamina_common::verify_arg;

use crate::bitmap::ValidityBitmap;
use crate::buffer::FixedWidthBuffer;
use crate::element::FixedWidthElement;
use crate::field::Field;
use crate::holder::{Holder, NullableHolder};
use crate::reader::FixedWidthReader;
use crate::transfer::TransferPair;

/// A nullable columnar vector of fixed-width elements.
///
/// Composes one [`FixedWidthBuffer`] and one [`ValidityBitmap`] under a
/// shared logical length and capacity. Construction allocates nothing;
/// buffers materialize on the first safe write or an explicit
/// [`allocate_new`](FixedWidthVector::allocate_new) call.
///
/// Direct accessors (`get`, `set`, `get_raw`) require `index < capacity`
/// and fail fast on violation; only the `*_safe` setters grow the buffers
/// on demand. The logical length is managed explicitly through
/// [`set_len`](FixedWidthVector::set_len), mirroring columnar batch
/// population where writes land first and the value count is sealed once.
#[derive(Debug)]
pub struct FixedWidthVector<T: FixedWidthElement> {
    pub(crate) field: Field,
    pub(crate) values: FixedWidthBuffer<T>,
    pub(crate) validity: ValidityBitmap,
    pub(crate) len: usize,
}

impl<T: FixedWidthElement> FixedWidthVector<T> {
    /// Capacity of the first allocation when a safe write targets an
    /// unallocated vector.
    const INITIAL_CAPACITY: usize = 8;

    /// Creates an empty vector for the given field. No memory is allocated.
    ///
    /// # Panics
    ///
    /// Panics if the field's declared element width differs from
    /// `size_of::<T>()`.
    pub fn new(field: Field) -> FixedWidthVector<T> {
        assert!(
            field.element_type().width() == T::WIDTH,
            "field {} has element width {}, vector element width is {}",
            field.name(),
            field.element_type().width(),
            T::WIDTH,
        );
        FixedWidthVector {
            field,
            values: FixedWidthBuffer::new(),
            validity: ValidityBitmap::new(),
            len: 0,
        }
    }

    /// Creates an empty vector named `name` with the element's default
    /// type descriptor, nullable.
    pub fn nullable(name: impl Into<String>) -> FixedWidthVector<T> {
        FixedWidthVector::new(Field::nullable(name, T::ELEMENT_TYPE))
    }

    /// Creates a vector with buffers pre-allocated for `capacity` slots,
    /// all null.
    pub fn with_capacity(field: Field, capacity: usize) -> FixedWidthVector<T> {
        let mut vector = FixedWidthVector::new(field);
        vector.allocate_new(capacity);
        vector
    }

    /// Returns the field descriptor.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Returns the number of logical slots in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are in use.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the buffers can hold without
    /// reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        debug_assert!(self.values.capacity() == self.validity.capacity());
        self.values.capacity()
    }

    /// Sets the number of logical slots in use.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the current capacity.
    pub fn set_len(&mut self, len: usize) {
        assert!(len <= self.capacity(), "length {len} exceeds capacity {}", self.capacity());
        self.len = len;
    }

    /// Discards the buffers and returns the vector to its post-construction
    /// empty state.
    pub fn clear(&mut self) {
        self.values = FixedWidthBuffer::new();
        self.validity = ValidityBitmap::new();
        self.len = 0;
    }

    /// Allocates fresh buffers for `capacity` slots, discarding any current
    /// contents. All slots start null and the length resets to zero.
    pub fn allocate_new(&mut self, capacity: usize) {
        self.values = FixedWidthBuffer::with_capacity(capacity);
        self.validity = ValidityBitmap::with_capacity(capacity);
        self.len = 0;
    }

    /// Returns `true` if slot `index` is null.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        assert!(index < self.capacity());
        !self.validity.get(index)
    }

    /// Returns the number of null slots among the first `len` slots.
    pub fn null_count(&self) -> usize {
        self.len - self.validity.count_set(self.len)
    }

    /// Retrieves slot `index` as a holder: `is_set == 0` with a zeroed
    /// value for a null slot, `is_set == 1` with the raw value otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn get(&self, index: usize) -> NullableHolder<T> {
        if self.is_null(index) {
            NullableHolder::null()
        } else {
            NullableHolder::of(self.values.read(index))
        }
    }

    /// Reads the raw value at slot `index` without a null check on the
    /// returned bytes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` or the slot is null.
    pub fn get_raw(&self, index: usize) -> T {
        assert!(!self.is_null(index), "slot {index} is null");
        self.values.read(index)
    }

    /// Sets slot `index` from a nullable holder.
    ///
    /// A holder with `is_set > 0` marks the slot valid and writes the
    /// value; `is_set == 0` marks the slot null and leaves the old value
    /// bytes in place (their content must not be relied upon); a negative
    /// `is_set` is rejected with an invalid-argument error before any
    /// mutation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn set(&mut self, index: usize, holder: &NullableHolder<T>) -> Result<()> {
        verify_arg!(holder, holder.is_set >= 0);
        assert!(index < self.capacity());
        if holder.is_set > 0 {
            self.validity.set(index);
            self.values.write(index, holder.value);
        } else {
            self.validity.unset(index);
        }
        Ok(())
    }

    /// Sets slot `index` from a non-nullable holder: unconditionally marks
    /// the slot valid and writes the value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn set_value(&mut self, index: usize, holder: Holder<T>) {
        assert!(index < self.capacity());
        self.validity.set(index);
        self.values.write(index, holder.value);
    }

    /// Marks slot `index` null, leaving the old value bytes in place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn set_null(&mut self, index: usize) {
        assert!(index < self.capacity());
        self.validity.unset(index);
    }

    /// Same as [`set`](FixedWidthVector::set), but first grows the buffers
    /// as needed so that `index < capacity` holds. The only mutation entry
    /// point safe to call with indices beyond the current capacity.
    pub fn set_safe(&mut self, index: usize, holder: &NullableHolder<T>) -> Result<()> {
        verify_arg!(holder, holder.is_set >= 0);
        self.ensure_capacity(index + 1);
        self.set(index, holder)
    }

    /// Same as [`set_value`](FixedWidthVector::set_value), growing the
    /// buffers as needed.
    pub fn set_value_safe(&mut self, index: usize, holder: Holder<T>) {
        self.ensure_capacity(index + 1);
        self.set_value(index, holder);
    }

    /// Grows both buffers so that at least `min_capacity` slots are
    /// addressable, doubling the current capacity until it suffices.
    /// Existing values and validity below the old capacity are preserved;
    /// capacity never shrinks.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.capacity();
        if capacity >= min_capacity {
            return;
        }
        let mut new_capacity = capacity.max(Self::INITIAL_CAPACITY);
        while new_capacity < min_capacity {
            new_capacity *= 2;
        }
        self.values.grow(new_capacity);
        self.validity.grow(new_capacity);
    }

    /// Copies the value and validity of slot `from_index` of `source` into
    /// slot `to_index` of this vector.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of its vector's capacity.
    pub fn copy_from(&mut self, source: &FixedWidthVector<T>, from_index: usize, to_index: usize) {
        if source.is_null(from_index) {
            self.set_null(to_index);
        } else {
            self.set_value(to_index, Holder::of(source.values.read(from_index)));
        }
    }

    /// Same as [`copy_from`](FixedWidthVector::copy_from), growing this
    /// vector's buffers as needed.
    pub fn copy_from_safe(
        &mut self,
        source: &FixedWidthVector<T>,
        from_index: usize,
        to_index: usize,
    ) {
        self.ensure_capacity(to_index + 1);
        self.copy_from(source, from_index, to_index);
    }

    /// Returns a read-only cursor over the logical length of this vector.
    pub fn reader(&self) -> FixedWidthReader<'_, T> {
        FixedWidthReader::new(self)
    }

    /// Constructs a transfer pair binding this vector to a freshly created
    /// empty target of the same type, named `name`. No data moves yet.
    pub fn get_transfer_pair(&mut self, name: impl Into<String>) -> TransferPair<'_, T> {
        let field = self.field.with_name(name);
        self.get_transfer_pair_with_field(field)
    }

    /// Constructs a transfer pair whose target is built from a
    /// caller-supplied field descriptor.
    pub fn get_transfer_pair_with_field(&mut self, field: Field) -> TransferPair<'_, T> {
        let target = FixedWidthVector::new(field);
        TransferPair::new(self, target)
    }

    /// Constructs a transfer pair with a caller-supplied target vector.
    ///
    /// Fails with a type-mismatch error if the target's declared element
    /// type differs from this vector's.
    pub fn make_transfer_pair(
        &mut self,
        target: FixedWidthVector<T>,
    ) -> Result<TransferPair<'_, T>> {
        if target.field.element_type() != self.field.element_type() {
            return Err(Error::type_mismatch(
                self.field.element_type().to_string(),
                target.field.element_type().to_string(),
            ));
        }
        Ok(TransferPair::new(self, target))
    }
}
