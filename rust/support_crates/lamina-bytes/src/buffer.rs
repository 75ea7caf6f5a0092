//! An aligned, growable byte vector.

/// A byte vector whose data pointer is aligned to a 64-byte boundary,
/// with capacity managed in 64-byte blocks.
///
/// `AlignedByteVec` is the single allocation primitive of the lamina stack:
/// value buffers and validity bitmaps are both carved out of it. Alignment
/// makes the typed views produced by [`typed_data`](AlignedByteVec::typed_data)
/// valid for every fixed-width element type, and block-granular capacity keeps
/// reallocation amortized under the doubling growth strategy.
pub struct AlignedByteVec {
    /// Underlying storage; the first `start` bytes are alignment padding.
    inner: Vec<u8>,
    /// Offset of the aligned data region within `inner`.
    start: usize,
}

impl AlignedByteVec {
    /// Data pointer alignment in bytes.
    pub const ALIGNMENT: usize = 64;

    /// Capacity granularity in bytes.
    const BLOCK_SIZE: usize = 64;

    /// Creates a new empty vector without allocating.
    pub fn new() -> AlignedByteVec {
        AlignedByteVec {
            inner: Vec::new(),
            start: 0,
        }
    }

    /// Creates an empty vector able to hold at least `capacity` bytes
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> AlignedByteVec {
        Self::make(capacity)
    }

    /// Creates a vector of `len` zero bytes.
    pub fn zeroed(len: usize) -> AlignedByteVec {
        let mut v = AlignedByteVec::with_capacity(len);
        v.resize(len, 0);
        v
    }

    /// Creates a vector containing a copy of `data`.
    pub fn copy_from_slice(data: &[u8]) -> AlignedByteVec {
        let mut v = AlignedByteVec::with_capacity(data.len());
        v.extend_from_slice(data);
        v
    }

    /// Returns the number of bytes in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len() - self.start
    }

    /// Returns `true` if the vector holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        let raw = self.inner.capacity() - self.start;
        raw - raw % Self::BLOCK_SIZE
    }

    /// Returns a raw pointer to the aligned data region.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        unsafe { self.inner.as_ptr().add(self.start) }
    }

    /// Returns a mutable raw pointer to the aligned data region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        unsafe { self.inner.as_mut_ptr().add(self.start) }
    }

    /// Returns the vector contents as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns the vector contents as a mutable byte slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len()) }
    }

    /// Reserves capacity for at least `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if self.capacity() - self.len() >= additional {
            return;
        }
        self.grow(additional);
    }

    /// Appends all bytes of `s` to the vector.
    #[inline]
    pub fn extend_from_slice(&mut self, s: &[u8]) {
        self.reserve(s.len());
        self.inner.extend_from_slice(s);
    }

    /// Resizes the vector to `new_len` bytes, filling any appended space
    /// with `value`.
    pub fn resize(&mut self, new_len: usize, value: u8) {
        let len = self.len();
        if new_len > len {
            self.reserve(new_len - len);
            self.inner.resize(self.start + new_len, value);
        } else {
            self.inner.truncate(self.start + new_len);
        }
    }

    /// Truncates the vector to `new_len` bytes; no-op if already shorter.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            self.inner.truncate(self.start + new_len);
        }
    }

    /// Removes all bytes from the vector, keeping its allocation.
    pub fn clear(&mut self) {
        self.inner.truncate(self.start);
    }

    fn make(capacity: usize) -> AlignedByteVec {
        if capacity == 0 {
            return AlignedByteVec::new();
        }

        let blocks = capacity.div_ceil(Self::BLOCK_SIZE);
        let vec_capacity = blocks
            .checked_mul(Self::BLOCK_SIZE)
            .and_then(|c| c.checked_add(Self::ALIGNMENT))
            .expect("buffer capacity overflow");

        let mut inner = Vec::<u8>::with_capacity(vec_capacity);
        let addr = inner.as_ptr() as usize;
        let start = addr.next_multiple_of(Self::ALIGNMENT) - addr;
        if start != 0 {
            inner.resize(start, 0);
        }

        let v = AlignedByteVec { inner, start };
        debug_assert!(v.capacity() >= capacity);
        v
    }

    /// Moves the contents into a freshly made vector with room for at least
    /// `additional` more bytes, at least doubling the current capacity.
    #[cold]
    fn grow(&mut self, additional: usize) {
        let required = self
            .len()
            .checked_add(additional)
            .expect("buffer length overflow");
        let new_cap = std::cmp::max(self.capacity() * 2, required);
        let mut v = Self::make(new_cap);
        if !self.is_empty() {
            v.inner.extend_from_slice(self.as_slice());
        }
        *self = v;
    }
}

impl AlignedByteVec {
    /// Resizes the vector to hold `new_count` elements of type `T`, filling
    /// any appended space with zeroes.
    pub fn resize_zeroed<T>(&mut self, new_count: usize)
    where
        T: bytemuck::Zeroable,
    {
        self.resize(new_count * std::mem::size_of::<T>(), 0);
    }

    /// Appends the byte representation of `value` to the vector.
    pub fn push_typed<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.extend_from_slice(bytemuck::bytes_of(&value));
    }

    /// Reinterprets the contents as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the byte length is not a multiple of `size_of::<T>()`.
    #[inline]
    pub fn typed_data<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        if self.is_empty() {
            return &[];
        }
        bytemuck::cast_slice(self.as_slice())
    }

    /// Reinterprets the contents as a mutable slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the byte length is not a multiple of `size_of::<T>()`.
    #[inline]
    pub fn typed_data_mut<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::NoUninit + bytemuck::AnyBitPattern,
    {
        if self.is_empty() {
            return &mut [];
        }
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }
}

impl std::ops::Deref for AlignedByteVec {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::ops::DerefMut for AlignedByteVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Default for AlignedByteVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AlignedByteVec {
    fn clone(&self) -> AlignedByteVec {
        AlignedByteVec::copy_from_slice(self.as_slice())
    }
}

impl PartialEq for AlignedByteVec {
    fn eq(&self, other: &AlignedByteVec) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AlignedByteVec {}

impl std::fmt::Debug for AlignedByteVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedByteVec")
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .finish_non_exhaustive()
    }
}
