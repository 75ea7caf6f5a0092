//! Operations on bit-packed byte buffers.
//!
//! All functions use LSB-first bit ordering: bit `i` of the buffer lives in
//! byte `i / 8` at bit position `i % 8`, with position 0 being the least
//! significant bit. Callers guarantee that every touched bit index falls
//! within the buffer; these primitives perform no bounds checking beyond
//! the slice indexing itself.

/// Sets bit `index` in `bytes` to 1.
#[inline]
pub fn set_bit(bytes: &mut [u8], index: usize) {
    bytes[index >> 3] |= 1u8 << (index & 7);
}

/// Clears bit `index` in `bytes` to 0.
#[inline]
pub fn unset_bit(bytes: &mut [u8], index: usize) {
    bytes[index >> 3] &= !(1u8 << (index & 7));
}

/// Sets bit `index` in `bytes` to `value`, branch-free.
#[inline]
pub fn assign_bit(bytes: &mut [u8], index: usize, value: bool) {
    let byte = &mut bytes[index >> 3];
    let mask = 1u8 << (index & 7);
    *byte = (*byte & !mask) | (u8::from(value) << (index & 7));
}

/// Returns bit `index` of `bytes`.
#[inline]
pub fn get_bit(bytes: &[u8], index: usize) -> bool {
    (bytes[index >> 3] >> (index & 7)) & 1 != 0
}

/// Counts the set bits among the first `len` bits of `bytes`.
pub fn count_set_bits(bytes: &[u8], len: usize) -> usize {
    let full_bytes = len / 8;
    let mut count: usize = bytes[..full_bytes]
        .iter()
        .map(|b| b.count_ones() as usize)
        .sum();
    let tail = len & 7;
    if tail != 0 {
        let mask = (1u16 << tail) as u8 - 1;
        count += (bytes[full_bytes] & mask).count_ones() as usize;
    }
    count
}

/// Copies `len` bits from `src` starting at bit `src_offset` into `dst`
/// starting at bit `dst_offset`.
///
/// Bits of `dst` outside the destination range are left untouched. The
/// source and destination ranges must not overlap (they normally live in
/// distinct buffers).
pub fn copy_bits(src: &[u8], src_offset: usize, dst: &mut [u8], dst_offset: usize, len: usize) {
    if len == 0 {
        return;
    }
    if src_offset & 7 == 0 && dst_offset & 7 == 0 {
        let src_byte = src_offset >> 3;
        let dst_byte = dst_offset >> 3;
        let full_bytes = len / 8;
        dst[dst_byte..dst_byte + full_bytes]
            .copy_from_slice(&src[src_byte..src_byte + full_bytes]);
        let tail = len & 7;
        if tail != 0 {
            let mask = (1u16 << tail) as u8 - 1;
            let d = &mut dst[dst_byte + full_bytes];
            *d = (*d & !mask) | (src[src_byte + full_bytes] & mask);
        }
    } else {
        for i in 0..len {
            assign_bit(dst, dst_offset + i, get_bit(src, src_offset + i));
        }
    }
}
