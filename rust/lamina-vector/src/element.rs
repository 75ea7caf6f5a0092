//! The closed set of fixed-width element types.

use crate::field::ElementType;

/// Marker trait for the primitive types that can back a fixed-width vector.
///
/// An element is a plain-old-data value with a known byte width, readable
/// and writable at any slot of a value buffer by offset arithmetic alone.
/// The associated [`ElementType`] is the default type descriptor a vector
/// of this element carries when none is supplied.
pub trait FixedWidthElement:
    bytemuck::Pod + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// The type descriptor tag matching this element's raw representation.
    const ELEMENT_TYPE: ElementType;

    /// Width of one element in bytes.
    const WIDTH: usize = std::mem::size_of::<Self>();
}

impl FixedWidthElement for i8 {
    const ELEMENT_TYPE: ElementType = ElementType::Int8;
}

impl FixedWidthElement for i16 {
    const ELEMENT_TYPE: ElementType = ElementType::Int16;
}

impl FixedWidthElement for i32 {
    const ELEMENT_TYPE: ElementType = ElementType::Int32;
}

impl FixedWidthElement for i64 {
    const ELEMENT_TYPE: ElementType = ElementType::Int64;
}

impl FixedWidthElement for u8 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt8;
}

impl FixedWidthElement for u16 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt16;
}

impl FixedWidthElement for u32 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt32;
}

impl FixedWidthElement for u64 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt64;
}

impl FixedWidthElement for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Float32;
}

impl FixedWidthElement for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::Float64;
}
