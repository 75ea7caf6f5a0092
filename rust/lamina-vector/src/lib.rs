//! Fixed-width, nullable, in-memory columnar vectors.
//!
//! This crate provides the core storage unit of the lamina columnar format:
//! an array of fixed-size typed values paired with an independent, bit-packed
//! validity bitmap, both carved out of aligned byte buffers.
//!
//! # Main Components
//!
//! - [`vector::FixedWidthVector`]: the primary storage contract, composing a
//!   [`buffer::FixedWidthBuffer`] (typed positional storage) with a
//!   [`bitmap::ValidityBitmap`] (null tracking) under a shared logical
//!   length and capacity.
//! - [`holder::NullableHolder`] and [`holder::Holder`]: transient value
//!   types carrying data across the get/set boundary.
//! - [`codec::TypeCodec`]: pure conversions between the raw fixed-width
//!   representation and a domain value, such as epoch microseconds and a
//!   calendar timestamp. [`typed::DecodedVector`] layers a codec over the
//!   raw vector by composition.
//! - [`transfer::TransferPair`]: zero-copy ownership transfer of the
//!   backing buffers between two vectors of the same element type, plus
//!   range-copying split transfers.
//! - [`reader::FixedWidthReader`]: a read-only traversal cursor observing
//!   the same null semantics as the vector accessors.
//!
//! # Ownership Model
//!
//! Every buffer has a single designated owner at any time. Transfer moves
//! buffers by Rust move semantics; there is no state in which two vectors
//! reference the same allocation. Mutation requires `&mut self`, so the
//! single-writer discipline is enforced at compile time, and buffers are
//! released when the owning vector is dropped.

pub mod bitmap;
pub mod buffer;
pub mod codec;
pub mod element;
pub mod field;
pub mod holder;
pub mod reader;
pub mod transfer;
pub mod typed;
pub mod vector;
