//! Bit manipulation primitives for lamina validity tracking.

pub mod bitops;
