//! Growable byte buffers with alignment guarantees, backing the lamina
//! vector storage.

pub mod buffer;
