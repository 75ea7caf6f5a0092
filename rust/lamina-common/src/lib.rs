//! Core definitions (error and result types), relied upon by all lamina-* crates.

pub mod error;
pub mod result;
