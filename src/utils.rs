//! Escaping helpers and HTML/CSS lookup tables.
//!
//! Re-exports `nerv-utils`.

pub use nerv_utils::*;
