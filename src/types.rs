//! Virtual node tree, props, context and component traits.
//!
//! Re-exports `nerv-types`.

pub use nerv_types::*;
