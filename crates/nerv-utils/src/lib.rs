//! Supporting lookup and escaping layer for the Nerv server renderer.
//!
//! Everything in this crate is pure and table driven. The serializer in
//! `nerv-ssr` consumes these helpers; nothing here knows about the node tree.
//!
//! ## Modules
//!
//! - [`escape`]: entity escaping for content and attribute positions
//! - [`css`]: CSS property-name translation and unitless property table
//! - [`html`]: void element table
//! - [`number`]: JavaScript-compatible number formatting
//! - [`merge`]: shallow map merging used for context propagation

pub mod css;
pub mod escape;
pub mod html;
pub mod merge;
pub mod number;

pub use css::{css_property_name, is_unitless_number};
pub use escape::{encode_entities, escape_text};
pub use html::{VOID_ELEMENTS, is_void_element};
pub use merge::extend;
pub use number::format_number;
