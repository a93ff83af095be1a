//! Server-side rendering for Nerv virtual node trees.
//!
//! Converts a [`Node`] tree into the HTML a browser would show if the tree
//! were mounted, without touching a live document. Rendering is synchronous,
//! deterministic and keeps no state between calls.
//!
//! ## Rendering rules
//!
//! - Text nodes are entity-escaped.
//! - Elements emit their start tag with encoded attributes, then their
//!   children, then the end tag. Void elements self-close with `/>` and
//!   never render content.
//! - Composite components are instantiated, may extend the context for their
//!   subtree, and are replaced by what `render` returns.
//! - Stateless components are called with their props and the context.
//! - A component that renders nothing leaves a `<!--!-->` marker.
//! - Invalid nodes render nothing.
//!
//! ## Example
//!
//! ```
//! use nerv_ssr::render_to_string;
//! use nerv_types::{IntoNode, Node};
//!
//! let node = Node::element("div").prop("id", "x").text("hi").into_node();
//! assert_eq!(render_to_string(&node), r#"<div id="x">hi</div>"#);
//! ```

mod attributes;
mod error;
mod options;
mod renderer;

pub use error::{RenderError, RenderResult};
pub use options::SsrOptions;
pub use renderer::{EMPTY_COMPONENT_MARKER, SsrRenderer};

use nerv_types::{Context, Node};
use renderer::Serializer;

/// Renders `node` to markup intended for later client-side hydration.
///
/// The root is rendered with an empty context.
pub fn render_to_string(node: &Node) -> String {
	Serializer::render_infallible(node, &Context::new())
}

/// Renders `node` to markup for pages that are never hydrated.
///
/// Output is identical to [`render_to_string`], structural markers included.
pub fn render_to_static_markup(node: &Node) -> String {
	render_to_string(node)
}
