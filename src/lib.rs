//! # Nerv Server
//!
//! Server-side rendering for Nerv virtual node trees.
//!
//! A tree built from [`Node`] values is serialized to the HTML a browser
//! would show once the same tree is mounted on the client. Components are
//! expanded in place, context flows down the tree, and nothing is kept
//! between renders.
//!
//! ## Crates
//!
//! - [`types`] - virtual nodes, props, context and the component traits
//! - [`utils`] - escaping, CSS property names and the void element table
//! - [`ssr`] - the serializer, `SsrRenderer` and its options
//!
//! ## Feature Flags
//!
//! - `ssr` (default) - the HTML serializer
//!
//! ## Example
//!
//! ```
//! use nerv_server::prelude::*;
//!
//! let node = Node::element("ul")
//!     .child(Node::element("li").text("one"))
//!     .child(Node::element("li").text("two"))
//!     .into_node();
//!
//! assert_eq!(render_to_string(&node), "<ul><li>one</li><li>two</li></ul>");
//! ```

#[cfg(feature = "ssr")]
pub mod ssr;
pub mod types;
pub mod utils;

pub use nerv_types::{
	Child, Children, Component, Context, IntoNode, Node, NodeKind, PropMap, PropValue, Props,
	State,
};

#[cfg(feature = "ssr")]
pub use nerv_ssr::{
	RenderError, RenderResult, SsrOptions, SsrRenderer, render_to_static_markup, render_to_string,
};

/// Commonly used items for building and rendering trees.
pub mod prelude {
	pub use crate::{
		Child, Children, Component, Context, IntoNode, Node, PropMap, PropValue, Props, State,
	};

	#[cfg(feature = "ssr")]
	pub use crate::{SsrOptions, SsrRenderer, render_to_static_markup, render_to_string};
}
