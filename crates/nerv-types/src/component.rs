//! Component traits.

use crate::context::{Context, State};
use crate::node::Node;
use crate::props::Props;
use std::sync::Arc;

/// A stateful (composite) component.
///
/// The server renderer constructs a fresh instance per render call through
/// [`Component::new`], drives the optional hooks below and drops the instance
/// once `render` has produced its node. No instance outlives the call.
///
/// # Example
///
/// ```
/// use nerv_types::{Component, Context, Node, Props, State};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn new(props: &Props, _context: &Context) -> Self {
///         let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("stranger");
///         Self { name: name.to_string() }
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
///
///     fn render(&self, _props: &Props, _state: &State, _context: &Context) -> Node {
///         Node::element("p").text(format!("Hello, {}!", self.name)).into()
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Builds an instance from its props and the inherited context.
	fn new(props: &Props, context: &Context) -> Self
	where
		Self: Sized;

	/// Returns the component's name for debugging and logging.
	fn name() -> &'static str
	where
		Self: Sized;

	/// Produces the node this component resolves to.
	fn render(&self, props: &Props, state: &State, context: &Context) -> Node;

	/// Current state handed to [`Component::render`]. Stateless by default.
	fn state(&self) -> Option<&State> {
		None
	}

	/// Called before anything else to flag the instance as render-only.
	///
	/// Implementations that schedule updates when their state changes must
	/// suppress that scheduling once this has been called.
	fn mark_render_only(&mut self) {}

	/// Called once before `render` with the context the subtree will see,
	/// including this component's own child context.
	fn component_will_mount(&mut self, _context: &Context) {}

	/// Context entries to expose to this component's subtree.
	fn get_child_context(&self) -> Option<Context> {
		None
	}
}

/// Constructor stored in a composite node.
pub type ComponentConstructor = fn(&Props, &Context) -> Box<dyn Component>;

/// Render function of a stateless component.
pub type StatelessFn = Arc<dyn Fn(&Props, &Context) -> Node + Send + Sync + 'static>;

pub(crate) fn construct<C: Component>(props: &Props, context: &Context) -> Box<dyn Component> {
	Box::new(C::new(props, context))
}
