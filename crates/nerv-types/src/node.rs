//! Node types for server-side rendering.
//!
//! ## Overview
//!
//! [`Node`] is a closed sum type over the five kinds a virtual tree can hold:
//! text, elements, composite components, stateless components and the
//! invalid placeholder. Classification is the variant tag, so every node is
//! exactly one kind.
//!
//! ## Example
//!
//! ```
//! use nerv_types::{IntoNode, Node};
//!
//! let tree = Node::element("ul")
//!     .prop("class", "menu")
//!     .child(Node::element("li").text("Home"))
//!     .child(Node::element("li").text("About"))
//!     .into_node();
//!
//! assert!(tree.is_element_node());
//! ```

use crate::children::{Child, Children};
use crate::component::{Component, ComponentConstructor, StatelessFn, construct};
use crate::context::Context;
use crate::props::Props;
use crate::value::{PropMap, PropValue};
use std::borrow::Cow;
use std::sync::Arc;

/// The kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Text,
	Element,
	Composite,
	Stateless,
	Invalid,
}

/// One node of a virtual tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
	/// A text node.
	Text(TextNode),
	/// An HTML element.
	Element(ElementNode),
	/// A stateful component resolved by constructing an instance.
	Composite(CompositeNode),
	/// A function component.
	Stateless(StatelessNode),
	/// A `null` / `false` placeholder that renders nothing.
	#[default]
	Invalid,
}

impl Node {
	/// Creates a text node.
	pub fn text(text: impl Into<String>) -> Self {
		Node::Text(TextNode::new(text))
	}

	/// Starts building an element.
	pub fn element(tag: impl Into<String>) -> ElementNode {
		ElementNode::new(tag)
	}

	/// Creates a composite component node for `C`.
	pub fn composite<C: Component>(props: Props) -> Self {
		Node::Composite(CompositeNode {
			name: C::name(),
			construct: construct::<C>,
			props,
		})
	}

	/// Creates a stateless component node from a render function.
	pub fn stateless<F>(name: impl Into<Cow<'static, str>>, render: F, props: Props) -> Self
	where
		F: Fn(&Props, &Context) -> Node + Send + Sync + 'static,
	{
		Node::Stateless(StatelessNode {
			name: name.into(),
			render: Arc::new(render),
			props,
		})
	}

	/// Creates the invalid placeholder.
	pub fn invalid() -> Self {
		Node::Invalid
	}

	pub fn kind(&self) -> NodeKind {
		match self {
			Node::Text(_) => NodeKind::Text,
			Node::Element(_) => NodeKind::Element,
			Node::Composite(_) => NodeKind::Composite,
			Node::Stateless(_) => NodeKind::Stateless,
			Node::Invalid => NodeKind::Invalid,
		}
	}

	pub fn is_text_node(&self) -> bool {
		self.kind() == NodeKind::Text
	}

	pub fn is_element_node(&self) -> bool {
		self.kind() == NodeKind::Element
	}

	pub fn is_composite_component(&self) -> bool {
		self.kind() == NodeKind::Composite
	}

	/// Alias of [`Node::is_composite_component`].
	pub fn is_composite(&self) -> bool {
		self.is_composite_component()
	}

	pub fn is_stateless_component(&self) -> bool {
		self.kind() == NodeKind::Stateless
	}

	/// Returns `true` for composite and stateless components.
	pub fn is_component(&self) -> bool {
		matches!(self.kind(), NodeKind::Composite | NodeKind::Stateless)
	}

	pub fn is_null_or_invalid(&self) -> bool {
		self.kind() == NodeKind::Invalid
	}
}

/// A text node. Its payload is escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
	text: String,
}

impl TextNode {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	pub fn text(&self) -> &str {
		&self.text
	}
}

/// An HTML element with props and children.
#[derive(Debug, Clone)]
pub struct ElementNode {
	tag: String,
	props: Props,
	children: Children,
}

impl ElementNode {
	/// Creates an element with no props and no children.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			props: Props::new(),
			children: Children::None,
		}
	}

	/// Sets a prop.
	pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.props.insert(name, value);
		self
	}

	/// Replaces all props.
	pub fn with_props(mut self, props: Props) -> Self {
		self.props = props;
		self
	}

	/// Replaces the children slot.
	pub fn children(mut self, children: impl Into<Children>) -> Self {
		self.children = children.into();
		self
	}

	/// Appends a child, promoting the slot to a list.
	pub fn child(mut self, child: impl Into<Child>) -> Self {
		self.children.push(child);
		self
	}

	/// Sets a single string child.
	pub fn text(self, text: impl Into<String>) -> Self {
		self.children(Children::Text(text.into()))
	}

	/// Sets raw HTML content through `dangerouslySetInnerHTML`.
	pub fn inner_html(self, html: impl Into<String>) -> Self {
		let mut payload = PropMap::new();
		payload.insert("__html".to_string(), PropValue::String(html.into()));
		self.prop("dangerouslySetInnerHTML", payload)
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns the children slot.
	pub fn child_nodes(&self) -> &Children {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		nerv_utils::is_void_element(&self.tag)
	}
}

/// A composite component together with its props.
#[derive(Clone)]
pub struct CompositeNode {
	name: &'static str,
	construct: ComponentConstructor,
	props: Props,
}

impl CompositeNode {
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Constructs a fresh instance for one render.
	pub fn instantiate(&self, context: &Context) -> Box<dyn Component> {
		(self.construct)(&self.props, context)
	}
}

impl std::fmt::Debug for CompositeNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CompositeNode")
			.field("name", &self.name)
			.field("props", &self.props)
			.finish()
	}
}

/// A stateless component together with its props.
#[derive(Clone)]
pub struct StatelessNode {
	name: Cow<'static, str>,
	render: StatelessFn,
	props: Props,
}

impl StatelessNode {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Invokes the render function.
	pub fn call(&self, context: &Context) -> Node {
		(self.render)(&self.props, context)
	}
}

impl std::fmt::Debug for StatelessNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StatelessNode")
			.field("name", &self.name)
			.field("render", &"<fn>")
			.field("props", &self.props)
			.finish()
	}
}

/// Trait for types that can be converted into a Node.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for ElementNode {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for TextNode {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Invalid,
		}
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Invalid
	}
}

impl From<ElementNode> for Node {
	fn from(element: ElementNode) -> Self {
		Node::Element(element)
	}
}

impl From<TextNode> for Node {
	fn from(text: TextNode) -> Self {
		Node::Text(text)
	}
}
