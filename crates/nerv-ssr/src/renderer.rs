//! SSR renderer for virtual node trees.

use crate::attributes::write_attributes;
use crate::error::{RenderError, RenderResult};
use crate::options::SsrOptions;
use nerv_types::{
	Child, Children, CompositeNode, Context, ElementNode, Node, State, StatelessNode,
};
use nerv_utils::{encode_entities, escape_text, format_number};
use std::borrow::Cow;

/// Placeholder emitted when a component renders nothing.
///
/// It keeps an insertion point in the markup for the client to attach to.
pub const EMPTY_COMPONENT_MARKER: &str = "<!--!-->";

/// The recursive tree-to-string serializer.
///
/// One serializer is used per render call; it holds no state besides the
/// depth limit.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Serializer {
	max_depth: Option<usize>,
}

impl Serializer {
	pub(crate) fn unbounded() -> Self {
		Self { max_depth: None }
	}

	pub(crate) fn bounded(max_depth: Option<usize>) -> Self {
		Self { max_depth }
	}

	/// Serializes `node` with `context` as the inherited context.
	pub(crate) fn render(&self, node: &Node, context: &Context) -> RenderResult<String> {
		tracing::debug!(kind = ?node.kind(), max_depth = ?self.max_depth, "rendering node tree");
		let mut output = String::new();
		self.render_node(node, context, 0, &mut output)?;
		tracing::debug!(bytes = output.len(), "rendered node tree");
		Ok(output)
	}

	/// Serializes without a depth limit, which cannot fail.
	pub(crate) fn render_infallible(node: &Node, context: &Context) -> String {
		Self::unbounded()
			.render(node, context)
			.unwrap_or_default()
	}

	fn render_node(
		&self,
		node: &Node,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		self.check_depth(node, depth)?;

		match node {
			Node::Text(text) => output.push_str(&encode_entities(text.text())),
			Node::Element(element) => self.render_element(element, context, depth, output)?,
			Node::Composite(composite) => {
				self.render_composite(composite, context, depth, output)?
			}
			Node::Stateless(stateless) => {
				self.render_stateless(stateless, context, depth, output)?
			}
			Node::Invalid => {}
		}
		Ok(())
	}

	fn render_element(
		&self,
		element: &ElementNode,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		let tag = element.tag_name();
		output.push('<');
		output.push_str(tag);
		let inner_html = write_attributes(element.props(), output);

		if element.is_void() {
			output.push_str("/>");
			return Ok(());
		}
		output.push('>');

		let children = element.child_nodes();
		if !children.is_invalid() {
			self.render_children(children, context, depth, output)?;
		} else if let Some(html) = inner_html {
			output.push_str(html);
		}

		output.push_str("</");
		output.push_str(tag);
		output.push('>');
		Ok(())
	}

	fn render_children(
		&self,
		children: &Children,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		match children {
			Children::None => {}
			Children::Text(text) => push_text_child(text, output),
			Children::Number(n) => output.push_str(&format_number(*n)),
			Children::Node(node) => self.render_node(node, context, depth + 1, output)?,
			Children::List(items) => {
				for item in items {
					match item {
						Child::Text(text) => push_text_child(text, output),
						Child::Number(n) => output.push_str(&format_number(*n)),
						Child::Node(node) => {
							if !node.is_null_or_invalid() {
								self.render_node(node, context, depth + 1, output)?;
							}
						}
					}
				}
			}
		}
		Ok(())
	}

	fn render_composite(
		&self,
		composite: &CompositeNode,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		tracing::trace!(component = composite.name(), depth, "rendering composite component");

		let mut instance = composite.instantiate(context);
		instance.mark_render_only();

		let context = match instance.get_child_context() {
			Some(child_context) => Cow::Owned(context.extend(&child_context)),
			None => Cow::Borrowed(context),
		};

		instance.component_will_mount(&context);

		let empty_state = State::new();
		let state = instance.state().unwrap_or(&empty_state);
		let resolved = instance.render(composite.props(), state, &context);

		self.render_resolved(composite.name(), &resolved, &context, depth, output)
	}

	fn render_stateless(
		&self,
		stateless: &StatelessNode,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		tracing::trace!(component = stateless.name(), depth, "rendering stateless component");

		let resolved = stateless.call(context);
		self.render_resolved(stateless.name(), &resolved, context, depth, output)
	}

	fn render_resolved(
		&self,
		component: &str,
		resolved: &Node,
		context: &Context,
		depth: usize,
		output: &mut String,
	) -> RenderResult<()> {
		if resolved.is_null_or_invalid() {
			tracing::trace!(component, "component rendered nothing, emitting marker");
			output.push_str(EMPTY_COMPONENT_MARKER);
			return Ok(());
		}
		self.render_node(resolved, context, depth + 1, output)
	}

	fn check_depth(&self, node: &Node, depth: usize) -> RenderResult<()> {
		match self.max_depth {
			Some(limit) if depth > limit => {
				let node = describe(node);
				tracing::warn!(limit, node = %node, "render depth limit exceeded");
				Err(RenderError::DepthLimitExceeded { limit, node })
			}
			_ => Ok(()),
		}
	}
}

fn push_text_child(text: &str, output: &mut String) {
	if text.is_empty() {
		output.push(' ');
	} else {
		output.push_str(&escape_text(text));
	}
}

fn describe(node: &Node) -> String {
	match node {
		Node::Text(_) => "text node".to_string(),
		Node::Element(element) => format!("<{}>", element.tag_name()),
		Node::Composite(composite) => format!("component {}", composite.name()),
		Node::Stateless(stateless) => format!("component {}", stateless.name()),
		Node::Invalid => "invalid node".to_string(),
	}
}

/// The main SSR renderer.
///
/// Holds configuration only; every call renders independently and nothing
/// is retained between calls, so a single renderer can serve concurrent
/// requests.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: SsrOptions,
}

impl SsrRenderer {
	/// Creates a new renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	/// Returns the renderer options.
	pub fn options(&self) -> &SsrOptions {
		&self.options
	}

	/// Renders `node` to markup intended for client-side hydration.
	///
	/// The configured depth limit is not applied; see [`SsrRenderer::try_render`].
	pub fn render(&self, node: &Node) -> String {
		Serializer::render_infallible(node, &self.options.initial_context)
	}

	/// Renders `node` to static markup.
	///
	/// Produces the same output as [`SsrRenderer::render`]; structural
	/// markers are kept.
	pub fn render_static(&self, node: &Node) -> String {
		self.render(node)
	}

	/// Renders `node`, failing when the tree nests deeper than
	/// [`SsrOptions::max_depth`].
	pub fn try_render(&self, node: &Node) -> RenderResult<String> {
		Serializer::bounded(self.options.max_depth).render(node, &self.options.initial_context)
	}

	/// Renders `node` into a full HTML document.
	pub fn render_page(&self, node: &Node) -> String {
		let content = self.render(node);
		self.wrap_in_html(&content)
	}

	/// Bounded variant of [`SsrRenderer::render_page`].
	pub fn try_render_page(&self, node: &Node) -> RenderResult<String> {
		let content = self.try_render(node)?;
		Ok(self.wrap_in_html(&content))
	}

	/// Wraps rendered markup in a minimal HTML document.
	pub fn wrap_in_html(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 256);

		if self.options.include_doctype {
			html.push_str("<!DOCTYPE html>\n");
		}
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			escape_text(&self.options.lang)
		));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(&format!(
			"<div id=\"{}\">",
			escape_text(&self.options.root_id)
		));
		html.push_str(content);
		html.push_str("</div>\n");
		html.push_str("</body>\n");
		html.push_str("</html>");
		html
	}
}
