//! Element children.

use crate::node::{ElementNode, Node};

/// The children slot of an element.
#[derive(Debug, Clone, Default)]
pub enum Children {
	/// No children.
	#[default]
	None,
	/// A single child node.
	Node(Box<Node>),
	/// A single string child.
	Text(String),
	/// A single numeric child.
	Number(f64),
	/// An ordered sequence of mixed children.
	List(Vec<Child>),
}

/// One entry of [`Children::List`].
#[derive(Debug, Clone)]
pub enum Child {
	Text(String),
	Number(f64),
	Node(Node),
}

impl Children {
	/// Returns `true` when there is nothing to render: no children at all or
	/// a single invalid node.
	pub fn is_invalid(&self) -> bool {
		match self {
			Children::None => true,
			Children::Node(node) => node.is_null_or_invalid(),
			_ => false,
		}
	}

	/// Appends `child`, turning a single child into a list when needed.
	pub fn push(&mut self, child: impl Into<Child>) {
		let child = child.into();
		*self = match std::mem::take(self) {
			Children::None => Children::List(vec![child]),
			Children::List(mut items) => {
				items.push(child);
				Children::List(items)
			}
			Children::Node(node) => Children::List(vec![Child::Node(*node), child]),
			Children::Text(text) => Children::List(vec![Child::Text(text), child]),
			Children::Number(n) => Children::List(vec![Child::Number(n), child]),
		};
	}
}

impl From<Node> for Children {
	fn from(node: Node) -> Self {
		Children::Node(Box::new(node))
	}
}

impl From<ElementNode> for Children {
	fn from(element: ElementNode) -> Self {
		Children::Node(Box::new(Node::Element(element)))
	}
}

impl From<&str> for Children {
	fn from(text: &str) -> Self {
		Children::Text(text.to_string())
	}
}

impl From<String> for Children {
	fn from(text: String) -> Self {
		Children::Text(text)
	}
}

impl From<Vec<Child>> for Children {
	fn from(items: Vec<Child>) -> Self {
		Children::List(items)
	}
}

impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Child::Node(node)
	}
}

impl From<ElementNode> for Child {
	fn from(element: ElementNode) -> Self {
		Child::Node(Node::Element(element))
	}
}

impl From<&str> for Child {
	fn from(text: &str) -> Self {
		Child::Text(text.to_string())
	}
}

impl From<String> for Child {
	fn from(text: String) -> Self {
		Child::Text(text)
	}
}

macro_rules! impl_numeric_children {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Children {
				fn from(value: $ty) -> Self {
					Children::Number(value as f64)
				}
			}

			impl From<$ty> for Child {
				fn from(value: $ty) -> Self {
					Child::Number(value as f64)
				}
			}
		)*
	};
}

impl_numeric_children!(i32, i64, u32, u64, usize, f32, f64);
