//! Element and component props.

use crate::children::Children;
use crate::value::{PropMap, PropValue};
use serde::Deserialize;

/// Prop names that are consumed by the framework and never become attributes.
pub const RESERVED_PROPS: &[&str] = &["ref", "key", "children"];

/// Returns `true` for `ref`, `key` and `children`.
pub fn is_reserved_prop(name: &str) -> bool {
	RESERVED_PROPS.contains(&name)
}

/// Props for an element or a component.
///
/// Values keep insertion order, which is the order attributes are emitted in.
/// Components additionally receive their nested content through
/// [`Props::children`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "PropMap")]
pub struct Props {
	values: PropMap,
	children: Children,
}

impl Props {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the props with `key` set to `value`.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the props carrying `children` as component content.
	pub fn with_children(mut self, children: impl Into<Children>) -> Self {
		self.children = children.into();
		self
	}

	/// Sets `key`, keeping its original position if it already exists.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
		self.values.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Returns `true` when `key` is set to anything other than `null`.
	pub fn is_set(&self, key: &str) -> bool {
		self.get(key).is_some_and(|value| !value.is_null())
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates props in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Content handed to a component by its parent.
	pub fn children(&self) -> &Children {
		&self.children
	}

	/// Builds props from a JSON object. Non-object values yield empty props.
	pub fn from_json(value: serde_json::Value) -> Self {
		match PropValue::from(value) {
			PropValue::Map(values) => values.into(),
			_ => Self::default(),
		}
	}
}

impl From<PropMap> for Props {
	fn from(values: PropMap) -> Self {
		Self {
			values,
			children: Children::None,
		}
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Props::new();
		for (k, v) in iter {
			props.insert(k, v);
		}
		props
	}
}
