//! Rendering context threaded down the node tree.

use crate::value::{PropMap, PropValue};
use serde::{Deserialize, Serialize};

/// Component state exposed to `render`.
pub type State = PropMap;

/// An immutable key-value environment passed from parent to child.
///
/// A context is never mutated in place. Composite components that provide a
/// child context produce a new value through [`Context::extend`], which is
/// then visible to their own subtree only.
///
/// # Example
///
/// ```
/// use nerv_types::Context;
///
/// let parent = Context::new().with("theme", "dark").with("locale", "en");
/// let child = parent.extend(&Context::new().with("theme", "light"));
///
/// assert_eq!(child.get("theme").and_then(|v| v.as_str()), Some("light"));
/// assert_eq!(child.get("locale").and_then(|v| v.as_str()), Some("en"));
/// assert_eq!(parent.get("theme").and_then(|v| v.as_str()), Some("dark"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
	values: PropMap,
}

impl Context {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the context with `key` set to `value`.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Returns a new context with `child`'s entries layered over this one.
	pub fn extend(&self, child: &Context) -> Context {
		Context {
			values: nerv_utils::extend(&self.values, &child.values),
		}
	}

	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl From<PropMap> for Context {
	fn from(values: PropMap) -> Self {
		Self { values }
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Context {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
