//! Dynamic prop values.
//!
//! Props, state and context all carry [`PropValue`]s. The value model is the
//! same one JSON has, with browser semantics for truthiness and
//! stringification since attribute encoding depends on both.

use indexmap::IndexMap;
use nerv_utils::format_number;
use serde::{Deserialize, Serialize};

/// Ordered string-keyed map of prop values. Iteration follows insertion order.
pub type PropMap = IndexMap<String, PropValue>;

/// A single prop, state or context value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
	/// Absent value (`null` / `undefined`).
	#[default]
	Null,
	/// A boolean.
	Bool(bool),
	/// A number. All numbers are doubles, as in the browser.
	Number(f64),
	/// A string.
	String(String),
	/// An ordered list of values.
	List(Vec<PropValue>),
	/// A nested object.
	Map(PropMap),
}

impl PropValue {
	/// Returns `true` for [`PropValue::String`].
	pub fn is_string(&self) -> bool {
		matches!(self, PropValue::String(_))
	}

	/// Returns `true` for [`PropValue::Number`].
	pub fn is_number(&self) -> bool {
		matches!(self, PropValue::Number(_))
	}

	/// Returns `true` for [`PropValue::Bool`].
	pub fn is_bool(&self) -> bool {
		matches!(self, PropValue::Bool(_))
	}

	/// Returns `true` for [`PropValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, PropValue::Null)
	}

	/// Returns `true` for [`PropValue::List`].
	pub fn is_list(&self) -> bool {
		matches!(self, PropValue::List(_))
	}

	/// Returns `true` for [`PropValue::Map`].
	pub fn is_map(&self) -> bool {
		matches!(self, PropValue::Map(_))
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			PropValue::Number(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			PropValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&PropMap> {
		match self {
			PropValue::Map(map) => Some(map),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[PropValue]> {
		match self {
			PropValue::List(list) => Some(list),
			_ => None,
		}
	}

	/// Browser truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy,
	/// everything else (including empty lists and maps) is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			PropValue::Null => false,
			PropValue::Bool(b) => *b,
			PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
			PropValue::String(s) => !s.is_empty(),
			PropValue::List(_) | PropValue::Map(_) => true,
		}
	}

	/// Stringifies the value the way `String(value)` does in a browser.
	pub fn to_js_string(&self) -> String {
		match self {
			PropValue::Null => "null".to_string(),
			PropValue::Bool(b) => b.to_string(),
			PropValue::Number(n) => format_number(*n),
			PropValue::String(s) => s.clone(),
			PropValue::List(items) => items
				.iter()
				.map(|item| match item {
					PropValue::Null => String::new(),
					other => other.to_js_string(),
				})
				.collect::<Vec<_>>()
				.join(","),
			PropValue::Map(_) => "[object Object]".to_string(),
		}
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		PropValue::String(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::String(value)
	}
}

impl From<&String> for PropValue {
	fn from(value: &String) -> Self {
		PropValue::String(value.clone())
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					PropValue::Number(value as f64)
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<PropMap> for PropValue {
	fn from(value: PropMap) -> Self {
		PropValue::Map(value)
	}
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
	fn from(value: Vec<T>) -> Self {
		PropValue::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(PropValue::Null, Into::into)
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropValue {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		PropValue::Map(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

impl From<serde_json::Value> for PropValue {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => PropValue::Null,
			serde_json::Value::Bool(b) => PropValue::Bool(b),
			serde_json::Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
			serde_json::Value::String(s) => PropValue::String(s),
			serde_json::Value::Array(items) => {
				PropValue::List(items.into_iter().map(PropValue::from).collect())
			}
			serde_json::Value::Object(map) => {
				PropValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
			}
		}
	}
}
