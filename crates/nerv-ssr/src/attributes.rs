//! Attribute encoding for element start tags.
//!
//! Props are visited in insertion order and the first matching rule wins:
//!
//! | Prop | Output |
//! |------|--------|
//! | `ref`, `key`, `children` | nothing |
//! | `dangerouslySetInnerHTML` | nothing; its `__html` payload is returned to the caller |
//! | `style` | `style="..."` from a string or a style map, omitted when empty |
//! | `class`, `className` | `class="..."` from a string or a map of truthy class names |
//! | `defaultValue` | `value="..."` unless `value` is set |
//! | `defaultChecked` | `checked="..."` unless `checked` is set |
//! | anything else | `name="escaped"`, `name="number"`, bare `name` for `true`, nothing otherwise |

use nerv_types::{PropValue, Props, is_reserved_prop};
use nerv_utils::{css_property_name, escape_text, format_number, is_unitless_number};
use std::borrow::Cow;

const INNER_HTML_PROP: &str = "dangerouslySetInnerHTML";
const INNER_HTML_KEY: &str = "__html";

/// Writes every attribute of `props` to `out`, each preceded by a space.
///
/// Returns the raw HTML payload captured from `dangerouslySetInnerHTML`.
pub(crate) fn write_attributes<'a>(props: &'a Props, out: &mut String) -> Option<&'a str> {
	let mut inner_html = None;

	for (name, value) in props.iter() {
		if is_reserved_prop(name) {
			continue;
		}

		match name {
			INNER_HTML_PROP => {
				inner_html = value
					.as_map()
					.and_then(|payload| payload.get(INNER_HTML_KEY))
					.and_then(PropValue::as_str);
			}
			"style" => {
				let style = render_styles(value);
				if !style.is_empty() {
					push_attr(out, "style", &style);
				}
			}
			"class" | "className" => {
				let class = match value {
					PropValue::String(s) => Cow::Borrowed(s.as_str()),
					PropValue::Map(_) => Cow::Owned(class_names(value)),
					_ => Cow::Borrowed(""),
				};
				push_attr(out, "class", &class);
			}
			"defaultValue" => {
				if !props.is_set("value") && !value.is_null() {
					push_attr(out, "value", &escape_text(&value.to_js_string()));
				}
			}
			"defaultChecked" => {
				if !props.is_set("checked") && !value.is_null() {
					push_attr(out, "checked", &value.to_js_string());
				}
			}
			_ => match value {
				PropValue::String(s) => push_attr(out, name, &escape_text(s)),
				PropValue::Number(n) => push_attr(out, name, &format_number(*n)),
				PropValue::Bool(true) => {
					out.push(' ');
					out.push_str(name);
				}
				_ => {}
			},
		}
	}

	inner_html
}

fn push_attr(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(value);
	out.push('"');
}

/// Renders a `style` prop to its attribute value.
///
/// Strings pass through. Maps render `property:value;` per entry with
/// camelCase keys hyphenated; numbers get `px` unless the property is
/// unitless. Entries that are neither strings nor numbers are skipped.
pub(crate) fn render_styles(value: &PropValue) -> Cow<'_, str> {
	match value {
		PropValue::String(s) => Cow::Borrowed(s.as_str()),
		PropValue::Map(styles) => {
			let mut rendered = String::new();
			for (property, value) in styles {
				match value {
					PropValue::String(s) => {
						rendered.push_str(&css_property_name(property));
						rendered.push(':');
						rendered.push_str(s);
						rendered.push(';');
					}
					PropValue::Number(n) => {
						rendered.push_str(&css_property_name(property));
						rendered.push(':');
						rendered.push_str(&format_number(*n));
						if !is_unitless_number(property) {
							rendered.push_str("px");
						}
						rendered.push(';');
					}
					_ => {}
				}
			}
			Cow::Owned(rendered)
		}
		_ => Cow::Borrowed(""),
	}
}

/// Joins the keys of a class map whose values are truthy.
pub(crate) fn class_names(value: &PropValue) -> String {
	value
		.as_map()
		.map(|classes| {
			classes
				.iter()
				.filter(|(_, enabled)| enabled.is_truthy())
				.map(|(name, _)| name.as_str())
				.collect::<Vec<_>>()
				.join(" ")
		})
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use nerv_types::PropMap;
	use rstest::rstest;

	fn map(entries: &[(&str, PropValue)]) -> PropValue {
		entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect::<PropMap>()
			.into()
	}

	fn encode(props: &Props) -> (String, Option<String>) {
		let mut out = String::new();
		let html = write_attributes(props, &mut out).map(str::to_string);
		(out, html)
	}

	#[rstest]
	fn test_render_styles_map() {
		let style = map(&[
			("color", "red".into()),
			("marginTop", 4.into()),
			("zIndex", 3.into()),
			("display", PropValue::Null),
		]);
		assert_eq!(render_styles(&style), "color:red;margin-top:4px;z-index:3;");
	}

	#[rstest]
	fn test_render_styles_string_passthrough() {
		assert_eq!(render_styles(&"color: blue".into()), "color: blue");
	}

	#[rstest]
	fn test_class_names() {
		let classes = map(&[
			("active", true.into()),
			("hidden", false.into()),
			("count", 1.into()),
			("empty", "".into()),
		]);
		assert_eq!(class_names(&classes), "active count");
	}

	#[rstest]
	fn test_reserved_props_skipped() {
		let props = Props::new()
			.with("key", "k1")
			.with("ref", "r")
			.with("children", "c")
			.with("id", "main");
		assert_eq!(encode(&props).0, " id=\"main\"");
	}

	#[rstest]
	#[case(PropValue::from("a\"b"), " title=\"a&quot;b\"")]
	#[case(PropValue::from(3), " title=\"3\"")]
	#[case(PropValue::from(true), " title")]
	#[case(PropValue::from(false), "")]
	#[case(PropValue::Null, "")]
	fn test_generic_attribute(#[case] value: PropValue, #[case] expected: &str) {
		let props = Props::new().with("title", value);
		assert_eq!(encode(&props).0, expected);
	}

	#[rstest]
	fn test_empty_style_suppressed() {
		let props = Props::new().with("style", map(&[]));
		assert_eq!(encode(&props).0, "");
	}

	#[rstest]
	fn test_default_value_without_value() {
		let props = Props::new().with("defaultValue", "a<b");
		assert_eq!(encode(&props).0, " value=\"a&lt;b\"");
	}

	#[rstest]
	fn test_default_value_with_value() {
		let props = Props::new().with("value", "real").with("defaultValue", "initial");
		assert_eq!(encode(&props).0, " value=\"real\"");
	}

	#[rstest]
	fn test_default_checked() {
		let unchecked = Props::new().with("defaultChecked", true);
		assert_eq!(encode(&unchecked).0, " checked=\"true\"");

		let controlled = Props::new().with("checked", true).with("defaultChecked", false);
		assert_eq!(encode(&controlled).0, " checked");
	}

	#[rstest]
	fn test_inner_html_captured() {
		let payload = map(&[("__html", "<i>raw</i>".into())]);
		let props = Props::new().with("dangerouslySetInnerHTML", payload);
		let (attrs, html) = encode(&props);
		assert_eq!(attrs, "");
		assert_eq!(html.as_deref(), Some("<i>raw</i>"));
	}

	#[rstest]
	fn test_class_name_alias() {
		let props = Props::new().with("className", "btn primary");
		assert_eq!(encode(&props).0, " class=\"btn primary\"");
	}
}
