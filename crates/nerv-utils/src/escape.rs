//! HTML entity escaping.
//!
//! Two flavours exist because content and attribute positions have different
//! sets of significant characters:
//!
//! | Function | Escaped characters | Position |
//! |----------|--------------------|----------|
//! | [`encode_entities`] | `&` `<` `>` | text node content |
//! | [`escape_text`] | `&` `<` `>` `"` `'` | attribute values, string children |
//!
//! Both return a borrowed reference when nothing needs escaping.

use std::borrow::Cow;

/// Escapes `&`, `<` and `>` for text content.
pub fn encode_entities(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes `&`, `<`, `>`, `"` and `'` so the result is safe inside a
/// double-quoted attribute value.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
