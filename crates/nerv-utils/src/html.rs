//! HTML element tables.

/// Elements that never carry content and never receive a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
	"meta", "param", "source", "track", "wbr",
];

/// Returns `true` when `tag` is a void element.
///
/// Matching is exact; tag names are expected in lowercase, as produced by
/// the element builders.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}
