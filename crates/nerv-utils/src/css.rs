//! CSS property helpers for inline style rendering.
//!
//! Style objects are keyed by camelCase property names (`marginTop`,
//! `WebkitTransition`, `msFlex`). [`css_property_name`] turns them into the
//! hyphenated form used in a `style` attribute and [`is_unitless_number`]
//! decides whether a numeric value needs a `px` suffix.

use std::borrow::Cow;

/// Properties whose numeric values are rendered without a unit.
pub const UNITLESS_PROPERTIES: &[&str] = &[
	"animationIterationCount",
	"aspectRatio",
	"borderImageOutset",
	"borderImageSlice",
	"borderImageWidth",
	"boxFlex",
	"boxFlexGroup",
	"boxOrdinalGroup",
	"columnCount",
	"columns",
	"fillOpacity",
	"flex",
	"flexGrow",
	"flexNegative",
	"flexOrder",
	"flexPositive",
	"flexShrink",
	"floodOpacity",
	"fontWeight",
	"gridArea",
	"gridColumn",
	"gridColumnEnd",
	"gridColumnSpan",
	"gridColumnStart",
	"gridRow",
	"gridRowEnd",
	"gridRowSpan",
	"gridRowStart",
	"lineClamp",
	"lineHeight",
	"opacity",
	"order",
	"orphans",
	"stopOpacity",
	"strokeDasharray",
	"strokeDashoffset",
	"strokeMiterlimit",
	"strokeOpacity",
	"strokeWidth",
	"tabSize",
	"widows",
	"zIndex",
	"zoom",
];

const VENDOR_PREFIXES: &[&str] = &["Webkit", "Moz", "ms", "O"];

/// Translates a camelCase style key into its CSS property name.
///
/// Uppercase letters become `-` followed by the lowercase letter. The
/// lowercase `ms` vendor prefix gains the leading dash the other prefixes
/// get from their capital letter. Custom properties (`--name`) pass
/// through untouched.
///
/// ```
/// use nerv_utils::css_property_name;
///
/// assert_eq!(css_property_name("marginTop"), "margin-top");
/// assert_eq!(css_property_name("WebkitTransition"), "-webkit-transition");
/// assert_eq!(css_property_name("msTransform"), "-ms-transform");
/// ```
pub fn css_property_name(name: &str) -> Cow<'_, str> {
	if name.starts_with("--") {
		return Cow::Borrowed(name);
	}
	let ms_prefixed = strip_vendor_prefix(name).is_some() && name.starts_with("ms");
	if !ms_prefixed && !name.contains(|c: char| c.is_ascii_uppercase()) {
		return Cow::Borrowed(name);
	}

	let mut out = String::with_capacity(name.len() + 4);
	if ms_prefixed {
		out.push('-');
	}
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			out.push('-');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}

/// Returns `true` when numeric values of `name` must not receive `px`.
///
/// Vendor-prefixed spellings (`WebkitFlex`, `msFlexGrow`) resolve to the
/// unprefixed entry.
pub fn is_unitless_number(name: &str) -> bool {
	if UNITLESS_PROPERTIES.contains(&name) {
		return true;
	}
	match strip_vendor_prefix(name) {
		Some(rest) => {
			let mut chars = rest.chars();
			let Some(first) = chars.next() else {
				return false;
			};
			let unprefixed: String = first.to_ascii_lowercase().to_string() + chars.as_str();
			UNITLESS_PROPERTIES.contains(&unprefixed.as_str())
		}
		None => false,
	}
}

/// Returns the remainder after a vendor prefix when one is followed by an
/// uppercase letter.
fn strip_vendor_prefix(name: &str) -> Option<&str> {
	VENDOR_PREFIXES.iter().find_map(|prefix| {
		name.strip_prefix(prefix)
			.filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
	})
}
