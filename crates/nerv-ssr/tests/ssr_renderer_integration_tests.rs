//! SSR Renderer Integration Tests
//!
//! Test Categories:
//! 1. Basic Rendering - element, text and attribute output
//! 2. Escape Handling - entity escaping in content and attributes
//! 3. Void Elements - self-closing tags
//! 4. Children - strings, numbers, lists and raw HTML
//! 5. Attribute Encoding - style, class and default values
//! 6. Entry Points - render_to_string / render_to_static_markup parity

use nerv_ssr::{SsrRenderer, render_to_static_markup, render_to_string};
use nerv_types::{Child, Children, IntoNode, Node, PropMap, PropValue, Props};
use rstest::rstest;
use serde_json::json;

fn object(value: serde_json::Value) -> PropValue {
	PropValue::from(value)
}

// ============================================================================
// Category 1: Basic Rendering
// ============================================================================

#[rstest]
fn test_element_with_id_and_text() {
	let node = Node::element("div").prop("id", "x").text("hi").into_node();
	assert_eq!(render_to_string(&node), r#"<div id="x">hi</div>"#);
}

#[rstest]
fn test_text_node_root() {
	assert_eq!(render_to_string(&Node::text("plain")), "plain");
}

#[rstest]
fn test_nested_elements() {
	let node = Node::element("ul")
		.prop("class", "menu")
		.child(Node::element("li").text("Home"))
		.child(Node::element("li").text("About"))
		.into_node();

	assert_eq!(
		render_to_string(&node),
		r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
	);
}

#[rstest]
fn test_attributes_follow_insertion_order() {
	let node = Node::element("a")
		.prop("href", "/docs")
		.prop("target", "_blank")
		.prop("rel", "noopener")
		.text("Docs")
		.into_node();

	assert_eq!(
		render_to_string(&node),
		r#"<a href="/docs" target="_blank" rel="noopener">Docs</a>"#
	);
}

#[rstest]
fn test_boolean_and_numeric_attributes() {
	let node = Node::element("button")
		.prop("disabled", true)
		.prop("hidden", false)
		.prop("tabIndex", 2)
		.text("Go")
		.into_node();

	assert_eq!(
		render_to_string(&node),
		r#"<button disabled tabIndex="2">Go</button>"#
	);
}

#[rstest]
fn test_element_without_children_keeps_both_tags() {
	let node = Node::element("span").prop("title", "t").into_node();
	assert_eq!(render_to_string(&node), r#"<span title="t"></span>"#);
}

#[rstest]
fn test_props_from_json() {
	let props = Props::from_json(json!({ "id": "main", "data-count": 3, "key": "k" }));
	let node = Node::element("section").with_props(props).into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<section id="main" data-count="3"></section>"#
	);
}

// ============================================================================
// Category 2: Escape Handling
// ============================================================================

#[rstest]
fn test_text_node_escaping() {
	let node = Node::text("<script>alert('x') & more</script>");
	assert_eq!(
		render_to_string(&node),
		"&lt;script&gt;alert('x') &amp; more&lt;/script&gt;"
	);
}

#[rstest]
fn test_string_child_escaping() {
	let node = Node::element("p").text(r#"a < b & "c""#).into_node();
	assert_eq!(
		render_to_string(&node),
		"<p>a &lt; b &amp; &quot;c&quot;</p>"
	);
}

#[rstest]
fn test_attribute_value_escaping() {
	let node = Node::element("div")
		.prop("title", r#""><script>"#)
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<div title="&quot;&gt;&lt;script&gt;"></div>"#
	);
}

// ============================================================================
// Category 3: Void Elements
// ============================================================================

#[rstest]
fn test_img_self_closes() {
	let node = Node::element("img").prop("src", "a.png").into_node();
	assert_eq!(render_to_string(&node), r#"<img src="a.png"/>"#);
}

#[rstest]
#[case("br")]
#[case("hr")]
#[case("input")]
#[case("meta")]
fn test_void_elements_ignore_children(#[case] tag: &str) {
	let node = Node::element(tag)
		.child("ignored")
		.child(Node::element("span"))
		.into_node();
	assert_eq!(render_to_string(&node), format!("<{}/>", tag));
}

#[rstest]
fn test_void_element_ignores_inner_html() {
	let node = Node::element("input").inner_html("<b>x</b>").into_node();
	assert_eq!(render_to_string(&node), "<input/>");
}

// ============================================================================
// Category 4: Children
// ============================================================================

#[rstest]
fn test_empty_string_child_renders_space() {
	let node = Node::element("td").text("").into_node();
	assert_eq!(render_to_string(&node), "<td> </td>");
}

#[rstest]
fn test_numeric_child() {
	let node = Node::element("span").children(42).into_node();
	assert_eq!(render_to_string(&node), "<span>42</span>");

	let node = Node::element("span").children(0.5).into_node();
	assert_eq!(render_to_string(&node), "<span>0.5</span>");
}

#[rstest]
fn test_mixed_children_list() {
	let node = Node::element("p")
		.children(vec![
			Child::from("Total: "),
			Child::from(3),
			Child::from(""),
			Child::Node(Node::invalid()),
			Child::from(Node::element("em").text("items")),
		])
		.into_node();

	assert_eq!(render_to_string(&node), "<p>Total: 3 <em>items</em></p>");
}

#[rstest]
fn test_single_node_child() {
	let node = Node::element("div")
		.children(Node::element("b").text("bold"))
		.into_node();
	assert_eq!(render_to_string(&node), "<div><b>bold</b></div>");
}

#[rstest]
fn test_inner_html_injected_verbatim() {
	let node = Node::element("div")
		.inner_html("<strong>raw & unescaped</strong>")
		.into_node();
	assert_eq!(
		render_to_string(&node),
		"<div><strong>raw & unescaped</strong></div>"
	);
}

#[rstest]
fn test_inner_html_with_invalid_child_still_injected() {
	let node = Node::element("div")
		.inner_html("<i>raw</i>")
		.children(Node::invalid())
		.into_node();
	assert_eq!(render_to_string(&node), "<div><i>raw</i></div>");
}

#[rstest]
fn test_children_take_precedence_over_inner_html() {
	let node = Node::element("div")
		.inner_html("<i>raw</i>")
		.text("child")
		.into_node();
	assert_eq!(render_to_string(&node), "<div>child</div>");
}

#[rstest]
fn test_empty_list_children() {
	let node = Node::element("ol")
		.children(Children::List(vec![]))
		.into_node();
	assert_eq!(render_to_string(&node), "<ol></ol>");
}

// ============================================================================
// Category 5: Attribute Encoding
// ============================================================================

#[rstest]
fn test_style_object() {
	let node = Node::element("div")
		.prop("style", object(json!({ "color": "red", "marginTop": 4 })))
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<div style="color:red;margin-top:4px;"></div>"#
	);
}

#[rstest]
fn test_style_unitless_and_vendor_prefixed() {
	let node = Node::element("div")
		.prop(
			"style",
			object(json!({ "opacity": 0.5, "zIndex": 10, "WebkitTransition": "none", "msFlexGrow": 1 })),
		)
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<div style="opacity:0.5;z-index:10;-webkit-transition:none;-ms-flex-grow:1;"></div>"#
	);
}

#[rstest]
fn test_style_string() {
	let node = Node::element("div").prop("style", "display: none").into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<div style="display: none"></div>"#
	);
}

#[rstest]
fn test_empty_style_attribute_suppressed() {
	let node = Node::element("div")
		.prop("style", PropMap::new())
		.prop("id", "a")
		.into_node();
	assert_eq!(render_to_string(&node), r#"<div id="a"></div>"#);
}

#[rstest]
fn test_class_object() {
	let node = Node::element("div")
		.prop("class", object(json!({ "active": true, "hidden": false })))
		.into_node();
	assert_eq!(render_to_string(&node), r#"<div class="active"></div>"#);
}

#[rstest]
fn test_class_name_string() {
	let node = Node::element("div").prop("className", "card wide").into_node();
	assert_eq!(render_to_string(&node), r#"<div class="card wide"></div>"#);
}

#[rstest]
fn test_value_wins_over_default_value() {
	let node = Node::element("input")
		.prop("defaultValue", "initial")
		.prop("value", "current")
		.into_node();
	assert_eq!(render_to_string(&node), r#"<input value="current"/>"#);
}

#[rstest]
fn test_default_value_used_when_uncontrolled() {
	let node = Node::element("input")
		.prop("type", "text")
		.prop("defaultValue", "Tom & Jerry")
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<input type="text" value="Tom &amp; Jerry"/>"#
	);
}

#[rstest]
fn test_default_checked() {
	let node = Node::element("input")
		.prop("type", "checkbox")
		.prop("defaultChecked", true)
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<input type="checkbox" checked="true"/>"#
	);

	let controlled = Node::element("input")
		.prop("defaultChecked", true)
		.prop("checked", true)
		.into_node();
	assert_eq!(render_to_string(&controlled), "<input checked/>");
}

#[rstest]
fn test_reserved_props_never_emitted() {
	let node = Node::element("li")
		.prop("key", "row-1")
		.prop("ref", "rowRef")
		.prop("children", "ignored")
		.text("row")
		.into_node();
	assert_eq!(render_to_string(&node), "<li>row</li>");
}

// ============================================================================
// Category 6: Entry Points
// ============================================================================

#[rstest]
fn test_static_markup_matches_string_output() {
	let node = Node::element("main")
		.prop("style", object(json!({ "padding": 8 })))
		.child(Node::stateless("Empty", |_, _| Node::invalid(), Props::new()))
		.child(Node::element("img").prop("alt", "logo"))
		.into_node();

	let markup = render_to_string(&node);
	assert_eq!(markup, render_to_static_markup(&node));
	assert_eq!(
		markup,
		r#"<main style="padding:8px;"><!--!--><img alt="logo"/></main>"#
	);
}

#[rstest]
fn test_render_twice_is_identical() {
	let node = Node::element("div")
		.child(Node::element("p").text("one"))
		.child(2)
		.into_node();
	let renderer = SsrRenderer::new();
	assert_eq!(renderer.render(&node), renderer.render(&node));
	assert_eq!(render_to_string(&node), renderer.render(&node));
}

#[rstest]
fn test_concurrent_renders_share_tree() {
	use std::sync::Arc;

	let tree = Arc::new(
		Node::element("div")
			.child(Node::stateless("Label", |_, _| Node::text("shared"), Props::new()))
			.into_node(),
	);

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let tree = Arc::clone(&tree);
			std::thread::spawn(move || render_to_string(&tree))
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), "<div>shared</div>");
	}
}
