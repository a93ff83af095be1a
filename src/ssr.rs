//! HTML serialization of virtual node trees.
//!
//! This module re-exports `nerv-ssr`: the stateless `render_to_string` and
//! `render_to_static_markup` entry points plus [`SsrRenderer`] for
//! configured rendering and full-page output.
//!
//! ## Example
//!
//! ```
//! use nerv_server::ssr::{SsrOptions, SsrRenderer};
//! use nerv_server::{IntoNode, Node};
//!
//! let renderer = SsrRenderer::with_options(SsrOptions::new().lang("ja").no_doctype());
//! let page = renderer.render_page(&Node::element("h1").text("Hi").into_node());
//!
//! assert!(page.starts_with(r#"<html lang="ja">"#));
//! assert!(page.contains(r#"<div id="app"><h1>Hi</h1></div>"#));
//! ```

pub use nerv_ssr::*;
