//! Renderer configuration.

use nerv_types::Context;
use serde::Deserialize;

/// Options for [`SsrRenderer`](crate::SsrRenderer).
///
/// Options deserialize from a settings object; missing fields take their
/// defaults.
///
/// ```
/// use nerv_ssr::SsrOptions;
///
/// let options = SsrOptions::new().lang("ja").max_depth(256);
/// assert_eq!(options.lang, "ja");
/// assert_eq!(options.max_depth, Some(256));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SsrOptions {
	/// Maximum nesting depth honoured by `try_render`. `None` means unbounded.
	pub max_depth: Option<usize>,
	/// Language attribute for the `<html>` element of full pages.
	pub lang: String,
	/// Id of the container element the markup is placed in on full pages.
	pub root_id: String,
	/// Whether full pages start with `<!DOCTYPE html>`.
	pub include_doctype: bool,
	/// Context the root node is rendered with.
	pub initial_context: Context,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			max_depth: None,
			lang: "en".to_string(),
			root_id: "app".to_string(),
			include_doctype: true,
			initial_context: Context::new(),
		}
	}
}

impl SsrOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the depth limit enforced by `try_render`.
	pub fn max_depth(mut self, depth: usize) -> Self {
		self.max_depth = Some(depth);
		self
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the id of the mount container.
	pub fn root_id(mut self, id: impl Into<String>) -> Self {
		self.root_id = id.into();
		self
	}

	/// Omits the doctype from full pages.
	pub fn no_doctype(mut self) -> Self {
		self.include_doctype = false;
		self
	}

	/// Sets the context the root node is rendered with.
	pub fn context(mut self, context: Context) -> Self {
		self.initial_context = context;
		self
	}
}
