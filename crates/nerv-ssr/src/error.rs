//! Render error types.
//!
//! The plain entry points never fail. These errors are only produced by
//! [`SsrRenderer::try_render`](crate::SsrRenderer::try_render) when a depth
//! limit is configured.

use thiserror::Error;

/// Result type for bounded render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors reported by bounded rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RenderError {
	/// The tree nests deeper than the configured limit.
	#[error("render depth limit of {limit} exceeded at {node}")]
	DepthLimitExceeded {
		/// Configured maximum depth.
		limit: usize,
		/// Description of the node that crossed the limit.
		node: String,
	},
}
