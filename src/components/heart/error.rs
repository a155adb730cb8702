//! Startup failures for the drawing surface.

use thiserror::Error;

/// The effect cannot start without these; there is nothing to recover to.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no global window")]
	NoWindow,
	#[error("viewport size unavailable")]
	NoViewport,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("canvas context request failed: {0}")]
	ContextRequest(String),
}
