/*! Error types for the desktop edges (configuration, parsing, RPC). */

use super::WindowId;

/// Errors raised outside the window manager core.
///
/// Window manager operations themselves never fail: unknown ids are no-ops and
/// geometry is clamped.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
  #[error("Invalid viewport {width}x{height}: dimensions must be finite and positive")]
  InvalidViewport { width: f64, height: f64 },

  #[error("Invalid resize direction: {0:?}")]
  InvalidResizeDirection(String),

  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),
}

/// Result type for desktop operations that can fail.
pub type DeskResult<T> = Result<T, DeskError>;
