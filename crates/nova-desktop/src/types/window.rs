/*! Window type representing one open application instance. */

use super::{AppKind, Bounds, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Minimum window width. Enforced on every resize, including mid-gesture.
pub const MIN_WIDTH: f64 = 300.0;
/// Minimum window height.
pub const MIN_HEIGHT: f64 = 200.0;

/// An open application window.
///
/// Snapshots handed out by the manager are read-only copies; all mutation goes
/// through [`WindowManager`](crate::WindowManager) commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Window {
  pub id: WindowId,
  #[ts(type = "string")]
  pub app_id: AppKind,
  pub title: String,
  pub icon: Option<String>,
  pub bounds: Bounds,
  /// Minimized windows are not rendered but stay in the collection.
  pub minimized: bool,
  /// Maximized windows are pinned to the full desktop area.
  pub maximized: bool,
  /// Geometry captured when maximizing; consumed on un-maximize.
  pub saved_bounds: Option<Bounds>,
  /// Stacking order: higher draws on top.
  pub z_index: u32,
}

impl Window {
  /// Whether the window should be drawn.
  pub const fn is_visible(&self) -> bool {
    !self.minimized
  }
}
