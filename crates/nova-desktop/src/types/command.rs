/*! Window manager commands as data. */

use super::{AppKind, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A mutation request for the window manager.
///
/// The view layer and the pointer controller both speak this vocabulary;
/// [`WindowManager::apply`](crate::WindowManager::apply) is the single entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
#[ts(export)]
pub enum Command {
  /// Open an app, or bring its existing window forward.
  Open {
    #[ts(type = "string")]
    app_id: AppKind,
    title: String,
    #[serde(default)]
    icon: Option<String>,
  },
  /// Remove a window.
  Close { window_id: WindowId },
  /// Hide a window without changing its stacking order.
  Minimize { window_id: WindowId },
  /// Toggle maximized state.
  Maximize { window_id: WindowId },
  /// Un-minimize and raise.
  Restore { window_id: WindowId },
  /// Raise to the top.
  Focus { window_id: WindowId },
  /// Set the top-left corner.
  Move { window_id: WindowId, x: f64, y: f64 },
  /// Set the size, clamped to the minimum.
  Resize {
    window_id: WindowId,
    width: f64,
    height: f64,
  },
}
