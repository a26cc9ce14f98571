/*! Event types for state changes and synchronization. */

use super::{Window, WindowId};
use serde::Serialize;
use ts_rs::TS;

/// Full desktop state, sent on (re)sync.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Snapshot {
  /// All windows in open order, minimized ones included.
  pub windows: Vec<Window>,
  /// Topmost visible window.
  pub focused: Option<WindowId>,
  /// Last z-index handed out.
  pub top_z: u32,
}

/// Events emitted when state changes.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  #[serde(rename = "window:added")]
  WindowAdded { window: Window },
  #[serde(rename = "window:changed")]
  WindowChanged { window: Window },
  #[serde(rename = "window:removed")]
  WindowRemoved { window_id: WindowId },

  #[serde(rename = "focus:window")]
  FocusWindow { window_id: Option<WindowId> },
}
