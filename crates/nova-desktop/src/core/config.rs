/*! Desktop layout configuration. */

use crate::types::{Point, Size};

const DEFAULT_VIEWPORT: Size = Size::new(1920.0, 1080.0);
const DEFAULT_HEADER_HEIGHT: f64 = 48.0;
const DEFAULT_SNAP_THRESHOLD: f64 = 20.0;
const DEFAULT_INITIAL_Z: u32 = 100;
const DEFAULT_WINDOW_SIZE: Size = Size::new(800.0, 600.0);
const DEFAULT_CASCADE_ORIGIN: Point = Point::new(100.0, 50.0);
const DEFAULT_CASCADE_STEP: f64 = 30.0;

/// Layout constants shared by the window manager and the pointer controller.
///
/// Prefer [`Desktop::builder`](crate::Desktop::builder), which validates the
/// viewport. Direct construction is for embedding a bare
/// [`WindowManager`](crate::WindowManager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopConfig {
  /// Browser viewport. Drag snapping measures against its width.
  pub viewport: Size,
  /// Height of the top bar, excluded from the desktop area.
  pub header_height: f64,
  /// Distance from a screen edge within which a dragged window snaps to it.
  pub snap_threshold: f64,
  /// Starting value of the z-index counter. The first window gets `initial_z + 1`.
  pub initial_z: u32,
  /// Size of newly opened windows.
  pub window_size: Size,
  /// Position of the first window.
  pub cascade_origin: Point,
  /// Offset added per already-open window so new windows do not stack exactly.
  pub cascade_step: f64,
}

impl Default for DesktopConfig {
  fn default() -> Self {
    Self {
      viewport: DEFAULT_VIEWPORT,
      header_height: DEFAULT_HEADER_HEIGHT,
      snap_threshold: DEFAULT_SNAP_THRESHOLD,
      initial_z: DEFAULT_INITIAL_Z,
      window_size: DEFAULT_WINDOW_SIZE,
      cascade_origin: DEFAULT_CASCADE_ORIGIN,
      cascade_step: DEFAULT_CASCADE_STEP,
    }
  }
}

impl DesktopConfig {
  /// Area available to windows: the viewport minus the header.
  pub fn desktop_area(&self) -> Size {
    Size::new(
      self.viewport.w,
      (self.viewport.h - self.header_height).max(0.0),
    )
  }

  /// Default position for the `open_count`-th window.
  pub fn cascade_position(&self, open_count: usize) -> Point {
    let step = f64::from(u32::try_from(open_count).unwrap_or(u32::MAX)) * self.cascade_step;
    Point::new(self.cascade_origin.x + step, self.cascade_origin.y + step)
  }
}
