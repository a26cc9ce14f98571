/*! Drag-snap and resize geometry. Pure functions, no state. */

use super::ResizeDirection;
use crate::types::{Bounds, Point, MIN_HEIGHT, MIN_WIDTH};

/// Snap a candidate drag position to the screen edges.
///
/// Left and top snap to 0 within `threshold`; the right edge snaps the
/// window flush against `screen_width`. The bottom edge never snaps.
///
/// ```
/// use nova_desktop::pointer::snap_position;
/// use nova_desktop::Point;
///
/// let snapped = snap_position(Point::new(15.0, 300.0), 800.0, 1920.0, 20.0);
/// assert_eq!(snapped, Point::new(0.0, 300.0));
/// ```
pub fn snap_position(candidate: Point, window_width: f64, screen_width: f64, threshold: f64) -> Point {
  let mut snapped = candidate;
  if candidate.x <= threshold {
    snapped.x = 0.0;
  }
  if candidate.x >= screen_width - window_width - threshold {
    snapped.x = screen_width - window_width;
  }
  if candidate.y <= threshold {
    snapped.y = 0.0;
  }
  snapped
}

/// Bounds after dragging a resize handle by `delta` from the press point.
///
/// East/south grow with the pointer. West/north shrink with it and move the
/// origin so the opposite edge stays put, except once the size is pinned at
/// the minimum: then the origin stays where it was at press time.
pub fn resize_bounds(origin: Bounds, direction: ResizeDirection, delta: Point) -> Bounds {
  let mut next = origin;

  if direction.east() {
    next.w = (origin.w + delta.x).max(MIN_WIDTH);
  }
  if direction.west() {
    next.w = (origin.w - delta.x).max(MIN_WIDTH);
    if next.w > MIN_WIDTH {
      next.x = origin.x + delta.x;
    }
  }
  if direction.south() {
    next.h = (origin.h + delta.y).max(MIN_HEIGHT);
  }
  if direction.north() {
    next.h = (origin.h - delta.y).max(MIN_HEIGHT);
    if next.h > MIN_HEIGHT {
      next.y = origin.y + delta.y;
    }
  }

  next
}
