/*! Geometry types in desktop-area coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A 2D point in desktop-area coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Component-wise difference `self - origin`.
  pub fn delta_from(&self, origin: Point) -> Point {
    Point::new(self.x - origin.x, self.y - origin.y)
  }

  /// Translate by a delta.
  pub fn offset(&self, delta: Point) -> Point {
    Point::new(self.x + delta.x, self.y + delta.y)
  }
}

/// Width and height of an area.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size {
  pub w: f64,
  pub h: f64,
}

impl Size {
  pub const fn new(w: f64, h: f64) -> Self {
    Self { w, h }
  }

  /// Both dimensions finite and strictly positive.
  pub fn is_usable(&self) -> bool {
    self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
  }
}

/// Rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Bounds {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Bounds {
  pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }

  /// Bounds anchored at the origin with the given size.
  pub const fn at_origin(size: Size) -> Self {
    Self::new(0.0, 0.0, size.w, size.h)
  }

  pub const fn position(&self) -> Point {
    Point::new(self.x, self.y)
  }

  pub const fn size(&self) -> Size {
    Size::new(self.w, self.h)
  }

  #[must_use]
  pub const fn with_position(self, position: Point) -> Self {
    Self::new(position.x, position.y, self.w, self.h)
  }

  #[must_use]
  pub const fn with_size(self, size: Size) -> Self {
    Self::new(self.x, self.y, size.w, size.h)
  }

  /// Check if a point is contained within these bounds (edges inclusive).
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.x
      && point.x <= self.x + self.w
      && point.y >= self.y
      && point.y <= self.y + self.h
  }
}
