/*!
Window frame regions and hit testing.

Frame layout, in window-local pixels:
- 12px square resize handles in each corner
- 8px resize strips along each edge
- a 36px title bar across the top
- everything else is content

Corners take precedence over edges, edges over the title bar. Maximized
windows have no resize handles.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::types::{Bounds, DeskError, Point};

const CORNER_HANDLE: f64 = 12.0;
const EDGE_HANDLE: f64 = 8.0;
const TITLE_BAR_HEIGHT: f64 = 36.0;

/// Which edges a resize handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResizeDirection {
  N,
  S,
  E,
  W,
  Ne,
  Nw,
  Se,
  Sw,
}

impl ResizeDirection {
  pub const ALL: [ResizeDirection; 8] = [
    ResizeDirection::N,
    ResizeDirection::S,
    ResizeDirection::E,
    ResizeDirection::W,
    ResizeDirection::Ne,
    ResizeDirection::Nw,
    ResizeDirection::Se,
    ResizeDirection::Sw,
  ];

  pub const fn north(self) -> bool {
    matches!(
      self,
      ResizeDirection::N | ResizeDirection::Ne | ResizeDirection::Nw
    )
  }

  pub const fn south(self) -> bool {
    matches!(
      self,
      ResizeDirection::S | ResizeDirection::Se | ResizeDirection::Sw
    )
  }

  pub const fn east(self) -> bool {
    matches!(
      self,
      ResizeDirection::E | ResizeDirection::Ne | ResizeDirection::Se
    )
  }

  pub const fn west(self) -> bool {
    matches!(
      self,
      ResizeDirection::W | ResizeDirection::Nw | ResizeDirection::Sw
    )
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      ResizeDirection::N => "n",
      ResizeDirection::S => "s",
      ResizeDirection::E => "e",
      ResizeDirection::W => "w",
      ResizeDirection::Ne => "ne",
      ResizeDirection::Nw => "nw",
      ResizeDirection::Se => "se",
      ResizeDirection::Sw => "sw",
    }
  }
}

impl fmt::Display for ResizeDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ResizeDirection {
  type Err = DeskError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ResizeDirection::ALL
      .into_iter()
      .find(|d| d.as_str() == s)
      .ok_or_else(|| DeskError::InvalidResizeDirection(s.to_string()))
  }
}

/// Part of a window frame a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Region {
  /// Drag handle.
  TitleBar,
  /// Resize handle.
  Resize(ResizeDirection),
  /// Anything else; pressing only focuses.
  Content,
}

/// Classify a point against a window frame. `None` if the point is outside.
pub fn hit_test(bounds: Bounds, point: Point, maximized: bool) -> Option<Region> {
  if !bounds.contains(point) {
    return None;
  }

  let local = point.delta_from(bounds.position());
  let (w, h) = (bounds.w, bounds.h);

  if !maximized {
    let near_left = |d: f64| local.x <= d;
    let near_right = |d: f64| local.x >= w - d;
    let near_top = |d: f64| local.y <= d;
    let near_bottom = |d: f64| local.y >= h - d;

    let corner = match (
      near_top(CORNER_HANDLE),
      near_bottom(CORNER_HANDLE),
      near_left(CORNER_HANDLE),
      near_right(CORNER_HANDLE),
    ) {
      (true, _, true, _) => Some(ResizeDirection::Nw),
      (true, _, _, true) => Some(ResizeDirection::Ne),
      (_, true, true, _) => Some(ResizeDirection::Sw),
      (_, true, _, true) => Some(ResizeDirection::Se),
      _ => None,
    };
    if let Some(direction) = corner {
      return Some(Region::Resize(direction));
    }

    let edge = if near_top(EDGE_HANDLE) {
      Some(ResizeDirection::N)
    } else if near_bottom(EDGE_HANDLE) {
      Some(ResizeDirection::S)
    } else if near_left(EDGE_HANDLE) {
      Some(ResizeDirection::W)
    } else if near_right(EDGE_HANDLE) {
      Some(ResizeDirection::E)
    } else {
      None
    };
    if let Some(direction) = edge {
      return Some(Region::Resize(direction));
    }
  }

  if local.y <= TITLE_BAR_HEIGHT {
    Some(Region::TitleBar)
  } else {
    Some(Region::Content)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const FRAME: Bounds = Bounds::new(100.0, 50.0, 800.0, 600.0);

  fn at(x: f64, y: f64) -> Option<Region> {
    hit_test(FRAME, Point::new(100.0 + x, 50.0 + y), false)
  }

  mod direction {
    use super::*;

    #[test]
    fn components() {
      assert!(ResizeDirection::Se.south() && ResizeDirection::Se.east());
      assert!(!ResizeDirection::Se.north() && !ResizeDirection::Se.west());
      assert!(ResizeDirection::N.north());
      assert!(!ResizeDirection::N.east() && !ResizeDirection::N.west());
      assert!(ResizeDirection::Nw.north() && ResizeDirection::Nw.west());
    }

    #[test]
    fn parses_all_names() {
      for direction in ResizeDirection::ALL {
        assert_eq!(direction.as_str().parse::<ResizeDirection>().ok(), Some(direction));
        assert_eq!(direction.to_string(), direction.as_str());
      }
    }

    #[test]
    fn rejects_unknown_names() {
      let err = "north".parse::<ResizeDirection>().unwrap_err();
      assert!(matches!(err, DeskError::InvalidResizeDirection(ref s) if s == "north"));
      assert!("".parse::<ResizeDirection>().is_err());
      assert!("NE".parse::<ResizeDirection>().is_err());
    }

    #[test]
    fn serde_uses_short_names() {
      assert_eq!(serde_json::to_string(&ResizeDirection::Sw).unwrap(), "\"sw\"");
      let region: Region = serde_json::from_str(r#"{"resize":"ne"}"#).unwrap();
      assert_eq!(region, Region::Resize(ResizeDirection::Ne));
      let region: Region = serde_json::from_str(r#""title_bar""#).unwrap();
      assert_eq!(region, Region::TitleBar);
    }
  }

  mod hit {
    use super::*;

    #[test]
    fn outside_is_none() {
      assert_eq!(at(-1.0, 10.0), None);
      assert_eq!(at(10.0, 601.0), None);
    }

    #[test]
    fn corners() {
      assert_eq!(at(2.0, 2.0), Some(Region::Resize(ResizeDirection::Nw)));
      assert_eq!(at(795.0, 11.0), Some(Region::Resize(ResizeDirection::Ne)));
      assert_eq!(at(5.0, 595.0), Some(Region::Resize(ResizeDirection::Sw)));
      assert_eq!(at(790.0, 590.0), Some(Region::Resize(ResizeDirection::Se)));
    }

    #[test]
    fn edges() {
      assert_eq!(at(400.0, 3.0), Some(Region::Resize(ResizeDirection::N)));
      assert_eq!(at(400.0, 596.0), Some(Region::Resize(ResizeDirection::S)));
      assert_eq!(at(4.0, 300.0), Some(Region::Resize(ResizeDirection::W)));
      assert_eq!(at(796.0, 300.0), Some(Region::Resize(ResizeDirection::E)));
    }

    #[test]
    fn title_bar_below_top_edge() {
      assert_eq!(at(400.0, 9.0), Some(Region::TitleBar));
      assert_eq!(at(400.0, 36.0), Some(Region::TitleBar));
      assert_eq!(at(400.0, 37.0), Some(Region::Content));
    }

    #[test]
    fn content_in_the_middle() {
      assert_eq!(at(400.0, 300.0), Some(Region::Content));
    }

    #[test]
    fn maximized_has_no_handles() {
      let full = Bounds::new(0.0, 0.0, 1920.0, 1032.0);
      assert_eq!(hit_test(full, Point::new(1.0, 1.0), true), Some(Region::TitleBar));
      assert_eq!(hit_test(full, Point::new(1919.0, 500.0), true), Some(Region::Content));
      assert_eq!(
        hit_test(full, Point::new(1919.0, 500.0), false),
        Some(Region::Resize(ResizeDirection::E))
      );
    }
  }
}
