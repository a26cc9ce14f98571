/*!
Pointer-drag controller.

Turns a press → move* → release stream into window manager commands:

```text
Idle --press(title bar)--> Dragging --release--> Idle
Idle --press(handle)-----> Resizing --release--> Idle
```

Every press focuses the pressed window first. Gestures only start on windows
that are not maximized. Each move sample issues commands immediately, in
arrival order; there is no batching and no timeout.

```ignore
let mut pointer = PointerController::new(&config);
pointer.handle(PointerEvent::press(id, Region::TitleBar, 300.0, 60.0), &mut manager);
pointer.handle(PointerEvent::Move { x: 320.0, y: 70.0 }, &mut manager);
pointer.handle(PointerEvent::Release, &mut manager);
```
*/

mod math;
mod region;

pub use math::{resize_bounds, snap_position};
pub use region::{hit_test, Region, ResizeDirection};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::DesktopConfig;
use crate::types::{Bounds, Command, Point, Window, WindowId};

/// Where the controller sends its commands.
///
/// Implemented by [`WindowManager`](crate::WindowManager); tests substitute a recorder.
pub trait CommandTarget {
  /// Current state of a window, if it exists.
  fn window(&self, id: WindowId) -> Option<&Window>;

  /// Execute a command.
  fn apply(&mut self, command: Command);
}

/// One sample from the input system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum PointerEvent {
  /// Button pressed on a window region.
  Press {
    window_id: WindowId,
    region: Region,
    x: f64,
    y: f64,
  },
  /// Pointer moved.
  Move { x: f64, y: f64 },
  /// Button released.
  Release,
}

impl PointerEvent {
  /// Shorthand for [`PointerEvent::Press`].
  pub const fn press(window_id: WindowId, region: Region, x: f64, y: f64) -> Self {
    PointerEvent::Press {
      window_id,
      region,
      x,
      y,
    }
  }
}

/// Ephemeral state of the current interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
  Idle,
  Dragging {
    window_id: WindowId,
    /// Pointer position at press time.
    press: Point,
    /// Window position at press time.
    origin: Point,
  },
  Resizing {
    window_id: WindowId,
    direction: ResizeDirection,
    press: Point,
    /// Window bounds at press time.
    origin: Bounds,
  },
}

impl Gesture {
  /// No button held.
  pub const fn is_idle(&self) -> bool {
    matches!(self, Gesture::Idle)
  }

  /// Window being dragged or resized.
  pub const fn window_id(&self) -> Option<WindowId> {
    match self {
      Gesture::Idle => None,
      Gesture::Dragging { window_id, .. } | Gesture::Resizing { window_id, .. } => Some(*window_id),
    }
  }
}

/// Pointer gesture state machine.
#[derive(Debug, Clone, Copy)]
pub struct PointerController {
  gesture: Gesture,
  screen_width: f64,
  snap_threshold: f64,
}

impl PointerController {
  /// Idle controller using the config's viewport width and snap threshold.
  pub const fn new(config: &DesktopConfig) -> Self {
    Self {
      gesture: Gesture::Idle,
      screen_width: config.viewport.w,
      snap_threshold: config.snap_threshold,
    }
  }

  /// Current gesture.
  pub const fn gesture(&self) -> &Gesture {
    &self.gesture
  }

  /// Update the width drag snapping measures against.
  pub fn set_screen_width(&mut self, width: f64) {
    self.screen_width = width;
  }

  /// Feed one input sample.
  pub fn handle<T: CommandTarget + ?Sized>(&mut self, event: PointerEvent, target: &mut T) {
    match event {
      PointerEvent::Press {
        window_id,
        region,
        x,
        y,
      } => self.press(window_id, region, Point::new(x, y), target),
      PointerEvent::Move { x, y } => self.sample(Point::new(x, y), target),
      PointerEvent::Release => {
        if !self.gesture.is_idle() {
          log::trace!("Gesture ended: {:?}", self.gesture);
        }
        self.gesture = Gesture::Idle;
      }
    }
  }

  /// Feed a sequence of samples in order.
  pub fn handle_all<T, I>(&mut self, events: I, target: &mut T)
  where
    T: CommandTarget + ?Sized,
    I: IntoIterator<Item = PointerEvent>,
  {
    for event in events {
      self.handle(event, target);
    }
  }

  fn press<T: CommandTarget + ?Sized>(
    &mut self,
    window_id: WindowId,
    region: Region,
    pointer: Point,
    target: &mut T,
  ) {
    self.gesture = Gesture::Idle;

    let Some((bounds, maximized)) = target.window(window_id).map(|w| (w.bounds, w.maximized)) else {
      log::debug!("press: unknown window {window_id}");
      return;
    };

    target.apply(Command::Focus { window_id });

    if maximized {
      return;
    }

    self.gesture = match region {
      Region::TitleBar => Gesture::Dragging {
        window_id,
        press: pointer,
        origin: bounds.position(),
      },
      Region::Resize(direction) => Gesture::Resizing {
        window_id,
        direction,
        press: pointer,
        origin: bounds,
      },
      Region::Content => Gesture::Idle,
    };
  }

  fn sample<T: CommandTarget + ?Sized>(&self, pointer: Point, target: &mut T) {
    match self.gesture {
      Gesture::Idle => {}

      Gesture::Dragging {
        window_id,
        press,
        origin,
      } => {
        let Some(window) = target.window(window_id) else {
          log::debug!("drag: window {window_id} vanished, skipping sample");
          return;
        };
        let candidate = origin.offset(pointer.delta_from(press));
        let next = snap_position(
          candidate,
          window.bounds.w,
          self.screen_width,
          self.snap_threshold,
        );
        log::trace!("drag {window_id} -> ({}, {})", next.x, next.y);
        target.apply(Command::Move {
          window_id,
          x: next.x,
          y: next.y,
        });
      }

      Gesture::Resizing {
        window_id,
        direction,
        press,
        origin,
      } => {
        let Some(current) = target.window(window_id).map(|w| w.bounds.position()) else {
          log::debug!("resize: window {window_id} vanished, skipping sample");
          return;
        };
        let next = resize_bounds(origin, direction, pointer.delta_from(press));
        log::trace!("resize {window_id} {direction} -> {next:?}");
        if next.position() != current {
          target.apply(Command::Move {
            window_id,
            x: next.x,
            y: next.y,
          });
        }
        target.apply(Command::Resize {
          window_id,
          width: next.w,
          height: next.h,
        });
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::AppKind;

  /// Records commands and applies geometry so later samples see it.
  struct Recorder {
    windows: Vec<Window>,
    commands: Vec<Command>,
  }

  impl Recorder {
    fn with(bounds: Bounds, maximized: bool) -> Self {
      Self {
        windows: vec![Window {
          id: WindowId(1),
          app_id: AppKind::Files,
          title: "Files".into(),
          icon: None,
          bounds,
          minimized: false,
          maximized,
          saved_bounds: None,
          z_index: 101,
        }],
        commands: Vec::new(),
      }
    }
  }

  impl CommandTarget for Recorder {
    fn window(&self, id: WindowId) -> Option<&Window> {
      self.windows.iter().find(|w| w.id == id)
    }

    fn apply(&mut self, command: Command) {
      if let Some(w) = self.windows.first_mut() {
        match command {
          Command::Move { x, y, .. } => w.bounds = w.bounds.with_position(Point::new(x, y)),
          Command::Resize { width, height, .. } => {
            w.bounds = w.bounds.with_size(crate::types::Size::new(width, height));
          }
          _ => {}
        }
      }
      self.commands.push(command);
    }
  }

  const A: WindowId = WindowId(1);
  const FRAME: Bounds = Bounds::new(100.0, 50.0, 800.0, 600.0);

  fn controller() -> PointerController {
    PointerController::new(&DesktopConfig::default())
  }

  fn mv(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move { x, y }
  }

  fn focus() -> Command {
    Command::Focus { window_id: A }
  }

  fn move_cmd(x: f64, y: f64) -> Command {
    Command::Move { window_id: A, x, y }
  }

  fn resize_cmd(width: f64, height: f64) -> Command {
    Command::Resize {
      window_id: A,
      width,
      height,
    }
  }

  mod drag {
    use super::*;

    #[test]
    fn press_focuses_then_moves_follow_delta() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::TitleBar, 500.0, 60.0),
          mv(550.0, 160.0),
          mv(600.0, 260.0),
          PointerEvent::Release,
        ],
        &mut rec,
      );

      assert_eq!(
        rec.commands,
        vec![focus(), move_cmd(150.0, 150.0), move_cmd(200.0, 250.0)]
      );
      assert!(pointer.gesture().is_idle());
    }

    #[test]
    fn snaps_to_left_edge() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      // candidate x = 100 - 85 = 15, within the 20px threshold
      pointer.handle_all(
        [PointerEvent::press(A, Region::TitleBar, 500.0, 60.0), mv(415.0, 160.0)],
        &mut rec,
      );
      assert_eq!(rec.commands.last(), Some(&move_cmd(0.0, 150.0)));
    }

    #[test]
    fn snaps_to_top_and_right() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      // candidate (1110, 5): right rule 1110 >= 1920 - 800 - 20
      pointer.handle_all(
        [PointerEvent::press(A, Region::TitleBar, 500.0, 60.0), mv(1510.0, 15.0)],
        &mut rec,
      );
      assert_eq!(rec.commands.last(), Some(&move_cmd(1120.0, 0.0)));
    }

    #[test]
    fn moves_after_release_are_ignored() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::TitleBar, 500.0, 60.0),
          PointerEvent::Release,
          mv(600.0, 200.0),
        ],
        &mut rec,
      );
      assert_eq!(rec.commands, vec![focus()]);
    }

    #[test]
    fn maximized_window_only_focuses() {
      let mut rec = Recorder::with(Bounds::new(0.0, 0.0, 1920.0, 1032.0), true);
      let mut pointer = controller();
      pointer.handle_all(
        [PointerEvent::press(A, Region::TitleBar, 500.0, 10.0), mv(600.0, 100.0)],
        &mut rec,
      );
      assert_eq!(rec.commands, vec![focus()]);
      assert!(pointer.gesture().is_idle());
    }

    #[test]
    fn content_press_only_focuses() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [PointerEvent::press(A, Region::Content, 500.0, 300.0), mv(600.0, 400.0)],
        &mut rec,
      );
      assert_eq!(rec.commands, vec![focus()]);
    }

    #[test]
    fn unknown_window_press_issues_nothing() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(WindowId(9), Region::TitleBar, 500.0, 60.0),
          mv(600.0, 100.0),
        ],
        &mut rec,
      );
      assert!(rec.commands.is_empty());
      assert!(pointer.gesture().is_idle());
    }

    #[test]
    fn vanished_window_skips_samples_until_release() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle(PointerEvent::press(A, Region::TitleBar, 500.0, 60.0), &mut rec);
      rec.windows.clear();
      pointer.handle(mv(600.0, 100.0), &mut rec);

      assert_eq!(rec.commands, vec![focus()]);
      assert_eq!(pointer.gesture().window_id(), Some(A));
      pointer.handle(PointerEvent::Release, &mut rec);
      assert!(pointer.gesture().is_idle());
    }

    #[test]
    fn snapping_uses_updated_screen_width() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.set_screen_width(1280.0);
      // candidate x = 470 >= 1280 - 800 - 20
      pointer.handle_all(
        [PointerEvent::press(A, Region::TitleBar, 500.0, 60.0), mv(870.0, 160.0)],
        &mut rec,
      );
      assert_eq!(rec.commands.last(), Some(&move_cmd(480.0, 150.0)));
    }
  }

  mod resize {
    use super::*;

    #[test]
    fn east_only_resizes() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::Resize(ResizeDirection::E), 900.0, 300.0),
          mv(950.0, 999.0),
        ],
        &mut rec,
      );
      assert_eq!(rec.commands, vec![focus(), resize_cmd(850.0, 600.0)]);
    }

    #[test]
    fn west_moves_then_resizes() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::Resize(ResizeDirection::W), 100.0, 300.0),
          mv(60.0, 300.0),
        ],
        &mut rec,
      );
      assert_eq!(
        rec.commands,
        vec![focus(), move_cmd(60.0, 50.0), resize_cmd(840.0, 600.0)]
      );
    }

    #[test]
    fn samples_are_relative_to_press_not_previous_sample() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::Resize(ResizeDirection::Se), 900.0, 650.0),
          mv(910.0, 660.0),
          mv(920.0, 670.0),
        ],
        &mut rec,
      );
      assert_eq!(
        rec.commands,
        vec![focus(), resize_cmd(810.0, 610.0), resize_cmd(820.0, 620.0)]
      );
    }

    #[test]
    fn pinned_at_floor_stops_moving() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::Resize(ResizeDirection::Nw), 100.0, 50.0),
          mv(200.0, 100.0),
          mv(900.0, 900.0),
        ],
        &mut rec,
      );
      assert_eq!(
        rec.commands,
        vec![
          focus(),
          move_cmd(200.0, 100.0),
          resize_cmd(700.0, 550.0),
          // Pinned at the floor: origin goes back to press-time position.
          move_cmd(100.0, 50.0),
          resize_cmd(300.0, 200.0),
        ]
      );
    }

    #[test]
    fn never_issues_size_below_floor() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle_all(
        [
          PointerEvent::press(A, Region::Resize(ResizeDirection::Se), 900.0, 650.0),
          mv(-5000.0, -5000.0),
        ],
        &mut rec,
      );
      assert_eq!(rec.commands.last(), Some(&resize_cmd(300.0, 200.0)));
    }

    #[test]
    fn new_press_replaces_active_gesture() {
      let mut rec = Recorder::with(FRAME, false);
      let mut pointer = controller();
      pointer.handle(PointerEvent::press(A, Region::Resize(ResizeDirection::E), 900.0, 300.0), &mut rec);
      pointer.handle(PointerEvent::press(A, Region::TitleBar, 500.0, 60.0), &mut rec);
      assert!(matches!(pointer.gesture(), Gesture::Dragging { .. }));
    }
  }

  mod serde_format {
    use super::*;
    use serde_json::json;

    #[test]
    fn press_parses_with_region() {
      let event: PointerEvent = serde_json::from_value(json!({
        "kind": "press",
        "window_id": 1,
        "region": { "resize": "sw" },
        "x": 10.0,
        "y": 20.0
      }))
      .unwrap();
      assert_eq!(
        event,
        PointerEvent::press(A, Region::Resize(ResizeDirection::Sw), 10.0, 20.0)
      );
    }

    #[test]
    fn release_has_no_payload() {
      let event: PointerEvent = serde_json::from_value(json!({ "kind": "release" })).unwrap();
      assert_eq!(event, PointerEvent::Release);
    }
  }
}
