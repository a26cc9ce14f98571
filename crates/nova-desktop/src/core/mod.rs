/*!
Desktop handle - owns the window manager and the pointer controller.

# Module Structure

- `mod.rs` - Desktop struct, builder, pointer routing
- `manager.rs` - WindowManager with private fields + commands + event emission
- `config.rs` - layout constants

# Example

```ignore
use nova_desktop::{AppKind, Command, Desktop};

let mut desktop = Desktop::builder().viewport(1920.0, 1080.0).build()?;
let mut events = desktop.subscribe();

desktop.apply(Command::Open { app_id: AppKind::Files, title: "Files".into(), icon: None });
desktop.press_at(300.0, 60.0);
```
*/

mod config;
mod manager;

pub use config::DesktopConfig;
pub use manager::WindowManager;

use async_broadcast::Receiver;

use crate::pointer::{hit_test, Gesture, PointerController, PointerEvent, Region};
use crate::types::{Command, DeskError, DeskResult, Event, Point, Size, Snapshot, Window};

/// A desktop session: window state plus the in-progress pointer gesture.
#[derive(Debug)]
pub struct Desktop {
  manager: WindowManager,
  pointer: PointerController,
}

impl Default for Desktop {
  fn default() -> Self {
    Self::with_config(DesktopConfig::default())
  }
}

/// Builder for configuring a [`Desktop`].
///
/// # Example
///
/// ```
/// use nova_desktop::Desktop;
///
/// let desktop = Desktop::builder()
///     .viewport(1280.0, 800.0)
///     .snap_threshold(16.0)
///     .build()
///     .unwrap();
/// assert_eq!(desktop.manager().config().desktop_area().h, 752.0);
///
/// assert!(Desktop::builder().viewport(0.0, 800.0).build().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: DesktopConfig,
}

impl DesktopBuilder {
  /// Browser viewport size. Default: 1920x1080.
  pub const fn viewport(mut self, width: f64, height: f64) -> Self {
    self.config.viewport = Size::new(width, height);
    self
  }

  /// Height of the top bar excluded from the desktop area. Default: 48.
  pub const fn header_height(mut self, height: f64) -> Self {
    self.config.header_height = height;
    self
  }

  /// Edge snapping distance for drags. Default: 20.
  pub const fn snap_threshold(mut self, threshold: f64) -> Self {
    self.config.snap_threshold = threshold;
    self
  }

  /// Starting z-index. Default: 100.
  pub const fn initial_z(mut self, z: u32) -> Self {
    self.config.initial_z = z;
    self
  }

  /// Build the desktop. Fails if the viewport is not finite and positive.
  pub fn build(self) -> DeskResult<Desktop> {
    validate_viewport(self.config.viewport)?;
    Ok(Desktop::with_config(self.config))
  }
}

impl Desktop {
  /// Create a builder for configuring a new desktop.
  pub fn builder() -> DesktopBuilder {
    DesktopBuilder::default()
  }

  fn with_config(config: DesktopConfig) -> Self {
    Self {
      pointer: PointerController::new(&config),
      manager: WindowManager::new(config),
    }
  }

  /// Read access to window state and queries.
  pub const fn manager(&self) -> &WindowManager {
    &self.manager
  }

  /// The pointer gesture in progress, if any.
  pub const fn gesture(&self) -> &Gesture {
    self.pointer.gesture()
  }

  /// Subscribe to state change events. See [`WindowManager::subscribe`].
  pub fn subscribe(&self) -> Receiver<Event> {
    self.manager.subscribe()
  }

  /// Copy of the full state, for (re)sync.
  pub fn snapshot(&self) -> Snapshot {
    self.manager.snapshot()
  }

  /// Execute a command and return the resulting window collection.
  pub fn apply(&mut self, command: Command) -> &[Window] {
    self.manager.apply(command)
  }

  /// Feed one pointer sample to the gesture controller.
  pub fn handle_pointer(&mut self, event: PointerEvent) {
    self.pointer.handle(event, &mut self.manager);
  }

  /// Feed pointer samples in arrival order.
  pub fn drain<I>(&mut self, events: I)
  where
    I: IntoIterator<Item = PointerEvent>,
  {
    self.pointer.handle_all(events, &mut self.manager);
  }

  /// Press at a desktop coordinate: resolve the topmost window and the region
  /// under the pointer, then start the matching gesture.
  ///
  /// Returns the region hit, or `None` for the bare desktop.
  pub fn press_at(&mut self, x: f64, y: f64) -> Option<Region> {
    let point = Point::new(x, y);
    let (window_id, region) = self
      .manager
      .window_at(point)
      .and_then(|w| hit_test(w.bounds, point, w.maximized).map(|region| (w.id, region)))?;

    self.handle_pointer(PointerEvent::press(window_id, region, x, y));
    Some(region)
  }

  /// Resize the viewport. Later maximize and snap math use the new size;
  /// windows already maximized keep their geometry.
  pub fn set_viewport(&mut self, width: f64, height: f64) -> DeskResult<()> {
    let viewport = Size::new(width, height);
    validate_viewport(viewport)?;
    self.manager.set_viewport(viewport);
    self.pointer.set_screen_width(width);
    Ok(())
  }
}

fn validate_viewport(viewport: Size) -> DeskResult<()> {
  if viewport.is_usable() {
    Ok(())
  } else {
    Err(DeskError::InvalidViewport {
      width: viewport.w,
      height: viewport.h,
    })
  }
}
