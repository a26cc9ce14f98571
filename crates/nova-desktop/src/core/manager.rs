/*!
Window manager - the single owner and mutator of window state.

All fields are private. Mutations go through commands that maintain the
invariants and emit events:
- width/height never drop below [`MIN_WIDTH`]/[`MIN_HEIGHT`]
- z-indexes come from a strictly increasing counter, so a raised window is
  always above every other window
- `saved_bounds` is set exactly when a window becomes maximized and consumed
  when it stops being maximized
- only `close` removes windows

Every operation is total: an unknown id is a logged no-op.
*/

use async_broadcast::{InactiveReceiver, Receiver, Sender};

use super::config::DesktopConfig;
use crate::pointer::CommandTarget;
use crate::types::{
  AppKind, Bounds, Command, Event, Point, Size, Snapshot, Window, WindowId, MIN_HEIGHT, MIN_WIDTH,
};

const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Ordered collection of open windows plus the z-index counter.
pub struct WindowManager {
  config: DesktopConfig,
  windows: Vec<Window>,
  top_z: u32,
  next_id: u32,
  focused: Option<WindowId>,
  events_tx: Sender<Event>,
  events_keepalive: InactiveReceiver<Event>,
}

impl std::fmt::Debug for WindowManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowManager")
      .field("windows", &self.windows.len())
      .field("top_z", &self.top_z)
      .field("focused", &self.focused)
      .finish_non_exhaustive()
  }
}

impl Default for WindowManager {
  fn default() -> Self {
    Self::new(DesktopConfig::default())
  }
}

impl WindowManager {
  /// Create an empty manager.
  pub fn new(config: DesktopConfig) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(EVENT_CHANNEL_CAPACITY);
    tx.set_overflow(true); // Drop oldest messages when full

    Self {
      config,
      windows: Vec::new(),
      top_z: config.initial_z,
      next_id: 1,
      focused: None,
      events_tx: tx,
      events_keepalive: rx.deactivate(),
    }
  }

  /// Subscribe to state change events.
  ///
  /// Only events emitted after this call are delivered; pair with [`snapshot`](Self::snapshot).
  pub fn subscribe(&self) -> Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Layout constants in effect.
  pub const fn config(&self) -> &DesktopConfig {
    &self.config
  }

  /// Change the viewport. Affects later maximize and snap math only.
  ///
  /// Callers validate the size; see [`Desktop::set_viewport`](crate::Desktop::set_viewport).
  pub(crate) fn set_viewport(&mut self, viewport: Size) {
    self.config.viewport = viewport;
  }

  // === Commands ===

  /// Route a command to the matching operation.
  pub fn apply(&mut self, command: Command) -> &[Window] {
    match command {
      Command::Open {
        app_id,
        title,
        icon,
      } => self.open(app_id, title, icon),
      Command::Close { window_id } => self.close(window_id),
      Command::Minimize { window_id } => self.minimize(window_id),
      Command::Maximize { window_id } => self.maximize(window_id),
      Command::Restore { window_id } => self.restore(window_id),
      Command::Focus { window_id } => self.focus(window_id),
      Command::Move { window_id, x, y } => self.move_to(window_id, x, y),
      Command::Resize {
        window_id,
        width,
        height,
      } => self.resize(window_id, width, height),
    }
  }

  /// Open an app.
  ///
  /// An existing window for the app is reused: focused if visible, restored if
  /// minimized. Otherwise a new window is created at the next cascade position.
  pub fn open(&mut self, app_id: AppKind, title: String, icon: Option<String>) -> &[Window] {
    let existing = self.window_for_app(&app_id).map(|w| (w.id, w.minimized));
    if let Some((id, minimized)) = existing {
      return if minimized {
        self.restore(id)
      } else {
        self.focus(id)
      };
    }

    let Some(following) = self.next_id.checked_add(1) else {
      log::error!("open: window ids exhausted, not opening {app_id}");
      return &self.windows;
    };
    let id = WindowId(self.next_id);
    self.next_id = following;
    let z_index = self.next_z();
    let position = self.config.cascade_position(self.windows.len());
    let size = self.config.window_size;
    let icon = icon.or_else(|| app_id.icon().map(str::to_string));

    let window = Window {
      id,
      app_id,
      title,
      icon,
      bounds: Bounds::new(position.x, position.y, size.w, size.h),
      minimized: false,
      maximized: false,
      saved_bounds: None,
      z_index,
    };

    log::debug!("Opened window {id} for app {}", window.app_id);
    self.windows.push(window.clone());
    self.emit(Event::WindowAdded { window });
    self.sync_focus();
    &self.windows
  }

  /// Remove a window. Idempotent.
  pub fn close(&mut self, id: WindowId) -> &[Window] {
    let Some(index) = self.windows.iter().position(|w| w.id == id) else {
      log::debug!("close: unknown window {id}");
      return &self.windows;
    };

    self.windows.remove(index);
    self.emit(Event::WindowRemoved { window_id: id });
    self.sync_focus();
    &self.windows
  }

  /// Hide a window. Stacking order is kept.
  pub fn minimize(&mut self, id: WindowId) -> &[Window] {
    self.update(id, "minimize", |w, _| w.minimized = true);
    &self.windows
  }

  /// Toggle maximized state.
  ///
  /// Maximizing saves the current bounds and fills the desktop area;
  /// un-maximizing restores the saved bounds. Both raise the window.
  /// A desktop area smaller than the size floor is clamped up to it.
  pub fn maximize(&mut self, id: WindowId) -> &[Window] {
    let area = self.config.desktop_area();
    let area = clamp_size(area.w, area.h);
    self.update(id, "maximize", |w, z| {
      if w.maximized {
        w.bounds = w.saved_bounds.take().unwrap_or(w.bounds);
        w.maximized = false;
      } else {
        w.saved_bounds = Some(w.bounds);
        w.bounds = Bounds::at_origin(area);
        w.maximized = true;
      }
      w.z_index = z.bump();
    });
    &self.windows
  }

  /// Un-minimize and raise.
  pub fn restore(&mut self, id: WindowId) -> &[Window] {
    self.update(id, "restore", |w, z| {
      w.minimized = false;
      w.z_index = z.bump();
    });
    &self.windows
  }

  /// Raise to the top.
  pub fn focus(&mut self, id: WindowId) -> &[Window] {
    self.update(id, "focus", |w, z| w.z_index = z.bump());
    &self.windows
  }

  /// Set the top-left corner. Ignored while maximized.
  pub fn move_to(&mut self, id: WindowId, x: f64, y: f64) -> &[Window] {
    self.update(id, "move", |w, _| {
      if w.maximized {
        log::debug!("move: window {} is maximized, ignoring", w.id);
        return;
      }
      w.bounds = w.bounds.with_position(Point::new(x, y));
    });
    &self.windows
  }

  /// Set the size, clamped to the minimum. Ignored while maximized.
  pub fn resize(&mut self, id: WindowId, width: f64, height: f64) -> &[Window] {
    self.update(id, "resize", |w, _| {
      if w.maximized {
        log::debug!("resize: window {} is maximized, ignoring", w.id);
        return;
      }
      w.bounds = w.bounds.with_size(clamp_size(width, height));
    });
    &self.windows
  }

  // === Queries ===

  /// All windows in open order.
  pub fn windows(&self) -> &[Window] {
    &self.windows
  }

  /// Look up a window by id.
  pub fn get(&self, id: WindowId) -> Option<&Window> {
    self.windows.iter().find(|w| w.id == id)
  }

  /// The window an `open` of this app would reuse.
  pub fn window_for_app(&self, app_id: &AppKind) -> Option<&Window> {
    self.windows.iter().find(|w| &w.app_id == app_id)
  }

  /// Visible windows in draw order (bottom first).
  pub fn visible(&self) -> Vec<&Window> {
    let mut visible: Vec<&Window> = self.windows.iter().filter(|w| w.is_visible()).collect();
    visible.sort_by_key(|w| w.z_index);
    visible
  }

  /// Topmost visible window.
  pub const fn focused(&self) -> Option<WindowId> {
    self.focused
  }

  /// Topmost visible window containing the point.
  pub fn window_at(&self, point: Point) -> Option<&Window> {
    self
      .windows
      .iter()
      .filter(|w| w.is_visible() && w.bounds.contains(point))
      .max_by_key(|w| w.z_index)
  }

  /// Last z-index handed out.
  pub const fn top_z(&self) -> u32 {
    self.top_z
  }

  /// Copy of the full state, for (re)sync.
  pub fn snapshot(&self) -> Snapshot {
    Snapshot {
      windows: self.windows.clone(),
      focused: self.focused,
      top_z: self.top_z,
    }
  }

  // === Internals ===

  fn next_z(&mut self) -> u32 {
    ZCounter(&mut self.top_z).bump()
  }

  /// Mutate one window in place. Emits `WindowChanged` only if something changed.
  fn update(&mut self, id: WindowId, op: &str, f: impl FnOnce(&mut Window, &mut ZCounter<'_>)) {
    let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
      log::debug!("{op}: unknown window {id}");
      return;
    };

    let before = window.clone();
    f(window, &mut ZCounter(&mut self.top_z));
    if *window == before {
      return;
    }

    let window = window.clone();
    self.emit(Event::WindowChanged { window });
    self.sync_focus();
  }

  /// Recompute the topmost visible window. Emits `FocusWindow` if changed.
  fn sync_focus(&mut self) {
    let top = self
      .windows
      .iter()
      .filter(|w| w.is_visible())
      .max_by_key(|w| w.z_index)
      .map(|w| w.id);
    if self.focused == top {
      return;
    }
    self.focused = top;
    self.emit(Event::FocusWindow { window_id: top });
  }

  fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing EVENT_CHANNEL_CAPACITY or processing events faster."
        );
      }
    }
  }
}

impl CommandTarget for WindowManager {
  fn window(&self, id: WindowId) -> Option<&Window> {
    self.get(id)
  }

  fn apply(&mut self, command: Command) {
    WindowManager::apply(self, command);
  }
}

/// Borrowed z-index allocator handed to window mutations.
struct ZCounter<'a>(&'a mut u32);

impl ZCounter<'_> {
  /// Next z-index. Saturates at `u32::MAX`, where raises stop reordering.
  fn bump(&mut self) -> u32 {
    if *self.0 == u32::MAX {
      log::error!("z-index counter exhausted, stacking order is frozen");
    }
    *self.0 = self.0.saturating_add(1);
    *self.0
  }
}

/// Apply the hard size floor.
pub(crate) fn clamp_size(width: f64, height: f64) -> Size {
  Size::new(width.max(MIN_WIDTH), height.max(MIN_HEIGHT))
}
