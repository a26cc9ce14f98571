/*!
Nova Desktop - window manager and pointer gestures for a browser-hosted NAS desktop.

```ignore
use nova_desktop::{AppKind, Command, Desktop};
use nova_desktop::pointer::PointerEvent;

let mut desktop = Desktop::builder().viewport(1920.0, 1080.0).build()?;

// Subscribe before mutating; pair with a snapshot for initial state
let mut events = desktop.subscribe();
let initial = desktop.snapshot();

desktop.apply(Command::Open { app_id: AppKind::Files, title: "File Manager".into(), icon: None });

// Drag by the title bar
desktop.press_at(500.0, 70.0);
desktop.drain([PointerEvent::Move { x: 600.0, y: 170.0 }, PointerEvent::Release]);

while let Ok(event) = events.try_recv() {
    // window:added, window:changed, focus:window ...
}
```
*/

mod core;
mod types;

pub mod pointer;
pub mod rpc;

pub use types::*;

pub use crate::core::{Desktop, DesktopBuilder, DesktopConfig, WindowManager};
