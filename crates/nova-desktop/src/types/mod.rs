/*! Core data types for the desktop.

Regenerate TypeScript bindings: `cargo test` (writes `bindings/`).
*/

#![allow(missing_docs)]

mod app;
mod command;
mod error;
mod event;
mod geometry;
mod ids;
mod system;
mod window;

pub use app::AppKind;
pub use command::Command;
pub use error::{DeskError, DeskResult};
pub use event::{Event, Snapshot};
pub use geometry::{Bounds, Point, Size};
pub use ids::WindowId;
pub use system::{format_uptime, CpuUsage, LoadAverage, MemoryUsage, SystemInfo};
pub use window::{Window, MIN_HEIGHT, MIN_WIDTH};
