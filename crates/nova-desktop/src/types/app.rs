/*!
Application catalog.

Every window is backed by an app kind, resolved once when the window opens.
Known kinds carry launcher metadata; anything else is kept verbatim in
[`AppKind::Unknown`] so the view layer can fall back to a generic frame.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of application shown inside a window.
///
/// Serialized as its plain string id (`"files"`, `"terminal"`, ...).
///
/// ```
/// use nova_desktop::AppKind;
///
/// assert_eq!(AppKind::from("docker"), AppKind::Docker);
/// assert_eq!(AppKind::from("photos"), AppKind::Unknown("photos".into()));
/// assert_eq!(AppKind::Terminal.id(), "terminal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppKind {
  Files,
  Settings,
  Terminal,
  Docker,
  Monitor,
  Storage,
  Unknown(String),
}

impl AppKind {
  /// Every known app, in launcher order.
  pub const KNOWN: [AppKind; 6] = [
    AppKind::Files,
    AppKind::Settings,
    AppKind::Terminal,
    AppKind::Docker,
    AppKind::Monitor,
    AppKind::Storage,
  ];

  /// Stable string id.
  pub fn id(&self) -> &str {
    match self {
      AppKind::Files => "files",
      AppKind::Settings => "settings",
      AppKind::Terminal => "terminal",
      AppKind::Docker => "docker",
      AppKind::Monitor => "monitor",
      AppKind::Storage => "storage",
      AppKind::Unknown(id) => id,
    }
  }

  /// Human-readable name. `None` for unknown apps.
  pub const fn display_name(&self) -> Option<&'static str> {
    match self {
      AppKind::Files => Some("File Manager"),
      AppKind::Settings => Some("Settings"),
      AppKind::Terminal => Some("Terminal"),
      AppKind::Docker => Some("Docker"),
      AppKind::Monitor => Some("Monitor"),
      AppKind::Storage => Some("Storage"),
      AppKind::Unknown(_) => None,
    }
  }

  /// Launcher glyph. `None` for unknown apps.
  pub const fn icon(&self) -> Option<&'static str> {
    match self {
      AppKind::Files => Some("📁"),
      AppKind::Settings => Some("⚙️"),
      AppKind::Terminal => Some("💻"),
      AppKind::Docker => Some("🐳"),
      AppKind::Monitor => Some("📊"),
      AppKind::Storage => Some("💾"),
      AppKind::Unknown(_) => None,
    }
  }

  /// One-line launcher description. `None` for unknown apps.
  pub const fn description(&self) -> Option<&'static str> {
    match self {
      AppKind::Files => Some("Manage your files"),
      AppKind::Settings => Some("System settings"),
      AppKind::Terminal => Some("Command line access"),
      AppKind::Docker => Some("Container management"),
      AppKind::Monitor => Some("System monitoring"),
      AppKind::Storage => Some("Storage management"),
      AppKind::Unknown(_) => None,
    }
  }

  pub const fn is_known(&self) -> bool {
    !matches!(self, AppKind::Unknown(_))
  }
}

impl From<&str> for AppKind {
  fn from(id: &str) -> Self {
    match id {
      "files" => AppKind::Files,
      "settings" => AppKind::Settings,
      "terminal" => AppKind::Terminal,
      "docker" => AppKind::Docker,
      "monitor" => AppKind::Monitor,
      "storage" => AppKind::Storage,
      other => AppKind::Unknown(other.to_string()),
    }
  }
}

impl From<String> for AppKind {
  fn from(id: String) -> Self {
    match AppKind::from(id.as_str()) {
      AppKind::Unknown(_) => AppKind::Unknown(id),
      known => known,
    }
  }
}

impl From<AppKind> for String {
  fn from(kind: AppKind) -> Self {
    match kind {
      AppKind::Unknown(id) => id,
      known => known.id().to_string(),
    }
  }
}

impl fmt::Display for AppKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}
