/*!
Host statistics payload consumed by the sidebar widgets.

These types describe the `/api/system/info` response. Collecting the numbers
is the server's job; every section is optional because the host may not
expose it.
*/

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One poll of the system info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemInfo {
  /// Local time, `YYYY-MM-DD HH:MM:SS`.
  pub datetime: String,
  /// Seconds since the Unix epoch.
  pub timestamp: i64,
  pub timezone: String,
  /// Formatted as `"{d}d {h}h {m}m"`, see [`format_uptime`].
  #[serde(default)]
  pub uptime: Option<String>,
  #[serde(default)]
  pub load_average: Option<LoadAverage>,
  #[serde(default)]
  pub cpu_usage: Option<CpuUsage>,
  #[serde(default)]
  pub memory_usage: Option<MemoryUsage>,
}

/// Run-queue load averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoadAverage {
  #[serde(rename = "1min")]
  pub one: f64,
  #[serde(rename = "5min")]
  pub five: f64,
  #[serde(rename = "15min")]
  pub fifteen: f64,
}

/// Aggregate CPU time counters since boot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CpuUsage {
  pub used: u64,
  pub total: u64,
  /// `used / total * 100`, one decimal.
  pub percentage: f64,
}

/// Memory figures in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemoryUsage {
  pub total: u64,
  pub available: u64,
  pub used: u64,
  pub percentage: f64,
}

/// Render an uptime in whole seconds the way the widgets display it.
///
/// ```
/// use nova_desktop::format_uptime;
///
/// assert_eq!(format_uptime(0), "0d 0h 0m");
/// assert_eq!(format_uptime(90_061), "1d 1h 1m");
/// ```
pub fn format_uptime(seconds: u64) -> String {
  let days = seconds / 86_400;
  let hours = (seconds % 86_400) / 3_600;
  let minutes = (seconds % 3_600) / 60;
  format!("{days}d {hours}h {minutes}m")
}
