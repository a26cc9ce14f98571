/*!
RPC request/response types and dispatch.

A view layer drives the desktop with `{ "method": ..., "args": ... }` messages;
replies are `{ "result": ... }` or `{ "error": "..." }`.
*/

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use ts_rs::TS;

use crate::pointer::{PointerEvent, Region};
use crate::{Command, DeskError, DeskResult, Desktop, Snapshot, Window, WindowId};

/// RPC request.
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(tag = "method", content = "args", rename_all = "snake_case")]
#[ts(export)]
pub enum RpcRequest {
  /// Full state, for (re)sync.
  Snapshot,
  /// Single window by id.
  Get { window_id: WindowId },
  /// Run a window manager command.
  Apply(Command),
  /// Feed one pointer sample.
  Pointer(PointerEvent),
  /// Press at desktop coordinates, hit testing the topmost window.
  PressAt { x: f64, y: f64 },
}

/// RPC response.
#[derive(Debug, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RpcResponse {
  /// Full state snapshot.
  Snapshot(Box<Snapshot>),
  /// Single window.
  Window(Box<Window>),
  /// Window collection after a command.
  Windows(Vec<Window>),
  /// Region hit by a press, if any.
  Region(Option<Region>),
  /// No data.
  Null,
}

pub fn dispatch_json(desktop: &mut Desktop, method: &str, args: &JsonValue) -> JsonValue {
  let request_value = json!({ "method": method, "args": args });

  match serde_json::from_value::<RpcRequest>(request_value) {
    Ok(request) => match dispatch(desktop, request) {
      Ok(response) => json!({ "result": response }),
      Err(e) => {
        log::warn!("[rpc] {method} failed: {e}");
        json!({ "error": e.to_string() })
      }
    },
    Err(e) => {
      let e = DeskError::InvalidRequest(e.to_string());
      log::warn!("[rpc] {method}: {e}");
      json!({ "error": e.to_string() })
    }
  }
}

pub fn dispatch(desktop: &mut Desktop, request: RpcRequest) -> DeskResult<RpcResponse> {
  match request {
    RpcRequest::Snapshot => Ok(RpcResponse::Snapshot(Box::new(desktop.snapshot()))),

    RpcRequest::Get { window_id } => {
      let window = desktop
        .manager()
        .get(window_id)
        .cloned()
        .ok_or(DeskError::WindowNotFound(window_id))?;
      Ok(RpcResponse::Window(Box::new(window)))
    }

    RpcRequest::Apply(command) => Ok(RpcResponse::Windows(desktop.apply(command).to_vec())),

    RpcRequest::Pointer(event) => {
      desktop.handle_pointer(event);
      Ok(RpcResponse::Null)
    }

    RpcRequest::PressAt { x, y } => Ok(RpcResponse::Region(desktop.press_at(x, y))),
  }
}
