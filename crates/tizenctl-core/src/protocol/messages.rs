//! JSON message types for the WebSocket control channel.
//!
//! The TV accepts commands as JSON text frames.  A simulated remote-control
//! key press looks like this on the wire:
//!
//! ```json
//! {
//!   "method": "ms.remote.control",
//!   "params": {
//!     "Cmd": "Click",
//!     "DataOfCmd": "KEY_VOLUP",
//!     "Option": "false",
//!     "TypeOfRemote": "SendRemoteKey"
//!   }
//! }
//! ```
//!
//! The field names use the TV firmware's mixed-case convention
//! (`Cmd`, `DataOfCmd`, ...), so each field carries a `#[serde(rename)]`
//! attribute mapping it to an idiomatic Rust name.
//!
//! `Option` is a string `"false"`, not a boolean — the firmware rejects the
//! JSON boolean form.

use serde::{Deserialize, Serialize};

/// The JSON-RPC style method name for remote-control commands.
pub const REMOTE_CONTROL_METHOD: &str = "ms.remote.control";

/// A complete remote-control command envelope.
///
/// Construct one with [`RemoteKeyCommand::click`] and serialize it with
/// `serde_json::to_string` to obtain the exact wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteKeyCommand {
    /// Always [`REMOTE_CONTROL_METHOD`] for key presses.
    pub method: String,
    /// The command parameters.
    pub params: RemoteKeyParams,
}

/// Parameters of a remote-control command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteKeyParams {
    /// The command kind.  `"Click"` for a single non-repeating press.
    #[serde(rename = "Cmd")]
    pub cmd: String,

    /// The key identifier, e.g. `"KEY_VOLUP"` or `"KEY_POWER"`.
    ///
    /// See [`crate::domain::keys`] for the well-known identifiers.
    #[serde(rename = "DataOfCmd")]
    pub data_of_cmd: String,

    /// Key-repeat flag as the string `"false"` or `"true"`.
    #[serde(rename = "Option")]
    pub option: String,

    /// The remote-control directive.  `"SendRemoteKey"` for key presses.
    #[serde(rename = "TypeOfRemote")]
    pub type_of_remote: String,
}

impl RemoteKeyCommand {
    /// Builds a single non-repeating key-click command for `key`.
    pub fn click(key: &str) -> Self {
        Self {
            method: REMOTE_CONTROL_METHOD.to_string(),
            params: RemoteKeyParams {
                cmd: "Click".to_string(),
                data_of_cmd: key.to_string(),
                option: "false".to_string(),
                type_of_remote: "SendRemoteKey".to_string(),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
