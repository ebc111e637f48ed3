//! # tizenctl-core
//!
//! Shared library for tizenctl containing the WebSocket control-channel
//! message types and the companion HTTP API response models.
//!
//! This crate is used by the client library and the CLI binary.
//! It has zero dependencies on network sockets, the async runtime, or the
//! filesystem — everything here is pure data and parsing.
//!
//! # Protocol overview
//!
//! Samsung Tizen televisions expose two control surfaces on the same port
//! (8002 with TLS, 8001 without):
//!
//! - **`protocol`** – The WebSocket control channel at
//!   `/api/v2/channels/samsung.remote.control`.  Commands are JSON text
//!   frames; the very first frame the TV sends on a token-less connection is
//!   the pairing handshake reply carrying `data.token`.
//!
//! - **`domain`** – Models for the HTTP management API at `/api/v2` (device
//!   identity and power state, installed-application status), plus the table
//!   of well-known `KEY_*` identifiers accepted by the remote channel.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/protocol/mod.rs).
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `tizenctl_core::RemoteKeyCommand` instead of the full module path.
pub use domain::responses::{AppInfo, DeviceInfo, ResponseShapeError};
pub use protocol::handshake::{parse_handshake_token, HandshakeError};
pub use protocol::messages::{RemoteKeyCommand, RemoteKeyParams};
