//! Infrastructure layer: concrete transports and persistence.
//!
//! Everything here implements a port from the application layer (or serves
//! the binary directly, like the config file):
//!
//! - [`ws_transport`] — `ControlTransport` over tokio-tungstenite, with the
//!   certificate-accepting TLS connector the TV requires.
//! - [`token_store`] — `TokenStore` as a raw text file, plus the in-memory
//!   no-op used when no token path is configured.
//! - [`http_api`] — the companion `/api/v2` management client (reqwest).
//! - [`config_file`] — TOML defaults in the platform config directory.

pub mod config_file;
pub mod http_api;
pub mod token_store;
pub mod ws_transport;

pub use http_api::{ApiError, DeviceApi};
pub use token_store::{FileTokenStore, NullTokenStore};
pub use ws_transport::WsTransport;
