//! tizenctl library crate.
//!
//! This crate provides a remote-control client for Samsung Tizen televisions:
//! a WebSocket control channel for simulated key presses and an HTTP client
//! for device identity and application management.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Samsung TV
//!   ├── WebSocket /api/v2/channels/samsung.remote.control  (key presses)
//!   └── HTTP      /api/v2                                  (info, apps)
//!         ↕
//! [tizenctl]
//!   ├── domain/           SessionConfig, connection URL construction
//!   ├── application/      RemoteSession + the ports it depends on
//!   └── infrastructure/
//!         ├── ws_transport/  tokio-tungstenite ControlTransport
//!         ├── token_store/   pairing token file persistence
//!         ├── http_api/      reqwest client for the management API
//!         └── config_file/   TOML defaults in the platform config dir
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `tizenctl-core` only; its network
//!   and persistence needs are expressed as traits.
//! - `infrastructure` implements those traits with `tokio-tungstenite`,
//!   `reqwest`, and `std::fs`.
//!
//! # Security note
//!
//! Tizen TVs present a self-signed TLS certificate on port 8002.  With the
//! default [`domain::SessionConfig`], both the WebSocket connector and the
//! HTTP client accept any certificate
//! ([`SessionConfig::accept_invalid_certs`](domain::SessionConfig) is `true`).
//! This is a deliberate compatibility trade-off, carried as an explicit
//! configuration flag rather than hardcoded; set it to `false` if your
//! device's certificate chain is actually verifiable.
//!
//! # Example
//!
//! ```no_run
//! use tizenctl::application::RemoteSession;
//! use tizenctl::domain::SessionConfig;
//! use tizenctl::infrastructure::token_store::FileTokenStore;
//! use tizenctl::infrastructure::ws_transport::WsTransport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig {
//!     host: "192.168.2.20".to_string(),
//!     ..SessionConfig::default()
//! };
//! let transport = WsTransport::from_config(&config);
//! let store = FileTokenStore::new("/tmp/tv-token".into());
//! let mut session = RemoteSession::new(config, Box::new(transport), Box::new(store))?;
//! session.send_key("KEY_MUTE").await?;
//! # Ok(())
//! # }
//! ```

/// Domain layer: configuration and URL construction (no I/O).
pub mod domain;

/// Application layer: the remote session and its ports.
pub mod application;

/// Infrastructure layer: WebSocket transport, token file, HTTP API, config file.
pub mod infrastructure;
