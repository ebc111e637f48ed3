//! Application layer use cases.
//!
//! The single use case of this crate is the **remote session**: owning the
//! control-channel connection and the pairing token, and repairing the
//! connection transparently when a send fails.
//!
//! The session depends only on traits ([`ControlTransport`], [`TokenStore`])
//! and domain types ([`crate::domain::SessionConfig`]).  All infrastructure
//! implementations are injected at construction time, making the session
//! fully unit-testable.

pub mod session;

pub use session::{
    ControlChannel, ControlTransport, RemoteSession, SessionError, StoreError, TokenStore,
    TransportError,
};
