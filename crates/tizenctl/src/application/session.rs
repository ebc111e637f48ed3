//! RemoteSession: connection lifecycle and pairing for the control channel.
//!
//! This is the heart of the crate.  The session owns at most one open
//! control channel and at most one pairing token, and maintains three
//! guarantees:
//!
//! 1. **Lazy connect** — no network I/O happens at construction; the channel
//!    is opened on the first `send` (or an explicit `connect`).
//! 2. **Pair once** — on the first token-less connection the TV's handshake
//!    reply is read, `data.token` is kept in memory and written to the
//!    [`TokenStore`]; every later connection echoes the token in the URL and
//!    performs no handshake read.
//! 3. **Retry once** — a failed send closes the stale channel, opens a fresh
//!    one, and retries the send exactly once.  A second failure propagates
//!    and leaves the session disconnected.  No backoff, no further attempts:
//!    the channel carries interactive key presses, so the caller is in a
//!    position to retry at its own level.
//!
//! # Concurrency
//!
//! All operations take `&mut self`, so the borrow checker serialises access;
//! the session spawns no background tasks.  Callers that need overlapping
//! operations keep one session per logical client.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use tizenctl_core::protocol::{parse_handshake_token, HandshakeError, RemoteKeyCommand};

use crate::domain::SessionConfig;

// ── Error types ───────────────────────────────────────────────────────────────

/// Error type for the transport port: connect/send/receive/close failures.
///
/// Infrastructure implementations map their library errors into these
/// variants; test doubles construct them directly.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("failed to connect: {0}")]
    Connect(String),

    /// The operation did not complete within the configured timeout.
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// A send on an established channel failed.
    #[error("send failed: {0}")]
    Send(String),

    /// A receive on an established channel failed.
    #[error("receive failed: {0}")]
    Receive(String),

    /// The device closed the connection.
    #[error("connection closed by device")]
    Closed,

    /// Closing the channel failed.
    #[error("close failed: {0}")]
    Close(String),
}

/// Error type for the token store port.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing token at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An underlying transport failure that survived the retry policy.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The handshake reply did not contain a pairing token.
    ///
    /// Never retried automatically — the TV either issued a token or it
    /// did not, and an identical reconnect would produce the same reply.
    #[error(transparent)]
    Handshake(#[from] HandshakeError),

    /// The pairing token could not be loaded or persisted.
    #[error("token store error: {0}")]
    Store(#[from] StoreError),

    /// A command could not be encoded as JSON.
    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
}

// ── Ports ─────────────────────────────────────────────────────────────────────

/// An open bidirectional text channel to the device.
///
/// The session is the only holder of a channel; it closes the channel on
/// disconnect and on any send failure before retrying.
#[async_trait]
pub trait ControlChannel: Send {
    /// Sends one text frame.
    async fn send_text(&mut self, payload: &str) -> Result<(), TransportError>;

    /// Receives the next text frame.  Used only for the pairing handshake.
    async fn receive_text(&mut self) -> Result<String, TransportError>;

    /// Closes the channel.
    async fn close(&mut self) -> Result<(), TransportError>;
}

/// Capability to open a control channel to a given URL.
///
/// The infrastructure implementation uses tokio-tungstenite; test
/// implementations hand out scripted channels.
#[async_trait]
pub trait ControlTransport: Send + Sync {
    /// Opens a channel to `url`, bounded by the transport's timeout.
    async fn open(&self, url: &str) -> Result<Box<dyn ControlChannel>, TransportError>;
}

/// Capability to load and persist the single opaque pairing token.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when no token has been stored.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persists `token`, overwriting any prior value.
    fn save(&self, token: &str) -> Result<(), StoreError>;
}

// ── RemoteSession ─────────────────────────────────────────────────────────────

/// A remote-control session with one TV.
///
/// Owns the control channel (or its absence) and the pairing token, and
/// applies the connect/pair/retry protocol described in the module
/// documentation.
pub struct RemoteSession {
    config: SessionConfig,
    transport: Box<dyn ControlTransport>,
    store: Box<dyn TokenStore>,
    token: Option<String>,
    channel: Option<Box<dyn ControlChannel>>,
}

impl RemoteSession {
    /// Creates a session, loading a previously stored pairing token if one
    /// exists.  Performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the token store is readable but
    /// the read fails (an absent token is not an error).
    pub fn new(
        config: SessionConfig,
        transport: Box<dyn ControlTransport>,
        store: Box<dyn TokenStore>,
    ) -> Result<Self, SessionError> {
        let token = store.load()?;
        if token.is_some() {
            debug!("loaded stored pairing token");
        }
        Ok(Self {
            config,
            transport,
            store,
            token,
            channel: None,
        })
    }

    /// Returns the pairing token currently held, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns `true` while a control channel is open.
    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Establishes a fresh control channel, replacing any existing one.
    ///
    /// With no token held, the first inbound frame is parsed as the pairing
    /// handshake reply: `data.token` becomes the session token and is
    /// written to the store.  With a token held, the channel is ready
    /// immediately and nothing is read.
    ///
    /// # Errors
    ///
    /// [`SessionError::Transport`] if the connection cannot be opened or the
    /// handshake frame cannot be read, [`SessionError::Handshake`] if the
    /// reply lacks `data.token`, [`SessionError::Store`] if the freshly
    /// acquired token cannot be persisted.  On every error path the
    /// just-opened channel has been closed best-effort.
    pub async fn connect(&mut self) -> Result<(), SessionError> {
        self.disconnect().await;
        let channel = self.open_channel().await?;
        self.channel = Some(channel);
        Ok(())
    }

    /// Closes the control channel if one is open.
    ///
    /// Idempotent and infallible: calling with no open channel is a no-op,
    /// and close errors are logged and dropped — a channel the device has
    /// already torn down cannot be closed any harder.
    pub async fn disconnect(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            debug!("closing control channel");
            if let Err(e) = channel.close().await {
                debug!("error closing control channel (ignored): {e}");
            }
        }
    }

    /// Delivers `payload` over the control channel, repairing the
    /// connection transparently.
    ///
    /// At most one reconnect is attempted per call: if the send on the held
    /// channel fails (or no channel is held), the stale channel is closed, a
    /// fresh one is opened — which may perform the pairing handshake — and
    /// the send is retried once.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the retried send (or of the reconnect
    /// itself); the session is left disconnected in that case.
    pub async fn send(&mut self, payload: &str) -> Result<(), SessionError> {
        if let Some(channel) = self.channel.as_mut() {
            match channel.send_text(payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    debug!("send failed on held channel, reconnecting: {e}");
                }
            }
        }

        // Reconnect-and-retry path: drop whatever we held and start fresh.
        self.disconnect().await;
        let mut channel = self.open_channel().await?;
        match channel.send_text(payload).await {
            Ok(()) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err(e) => {
                debug!("retried send failed, giving up: {e}");
                if let Err(close_err) = channel.close().await {
                    debug!("error closing failed channel (ignored): {close_err}");
                }
                Err(e.into())
            }
        }
    }

    /// Sends a single remote-control key press, e.g. `"KEY_VOLUP"`.
    ///
    /// Convenience wrapper building the fixed key-click payload and passing
    /// it to [`RemoteSession::send`].
    pub async fn send_key(&mut self, key: &str) -> Result<(), SessionError> {
        debug!("sending key: {key}");
        let payload = serde_json::to_string(&RemoteKeyCommand::click(key))?;
        self.send(&payload).await
    }

    /// Opens a channel and runs the pairing handshake when needed.
    ///
    /// The returned channel is not yet stored in the session; callers decide
    /// whether to keep it.  On every error path the channel is closed
    /// best-effort before the error propagates.
    async fn open_channel(&mut self) -> Result<Box<dyn ControlChannel>, SessionError> {
        let url = self.config.control_url(self.token.as_deref());
        debug!("opening control channel: {url}");
        let mut channel = self.transport.open(&url).await?;

        if self.token.is_none() {
            let reply = match channel.receive_text().await {
                Ok(reply) => reply,
                Err(e) => {
                    Self::close_quietly(&mut channel).await;
                    return Err(e.into());
                }
            };
            let token = match parse_handshake_token(&reply) {
                Ok(token) => token,
                Err(e) => {
                    Self::close_quietly(&mut channel).await;
                    return Err(e.into());
                }
            };
            info!("pairing token acquired from device");
            self.token = Some(token.clone());
            if let Err(e) = self.store.save(&token) {
                // The in-memory token is already set, so a caller that
                // treats this as non-fatal still has a working session.
                Self::close_quietly(&mut channel).await;
                return Err(e.into());
            }
        }

        Ok(channel)
    }

    async fn close_quietly(channel: &mut Box<dyn ControlChannel>) {
        if let Err(e) = channel.close().await {
            debug!("error closing channel after failure (ignored): {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
