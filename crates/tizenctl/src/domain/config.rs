//! Session configuration types.
//!
//! [`SessionConfig`] is the single source of truth for all connection
//! settings.  It can be constructed from CLI arguments (preferred for the
//! binary) or from defaults (useful for tests and embedding).
//!
//! Keeping configuration as a plain struct — no global state, no environment
//! variable reads inside the domain — means a [`crate::application::RemoteSession`]
//! can be built in a test with nothing but this struct and a pair of fakes.
//!
//! URL construction lives here rather than in the transport because it is
//! pure string work and the session's connection URL must be byte-for-byte
//! deterministic for a given config + token state: the TV associates the
//! pairing token with the `name` parameter, so an encoding change would
//! invalidate every stored token.

use std::path::PathBuf;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Path component of the remote-control WebSocket channel.
pub const CONTROL_CHANNEL: &str = "samsung.remote.control";

/// All connection settings for one TV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Hostname or IP address of the TV.
    pub host: String,

    /// TCP port of the API endpoint.
    ///
    /// Tizen firmware serves TLS on 8002 and plaintext on 8001.  The port is
    /// shared by the WebSocket channel and the HTTP management API.
    pub port: u16,

    /// `true` for `wss://`/`https://`, `false` for `ws://`/`http://`.
    pub secure: bool,

    /// Whether to accept a TLS certificate that fails verification.
    ///
    /// Tizen TVs present a self-signed certificate, so this defaults to
    /// `true`.  It is an explicit, documented trust trade-off — set it to
    /// `false` when the device certificate is actually verifiable.  Has no
    /// effect when `secure` is `false`.
    pub accept_invalid_certs: bool,

    /// Human-readable client identity.
    ///
    /// The TV shows this string in its authorization prompt and remembers
    /// the issued pairing token against it.
    pub client_name: String,

    /// Timeout applied to connection establishment and each send/receive.
    pub timeout: Duration,

    /// Where to persist the pairing token, or `None` to keep it in memory
    /// only (the TV will re-prompt on every process start).
    pub token_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    /// Returns a config suitable for a TV reachable on the local network
    /// with TLS on the standard port.
    ///
    /// | Field                | Default       |
    /// |----------------------|---------------|
    /// | host                 | `127.0.0.1`   |
    /// | port                 | `8002`        |
    /// | secure               | `true`        |
    /// | accept_invalid_certs | `true`        |
    /// | client_name          | `tizenctl`    |
    /// | timeout              | 3 seconds     |
    /// | token_path           | `None`        |
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8002,
            secure: true,
            accept_invalid_certs: true,
            client_name: "tizenctl".to_string(),
            timeout: Duration::from_secs(3),
            token_path: None,
        }
    }
}

impl SessionConfig {
    /// Builds the WebSocket control-channel URL for the current token state.
    ///
    /// The client name is base64-encoded (standard alphabet, padding kept —
    /// the TV decodes it for its authorization prompt).  The `token` query
    /// parameter is appended only when a pairing token is held.
    pub fn control_url(&self, token: Option<&str>) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        let name = BASE64.encode(self.client_name.as_bytes());
        let mut url = format!(
            "{scheme}://{host}:{port}/api/v2/channels/{CONTROL_CHANNEL}?name={name}",
            host = self.host,
            port = self.port,
        );
        if let Some(token) = token {
            url.push_str("&token=");
            url.push_str(token);
        }
        url
    }

    /// Builds the base URL of the HTTP management API, without a trailing
    /// slash.
    pub fn http_base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!(
            "{scheme}://{host}:{port}/api/v2",
            host = self.host,
            port = self.port
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_8002() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.port, 8002);
    }

    #[test]
    fn test_default_is_secure_and_accepts_invalid_certs() {
        let cfg = SessionConfig::default();
        assert!(cfg.secure);
        assert!(cfg.accept_invalid_certs);
    }

    #[test]
    fn test_default_timeout_is_3s() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_control_url_without_token() {
        // Arrange: the fixed scenario from the protocol documentation
        let cfg = SessionConfig {
            host: "10.0.0.5".to_string(),
            port: 8002,
            secure: false,
            client_name: "demo".to_string(),
            ..SessionConfig::default()
        };

        // Act
        let url = cfg.control_url(None);

        // Assert: base64("demo") = "ZGVtbw==", padding preserved
        assert_eq!(
            url,
            "ws://10.0.0.5:8002/api/v2/channels/samsung.remote.control?name=ZGVtbw=="
        );
    }

    #[test]
    fn test_control_url_with_token_appends_query_parameter() {
        let cfg = SessionConfig {
            host: "10.0.0.5".to_string(),
            secure: false,
            client_name: "demo".to_string(),
            ..SessionConfig::default()
        };

        let url = cfg.control_url(Some("12345678"));

        assert!(url.ends_with("?name=ZGVtbw==&token=12345678"));
    }

    #[test]
    fn test_control_url_secure_uses_wss() {
        let cfg = SessionConfig {
            host: "tv.local".to_string(),
            ..SessionConfig::default()
        };
        let url = cfg.control_url(None);
        assert!(url.starts_with("wss://tv.local:8002/"));
    }

    #[test]
    fn test_control_url_is_deterministic() {
        // The TV keys the stored token to the name parameter, so repeated
        // calls must produce identical bytes.
        let cfg = SessionConfig {
            host: "10.0.0.5".to_string(),
            client_name: "living-room".to_string(),
            ..SessionConfig::default()
        };
        assert_eq!(cfg.control_url(Some("t")), cfg.control_url(Some("t")));
        assert_eq!(cfg.control_url(None), cfg.control_url(None));
    }

    #[test]
    fn test_http_base_url_plain() {
        let cfg = SessionConfig {
            host: "10.0.0.5".to_string(),
            port: 8001,
            secure: false,
            ..SessionConfig::default()
        };
        assert_eq!(cfg.http_base_url(), "http://10.0.0.5:8001/api/v2");
    }

    #[test]
    fn test_http_base_url_secure() {
        let cfg = SessionConfig {
            host: "10.0.0.5".to_string(),
            ..SessionConfig::default()
        };
        assert_eq!(cfg.http_base_url(), "https://10.0.0.5:8002/api/v2");
    }
}
