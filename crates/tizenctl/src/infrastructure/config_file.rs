//! TOML-based defaults file for the CLI.
//!
//! Reads and writes `Defaults` at the platform-appropriate location:
//! - Windows:  `%APPDATA%\tizenctl\config.toml`
//! - Linux:    `~/.config/tizenctl/config.toml` (respecting `XDG_CONFIG_HOME`)
//! - macOS:    `~/Library/Application Support/tizenctl/config.toml`
//!
//! The file spares the user from repeating `--host` on every invocation:
//!
//! ```toml
//! host = "192.168.2.20"
//! port = 8002
//! secure = true
//! client_name = "living-room"
//! timeout_secs = 3
//! ```
//!
//! Every field is optional; CLI arguments take precedence over file values,
//! and file values over built-in defaults.  The pairing token lives next to
//! this file (see [`default_token_path`]) unless `--token-file` points
//! elsewhere.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for defaults-file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The defaults could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Optional CLI defaults stored on disk.
///
/// `None` means "not set in the file" — the CLI falls back to its built-in
/// default for that flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    /// TV hostname or IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// API port (8002 TLS, 8001 plaintext).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// `false` selects the plaintext endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    /// Client identity shown in the TV's authorization prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Network timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Pairing token location override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

/// Determines the platform-appropriate directory for tizenctl state.
///
/// # Errors
///
/// Returns [`ConfigFileError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigFileError> {
    platform_config_dir().ok_or(ConfigFileError::NoPlatformConfigDir)
}

/// Resolves the full path to the defaults file.
pub fn config_file_path() -> Result<PathBuf, ConfigFileError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Resolves the default pairing-token path, next to the defaults file.
pub fn default_token_path() -> Result<PathBuf, ConfigFileError> {
    Ok(config_dir()?.join("token"))
}

/// Loads [`Defaults`] from disk, returning `Defaults::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] for file-system errors other than
/// "not found", and [`ConfigFileError::Parse`] if the TOML is malformed.
pub fn load_defaults() -> Result<Defaults, ConfigFileError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Defaults::default()),
        Err(e) => Err(ConfigFileError::Io { path, source: e }),
    }
}

/// Persists `defaults` to disk, creating the config directory if needed.
pub fn save_defaults(defaults: &Defaults) -> Result<(), ConfigFileError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigFileError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(defaults)?;
    std::fs::write(&path, content).map_err(|source| ConfigFileError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the `tizenctl`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("tizenctl"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("tizenctl"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("tizenctl")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        // Arrange
        let defaults = Defaults {
            host: Some("192.168.2.20".to_string()),
            port: Some(8002),
            secure: Some(true),
            client_name: Some("living-room".to_string()),
            timeout_secs: Some(5),
            token_file: Some(PathBuf::from("/var/lib/tizenctl/token")),
        };

        // Act
        let toml_str = toml::to_string_pretty(&defaults).expect("serialize");
        let restored: Defaults = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(defaults, restored);
    }

    #[test]
    fn test_empty_file_parses_to_all_none() {
        let defaults: Defaults = toml::from_str("").expect("deserialize empty");
        assert_eq!(defaults, Defaults::default());
    }

    #[test]
    fn test_partial_file_leaves_other_fields_unset() {
        let defaults: Defaults = toml::from_str(r#"host = "10.0.0.5""#).unwrap();
        assert_eq!(defaults.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(defaults.port, None);
        assert_eq!(defaults.secure, None);
    }

    #[test]
    fn test_unset_fields_are_omitted_from_output() {
        let toml_str = toml::to_string_pretty(&Defaults {
            host: Some("tv.local".to_string()),
            ..Defaults::default()
        })
        .unwrap();

        assert!(toml_str.contains("host"));
        assert!(!toml_str.contains("port"));
        assert!(!toml_str.contains("token_file"));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result: Result<Defaults, _> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"));
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }

    #[test]
    fn test_token_lives_beside_the_config_file() {
        if let (Ok(config), Ok(token)) = (config_file_path(), default_token_path()) {
            assert_eq!(config.parent(), token.parent());
        }
    }
}
