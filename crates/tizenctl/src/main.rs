//! tizenctl — remote-control CLI for Samsung Tizen televisions.
//!
//! # Usage
//!
//! ```text
//! tizenctl --host 192.168.2.20 send KEY_VOLUP
//! tizenctl --host 192.168.2.20 send KEY_HOME KEY_DOWN KEY_ENTER
//! tizenctl --host 192.168.2.20 interactive
//! tizenctl --host 192.168.2.20 info
//! tizenctl --host 192.168.2.20 app status 111299001912
//! tizenctl keys
//! ```
//!
//! Connection flags can come from three places, in order of precedence:
//! CLI arguments, environment variables (`TIZENCTL_HOST`, ...), and the
//! defaults file (`config.toml` in the platform config directory).
//!
//! On the first connection the TV shows an authorization prompt naming this
//! client; once accepted, the issued pairing token is stored next to the
//! defaults file and reused silently from then on.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tizenctl::application::{RemoteSession, TokenStore};
use tizenctl::domain::SessionConfig;
use tizenctl::infrastructure::config_file::{self, Defaults};
use tizenctl::infrastructure::{DeviceApi, FileTokenStore, NullTokenStore, WsTransport};
use tizenctl_core::domain::keys;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote-control client for Samsung Tizen televisions.
#[derive(Debug, Parser)]
#[command(
    name = "tizenctl",
    about = "Send remote-control keys to a Samsung TV and manage its apps",
    version
)]
struct Cli {
    /// Hostname or IP address of the TV.
    #[arg(long, env = "TIZENCTL_HOST")]
    host: Option<String>,

    /// API port of the TV (8002 with TLS, 8001 plaintext).
    #[arg(long, env = "TIZENCTL_PORT")]
    port: Option<u16>,

    /// Use the plaintext endpoint (ws:// and http://) instead of TLS.
    #[arg(long)]
    plain: bool,

    /// Verify the TV's TLS certificate instead of accepting any.
    ///
    /// Tizen TVs ship self-signed certificates, so verification fails on
    /// stock devices; this flag exists for setups with a proper chain.
    #[arg(long)]
    verify_tls: bool,

    /// Client identity shown in the TV's authorization prompt.
    #[arg(long, env = "TIZENCTL_NAME")]
    name: Option<String>,

    /// Network timeout in seconds.
    #[arg(long, env = "TIZENCTL_TIMEOUT")]
    timeout: Option<u64>,

    /// Pairing token file (default: `token` in the platform config dir).
    #[arg(long, env = "TIZENCTL_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send one or more remote key presses, in order.
    Send {
        /// Key identifiers, e.g. KEY_VOLUP (see `tizenctl keys`).
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Read key names from standard input, one per line, and send each.
    Interactive,

    /// Show device identity and power state.
    Info,

    /// Manage an installed application.
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// List the well-known key identifiers.
    Keys,
}

#[derive(Debug, Subcommand)]
enum AppAction {
    /// Show whether the application is installed, running, and visible.
    Status { app_id: String },
    /// Launch the application.
    Start { app_id: String },
    /// Stop the application.
    Stop { app_id: String },
}

impl Cli {
    /// Resolves the effective [`SessionConfig`] from CLI arguments and the
    /// defaults file.  CLI values win; file values fill the gaps; built-in
    /// defaults cover the rest.
    ///
    /// # Errors
    ///
    /// Fails when no host is configured anywhere.
    fn resolve_config(&self, file: Defaults) -> anyhow::Result<SessionConfig> {
        let host = self
            .host
            .clone()
            .or(file.host)
            .context("no TV host configured; pass --host, set TIZENCTL_HOST, or add `host` to the config file")?;

        let secure = if self.plain {
            false
        } else {
            file.secure.unwrap_or(true)
        };

        let token_path = match self.token_file.clone().or(file.token_file) {
            Some(path) => Some(path),
            None => match config_file::default_token_path() {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("no token path available ({e}); pairing will not persist");
                    None
                }
            },
        };

        Ok(SessionConfig {
            host,
            port: self.port.or(file.port).unwrap_or(8002),
            secure,
            accept_invalid_certs: !self.verify_tls,
            client_name: self
                .name
                .clone()
                .or(file.client_name)
                .unwrap_or_else(|| "tizenctl".to_string()),
            timeout: Duration::from_secs(self.timeout.or(file.timeout_secs).unwrap_or(3)),
            token_path,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log level via RUST_LOG, defaulting to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // `keys` needs no connection and must work before any TV is configured.
    if let Command::Keys = cli.command {
        for key in keys::ALL {
            println!("{key}");
        }
        return Ok(());
    }

    let defaults = config_file::load_defaults().unwrap_or_else(|e| {
        warn!("ignoring unreadable defaults file: {e}");
        Defaults::default()
    });
    let config = cli.resolve_config(defaults)?;

    match &cli.command {
        Command::Send { keys } => {
            let mut session = open_session(config)?;
            for key in keys {
                warn_if_unknown(key);
                session.send_key(key).await?;
            }
            session.disconnect().await;
        }
        Command::Interactive => {
            let mut session = open_session(config)?;
            run_interactive(&mut session).await?;
            session.disconnect().await;
        }
        Command::Info => {
            let api = DeviceApi::new(&config)?;
            let info = api.get_info().await?;
            println!("id:          {}", info.id);
            println!("name:        {}", info.name);
            println!("version:     {}", info.version);
            println!("power state: {}", info.power_state);
        }
        Command::App { action } => {
            let api = DeviceApi::new(&config)?;
            match action {
                AppAction::Status { app_id } => {
                    let info = api.get_app_info(app_id).await?;
                    println!("id:      {}", info.id);
                    println!("name:    {}", info.name);
                    println!("version: {}", info.version);
                    println!("running: {}", info.running);
                    println!("visible: {}", info.visible);
                }
                AppAction::Start { app_id } => {
                    api.start_app(app_id).await?;
                    println!("started {app_id}");
                }
                AppAction::Stop { app_id } => {
                    api.stop_app(app_id).await?;
                    println!("stopped {app_id}");
                }
            }
        }
        Command::Keys => unreachable!("handled above"),
    }

    Ok(())
}

/// Assembles a [`RemoteSession`] from the resolved configuration.
fn open_session(config: SessionConfig) -> anyhow::Result<RemoteSession> {
    let transport = WsTransport::from_config(&config);
    let store: Box<dyn TokenStore> = match &config.token_path {
        Some(path) => Box::new(FileTokenStore::new(path.clone())),
        None => Box::new(NullTokenStore),
    };
    Ok(RemoteSession::new(config, Box::new(transport), store)?)
}

/// Reads key names from stdin line-by-line and sends each one.
///
/// Empty lines are skipped; `quit` or end-of-input ends the loop.  A failed
/// send ends the loop with the error — by that point the session has
/// already used up its reconnect attempt for that key.
async fn run_interactive(session: &mut RemoteSession) -> anyhow::Result<()> {
    eprintln!("enter key names (e.g. KEY_VOLUP), one per line; `quit` to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if key.eq_ignore_ascii_case("quit") || key.eq_ignore_ascii_case("exit") {
            break;
        }
        warn_if_unknown(key);
        session.send_key(key).await?;
    }
    Ok(())
}

fn warn_if_unknown(key: &str) {
    if !keys::is_well_known(key) {
        warn!("{key} is not a well-known key identifier; sending anyway");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
