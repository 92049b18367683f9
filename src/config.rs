//! Process Configuration
//!
//! `Config` is parsed from command-line flags (each with an environment
//! variable fallback) by the binary. The router itself only sees
//! [`ServerOptions`], so tests and embedding code can build one directly.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CLUSTER_NAME: &str = "rsyslog-testbench";
pub const DEFAULT_TAGLINE: &str = "rsyslog mock";

#[derive(Debug, Clone, Parser)]
#[command(name = "es-mock-server", about = "Mock search cluster for integration tests")]
pub struct Config {
    /// Interface to listen on.
    #[arg(short = 'i', long, env = "ES_MOCK_INTERFACE", default_value = "127.0.0.1")]
    pub interface: String,

    /// Listen port (0 picks an ephemeral port).
    #[arg(short = 'p', long, env = "ES_MOCK_PORT", default_value_t = 0)]
    pub port: u16,

    /// Write the bound port to this file once listening.
    #[arg(long, env = "ES_MOCK_PORT_FILE")]
    pub port_file: Option<PathBuf>,

    /// Require HTTP Basic credentials for this user.
    #[arg(long, env = "ES_MOCK_USER")]
    pub user: Option<String>,

    #[arg(long, env = "ES_MOCK_PASSWORD", default_value = "")]
    pub password: String,

    /// Artificial delay applied before every response, in milliseconds.
    #[arg(long, env = "ES_MOCK_DELAY_MS", default_value_t = 0)]
    pub delay_ms: u64,

    #[arg(long, env = "ES_MOCK_CLUSTER_NAME", default_value = DEFAULT_CLUSTER_NAME)]
    pub cluster_name: String,
}

impl Config {
    pub fn server_options(&self) -> ServerOptions {
        ServerOptions {
            cluster_name: self.cluster_name.clone(),
            credentials: self.user.as_ref().map(|user| Credentials {
                user: user.clone(),
                password: self.password.clone(),
            }),
            response_delay: Duration::from_millis(self.delay_ms),
            ..ServerOptions::default()
        }
    }
}

/// Runtime knobs shared by every request.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub cluster_name: String,
    /// Generated once per process and reported by `GET /`.
    pub cluster_uuid: String,
    pub credentials: Option<Credentials>,
    pub response_delay: Duration,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            cluster_uuid: uuid::Uuid::new_v4().to_string(),
            credentials: None,
            response_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    /// Checks an `Authorization` header value against these credentials.
    ///
    /// Only the `Basic` scheme is understood; anything else is rejected with
    /// a short reason suitable for the error body.
    pub fn verify(&self, header: Option<&str>) -> Result<(), String> {
        let header = header.ok_or_else(|| "missing authentication credentials".to_string())?;

        let encoded = match header.split_once(' ') {
            Some((scheme, value)) if scheme.eq_ignore_ascii_case("basic") => value.trim(),
            _ => return Err("unsupported authentication scheme".to_string()),
        };

        let decoded = STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| "invalid authorization header".to_string())?;

        if decoded == format!("{}:{}", self.user, self.password) {
            Ok(())
        } else {
            let user = decoded.split(':').next().unwrap_or_default();
            Err(format!("unable to authenticate user [{}]", user))
        }
    }

    pub fn header_value(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.user, self.password))
        )
    }
}
