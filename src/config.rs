//! Global configuration parsing, validation, and environment overrides.
//!
//! Configuration is a plain TOML file; every field has a default so the
//! server can run with no file at all. Environment overrides are applied
//! explicitly at startup by [`GlobalConfig::apply_env_overrides`] — there is
//! no implicit process-global configuration state.

use std::env;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

/// Environment variable overriding the environment label.
pub const ENV_ENVIRONMENT: &str = "WORKBENCH_ENV";

/// Environment variable overriding the HTTP port.
pub const ENV_HTTP_PORT: &str = "WORKBENCH_HTTP_PORT";

/// HTTP transport settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Bind address for the streamable HTTP transport.
    #[serde(default = "default_http_bind")]
    pub bind: String,
    /// Port for the streamable HTTP transport.
    #[serde(default = "default_http_port")]
    pub port: u16,
    /// Whether to apply a permissive (non-credential) CORS layer.
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_http_bind(),
            port: default_http_port(),
            cors: true,
        }
    }
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Copy, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// Structured JSON output.
    Json,
}

/// Telemetry settings, constructed in `main` and passed down — never
/// configured by side effect.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TelemetryConfig {
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
    /// Whether request arguments are included in dispatch logs.
    /// Off by default: arguments may carry user-supplied text.
    #[serde(default)]
    pub capture_arguments: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: default_log_format(),
            capture_arguments: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_http_bind() -> String {
    "127.0.0.1".into()
}

fn default_http_port() -> u16 {
    8000
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_log_format() -> LogFormat {
    LogFormat::Text
}

fn default_environment() -> String {
    "development".into()
}

fn default_max_connections() -> u32 {
    100
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Environment label surfaced in the `config://settings` resource.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Advisory connection limit surfaced in `config://settings`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Advisory request timeout surfaced in `config://settings`.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Telemetry settings.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            max_connections: default_max_connections(),
            timeout_seconds: default_timeout_seconds(),
            http: HttpConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `WORKBENCH_ENV` and `WORKBENCH_HTTP_PORT` overrides.
    ///
    /// Reads the process environment exactly once, at startup; the variables
    /// are never consulted again afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `WORKBENCH_HTTP_PORT` is set but does
    /// not parse as a port number.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(environment) = env::var(ENV_ENVIRONMENT) {
            if !environment.is_empty() {
                self.environment = environment;
            }
        }

        if let Ok(port) = env::var(ENV_HTTP_PORT) {
            self.http.port = port.parse().map_err(|err| {
                AppError::Config(format!("invalid {ENV_HTTP_PORT} value '{port}': {err}"))
            })?;
        }

        Ok(())
    }

    /// Socket address string for the HTTP transport.
    #[must_use]
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http.bind, self.http.port)
    }

    fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Config(
                "max_connections must be greater than zero".into(),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::Config(
                "timeout_seconds must be greater than zero".into(),
            ));
        }

        if self.http.bind.parse::<IpAddr>().is_err() {
            return Err(AppError::Config(format!(
                "http.bind is not a valid IP address: '{}'",
                self.http.bind
            )));
        }

        Ok(())
    }
}
