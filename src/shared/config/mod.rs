//! Application configuration module
//!
//! Configuration is assembled from three layers, later layers winning:
//!
//! 1. Built-in defaults (`AppConfig::default()`)
//! 2. An optional TOML file named by `PCB_INSPECT_CONFIG`
//! 3. Environment variables (`SERVER_PORT`, `JWT_SECRET`, ...)
//!
//! ```toml
//! log_filter = "pcb_inspect=debug"
//!
//! [server]
//! port = 8080
//!
//! [auth]
//! session_ttl_secs = 3600
//! bcrypt_cost = 10
//!
//! [detection]
//! delay_ms = 0
//! ```

use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the path of an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "PCB_INSPECT_CONFIG";

/// Secrets shorter than this are accepted with a warning
const MIN_SECRET_LEN: usize = 32;

/// bcrypt accepts work factors in this range
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and static file settings
    pub server: ServerConfig,
    /// Credential and session settings
    pub auth: AuthConfig,
    /// Mock detection settings
    pub detection: DetectionConfig,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

/// Authentication settings
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret for session tokens; a random one is generated when unset
    pub jwt_secret: Option<String>,
    /// Session token lifetime in seconds
    pub session_ttl_secs: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Add the `Secure` attribute to the session cookie
    pub secure_cookie: bool,
}

/// Mock detection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Simulated processing delay in milliseconds
    pub delay_ms: u64,
    /// Image reference returned as `detectedImage`
    pub detected_image: String,
    /// Upper bound on the upload request body
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: 30 * 24 * 60 * 60,
            bcrypt_cost: 12,
            cookie_name: "pcb_session".to_string(),
            secure_cookie: false,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            detected_image: "/static/images/mock_pcb_detected.jpg".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

// Keep the signing secret out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie_name", &self.cookie_name)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

impl AuthConfig {
    /// Bytes used to sign session tokens.
    ///
    /// Without a configured secret a random 64-byte key is generated, which
    /// means sessions do not survive a restart.
    pub fn signing_secret(&self) -> Vec<u8> {
        match self.jwt_secret.as_deref() {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => secret.as_bytes().to_vec(),
            Some(secret) if !secret.is_empty() => {
                tracing::warn!(
                    "JWT_SECRET is shorter than {} characters. Consider using a longer secret.",
                    MIN_SECRET_LEN
                );
                secret.as_bytes().to_vec()
            }
            _ => {
                tracing::warn!("JWT_SECRET not set. Generating random secret. Sessions won't survive restarts.");
                let mut rng = rand::thread_rng();
                (0..64).map(|_| rng.gen::<u8>()).collect()
            }
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the optional config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML config text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Override fields from environment-style variables.
    ///
    /// `lookup` returns the value of a variable, if set.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_var("SERVER_PORT", port)?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
        }
        if let Some(ttl) = lookup("SESSION_TTL_SECS") {
            self.auth.session_ttl_secs = parse_var("SESSION_TTL_SECS", ttl)?;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.auth.bcrypt_cost = parse_var("BCRYPT_COST", cost)?;
        }
        if let Some(name) = lookup("SESSION_COOKIE") {
            self.auth.cookie_name = name;
        }
        if let Some(secure) = lookup("SECURE_COOKIE") {
            self.auth.secure_cookie = parse_flag("SECURE_COOKIE", secure)?;
        }
        if let Some(delay) = lookup("DETECTION_DELAY_MS") {
            self.detection.delay_ms = parse_var("DETECTION_DELAY_MS", delay)?;
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("server.host"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::OutOfRange {
                key: "auth.bcrypt_cost",
                message: format!(
                    "must be between {} and {}",
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end()
                ),
            });
        }
        if self.auth.session_ttl_secs == 0 {
            return Err(ConfigError::OutOfRange {
                key: "auth.session_ttl_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        let cookie_name_ok = !self.auth.cookie_name.is_empty()
            && self
                .auth
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !cookie_name_ok {
            return Err(ConfigError::InvalidValue {
                key: "auth.cookie_name",
                value: self.auth.cookie_name.clone(),
            });
        }
        if self.detection.max_upload_bytes == 0 {
            return Err(ConfigError::OutOfRange {
                key: "detection.max_upload_bytes",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port` string accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log filter directive, falling back to the crate default
    pub fn log_filter(&self) -> &str {
        if self.log_filter.trim().is_empty() {
            "pcb_inspect=info,tower_http=info"
        } else {
            &self.log_filter
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.server.static_dir = dir.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.auth.jwt_secret = Some(secret.into());
        self
    }

    pub fn session_ttl_secs(mut self, secs: u64) -> Self {
        self.config.auth.session_ttl_secs = secs;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.auth.bcrypt_cost = cost;
        self
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.config.auth.cookie_name = name.into();
        self
    }

    pub fn secure_cookie(mut self, secure: bool) -> Self {
        self.config.auth.secure_cookie = secure;
        self
    }

    pub fn detection_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.detection.delay_ms = delay_ms;
        self
    }

    pub fn detected_image(mut self, reference: impl Into<String>) -> Self {
        self.config.detection.detected_image = reference.into();
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.config.detection.max_upload_bytes = bytes;
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} {message}")]
    OutOfRange { key: &'static str, message: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
