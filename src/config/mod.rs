//! Layered client configuration.
//!
//! Values resolve with the following priority (highest first):
//! 1. CLI flags
//! 2. Environment variables (`FANQUEST_BASE_URL`, `FANQUEST_TOKEN`,
//!    `FANQUEST_LOG`, read through clap)
//! 3. TOML config file (`--config`, else `<config dir>/fanquest/config.toml`)
//! 4. Compiled defaults
//!
//! A missing default file is not an error; an explicit `--config` that cannot
//! be read is.

mod file;

use camino::Utf8PathBuf;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::session::domain::BearerToken;
use file::ConfigFile;

pub use file::default_config_path;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<io::Error>,
    },

    /// The configuration file is not valid TOML for this client.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("invalid setting {setting}: {reason}")]
    InvalidValue {
        /// Dotted setting name.
        setting: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Options shared by every subcommand.
#[derive(Debug, Default, Clone, clap::Args)]
pub struct GlobalArgs {
    /// Base URL of the station backend.
    #[arg(long, global = true, env = "FANQUEST_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token of an administrator session.
    #[arg(long, global = true, env = "FANQUEST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Path to the config file.
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Log filter (`trace`, `debug`, `info`, `warn`, `error` or directives).
    #[arg(long, global = true, env = "FANQUEST_LOG")]
    pub log_level: Option<String>,
}

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
    /// Administrator token, when one is configured.
    pub token: Option<BearerToken>,
    /// Upper bound for one focus status query.
    pub focus_query_timeout: Duration,
    /// Interval between leaderboard refreshes.
    pub leaderboard_refresh: Duration,
    /// Interval between token-expiry checks.
    pub token_check: Duration,
    /// Log filter directives.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(15),
            token: None,
            focus_query_timeout: Duration::from_secs(15),
            leaderboard_refresh: Duration::from_secs(60),
            token_check: Duration::from_secs(60),
            log_filter: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Loads the config file named by `args` (or the default one) and
    /// resolves it against `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicit file cannot be read, a file
    /// cannot be parsed, or a resolved duration is zero.
    pub fn load(args: &GlobalArgs) -> Result<Self, ConfigError> {
        let config_file = match &args.config {
            Some(path) => file::read_config_file(path)?,
            None => file::read_default_config_file()?,
        };
        Self::resolve(args, &config_file)
    }

    fn resolve(args: &GlobalArgs, config_file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            base_url: args
                .base_url
                .clone()
                .or_else(|| config_file.api.base_url.clone())
                .unwrap_or(defaults.base_url),
            request_timeout: args
                .request_timeout_secs
                .or(config_file.api.request_timeout_secs)
                .map_or(defaults.request_timeout, Duration::from_secs),
            token: args
                .token
                .clone()
                .or_else(|| config_file.api.token.clone())
                .filter(|token| !token.trim().is_empty())
                .map(BearerToken::new),
            focus_query_timeout: config_file
                .focus
                .query_timeout_secs
                .map_or(defaults.focus_query_timeout, Duration::from_secs),
            leaderboard_refresh: config_file
                .schedule
                .leaderboard_refresh_secs
                .map_or(defaults.leaderboard_refresh, Duration::from_secs),
            token_check: config_file
                .schedule
                .token_check_secs
                .map_or(defaults.token_check, Duration::from_secs),
            log_filter: args
                .log_level
                .clone()
                .or_else(|| config_file.log.filter.clone())
                .unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (setting, value) in [
            ("api.request_timeout_secs", self.request_timeout),
            ("focus.query_timeout_secs", self.focus_query_timeout),
            ("schedule.leaderboard_refresh_secs", self.leaderboard_refresh),
            ("schedule.token_check_secs", self.token_check),
        ] {
            if value.is_zero() {
                return Err(ConfigError::InvalidValue {
                    setting,
                    reason: "must be at least one second",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
