//! Base URL configuration.
//!
//! The base URL comes from, in order: the `--base-url` flag (or
//! `APIPROBE_BASE_URL`, bound by the CLI), the `REACT_APP_BACKEND_URL`
//! environment variable, and finally the same key in the frontend's dotenv
//! file.

use std::fmt;
use std::path::{Path, PathBuf};

use apiprobe_domain::{BaseUrl, DomainError};
use thiserror::Error;

/// Variable the web frontend reads its backend address from.
pub const BACKEND_URL_VAR: &str = "REACT_APP_BACKEND_URL";

/// Dotenv file consulted when no other source sets the base URL.
pub const DEFAULT_ENV_FILE: &str = "frontend/.env";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No source provided a base URL.
    #[error(
        "no base URL configured: pass --base-url, set APIPROBE_BASE_URL or REACT_APP_BACKEND_URL, or add REACT_APP_BACKEND_URL to {}",
        .env_file.display()
    )]
    MissingBaseUrl {
        /// Dotenv file that was consulted.
        env_file: PathBuf,
    },

    /// A base URL was found but is not valid.
    #[error("invalid base URL from {source_name}: {error}")]
    InvalidBaseUrl {
        /// Where the value came from.
        source_name: String,
        /// Validation failure.
        error: DomainError,
    },

    /// The dotenv file could not be read or parsed.
    #[error("failed to read {}: {source}", .path.display())]
    EnvFile {
        /// File path.
        path: PathBuf,
        /// Underlying read or parse error.
        source: dotenvy::Error,
    },
}

/// Dotenv file location and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    /// The default location; a missing file yields no value.
    Default(PathBuf),
    /// A user-supplied location; it must be readable.
    Explicit(PathBuf),
}

impl EnvFile {
    /// Explicit path if given, the default location otherwise.
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or_else(|| Self::Default(PathBuf::from(DEFAULT_ENV_FILE)), Self::Explicit)
    }

    /// File path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Default(path) | Self::Explicit(path) => path,
        }
    }

    /// Reads `key` from the file.
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let env_file_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: self.path().to_path_buf(),
            source,
        };

        let entries = match dotenvy::from_path_iter(self.path()) {
            Ok(entries) => entries,
            Err(e) if e.not_found() && matches!(self, Self::Default(_)) => {
                tracing::debug!(path = %self.path().display(), "no dotenv file");
                return Ok(None);
            }
            Err(e) => return Err(env_file_error(e)),
        };

        for entry in entries {
            let (name, value) = entry.map_err(env_file_error)?;
            if name == key {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Where the base URL was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlSource {
    /// `--base-url` or `APIPROBE_BASE_URL`.
    Flag,
    /// `REACT_APP_BACKEND_URL` in the process environment.
    Environment,
    /// `REACT_APP_BACKEND_URL` in a dotenv file.
    EnvFile(PathBuf),
}

impl fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("--base-url"),
            Self::Environment => f.write_str(BACKEND_URL_VAR),
            Self::EnvFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Service under test.
    pub base_url: BaseUrl,
    /// Where `base_url` came from.
    pub source: BaseUrlSource,
}

impl ProbeConfig {
    /// Resolves the base URL from the flag, the process environment and the
    /// dotenv file, first hit wins.
    ///
    /// # Errors
    ///
    /// Returns an error if no source sets a base URL, the value is not a
    /// valid http(s) URL, or an explicit dotenv file cannot be read.
    pub fn resolve(flag: Option<&str>, env_file: &EnvFile) -> Result<Self, ConfigError> {
        let from_env = std::env::var(BACKEND_URL_VAR).ok();
        Self::resolve_from(flag, from_env.as_deref(), env_file)
    }

    fn resolve_from(
        flag: Option<&str>,
        from_env: Option<&str>,
        env_file: &EnvFile,
    ) -> Result<Self, ConfigError> {
        let (raw, source) = if let Some(value) = non_empty(flag) {
            (value.to_string(), BaseUrlSource::Flag)
        } else if let Some(value) = non_empty(from_env) {
            (value.to_string(), BaseUrlSource::Environment)
        } else if let Some(value) = env_file.lookup(BACKEND_URL_VAR)?.filter(|v| !v.is_empty()) {
            (value, BaseUrlSource::EnvFile(env_file.path().to_path_buf()))
        } else {
            return Err(ConfigError::MissingBaseUrl {
                env_file: env_file.path().to_path_buf(),
            });
        };

        let base_url = BaseUrl::parse(&raw).map_err(|error| ConfigError::InvalidBaseUrl {
            source_name: source.to_string(),
            error,
        })?;
        tracing::info!(%base_url, %source, "resolved base URL");

        Ok(Self { base_url, source })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
