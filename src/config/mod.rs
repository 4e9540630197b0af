//! Configuration management for the `sc` CLI
//!
//! Settings live in `~/.safetyculture/config.yaml`. Command-line flags and
//! `SC_*` environment variables take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::models::{DEFAULT_EXPORT_TIMEZONE, ExportFormat};
use crate::client::{API_BASE_URL, ClientLogger, ExportPolicy, SafetyCultureClient};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// SafetyCulture API token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Export defaults
    #[serde(default)]
    pub export: ExportPreferences,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Defaults for `sc export`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_max_polls")]
    pub max_polls: u32,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Directory exported documents are written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_poll_interval_secs() -> u64 {
    ExportPolicy::default().poll_interval.as_secs()
}

fn default_max_polls() -> u32 {
    ExportPolicy::default().max_polls
}

fn default_max_attempts() -> u32 {
    ExportPolicy::default().max_attempts
}

impl Default for ExportPreferences {
    fn default() -> Self {
        Self {
            format: None,
            timezone: None,
            poll_interval_secs: default_poll_interval_secs(),
            max_polls: default_max_polls(),
            max_attempts: default_max_attempts(),
            output_dir: None,
        }
    }
}

impl ExportPreferences {
    pub fn format(&self) -> ExportFormat {
        self.format.unwrap_or_default()
    }

    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_EXPORT_TIMEZONE)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("exports"))
    }

    /// Poll bounds handed to the client
    pub fn policy(&self) -> ExportPolicy {
        ExportPolicy {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            max_polls: self.max_polls.max(1),
            max_attempts: self.max_attempts.max(1),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".safetyculture").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load if present, otherwise start from defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Save configuration to `path`, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Token is a credential: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, api_token: Option<&str>, api_url: Option<&str>) -> Self {
        if let Some(token) = api_token {
            self.api_token = Some(token.to_string());
        }
        if let Some(url) = api_url {
            self.api_url = Some(url.to_string());
        }
        self
    }

    /// The configured token, or an error pointing at `sc init`
    pub fn require_token(&self) -> Result<&str> {
        self.api_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingToken.into())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(API_BASE_URL)
    }

    /// Build a client from this configuration
    pub fn client(&self, logger: ClientLogger) -> Result<SafetyCultureClient> {
        let mut builder = SafetyCultureClient::builder(self.require_token()?)
            .base_url(self.api_url())
            .logger(logger)
            .export_policy(self.export.policy());
        if let Some(secs) = self.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}
