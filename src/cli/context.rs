//! Command execution context
//!
//! Loads the config file, applies flag and environment overrides, and builds
//! the API client every remote command needs.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{ClientLogger, SafetyCultureClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and output format
pub struct CommandContext {
    /// Config file merged with overrides
    pub config: Config,
    /// Authenticated API client
    pub client: SafetyCultureClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine when the token comes from `--token` or
    /// `SC_API_TOKEN`.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable, no token is available,
    /// or the token fails validation.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?
            .with_overrides(opts.token_ref(), opts.api_url_ref());
        let client = config.client(ClientLogger::global())?;

        log::debug!("using API at {}", client.base_url());

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::TOKEN;
    use crate::error::{ConfigError, Error};
    use tempfile::TempDir;

    fn opts_with_config(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            config: Some(dir.path().join("config.yaml").to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_token_from_flag_without_config_file() {
        let dir = TempDir::new().unwrap();
        let opts = GlobalOptions {
            token: Some(TOKEN.to_string()),
            api_url: Some("http://localhost:4010".to_string()),
            ..opts_with_config(&dir)
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.base_url(), "http://localhost:4010");
    }

    #[test]
    fn test_missing_token() {
        let dir = TempDir::new().unwrap();
        let result = CommandContext::new(&opts_with_config(&dir));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingToken))
        ));
    }

    #[test]
    fn test_token_from_config_file() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.api_token = Some(TOKEN.to_string());
        config.save_to(&dir.path().join("config.yaml")).unwrap();

        let ctx = CommandContext::new(&opts_with_config(&dir)).unwrap();
        assert_eq!(ctx.config.require_token().unwrap(), TOKEN);
        assert_eq!(ctx.format, OutputFormat::Table);
    }
}
