//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global flags, already merged with their `SC_*` environment variables.
///
/// Precedence is CLI flag > environment variable > config file > default;
/// this struct carries the first two layers and `CommandContext` applies
/// them over the config file.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Config file path (defaults to ~/.safetyculture/config.yaml)
    pub config: Option<String>,

    /// API token override
    pub token: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn token_ref(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "sc",
            "--format",
            "json",
            "--config",
            "/tmp/sc.yaml",
            "--api-url",
            "http://localhost:8080",
            "status",
        ])
        .unwrap();
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.config_ref(), Some("/tmp/sc.yaml"));
        assert_eq!(opts.api_url_ref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_defaults() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.format, OutputFormat::Table);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.token_ref(), None);
    }
}
