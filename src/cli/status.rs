//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::client::ids;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    print!("{}", report(opts)?);
    Ok(())
}

/// Status text for the given options
pub fn report(opts: &GlobalOptions) -> Result<String> {
    let mut out = format!("{}\n\n", "sc Configuration Status".bold());
    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_from(&config_path) {
        Ok(config) => {
            out.push_str(&format!(
                "Config file: {}\n\n",
                config_path.display().to_string().cyan()
            ));
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            out.push_str(&format!("{} Configuration not found\n", "✗".red()));
            Config::default()
        }
        Err(err) => return Err(err),
    };
    let config = config.with_overrides(opts.token_ref(), opts.api_url_ref());

    match config.api_token.as_deref() {
        Some(token) if ids::api_token(token).is_ok() => {
            let source = if opts.token.is_some() {
                " (from --token / SC_API_TOKEN)"
            } else {
                ""
            };
            out.push_str(&format!("{} API token configured{}\n", "✓".green(), source));
        }
        Some(_) => {
            out.push_str(&format!(
                "{} API token does not look like a SafetyCulture token\n",
                "⚠".yellow()
            ));
            out.push_str("  → Run 'sc init' to generate a new one\n");
        }
        None => {
            out.push_str(&format!("{} API token not configured\n", "✗".red()));
            out.push_str("  → Run 'sc init' to configure\n");
        }
    }

    out.push_str(&format!("{} API URL: {}\n", "○".dimmed(), config.api_url().cyan()));
    out.push_str(&format!(
        "{} Exports: {} in {}, into {}\n",
        "○".dimmed(),
        config.export.format(),
        config.export.timezone(),
        config.export.output_dir().display()
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::TOKEN;
    use tempfile::TempDir;

    fn opts(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            config: Some(dir.path().join("config.yaml").to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_without_config() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();

        let text = report(&opts(&dir)).unwrap();
        assert!(text.contains("Configuration not found"));
        assert!(text.contains("API token not configured"));
        assert!(text.contains("https://api.safetyculture.io"));
    }

    #[test]
    fn test_report_with_token() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.api_token = Some(TOKEN.to_string());
        config.api_url = Some("http://localhost:4010".to_string());
        config.save_to(&dir.path().join("config.yaml")).unwrap();

        let text = report(&opts(&dir)).unwrap();
        assert!(text.contains("API token configured"));
        assert!(text.contains("http://localhost:4010"));
        assert!(text.contains("pdf in Etc/UTC"));
    }

    #[test]
    fn test_report_flags_malformed_token() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let opts = GlobalOptions {
            token: Some("nope".to_string()),
            ..opts(&dir)
        };

        let text = report(&opts).unwrap();
        assert!(text.contains("does not look like"));
    }
}
