//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{ClientLogger, SafetyCultureClient, request_api_token};
use crate::config::Config;
use crate::error::Result;

/// Run the init command.
///
/// Exchanges username and password for an API token and stores it. The
/// password is never written to disk.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to sc!".bold().green());
    println!("Log in with your SafetyCulture account to generate an API token.\n");

    let theme = ColorfulTheme::default();
    let username: String = Input::with_theme(&theme)
        .with_prompt("SafetyCulture username (email)")
        .interact_text()?;
    let password: String = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let mut config = Config::load_or_default(opts.config_ref())?
        .with_overrides(None, opts.api_url_ref());

    println!("\n{}", "Requesting API token...".cyan());
    let token =
        request_api_token(config.api_url(), &username, &password, &ClientLogger::global()).await?;

    // Rejects tokens the client would refuse later
    SafetyCultureClient::builder(token.as_str())
        .base_url(config.api_url())
        .build()?;
    println!("{}", "✓ Token generated".green());

    config.api_token = Some(token);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sc status".cyan());
    println!("  {} - List templates", "sc template list".cyan());

    Ok(())
}
