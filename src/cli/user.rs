//! User management commands

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, parse_data};
use crate::client::OrganisationApi;
use crate::error::Result;
use crate::output::render_document;

/// Run the user add command
pub async fn add(opts: &GlobalOptions, data: &str) -> Result<()> {
    let user_data = parse_data(data)?;
    let ctx = CommandContext::new(opts)?;
    let user = ctx.client.add_user_to_org(&user_data).await?;
    println!("{}", render_document(&user, ctx.format)?);
    Ok(())
}

/// Run the user add-to-group command
pub async fn add_to_group(opts: &GlobalOptions, group_id: &str, data: &str) -> Result<()> {
    let user_data = parse_data(data)?;
    let ctx = CommandContext::new(opts)?;
    let result = ctx.client.add_user_to_group(group_id, &user_data).await?;
    println!("{}", render_document(&result, ctx.format)?);
    Ok(())
}

/// Run the user update command
pub async fn update(opts: &GlobalOptions, user_id: &str, data: &str) -> Result<()> {
    let user_data = parse_data(data)?;
    let ctx = CommandContext::new(opts)?;
    let user = ctx.client.update_user(user_id, &user_data).await?;
    println!("{}", render_document(&user, ctx.format)?);
    Ok(())
}

/// Run the user remove command
pub async fn remove(opts: &GlobalOptions, role_id: &str, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.remove_user(role_id, user_id).await?;
    println!("{} Removed {} from {}", "✓".green(), user_id, role_id);
    Ok(())
}
