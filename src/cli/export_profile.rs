//! Export profile commands

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ExportApi;
use crate::error::Result;
use crate::output::render_document;

/// Run the export-profile list command
pub async fn list(opts: &GlobalOptions, template_id: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profiles = ctx.client.get_export_profile_ids(template_id).await?;
    println!("{}", render_document(&profiles, ctx.format)?);
    Ok(())
}

/// Run the export-profile get command
pub async fn get(opts: &GlobalOptions, profile_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.get_export_profile(profile_id).await?;
    println!("{}", render_document(&profile, ctx.format)?);
    Ok(())
}
