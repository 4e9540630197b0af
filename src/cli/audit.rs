//! Audit commands

use std::path::Path;

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::parse_instant;
use crate::cli::{CommandContext, CompletedArg, GlobalOptions, OutputFormat};
use crate::client::models::{AuditQuery, AuditSummary};
use crate::client::DiscoveryApi;
use crate::error::Result;
use crate::output::{files, formatters, json, render_document, render_list};

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "AUDIT ID")]
    id: String,
    #[tabled(rename = "MODIFIED")]
    modified: String,
}

impl From<&AuditSummary> for AuditRow {
    fn from(audit: &AuditSummary) -> Self {
        Self {
            id: audit.audit_id.clone(),
            modified: formatters::format_modified_at(audit.modified_at.as_deref()),
        }
    }
}

/// Run the audit list command
pub async fn list(
    opts: &GlobalOptions,
    templates: &[String],
    modified_after: Option<&str>,
    completed: CompletedArg,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let query = build_query(templates, modified_after, completed)?;
    println!("{}", render_audits(&ctx.client, &query, ctx.format).await?);
    Ok(())
}

fn build_query(
    templates: &[String],
    modified_after: Option<&str>,
    completed: CompletedArg,
) -> Result<AuditQuery> {
    let mut query = AuditQuery::new().completed(Some(completed.into()));
    for template in templates {
        query = query.template(template.as_str());
    }
    if let Some(after) = modified_after {
        query = query.modified_after(parse_instant(after)?);
    }
    Ok(query)
}

async fn render_audits(client: &impl DiscoveryApi, query: &AuditQuery, format: OutputFormat) -> Result<String> {
    let response = client.discover_audits(query).await?;
    render_list(&response.audits, format, |a| AuditRow::from(a))
}

/// Run the audit get command
pub async fn get(opts: &GlobalOptions, audit_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let audit = ctx.client.get_audit(audit_id).await?;
    println!("{}", render_document(&audit, ctx.format)?);
    Ok(())
}

/// Run the audit web-report command
pub async fn web_report(opts: &GlobalOptions, audit_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let link = ctx.client.get_web_report(audit_id).await?;

    match ctx.format {
        OutputFormat::Table => match link {
            Some(url) => println!("{}", url),
            None => println!("{} No web report available for {}", "○".dimmed(), audit_id),
        },
        OutputFormat::Json => {
            println!("{}", json::format_json(&serde_json::json!({ "url": link }))?);
        }
    }
    Ok(())
}

/// Run the audit media command
pub async fn media(opts: &GlobalOptions, audit_id: &str, media_id: &str, output_dir: &Path) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let path = download_media(&ctx.client, audit_id, media_id, output_dir).await?;
    println!("{} Saved {}", "✓".green(), path.display());
    Ok(())
}

async fn download_media(
    client: &impl DiscoveryApi,
    audit_id: &str,
    media_id: &str,
    output_dir: &Path,
) -> Result<std::path::PathBuf> {
    let media = client.get_media(audit_id, media_id).await?;
    let extension = files::extension_for(media.content_type.as_deref());
    files::write_artifact(output_dir, media_id, extension, &media.bytes)
}
