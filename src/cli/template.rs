//! Template commands

use tabled::Tabled;

use crate::cli::args::parse_instant;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::{TemplateQuery, TemplateSummary};
use crate::client::DiscoveryApi;
use crate::error::Result;
use crate::output::{formatters, render_list};

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "TEMPLATE ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
}

impl From<&TemplateSummary> for TemplateRow {
    fn from(template: &TemplateSummary) -> Self {
        Self {
            id: template.template_id.clone(),
            name: formatters::truncate(&template.name, 60),
        }
    }
}

/// Run the template list command
pub async fn list(
    opts: &GlobalOptions,
    modified_after: Option<&str>,
    modified_before: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let query = TemplateQuery {
        modified_after: modified_after.map(parse_instant).transpose()?,
        modified_before: modified_before.map(parse_instant).transpose()?,
    };
    println!("{}", render(&ctx.client, &query, ctx.format).await?);
    Ok(())
}

async fn render(client: &impl DiscoveryApi, query: &TemplateQuery, format: OutputFormat) -> Result<String> {
    let response = client.discover_templates(query).await?;
    log::debug!("{} of {} templates returned", response.count, response.total);
    render_list(&response.templates, format, |t| TemplateRow::from(t))
}
