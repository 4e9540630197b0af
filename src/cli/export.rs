//! Export command: request, poll and download audit documents

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ExportArgs, GlobalOptions, OutputFormat};
use crate::client::ExportApi;
use crate::client::models::ExportRequest;
use crate::error::{Error, Result};
use crate::output::{files, render_list};

/// Result of exporting one audit
#[derive(Debug, Serialize)]
pub struct ExportOutcome {
    pub audit_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "AUDIT ID")]
    audit_id: String,
    #[tabled(rename = "RESULT")]
    result: String,
}

impl From<&ExportOutcome> for OutcomeRow {
    fn from(outcome: &ExportOutcome) -> Self {
        let result = match (&outcome.path, &outcome.error) {
            (_, Some(err)) => format!("{} {}", "✗".red(), err),
            (Some(path), None) => format!("{} {}", "✓".green(), path.display()),
            (None, None) => String::new(),
        };
        Self {
            audit_id: outcome.audit_id.clone(),
            result,
        }
    }
}

/// Run the export command.
///
/// Every audit is attempted; the command fails only after all have been
/// tried, if any of them failed.
pub async fn run(opts: &GlobalOptions, args: &ExportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let preferences = &ctx.config.export;

    let template = ExportRequest::new("")
        .format(args.doc_format.unwrap_or_else(|| preferences.format()))
        .timezone(
            args.timezone
                .clone()
                .unwrap_or_else(|| preferences.timezone().to_string()),
        );
    let template = match &args.profile {
        Some(profile) => template.export_profile(profile.as_str()),
        None => template,
    };
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| preferences.output_dir());

    let spinner = spinner(ctx.format);
    let outcomes = export_audits(&ctx.client, &args.audit_ids, &template, &output_dir, &spinner).await;
    spinner.finish_and_clear();

    println!("{}", render_list(&outcomes, ctx.format, |o| OutcomeRow::from(o))?);

    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    if failed > 0 {
        return Err(Error::Other(format!(
            "{} of {} exports failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}

fn spinner(format: OutputFormat) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Export each audit in turn, writing `<output_dir>/<audit_id>.<ext>`.
///
/// `template` carries the shared format, timezone and profile; its audit id
/// is replaced per audit.
pub async fn export_audits(
    client: &impl ExportApi,
    audit_ids: &[String],
    template: &ExportRequest,
    output_dir: &Path,
    progress: &ProgressBar,
) -> Vec<ExportOutcome> {
    let mut outcomes = Vec::with_capacity(audit_ids.len());

    for (index, audit_id) in audit_ids.iter().enumerate() {
        progress.set_message(format!(
            "[{}/{}] exporting {}",
            index + 1,
            audit_ids.len(),
            audit_id
        ));

        let request = ExportRequest {
            audit_id: audit_id.clone(),
            ..template.clone()
        };
        let outcome = match export_one(client, &request, output_dir).await {
            Ok(path) => {
                log::debug!("wrote {}", path.display());
                ExportOutcome {
                    audit_id: audit_id.clone(),
                    path: Some(path),
                    error: None,
                }
            }
            Err(err) => {
                log::warn!("export of {} failed: {}", audit_id, err);
                ExportOutcome {
                    audit_id: audit_id.clone(),
                    path: None,
                    error: Some(err.to_string()),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

async fn export_one(client: &impl ExportApi, request: &ExportRequest, output_dir: &Path) -> Result<PathBuf> {
    let bytes = client.get_export(request).await?;
    files::write_artifact(output_dir, &request.audit_id, request.format.as_str(), &bytes)
}
