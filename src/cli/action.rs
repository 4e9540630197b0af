//! Action commands

use serde_json::Value;
use tabled::Tabled;

use crate::cli::args::parse_instant;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::format_search_timestamp;
use crate::client::{ActionApi, DEFAULT_ACTION_PAGE_LENGTH};
use crate::error::Result;
use crate::output::{formatters, render_list};

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "ACTION ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "AUDIT")]
    audit_id: String,
    #[tabled(rename = "MODIFIED")]
    modified: String,
}

impl From<&Value> for ActionRow {
    fn from(action: &Value) -> Self {
        Self {
            id: formatters::field(action, "action_id"),
            title: formatters::truncate(&formatters::field(action, "title"), 50),
            audit_id: formatters::field(action, "audit_id"),
            modified: formatters::format_modified_at(
                action.get("modified_at").and_then(Value::as_str),
            ),
        }
    }
}

/// Run the action list command
pub async fn list(opts: &GlobalOptions, modified_after: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let from = format_search_timestamp(&parse_instant(modified_after)?);
    println!("{}", render(&ctx.client, &from, ctx.format).await?);
    Ok(())
}

async fn render(client: &impl ActionApi, modified_from: &str, format: OutputFormat) -> Result<String> {
    let actions = client
        .get_audit_actions(modified_from, 0, DEFAULT_ACTION_PAGE_LENGTH)
        .await?;
    log::debug!("{} actions modified since {}", actions.len(), modified_from);
    render_list(&actions, format, |a| ActionRow::from(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockSafetyCultureClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_render_actions() {
        let mock = MockSafetyCultureClient::new()
            .with_actions(vec![
                json!({"action_id": "action_1", "title": "Fix railing", "audit_id": "audit_1"}),
                json!({"action_id": "action_2", "title": "Replace extinguisher"}),
            ])
            .await;

        let out = render(&mock, "2024-01-01T00:00:00.000Z", OutputFormat::Table)
            .await
            .unwrap();
        assert!(out.contains("Fix railing"));
        assert!(out.contains("action_2"));

        let calls = mock.captured_calls().await;
        assert_eq!(calls[0].argument, "2024-01-01T00:00:00.000Z");
    }
}
