//! Response set commands

use colored::Colorize;
use serde_json::{Value, json};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ResponseSetApi;
use crate::error::Result;
use crate::output::render_document;

/// Run the response-set list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sets = ctx.client.get_response_sets().await?;
    println!("{}", render_document(&sets, ctx.format)?);
    Ok(())
}

/// Run the response-set get command
pub async fn get(opts: &GlobalOptions, response_set_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let set = ctx.client.get_response_set(response_set_id).await?;
    println!("{}", render_document(&set, ctx.format)?);
    Ok(())
}

/// Run the response-set create command
pub async fn create(opts: &GlobalOptions, name: &str, labels: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    create_from_labels(&ctx.client, name, labels).await?;
    println!("{} Created response set {}", "✓".green(), name.bold());
    Ok(())
}

async fn create_from_labels(client: &impl ResponseSetApi, name: &str, labels: &[String]) -> Result<()> {
    let responses: Vec<Value> = labels.iter().map(|l| response(l)).collect();
    client.create_response_set(name, &responses).await
}

fn response(label: &str) -> Value {
    json!({ "label": label })
}

/// Run the response-set add-response command
pub async fn add_response(opts: &GlobalOptions, response_set_id: &str, label: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .create_response(response_set_id, &response(label))
        .await?;
    println!("{} Added {} to {}", "✓".green(), label.bold(), response_set_id);
    Ok(())
}

/// Run the response-set delete-response command
pub async fn delete_response(opts: &GlobalOptions, response_set_id: &str, response_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .delete_response(response_set_id, response_id)
        .await?;
    println!("{} Deleted {} from {}", "✓".green(), response_id, response_set_id);
    Ok(())
}
