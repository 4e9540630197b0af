//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod files;
pub mod formatters;
pub mod json;
pub mod table;

/// Render a list either as a table of display rows or as wrapped JSON
pub fn render_list<T, R, F>(items: &[T], format: OutputFormat, to_row: F) -> Result<String>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Json => Ok(json::format_json(items)?),
    }
}

/// Render a free-form API document.
///
/// Tables have no natural shape for nested documents, so both formats print
/// JSON; only the JSON format adds the metadata envelope.
pub fn render_document(document: &serde_json::Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Json => Ok(json::format_json(document)?),
    }
}
