//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Two-column FIELD/VALUE table for a single record
pub fn format_pairs(pairs: &[(&str, String)]) -> String {
    let rows: Vec<PairRow> = pairs
        .iter()
        .map(|(field, value)| PairRow {
            field: field.to_string(),
            value: value.clone(),
        })
        .collect();
    format_table(&rows)
}

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct AuditRow {
        #[tabled(rename = "AUDIT ID")]
        id: String,
        #[tabled(rename = "MODIFIED")]
        modified: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<AuditRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_rows_and_style() {
        let rows = vec![
            AuditRow {
                id: "audit_1".to_string(),
                modified: "2024-01-01 10:00".to_string(),
            },
            AuditRow {
                id: "audit_2".to_string(),
                modified: "N/A".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("AUDIT ID"));
        assert!(result.contains("audit_2"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_pairs() {
        let result = format_pairs(&[("Organisation", "role_acme".to_string())]);
        assert!(result.contains("FIELD"));
        assert!(result.contains("Organisation"));
        assert!(result.contains("role_acme"));
    }
}
