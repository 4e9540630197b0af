//! Template discovery models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::audit::format_search_timestamp;

/// Template discovery response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSearchResponse {
    #[serde(default)]
    pub count: usize,

    #[serde(default)]
    pub total: usize,

    #[serde(default)]
    pub templates: Vec<TemplateSummary>,
}

/// Template entry returned by discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub template_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

/// Modification window for template discovery
#[derive(Debug, Clone, Default)]
pub struct TemplateQuery {
    pub modified_after: Option<DateTime<Utc>>,
    pub modified_before: Option<DateTime<Utc>>,
}

impl TemplateQuery {
    /// Percent-encoded query string appended to `templates/search`
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("field", "template_id")
            .append_pair("field", "name");
        if let Some(before) = self.modified_before {
            query.append_pair("modified_before", &format_search_timestamp(&before));
        }
        if let Some(after) = self.modified_after {
            query.append_pair("modified_after", &format_search_timestamp(&after));
        }
        query.finish()
    }
}
