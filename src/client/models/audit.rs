//! Audit discovery and retrieval models

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Lower bound used when no `modified_after` filter is given
pub const DEFAULT_MODIFIED_AFTER: &str = "2000-01-01T00:00:00.000Z";

/// Timestamp format accepted by the search endpoints
pub const SEARCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Audit discovery response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSearchResponse {
    /// Number of audits in this response
    #[serde(default)]
    pub count: usize,

    /// Total number of matching audits
    pub total: usize,

    /// Matching audits, oldest modification first
    #[serde(default)]
    pub audits: Vec<AuditSummary>,
}

/// Audit entry returned by discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSummary {
    pub audit_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

/// Filter on the audit completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedFilter {
    /// Only completed audits
    Completed,
    /// Only audits still in progress
    Incomplete,
    /// Completed and in-progress audits
    Both,
}

impl CompletedFilter {
    /// Query value sent to the API
    pub fn as_query_value(&self) -> &'static str {
        match self {
            CompletedFilter::Completed => "true",
            CompletedFilter::Incomplete => "false",
            CompletedFilter::Both => "both",
        }
    }

    /// Parse `true`, `false` or `both`. Anything else yields `None`, which
    /// applies no completion filter at all.
    pub fn parse_loose(value: &str) -> Option<Self> {
        match value {
            "true" => Some(CompletedFilter::Completed),
            "false" => Some(CompletedFilter::Incomplete),
            "both" => Some(CompletedFilter::Both),
            _ => None,
        }
    }
}

impl From<bool> for CompletedFilter {
    fn from(completed: bool) -> Self {
        if completed {
            CompletedFilter::Completed
        } else {
            CompletedFilter::Incomplete
        }
    }
}

/// Filter parameters for audit discovery
#[derive(Debug, Clone)]
pub struct AuditQuery {
    /// Restrict to audits of these templates
    pub template_ids: Vec<String>,
    /// Restrict to audits modified after this instant
    pub modified_after: Option<DateTime<Utc>>,
    /// Completion filter; `None` adds no filter
    pub completed: Option<CompletedFilter>,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            template_ids: Vec::new(),
            modified_after: None,
            completed: Some(CompletedFilter::Completed),
        }
    }
}

impl AuditQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        self.template_ids.push(template_id.into());
        self
    }

    pub fn modified_after(mut self, instant: DateTime<Utc>) -> Self {
        self.modified_after = Some(instant);
        self
    }

    pub fn completed(mut self, completed: Option<CompletedFilter>) -> Self {
        self.completed = completed;
        self
    }

    /// The effective lower bound, formatted for the API
    pub fn modified_after_param(&self) -> String {
        match self.modified_after {
            Some(instant) => format_search_timestamp(&instant),
            None => DEFAULT_MODIFIED_AFTER.to_string(),
        }
    }

    /// Percent-encoded query string appended to `audits/search`.
    ///
    /// Parameter order is fixed: fields, order, `modified_after`, one
    /// `template` per filter, then `completed`.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("field", "audit_id")
            .append_pair("field", "modified_at")
            .append_pair("order", "asc")
            .append_pair("modified_after", &self.modified_after_param());
        for template_id in &self.template_ids {
            query.append_pair("template", template_id);
        }
        if let Some(completed) = self.completed {
            query.append_pair("completed", completed.as_query_value());
        }
        query.finish()
    }
}

/// Format an instant the way the search endpoints expect
pub fn format_search_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(&Utc)
        .format(SEARCH_TIMESTAMP_FORMAT)
        .to_string()
}

/// Web report link response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebReportLink {
    pub url: Option<String>,
}

/// Binary media attached to an audit
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// MIME type reported by the server
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
