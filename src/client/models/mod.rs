//! SafetyCulture API data models
//!
//! Typed views of the response shapes the client relies on. Resources whose
//! shape is open-ended (full audits, response sets, users) stay as
//! `serde_json::Value` so no field is lost in transit.

mod action;
mod audit;
mod auth;
mod export;
mod group;
mod response_set;
mod template;

pub use action::{ACTION_STATUSES, ActionPage, ActionSearchRequest};
pub use audit::{
    AuditQuery, AuditSearchResponse, AuditSummary, CompletedFilter, DEFAULT_MODIFIED_AFTER,
    MediaItem, WebReportLink, format_search_timestamp,
};
pub use auth::TokenResponse;
pub use export::{
    DEFAULT_EXPORT_TIMEZONE, ExportFormat, ExportJob, ExportRequest, ExportStatus, PollOutcome,
};
pub use group::{Connection, ConnectionsResponse};
pub use response_set::NewResponseSet;
pub use template::{TemplateQuery, TemplateSearchResponse, TemplateSummary};
