//! Discovery API trait for templates and audits

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::{
    AuditQuery, AuditSearchResponse, MediaItem, TemplateQuery, TemplateSearchResponse,
};
use crate::error::Result;

/// Template and audit discovery and retrieval
#[async_trait]
pub trait DiscoveryApi: Send + Sync {
    /// Search templates, optionally restricted to a modification window
    async fn discover_templates(&self, query: &TemplateQuery) -> Result<TemplateSearchResponse>;

    /// Search audits. The default query returns every completed audit.
    async fn discover_audits(&self, query: &AuditQuery) -> Result<AuditSearchResponse>;

    /// Fetch the full JSON document of one audit
    async fn get_audit(&self, audit_id: &str) -> Result<Value>;

    /// Generate a shareable web report link for an audit.
    ///
    /// Returns `None` when the server answers without a `url`.
    async fn get_web_report(&self, audit_id: &str) -> Result<Option<String>>;

    /// Download a media item (photo, signature, ...) attached to an audit
    async fn get_media(&self, audit_id: &str, media_id: &str) -> Result<MediaItem>;
}
