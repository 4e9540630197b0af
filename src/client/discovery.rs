//! Template and audit discovery

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::api::DiscoveryApi;
use super::ids;
use super::models::{
    AuditQuery, AuditSearchResponse, MediaItem, TemplateQuery, TemplateSearchResponse,
    WebReportLink,
};
use super::safetyculture::SafetyCultureClient;
use crate::error::{ApiError, Result};

#[async_trait]
impl DiscoveryApi for SafetyCultureClient {
    async fn discover_templates(&self, query: &TemplateQuery) -> Result<TemplateSearchResponse> {
        let url = self.url(&format!("templates/search?{}", query.to_query_string()));
        self.get_json(&url, &format!("on template discovery using {}", url))
            .await
    }

    async fn discover_audits(&self, query: &AuditQuery) -> Result<AuditSearchResponse> {
        let url = self.url(&format!("audits/search?{}", query.to_query_string()));

        self.logger().info(format_args!(
            "Initiating audit_discovery with the parameters: template_id = {:?}, modified_after = {}, completed = {:?}",
            query.template_ids,
            query.modified_after_param(),
            query.completed.map(|c| c.as_query_value()),
        ));

        let result: AuditSearchResponse = self
            .get_json(&url, &format!("on audit_discovery using {}", url))
            .await?;
        self.logger()
            .info(format_args!("{} audits discovered", result.total));
        Ok(result)
    }

    async fn get_audit(&self, audit_id: &str) -> Result<Value> {
        let audit_id = self.validated(ids::audit_id(audit_id))?;
        let url = self.url(&format!("audits/{}", audit_id));
        self.get_json(&url, &format!("on GET for {}", audit_id)).await
    }

    async fn get_web_report(&self, audit_id: &str) -> Result<Option<String>> {
        let audit_id = self.validated(ids::audit_id(audit_id))?;
        let url = self.url(&format!("audits/{}/web_report_link", audit_id));
        let link: WebReportLink = self
            .get_json(&url, &format!("on GET web report for {}", audit_id))
            .await?;
        Ok(link.url)
    }

    async fn get_media(&self, audit_id: &str, media_id: &str) -> Result<MediaItem> {
        let audit_id = self.validated(ids::audit_id(audit_id))?;
        let media_id = self.validated(ids::path_segment("media_id", media_id))?;
        let url = self.url(&format!("audits/{}/media/{}", audit_id, media_id));
        let context = format!("on GET for media {} of {}", media_id, audit_id);

        let response = self.get(&url, &context).await?;
        let response = self.ensure_ok(response, &context).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(ApiError::from)?;

        Ok(MediaItem {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
