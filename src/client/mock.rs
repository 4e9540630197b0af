//! Mock SafetyCulture API client for testing
//!
//! Implements every API trait from in-memory fixtures so command handlers
//! can be exercised without a server.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::api::{ActionApi, DiscoveryApi, ExportApi, OrganisationApi, ResponseSetApi};
use super::models::{
    AuditQuery, AuditSearchResponse, AuditSummary, ExportJob, ExportRequest, MediaItem,
    PollOutcome, TemplateQuery, TemplateSearchResponse, TemplateSummary,
};
use crate::error::{ApiError, ExportError, Result};

/// Mock API client for testing.
///
/// ```ignore
/// let mock = MockSafetyCultureClient::new()
///     .with_audits(vec![summary("audit_1")])
///     .await
///     .with_failing_export("audit_2")
///     .await;
/// ```
#[derive(Default)]
pub struct MockSafetyCultureClient {
    templates: Arc<Mutex<Vec<TemplateSummary>>>,
    audits: Arc<Mutex<Vec<AuditSummary>>>,
    actions: Arc<Mutex<Vec<Value>>>,
    groups: Arc<Mutex<Value>>,
    organisation: Arc<Mutex<Option<String>>>,
    /// Audit ids whose export runs out of attempts
    failing_exports: Arc<Mutex<Vec<String>>>,
    /// Error returned by the next call, consumed on use
    error: Arc<Mutex<Option<ApiError>>>,
    captured: Arc<Mutex<Vec<CapturedCall>>>,
}

/// A call recorded for test assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    /// Trait method name
    pub method: &'static str,
    /// Main argument (id, name or query) in display form
    pub argument: String,
}

impl MockSafetyCultureClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_templates(self, templates: Vec<TemplateSummary>) -> Self {
        *self.templates.lock().await = templates;
        self
    }

    pub async fn with_audits(self, audits: Vec<AuditSummary>) -> Self {
        *self.audits.lock().await = audits;
        self
    }

    pub async fn with_actions(self, actions: Vec<Value>) -> Self {
        *self.actions.lock().await = actions;
        self
    }

    pub async fn with_groups(self, groups: Value) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    pub async fn with_organisation(self, org_id: &str) -> Self {
        *self.organisation.lock().await = Some(org_id.to_string());
        self
    }

    pub async fn with_failing_export(self, audit_id: &str) -> Self {
        self.failing_exports.lock().await.push(audit_id.to_string());
        self
    }

    /// Make the next API call fail with `error`
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn captured_calls(&self) -> Vec<CapturedCall> {
        self.captured.lock().await.clone()
    }

    /// Number of recorded calls to `method`
    pub async fn call_count(&self, method: &str) -> usize {
        self.captured
            .lock()
            .await
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Record the call, then surface the pending error if any
    async fn record(&self, method: &'static str, argument: impl Into<String>) -> Result<()> {
        self.captured.lock().await.push(CapturedCall {
            method,
            argument: argument.into(),
        });
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Bytes produced for a successful export
    pub fn export_bytes(request: &ExportRequest) -> Vec<u8> {
        format!("{}:{}:{}", request.audit_id, request.format, request.timezone).into_bytes()
    }
}

// ============================================================================
// DiscoveryApi Implementation
// ============================================================================

#[async_trait]
impl DiscoveryApi for MockSafetyCultureClient {
    async fn discover_templates(&self, query: &TemplateQuery) -> Result<TemplateSearchResponse> {
        self.record("discover_templates", query.to_query_string())
            .await?;
        let templates = self.templates.lock().await.clone();
        Ok(TemplateSearchResponse {
            count: templates.len(),
            total: templates.len(),
            templates,
        })
    }

    async fn discover_audits(&self, query: &AuditQuery) -> Result<AuditSearchResponse> {
        self.record("discover_audits", query.to_query_string()).await?;
        let audits = self.audits.lock().await.clone();
        Ok(AuditSearchResponse {
            count: audits.len(),
            total: audits.len(),
            audits,
        })
    }

    async fn get_audit(&self, audit_id: &str) -> Result<Value> {
        self.record("get_audit", audit_id).await?;
        Ok(json!({"audit_id": audit_id, "template_id": "template_mock"}))
    }

    async fn get_web_report(&self, audit_id: &str) -> Result<Option<String>> {
        self.record("get_web_report", audit_id).await?;
        Ok(Some(format!("https://app.safetyculture.com/report/{}", audit_id)))
    }

    async fn get_media(&self, audit_id: &str, media_id: &str) -> Result<MediaItem> {
        self.record("get_media", format!("{}/{}", audit_id, media_id))
            .await?;
        Ok(MediaItem {
            content_type: Some("image/jpeg".to_string()),
            bytes: media_id.as_bytes().to_vec(),
        })
    }
}

// ============================================================================
// ExportApi Implementation
// ============================================================================

#[async_trait]
impl ExportApi for MockSafetyCultureClient {
    async fn get_export_profile_ids(&self, template_id: Option<&str>) -> Result<Value> {
        self.record("get_export_profile_ids", template_id.unwrap_or_default())
            .await?;
        Ok(json!({"export_profiles": []}))
    }

    async fn get_export_profile(&self, export_profile_id: &str) -> Result<Value> {
        self.record("get_export_profile", export_profile_id).await?;
        Ok(json!({"id": export_profile_id}))
    }

    async fn request_export(&self, request: &ExportRequest) -> Result<ExportJob> {
        self.record("request_export", request.audit_id.clone())
            .await?;
        Ok(ExportJob {
            id: format!("job-{}", request.audit_id),
        })
    }

    async fn poll_export(&self, audit_id: &str, export_job_id: &str) -> Result<PollOutcome> {
        self.record("poll_export", export_job_id).await?;
        if self.failing_exports.lock().await.iter().any(|a| a == audit_id) {
            Ok(PollOutcome::Failed("FAILED".to_string()))
        } else {
            Ok(PollOutcome::Ready(format!("mock://{}", audit_id)))
        }
    }

    async fn export_href(&self, request: &ExportRequest) -> Result<String> {
        self.record("export_href", request.audit_id.clone()).await?;
        if self
            .failing_exports
            .lock()
            .await
            .iter()
            .any(|a| *a == request.audit_id)
        {
            return Err(ExportError::AttemptsExhausted {
                audit_id: request.audit_id.clone(),
                attempts: 2,
            }
            .into());
        }
        Ok(format!(
            "mock://{}/{}/{}",
            request.audit_id, request.format, request.timezone
        ))
    }

    async fn download_export(&self, href: &str) -> Result<Vec<u8>> {
        self.record("download_export", href).await?;
        let parts: Vec<&str> = href.trim_start_matches("mock://").splitn(3, '/').collect();
        Ok(parts.join(":").into_bytes())
    }
}

// ============================================================================
// ActionApi Implementation
// ============================================================================

#[async_trait]
impl ActionApi for MockSafetyCultureClient {
    async fn get_audit_actions(
        &self,
        modified_from: &str,
        offset: usize,
        _page_length: usize,
    ) -> Result<Vec<Value>> {
        self.record("get_audit_actions", modified_from).await?;
        Ok(self
            .actions
            .lock()
            .await
            .iter()
            .skip(offset)
            .cloned()
            .collect())
    }
}

// ============================================================================
// ResponseSetApi Implementation
// ============================================================================

#[async_trait]
impl ResponseSetApi for MockSafetyCultureClient {
    async fn get_response_sets(&self) -> Result<Value> {
        self.record("get_response_sets", "").await?;
        Ok(json!([]))
    }

    async fn get_response_set(&self, response_set_id: &str) -> Result<Value> {
        self.record("get_response_set", response_set_id).await?;
        Ok(json!({"responseset_id": response_set_id, "responses": []}))
    }

    async fn create_response_set(&self, name: &str, responses: &[Value]) -> Result<()> {
        self.record(
            "create_response_set",
            format!("{}:{}", name, responses.len()),
        )
        .await
    }

    async fn create_response(&self, response_set_id: &str, _response: &Value) -> Result<()> {
        self.record("create_response", response_set_id).await
    }

    async fn delete_response(&self, response_set_id: &str, response_id: &str) -> Result<()> {
        self.record(
            "delete_response",
            format!("{}/{}", response_set_id, response_id),
        )
        .await
    }
}

// ============================================================================
// OrganisationApi Implementation
// ============================================================================

#[async_trait]
impl OrganisationApi for MockSafetyCultureClient {
    async fn get_my_org(&self) -> Result<String> {
        self.record("get_my_org", "").await?;
        self.organisation.lock().await.clone().ok_or_else(|| {
            ApiError::InvalidResponse("no organisation among user connections".to_string()).into()
        })
    }

    async fn get_all_groups_in_org(&self) -> Result<Value> {
        self.record("get_all_groups_in_org", "").await?;
        Ok(self.groups.lock().await.clone())
    }

    async fn get_users_of_group(&self, group_id: &str) -> Result<Value> {
        self.record("get_users_of_group", group_id).await?;
        Ok(json!({"users": []}))
    }

    async fn add_user_to_org(&self, user_data: &Value) -> Result<Value> {
        self.record("add_user_to_org", user_data.to_string()).await?;
        Ok(user_data.clone())
    }

    async fn add_user_to_group(&self, group_id: &str, user_data: &Value) -> Result<Value> {
        self.record("add_user_to_group", group_id).await?;
        Ok(user_data.clone())
    }

    async fn update_user(&self, user_id: &str, user_data: &Value) -> Result<Value> {
        self.record("update_user", user_id).await?;
        Ok(user_data.clone())
    }

    async fn remove_user(&self, role_id: &str, user_id: &str) -> Result<Value> {
        self.record("remove_user", format!("{}/{}", role_id, user_id))
            .await?;
        Ok(json!({"ok": true}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SafetyCultureApi;
    use crate::error::Error;

    async fn exercise(api: &impl SafetyCultureApi, audit_id: &str) -> Result<Vec<u8>> {
        api.get_export(&ExportRequest::new(audit_id)).await
    }

    #[tokio::test]
    async fn test_mock_export_success_and_failure() {
        let mock = MockSafetyCultureClient::new()
            .with_failing_export("audit_bad")
            .await;

        let bytes = exercise(&mock, "audit_good").await.unwrap();
        assert_eq!(bytes, MockSafetyCultureClient::export_bytes(&ExportRequest::new("audit_good")));

        let result = exercise(&mock, "audit_bad").await;
        assert!(matches!(
            result,
            Err(Error::Export(ExportError::AttemptsExhausted { attempts: 2, .. }))
        ));
        assert_eq!(mock.call_count("download_export").await, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockSafetyCultureClient::new()
            .with_organisation("role_acme")
            .await
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.get_my_org().await.is_err());
        assert_eq!(mock.get_my_org().await.unwrap(), "role_acme");
        assert_eq!(mock.call_count("get_my_org").await, 2);
    }
}
