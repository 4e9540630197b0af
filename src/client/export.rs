//! Export profiles and the export job lifecycle
//!
//! ```text
//! request_export ──► poll_export ──► SUCCESS ──► download_export
//!        ▲               │
//!        │               ├─ IN PROGRESS: sleep, poll again (bounded)
//!        └── failed ◄────┘  other status: new request (bounded)
//! ```

use async_trait::async_trait;
use serde_json::Value;
use url::form_urlencoded;

use super::api::ExportApi;
use super::ids;
use super::models::{ExportJob, ExportRequest, ExportStatus, PollOutcome};
use super::safetyculture::SafetyCultureClient;
use crate::error::{ApiError, ExportError, Result};

#[async_trait]
impl ExportApi for SafetyCultureClient {
    async fn get_export_profile_ids(&self, template_id: Option<&str>) -> Result<Value> {
        let mut url = self.url("export_profiles/search");
        if let Some(template_id) = template_id {
            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .append_pair("template", template_id)
                    .finish(),
            );
        }
        self.get_json(&url, &format!("on export profile search using {}", url))
            .await
    }

    async fn get_export_profile(&self, export_profile_id: &str) -> Result<Value> {
        let profile_id = self.validated(ids::export_profile_id(export_profile_id))?;
        let url = self.url(&format!("export_profiles/{}", profile_id));
        self.get_json(
            &url,
            &format!("on export profile retrieval of {}", profile_id),
        )
        .await
    }

    async fn request_export(&self, request: &ExportRequest) -> Result<ExportJob> {
        let audit_id = self.validated(ids::audit_id(&request.audit_id))?;
        let url = {
            let mut query = form_urlencoded::Serializer::new(String::new());
            query
                .append_pair("format", request.format.as_str())
                .append_pair("timezone", &request.timezone);

            if let Some(profile_id) = request.export_profile_id.as_deref() {
                match ids::export_profile_id(profile_id) {
                    Ok(profile_id) => {
                        query.append_pair("export_profile", profile_id);
                    }
                    Err(err) => self.logger().critical(format_args!("{}", err)),
                }
            }
            self.url(&format!("audits/{}/export?{}", audit_id, query.finish()))
        };

        let context = format!("on request to {}", url);
        let response = self.post(&url, None, &context).await?;
        self.json(response, &context).await
    }

    async fn poll_export(&self, audit_id: &str, export_job_id: &str) -> Result<PollOutcome> {
        let audit_id = self.validated(ids::audit_id(audit_id))?;
        let job_id = self.validated(ids::export_job_id(export_job_id))?;
        let url = self.url(&format!("audits/{}/exports/{}", audit_id, job_id));
        let context = format!("on poll of export {} for {}", job_id, audit_id);

        let policy = self.export_policy();
        let max_polls = policy.max_polls.max(1);

        for poll in 1..=max_polls {
            let job: ExportStatus = self.get_json(&url, &context).await?;

            match job.status.as_deref() {
                Some(ExportStatus::IN_PROGRESS) => {
                    self.logger()
                        .info(format_args!("{} : {}", ExportStatus::IN_PROGRESS, audit_id));
                    if poll < max_polls {
                        tokio::time::sleep(policy.poll_interval).await;
                    }
                }
                Some(ExportStatus::SUCCESS) => {
                    self.logger()
                        .info(format_args!("{} : {}", ExportStatus::SUCCESS, audit_id));
                    return job.href.map(PollOutcome::Ready).ok_or_else(|| {
                        self.unexpected(format!("export {} succeeded without an href", job_id))
                    });
                }
                Some(other) => {
                    self.logger().info(format_args!("{} : {}", other, audit_id));
                    return Ok(PollOutcome::Failed(other.to_string()));
                }
                None => {
                    return Err(self.unexpected(format!("{:?}", job)));
                }
            }
        }

        self.logger().error(format_args!(
            "export {} for {} still in progress after {} polls",
            job_id, audit_id, max_polls
        ));
        Err(ExportError::PollTimeout {
            audit_id: audit_id.to_string(),
            job_id: job_id.to_string(),
            polls: max_polls,
        }
        .into())
    }

    async fn export_href(&self, request: &ExportRequest) -> Result<String> {
        let max_attempts = self.export_policy().max_attempts.max(1);

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                self.logger().info(format_args!(
                    "attempt # {} exporting report for: {}",
                    attempt, request.audit_id
                ));
            }

            let job = self.request_export(request).await?;
            match self.poll_export(&request.audit_id, &job.id).await? {
                PollOutcome::Ready(href) => return Ok(href),
                PollOutcome::Failed(status) => {
                    self.logger().info(format_args!(
                        "export job {} for {} ended with status {}",
                        job.id, request.audit_id, status
                    ));
                }
            }
        }

        self.logger().error(format_args!(
            "export for {} failed {} times - skipping",
            request.audit_id, max_attempts
        ));
        Err(ExportError::AttemptsExhausted {
            audit_id: request.audit_id.clone(),
            attempts: max_attempts,
        }
        .into())
    }

    async fn download_export(&self, href: &str) -> Result<Vec<u8>> {
        let context = format!("on GET for href: {}", href);
        let response = self.get(href, &context).await?;
        let response = self.ensure_ok(response, &context).await?;
        let bytes = response.bytes().await.map_err(|e| {
            self.logger().critical(format_args!(
                "Exception occurred while attempting download_export({}): {}",
                href, e
            ));
            ApiError::from(e)
        })?;
        Ok(bytes.to_vec())
    }
}
