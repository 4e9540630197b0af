//! Export API trait
//!
//! An export is produced in three steps: request a job, poll it until the
//! server reports a terminal status, then download the artifact.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::{ExportJob, ExportRequest, PollOutcome};
use crate::error::Result;

/// Export profiles and the export job lifecycle
#[async_trait]
pub trait ExportApi: Send + Sync {
    /// List export profiles, optionally only those of one template
    async fn get_export_profile_ids(&self, template_id: Option<&str>) -> Result<Value>;

    /// Fetch one export profile. Invalid ids fail without a request.
    async fn get_export_profile(&self, export_profile_id: &str) -> Result<Value>;

    /// Start an export job.
    ///
    /// An export profile id that fails validation is logged and left out;
    /// the job is still requested.
    async fn request_export(&self, request: &ExportRequest) -> Result<ExportJob>;

    /// Poll one export job until it succeeds or reports a failure status.
    ///
    /// Sleeps between polls while the job is in progress, up to the client's
    /// poll budget.
    async fn poll_export(&self, audit_id: &str, export_job_id: &str) -> Result<PollOutcome>;

    /// Request and poll until a download href is available.
    ///
    /// A failed job triggers a fresh export request rather than another
    /// poll, up to the client's attempt budget.
    async fn export_href(&self, request: &ExportRequest) -> Result<String>;

    /// Download the exported document at `href`
    async fn download_export(&self, href: &str) -> Result<Vec<u8>>;

    /// Request, poll and download an export in one call
    async fn get_export(&self, request: &ExportRequest) -> Result<Vec<u8>> {
        let href = self.export_href(request).await?;
        self.download_export(&href).await
    }
}
