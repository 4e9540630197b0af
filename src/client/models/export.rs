//! Export job models

use serde::{Deserialize, Serialize};

/// Timezone applied to exports unless the caller picks one
pub const DEFAULT_EXPORT_TIMEZONE: &str = "Etc/UTC";

/// Document format of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    /// Query value and file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub audit_id: String,
    pub timezone: String,
    pub export_profile_id: Option<String>,
    pub format: ExportFormat,
}

impl ExportRequest {
    /// PDF export in UTC without an export profile
    pub fn new(audit_id: impl Into<String>) -> Self {
        Self {
            audit_id: audit_id.into(),
            timezone: DEFAULT_EXPORT_TIMEZONE.to_string(),
            export_profile_id: None,
            format: ExportFormat::default(),
        }
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn export_profile(mut self, profile_id: impl Into<String>) -> Self {
        self.export_profile_id = Some(profile_id.into());
        self
    }

    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Export job created by an export request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportJob {
    /// Export job id (a GUID)
    pub id: String,
}

/// Job status as reported by the poll endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStatus {
    /// `IN PROGRESS`, `SUCCESS`, or a failure status
    pub status: Option<String>,

    /// Download location, present once the job succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ExportStatus {
    pub const IN_PROGRESS: &'static str = "IN PROGRESS";
    pub const SUCCESS: &'static str = "SUCCESS";
}

/// Terminal result of polling one export job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Job finished; the artifact can be downloaded from this href
    Ready(String),
    /// Job reported a status other than in-progress or success
    Failed(String),
}
