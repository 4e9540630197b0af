//! Identifier validation
//!
//! Every identifier that ends up in a URL path is checked here before a
//! request is built. The patterns mirror the formats issued by the API.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// GUID body, shared by export job ids and export profile ids
pub const GUID_PATTERN: &str =
    "[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}$";

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-f0-9]{64}$").expect("TOKEN_REGEX should compile - this is a bug"));

static JOB_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{GUID_PATTERN}")).expect("JOB_ID_REGEX should compile - this is a bug")
});

static EXPORT_PROFILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^template_[a-fA-F0-9]{{32}}:{GUID_PATTERN}"))
        .expect("EXPORT_PROFILE_REGEX should compile - this is a bug")
});

static AUDIT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^audit_[a-fA-F0-9]{32}$").expect("AUDIT_ID_REGEX should compile - this is a bug")
});

/// Validate a bearer token (64 lowercase hex characters)
pub fn api_token(token: &str) -> Result<&str, ValidationError> {
    if TOKEN_REGEX.is_match(token) {
        Ok(token)
    } else {
        Err(ValidationError::InvalidToken)
    }
}

/// Validate an audit id (`audit_` followed by 32 hex characters)
pub fn audit_id(id: &str) -> Result<&str, ValidationError> {
    if AUDIT_ID_REGEX.is_match(id) {
        Ok(id)
    } else {
        Err(ValidationError::InvalidAuditId(id.to_string()))
    }
}

/// Validate an export job id (a GUID)
pub fn export_job_id(id: &str) -> Result<&str, ValidationError> {
    if JOB_ID_REGEX.is_match(id) {
        Ok(id)
    } else {
        Err(ValidationError::InvalidExportJobId(id.to_string()))
    }
}

/// Validate an export profile id (`template_<32 hex>:<GUID>`)
pub fn export_profile_id(id: &str) -> Result<&str, ValidationError> {
    if EXPORT_PROFILE_REGEX.is_match(id) {
        Ok(id)
    } else {
        Err(ValidationError::InvalidExportProfileId(id.to_string()))
    }
}

/// Validate an opaque id that is interpolated into a path.
///
/// Ids without a published format only need to stay inside their segment.
pub fn path_segment<'a>(kind: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let breaks_out = value
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace());
    if value.is_empty() || breaks_out {
        Err(ValidationError::InvalidPathSegment {
            kind,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}
