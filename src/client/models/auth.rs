//! Authentication models

use serde::Deserialize;

/// Response of the username/password token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
