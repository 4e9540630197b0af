//! Username/password exchange for an API token
//!
//! Used by `sc init`; everything else authenticates with the bearer token
//! this returns.

use reqwest::StatusCode;
use reqwest::header::USER_AGENT;

use super::logger::ClientLogger;
use super::models::TokenResponse;
use super::safetyculture::{DEFAULT_TIMEOUT, HTTP_USER_AGENT};
use crate::error::{ApiError, Result};

/// Request an API token for a SafetyCulture user.
///
/// POSTs a password grant form to `{base_url}/auth` and returns the
/// `access_token` of a `200` reply.
pub async fn request_api_token(
    base_url: &str,
    username: &str,
    password: &str,
    logger: &ClientLogger,
) -> Result<String> {
    let url = format!("{}/auth", base_url.trim_end_matches('/'));
    let http = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let form = [
        ("username", username),
        ("password", password),
        ("grant_type", "password"),
    ];
    let response = http
        .post(&url)
        .header(USER_AGENT, HTTP_USER_AGENT)
        .form(&form)
        .send()
        .await
        .map_err(|e| {
            logger.critical(format_args!(
                "Exception occurred while requesting an API token: {}",
                e
            ));
            ApiError::from(e)
        })?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let token: TokenResponse = response.json().await.map_err(|e| {
                logger.critical(format_args!("Unexpected response from API on token request: {}", e));
                ApiError::InvalidResponse(format!("token response: {}", e))
            })?;
            logger.info(format_args!("API token generated for {}", username));
            Ok(token.access_token)
        }
        StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => {
            logger.error(format_args!(
                "{} status received on token request for {}: bad username or password",
                status.as_u16(),
                username
            ));
            Err(ApiError::Unauthorized.into())
        }
        status => {
            logger.error(format_args!(
                "{} status received on token request for {}",
                status.as_u16(),
                username
            ));
            Err(ApiError::Status {
                status: status.as_u16(),
                context: "on POST for API token".to_string(),
            }
            .into())
        }
    }
}
