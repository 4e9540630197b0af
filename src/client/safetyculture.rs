//! SafetyCulture API client implementation

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::ids;
use super::logger::ClientLogger;
use super::rate_limit::{DEFAULT_REQUESTS_PER_MINUTE, ReactiveRateLimiter, parse_retry_after};
use crate::error::{ApiError, Result, ValidationError};

/// SafetyCulture API base URL
pub const API_BASE_URL: &str = "https://api.safetyculture.io";

/// User agent sent with every request
pub const HTTP_USER_AGENT: &str = concat!("safetyculture-rs/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounds of the export poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPolicy {
    /// Wait between two polls of an in-progress job
    pub poll_interval: Duration,
    /// Polls of a single job before giving up with a timeout
    pub max_polls: u32,
    /// Export requests made for one audit before giving up
    pub max_attempts: u32,
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_polls: 720,
            max_attempts: 2,
        }
    }
}

/// SafetyCulture API client
///
/// Headers are attached per request; the client holds no per-call state and
/// can be shared between tasks.
pub struct SafetyCultureClient {
    http: HttpClient,
    base_url: String,
    logger: ClientLogger,
    rate_limiter: Arc<ReactiveRateLimiter>,
    export_policy: ExportPolicy,
}

/// Builder for [`SafetyCultureClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Duration,
    logger: ClientLogger,
    export_policy: ExportPolicy,
    requests_per_minute: u32,
}

impl ClientBuilder {
    /// Override the API base URL (self-hosted gateways, tests)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn logger(mut self, logger: ClientLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn export_policy(mut self, policy: ExportPolicy) -> Self {
        self.export_policy = policy;
        self
    }

    /// Pace applied once the API starts answering 429
    pub fn requests_per_minute(mut self, requests: u32) -> Self {
        self.requests_per_minute = requests;
        self
    }

    /// Validate the token and build the client
    pub fn build(self) -> Result<SafetyCultureClient> {
        let token = match ids::api_token(&self.api_token) {
            Ok(token) => token,
            Err(err) => {
                self.logger
                    .critical(format_args!("API token failed to match expected pattern"));
                return Err(err.into());
            }
        };

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ValidationError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(HTTP_USER_AGENT));
        headers.insert(AUTHORIZATION, authorization);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(SafetyCultureClient {
            http,
            base_url: self.base_url,
            logger: self.logger,
            rate_limiter: Arc::new(ReactiveRateLimiter::per_minute(self.requests_per_minute)),
            export_policy: self.export_policy,
        })
    }
}

impl SafetyCultureClient {
    /// Create a client for the public API with default settings
    pub fn new(api_token: &str) -> Result<Self> {
        Self::builder(api_token).build()
    }

    pub fn builder(api_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_token: api_token.into(),
            base_url: API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            logger: ClientLogger::global(),
            export_policy: ExportPolicy::default(),
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn export_policy(&self) -> &ExportPolicy {
        &self.export_policy
    }

    pub(crate) fn logger(&self) -> &ClientLogger {
        &self.logger
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Log a validation failure at critical level before returning it
    pub(crate) fn validated<'a>(
        &self,
        check: std::result::Result<&'a str, ValidationError>,
    ) -> Result<&'a str> {
        check.map_err(|err| {
            self.logger.critical(format_args!("{}", err));
            err.into()
        })
    }

    // ========================================================================
    // Request primitives
    // ========================================================================

    /// Authenticated GET
    pub async fn get(&self, url: &str, context: &str) -> Result<Response> {
        self.execute(self.http.get(url), context).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post(&self, url: &str, body: Option<String>, context: &str) -> Result<Response> {
        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }
        self.execute(request, context).await
    }

    /// Authenticated PUT with a JSON body
    pub async fn put(&self, url: &str, body: String, context: &str) -> Result<Response> {
        let request = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(request, context).await
    }

    /// Authenticated DELETE
    pub async fn delete(&self, url: &str, context: &str) -> Result<Response> {
        self.execute(self.http.delete(url), context).await
    }

    async fn execute(&self, request: RequestBuilder, context: &str) -> Result<Response> {
        self.rate_limiter.wait_if_active().await;

        let response = request.send().await.map_err(|e| {
            self.logger.critical(format_args!(
                "Exception occurred while attempting request {}: {}",
                context, e
            ));
            ApiError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            self.rate_limiter.activate();
        }
        self.log_http_status(status, context);

        Ok(response)
    }

    /// Write the status code and a context message to the log.
    ///
    /// `200` is logged at info level, everything else at error level.
    pub(crate) fn log_http_status(&self, status: StatusCode, context: &str) {
        let description = status.canonical_reason().unwrap_or("Unknown");
        if status == StatusCode::OK {
            self.logger.info(format_args!(
                "{} [{}] status received {}",
                status.as_u16(),
                description,
                context
            ));
        } else {
            self.logger.error(format_args!(
                "{} [{}] status received {}",
                status.as_u16(),
                description,
                context
            ));
        }
    }

    // ========================================================================
    // Response handling
    // ========================================================================

    /// Pass a `200` response through, turn anything else into an [`ApiError`]
    pub(crate) async fn ensure_ok(&self, response: Response, context: &str) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        Err(status_error(status, body, retry_after.as_deref(), context).into())
    }

    /// Decode a `200` response body as JSON
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        response: Response,
        context: &str,
    ) -> Result<T> {
        let response = self.ensure_ok(response, context).await?;
        let body = response.bytes().await.map_err(ApiError::from)?;

        serde_json::from_slice(&body).map_err(|e| {
            self.logger.critical(format_args!(
                "Unexpected response from API {}: {}",
                context, e
            ));
            ApiError::InvalidResponse(format!("Failed to parse response {}: {}", context, e))
                .into()
        })
    }

    /// GET and decode
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str, context: &str) -> Result<T> {
        let response = self.get(url, context).await?;
        self.json(response, context).await
    }

    /// Report an unexpected payload shape
    pub(crate) fn unexpected(&self, message: String) -> crate::error::Error {
        self.logger
            .critical(format_args!("Unexpected response from API: {}", message));
        ApiError::InvalidResponse(message).into()
    }
}

/// Map a non-200 status to an API error
fn status_error(
    status: StatusCode,
    body: String,
    retry_after: Option<&str>,
    context: &str,
) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            if body.is_empty() {
                ApiError::NotFound(context.to_string())
            } else {
                ApiError::NotFound(body)
            }
        }
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(parse_retry_after(retry_after)),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            if body.is_empty() {
                ApiError::BadRequest("Bad request".to_string())
            } else {
                ApiError::BadRequest(body)
            }
        }
        status if status.is_server_error() => {
            if body.is_empty() {
                ApiError::ServerError(status.to_string())
            } else {
                ApiError::ServerError(body)
            }
        }
        status => ApiError::Status {
            status: status.as_u16(),
            context: context.to_string(),
        },
    }
}
