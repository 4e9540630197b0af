//! SafetyCulture API client

pub mod api;
pub mod auth;
pub mod ids;
pub mod logger;
pub mod models;
pub mod rate_limit;
pub mod safetyculture;

mod actions;
mod discovery;
mod export;
mod organisation;
mod response_sets;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub(crate) mod test_support;

pub use api::{
    ActionApi, DEFAULT_ACTION_PAGE_LENGTH, DiscoveryApi, ExportApi, OrganisationApi,
    ResponseSetApi,
};
pub use auth::request_api_token;
pub use logger::{CRITICAL_TARGET, CapturedRecord, ClientLogger, LOG_TARGET, MemoryLogger};
#[cfg(test)]
pub use mock::MockSafetyCultureClient;
pub use safetyculture::{
    API_BASE_URL, ClientBuilder, DEFAULT_TIMEOUT, ExportPolicy, HTTP_USER_AGENT,
    SafetyCultureClient,
};

/// The complete SafetyCulture API surface.
///
/// Implemented automatically for anything implementing every sub-trait, so
/// command code can take `&impl SafetyCultureApi` and be driven by either the
/// real client or a mock.
pub trait SafetyCultureApi:
    DiscoveryApi + ExportApi + ActionApi + ResponseSetApi + OrganisationApi
{
}

impl<T> SafetyCultureApi for T where
    T: DiscoveryApi + ExportApi + ActionApi + ResponseSetApi + OrganisationApi
{
}
