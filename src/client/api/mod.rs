//! API trait definitions split by responsibility
//!
//! This module organizes the SafetyCulture API surface into focused sub-traits:
//! - [`DiscoveryApi`] - Template and audit discovery and retrieval
//! - [`ExportApi`] - Export profiles and the export job lifecycle
//! - [`ActionApi`] - Action search with paging
//! - [`ResponseSetApi`] - Response set CRUD
//! - [`OrganisationApi`] - Organisation, group and user management
//!
//! The [`SafetyCultureApi`](super::SafetyCultureApi) super-trait combines them.

mod action;
mod discovery;
mod export;
mod organisation;
mod response_set;

pub use action::{ActionApi, DEFAULT_ACTION_PAGE_LENGTH};
pub use discovery::DiscoveryApi;
pub use export::ExportApi;
pub use organisation::OrganisationApi;
pub use response_set::ResponseSetApi;
