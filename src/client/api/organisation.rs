//! Organisation API trait
//!
//! Covers the organisation of the requesting user, its groups, and user
//! membership management.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Organisation, group and user management
#[async_trait]
pub trait OrganisationApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Id of the organisation the requesting user belongs to
    async fn get_my_org(&self) -> Result<String>;

    /// All groups in the requesting user's organisation
    async fn get_all_groups_in_org(&self) -> Result<Value>;

    /// Users of an organisation or group
    async fn get_users_of_group(&self, group_id: &str) -> Result<Value>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Add a user to the organisation. Returns the created user record.
    async fn add_user_to_org(&self, user_data: &Value) -> Result<Value>;

    /// Add an existing user to a group
    async fn add_user_to_group(&self, group_id: &str, user_data: &Value) -> Result<Value>;

    /// Update user details such as active/inactive status
    async fn update_user(&self, user_id: &str, user_data: &Value) -> Result<Value>;

    /// Remove a user from a group or organisation
    async fn remove_user(&self, role_id: &str, user_id: &str) -> Result<Value>;
}
