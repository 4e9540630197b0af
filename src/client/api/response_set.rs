//! Response set API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Response set CRUD operations
#[async_trait]
pub trait ResponseSetApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List all response sets accessible to the user
    async fn get_response_sets(&self) -> Result<Value>;

    /// Fetch one response set
    async fn get_response_set(&self, response_set_id: &str) -> Result<Value>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a response set with the given responses
    async fn create_response_set(&self, name: &str, responses: &[Value]) -> Result<()>;

    /// Append a response to an existing response set
    async fn create_response(&self, response_set_id: &str, response: &Value) -> Result<()>;

    /// Remove one response from a response set
    async fn delete_response(&self, response_set_id: &str, response_id: &str) -> Result<()>;
}
