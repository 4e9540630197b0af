//! Action API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Default number of actions requested per page
pub const DEFAULT_ACTION_PAGE_LENGTH: usize = 100;

/// Action search operations
#[async_trait]
pub trait ActionApi: Send + Sync {
    /// Collect every action modified since `modified_from`, starting at `offset`.
    ///
    /// Pages are fetched until `offset + count` reaches `total` and are
    /// returned in the order they were fetched.
    async fn get_audit_actions(
        &self,
        modified_from: &str,
        offset: usize,
        page_length: usize,
    ) -> Result<Vec<Value>>;
}
