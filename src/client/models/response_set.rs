//! Response set models

use serde::Serialize;
use serde_json::Value;

/// Body of a response set creation request
#[derive(Debug, Clone, Serialize)]
pub struct NewResponseSet<'a> {
    pub name: &'a str,
    pub responses: &'a [Value],
}
