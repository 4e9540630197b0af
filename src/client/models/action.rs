//! Action search models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Action statuses included in searches (to do, in progress, done, can't do)
pub const ACTION_STATUSES: [u8; 4] = [0, 10, 50, 60];

/// Body of an `actions/search` request
#[derive(Debug, Clone, Serialize)]
pub struct ActionSearchRequest {
    pub modified_at: ModifiedRange,
    pub offset: usize,
    pub limit: usize,
    pub status: [u8; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct ModifiedRange {
    pub from: String,
}

impl ActionSearchRequest {
    pub fn new(modified_from: impl Into<String>, offset: usize, limit: usize) -> Self {
        Self {
            modified_at: ModifiedRange {
                from: modified_from.into(),
            },
            offset,
            limit,
            status: ACTION_STATUSES,
        }
    }
}

/// One page of action search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPage {
    pub count: usize,
    pub offset: usize,
    pub total: usize,
    pub actions: Vec<Value>,
}

impl ActionPage {
    /// Index just past the last action of this page, `None` on overflow
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_body_shape() {
        let body = serde_json::to_value(ActionSearchRequest::new("2024-01-01", 10, 100)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "modified_at": {"from": "2024-01-01"},
                "offset": 10,
                "limit": 100,
                "status": [0, 10, 50, 60]
            })
        );
    }

    #[test]
    fn test_page_requires_all_keys() {
        let missing_total = r#"{"count": 1, "offset": 0, "actions": []}"#;
        assert!(serde_json::from_str::<ActionPage>(missing_total).is_err());
    }

    #[test]
    fn test_page_end() {
        let page: ActionPage =
            serde_json::from_str(r#"{"count": 10, "offset": 20, "total": 45, "actions": []}"#)
                .unwrap();
        assert_eq!(page.end(), Some(30));

        let huge = ActionPage {
            count: 1,
            offset: usize::MAX,
            total: usize::MAX,
            actions: Vec::new(),
        };
        assert_eq!(huge.end(), None);
    }
}
