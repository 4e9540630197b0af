//! Action search with paging

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::Value;

use super::api::ActionApi;
use super::models::{ActionPage, ActionSearchRequest};
use super::safetyculture::SafetyCultureClient;
use crate::error::Result;

#[async_trait]
impl ActionApi for SafetyCultureClient {
    async fn get_audit_actions(
        &self,
        modified_from: &str,
        offset: usize,
        page_length: usize,
    ) -> Result<Vec<Value>> {
        let url = self.url("actions/search");
        let mut actions = Vec::new();
        let mut offset = offset;

        loop {
            let body =
                serde_json::to_string(&ActionSearchRequest::new(modified_from, offset, page_length))?;
            let context = format!("on POST for actions from offset {}", offset);
            let response = self.post(&url, Some(body), &context).await?;
            let page: ActionPage = self.json(response, &context).await?;

            let (count, page_offset, total) = (page.count, page.offset, page.total);
            let Some(end) = page.end() else {
                return Err(self.unexpected(format!(
                    "action page count {} + offset {} overflows",
                    count, page_offset
                )));
            };
            actions.extend(page.actions);

            match end.cmp(&total) {
                Ordering::Equal => return Ok(actions),
                Ordering::Less if count > 0 => {
                    self.logger().info(format_args!(
                        "Paging Actions. Offset: {}. Total: {}",
                        end, total
                    ));
                    offset = end;
                }
                _ => {
                    return Err(self.unexpected(format!(
                        "action page count {} + offset {} does not advance towards total {}",
                        count, page_offset, total
                    )));
                }
            }
        }
    }
}
