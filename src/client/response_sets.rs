//! Response set CRUD

use async_trait::async_trait;
use serde_json::Value;

use super::api::ResponseSetApi;
use super::ids;
use super::models::NewResponseSet;
use super::safetyculture::SafetyCultureClient;
use crate::error::Result;

const RESPONSE_SETS_PATH: &str = "response_sets";

#[async_trait]
impl ResponseSetApi for SafetyCultureClient {
    async fn get_response_sets(&self) -> Result<Value> {
        let url = self.url(RESPONSE_SETS_PATH);
        self.get_json(&url, "on GET for response_sets").await
    }

    async fn get_response_set(&self, response_set_id: &str) -> Result<Value> {
        let id = self.validated(ids::path_segment("responseset_id", response_set_id))?;
        let url = self.url(&format!("{}/{}", RESPONSE_SETS_PATH, id));
        self.get_json(&url, &format!("on GET for {}", id)).await
    }

    async fn create_response_set(&self, name: &str, responses: &[Value]) -> Result<()> {
        let body = serde_json::to_string(&NewResponseSet { name, responses })?;
        let url = self.url(RESPONSE_SETS_PATH);
        let context = format!("on POST for new response_set: {}", name);
        let response = self.post(&url, Some(body), &context).await?;
        self.ensure_ok(response, &context).await?;
        Ok(())
    }

    async fn create_response(&self, response_set_id: &str, response: &Value) -> Result<()> {
        let id = self.validated(ids::path_segment("responseset_id", response_set_id))?;
        let url = self.url(&format!("{}/{}/responses", RESPONSE_SETS_PATH, id));
        let context = format!("on POST for new response to: {}", id);
        let reply = self
            .post(&url, Some(serde_json::to_string(response)?), &context)
            .await?;
        self.ensure_ok(reply, &context).await?;
        Ok(())
    }

    async fn delete_response(&self, response_set_id: &str, response_id: &str) -> Result<()> {
        let set_id = self.validated(ids::path_segment("responseset_id", response_set_id))?;
        let response_id = self.validated(ids::path_segment("response_id", response_id))?;
        let url = self.url(&format!(
            "{}/{}/responses/{}",
            RESPONSE_SETS_PATH, set_id, response_id
        ));
        let context = format!("on DELETE for response_set: {}", set_id);
        let reply = self.delete(&url, &context).await?;
        self.ensure_ok(reply, &context).await?;
        Ok(())
    }
}
