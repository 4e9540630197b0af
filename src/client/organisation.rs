//! Organisation, group and user management

use async_trait::async_trait;
use serde_json::Value;

use super::api::OrganisationApi;
use super::ids;
use super::models::ConnectionsResponse;
use super::safetyculture::SafetyCultureClient;
use crate::error::Result;

const CONNECTIONS_PATH: &str = "share/connections";
const GROUPS_PATH: &str = "groups";
const USERS_PATH: &str = "users";

#[async_trait]
impl OrganisationApi for SafetyCultureClient {
    async fn get_my_org(&self) -> Result<String> {
        let url = self.url(CONNECTIONS_PATH);
        let connections: ConnectionsResponse = self
            .get_json(
                &url,
                "on GET for organisations and groups of requesting user",
            )
            .await?;

        connections
            .organisation_id()
            .map(str::to_string)
            .ok_or_else(|| self.unexpected("no organisation among user connections".to_string()))
    }

    async fn get_all_groups_in_org(&self) -> Result<Value> {
        let url = self.url(GROUPS_PATH);
        self.get_json(&url, "on GET for all groups of organisation")
            .await
    }

    async fn get_users_of_group(&self, group_id: &str) -> Result<Value> {
        let group_id = self.validated(ids::path_segment("group_id", group_id))?;
        let url = self.url(&format!("{}/{}/users", GROUPS_PATH, group_id));
        self.get_json(&url, &format!("on GET for users of group: {}", group_id))
            .await
    }

    async fn add_user_to_org(&self, user_data: &Value) -> Result<Value> {
        let url = self.url(USERS_PATH);
        let context = "on POST for adding a user to organisation";
        let response = self
            .post(&url, Some(serde_json::to_string(user_data)?), context)
            .await?;
        self.json(response, context).await
    }

    async fn add_user_to_group(&self, group_id: &str, user_data: &Value) -> Result<Value> {
        let group_id = self.validated(ids::path_segment("group_id", group_id))?;
        let url = self.url(&format!("{}/{}/users", GROUPS_PATH, group_id));
        let context = "on POST for adding a user to group";
        let response = self
            .post(&url, Some(serde_json::to_string(user_data)?), context)
            .await?;
        self.json(response, context).await
    }

    async fn update_user(&self, user_id: &str, user_data: &Value) -> Result<Value> {
        let user_id = self.validated(ids::path_segment("user_id", user_id))?;
        let url = self.url(&format!("{}/{}", USERS_PATH, user_id));
        let context = "on PUT for updating a user";
        let response = self
            .put(&url, serde_json::to_string(user_data)?, context)
            .await?;
        self.json(response, context).await
    }

    async fn remove_user(&self, role_id: &str, user_id: &str) -> Result<Value> {
        let role_id = self.validated(ids::path_segment("role_id", role_id))?;
        let user_id = self.validated(ids::path_segment("user_id", user_id))?;
        let url = self.url(&format!("{}/{}/users/{}", GROUPS_PATH, role_id, user_id));
        let context = "on DELETE for user from group";
        let response = self.delete(&url, context).await?;
        self.json(response, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::client_for;
    use crate::error::{ApiError, Error};
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_my_org() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/share/connections")
            .with_status(200)
            .with_body(
                r#"{"groups": [
                    {"id": "role_site", "name": "Site", "type": "group"},
                    {"id": "role_acme", "name": "Acme", "type": "organisation"}
                ]}"#,
            )
            .create_async()
            .await;

        let (client, _) = client_for(&server);
        assert_eq!(client.get_my_org().await.unwrap(), "role_acme");
    }

    #[tokio::test]
    async fn test_get_my_org_without_organisation() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/share/connections")
            .with_status(200)
            .with_body(r#"{"groups": [{"id": "role_site", "type": "group"}]}"#)
            .create_async()
            .await;

        let (client, memory) = client_for(&server);
        let result = client.get_my_org().await;

        assert!(matches!(result, Err(Error::Api(ApiError::InvalidResponse(_)))));
        assert_eq!(memory.criticals().len(), 1);
    }

    #[tokio::test]
    async fn test_add_user_to_group() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/groups/role_site/users")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"user_id": "user_1"})))
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server);
        let result = client
            .add_user_to_group("role_site", &json!({"user_id": "user_1"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["ok"], true);
    }

    #[tokio::test]
    async fn test_update_user_uses_put() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/users/user_1")
            .match_body(Matcher::Json(json!({"status": "inactive"})))
            .with_status(200)
            .with_body(r#"{"user_id": "user_1", "status": "inactive"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server);
        let user = client
            .update_user("user_1", &json!({"status": "inactive"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(user["status"], "inactive");
    }

    #[tokio::test]
    async fn test_remove_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/groups/role_acme/users/user_1")
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server);
        let result = client.remove_user("role_acme", "user_1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_add_user_to_org_forbidden() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/users")
            .with_status(403)
            .create_async()
            .await;

        let (client, _) = client_for(&server);
        let result = client.add_user_to_org(&json!({"email": "a@b.c"})).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Forbidden))));
    }
}
