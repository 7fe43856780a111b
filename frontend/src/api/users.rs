use reqwest::Method;
use serde_json::json;

use super::{
    client::{ApiClient, AuthPolicy},
    error::ApiError,
    types::{CreateUserRequest, Role, UserAccount},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json("/users", &[]).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserAccount, ApiError> {
        self.send_json(Method::POST, "/users", request, AuthPolicy::Protected)
            .await
    }

    pub async fn change_user_role(&self, user_id: i64, role: Role) -> Result<UserAccount, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/users/{}/role", user_id),
            &json!({ "role": role }),
            AuthPolicy::Protected,
        )
        .await
    }

    pub async fn set_user_enabled(
        &self,
        user_id: i64,
        enabled: bool,
    ) -> Result<UserAccount, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/users/{}/status", user_id),
            &json!({ "enabled": enabled }),
            AuthPolicy::Protected,
        )
        .await
    }
}
