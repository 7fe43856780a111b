use crate::api::{ApiClient, ApiError, CreateUserRequest, Role, UserAccount};

#[derive(Clone)]
pub struct UsersRepository {
    client: ApiClient,
}

impl UsersRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_all(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.client.list_users().await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<UserAccount, ApiError> {
        self.client.create_user(request).await
    }

    pub async fn change_role(&self, user_id: i64, role: Role) -> Result<UserAccount, ApiError> {
        self.client.change_user_role(user_id, role).await
    }

    pub async fn set_enabled(&self, user_id: i64, enabled: bool) -> Result<UserAccount, ApiError> {
        self.client.set_user_enabled(user_id, enabled).await
    }
}
