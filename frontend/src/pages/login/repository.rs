use std::rc::Rc;

use super::utils;
use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest};
use crate::state::session::{self, Session};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Validates locally before anything is sent.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let request = utils::validate_login(&request.username, &request.password)
            .map_err(ApiError::validation)?;
        self.client.login(&request).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<String, ApiError> {
        let request =
            utils::validate_register(&request.username, &request.email, &request.password)
                .map_err(ApiError::validation)?;
        self.client.register(&request).await
    }

    pub fn logout(&self) {
        self.client.logout();
    }

    /// Same rule as the route guard: a token alone is not a session.
    /// A token stored without a recognised role is stale and gets cleared.
    pub fn has_session(&self) -> bool {
        let store = self.client.session_store();
        if session::load_session(store.as_ref()).is_some() {
            return true;
        }
        if session::get_token(store.as_ref()).is_some() {
            log::warn!("clearing stored token without a valid role");
            session::clear_session(store.as_ref());
        }
        false
    }
}
