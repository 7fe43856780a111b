use reqwest::Method;

use super::{
    client::{ApiClient, AuthPolicy},
    error::ApiError,
    types::{AuthResponse, LoginRequest, RegisterRequest, Role},
};
use crate::state::session::{self, Session};

pub const LOGIN_FAILED_MESSAGE: &str = "로그인에 실패했습니다";
pub const REGISTER_FAILED_MESSAGE: &str = "회원가입에 실패했습니다";
pub const REGISTER_DONE_MESSAGE: &str = "회원가입 완료! 로그인해주세요";

impl ApiClient {
    /// Authenticates and persists the returned session.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/auth/login", request, AuthPolicy::Public)
            .await
            .map_err(|e| e.with_fallback(LOGIN_FAILED_MESSAGE))?;
        let session = session_from_response(response, &request.username)?;
        session::save_session(self.session_store().as_ref(), &session);
        log::info!("signed in as {} ({})", session.username, session.role);
        Ok(session)
    }

    /// Returns the server's confirmation message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/auth/register", request, AuthPolicy::Public)
            .await
            .map_err(|e| e.with_fallback(REGISTER_FAILED_MESSAGE))?;
        Ok(response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| REGISTER_DONE_MESSAGE.to_string()))
    }

    /// Local only; the backend keeps no server-side session.
    pub fn logout(&self) {
        log::info!("signing out");
        self.force_logout();
    }
}

fn session_from_response(response: AuthResponse, fallback_username: &str) -> Result<Session, ApiError> {
    let failure = |message: Option<String>| ApiError::Server {
        status: 200,
        message: message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
    };
    let Some(token) = response.token.filter(|t| !t.is_empty()) else {
        return Err(failure(response.message));
    };
    let role = response
        .role
        .as_deref()
        .and_then(|r| r.parse::<Role>().ok())
        .ok_or_else(|| ApiError::decode("missing role in login response"))?;
    Ok(Session {
        token,
        username: response
            .username
            .unwrap_or_else(|| fallback_username.to_string()),
        email: response.email,
        role,
    })
}
