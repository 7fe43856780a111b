use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";
pub const NETWORK_ERROR_MESSAGE: &str = "서버와 통신 중 오류가 발생했습니다";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Missing, expired or forbidden token. The session has already been cleared.
    #[error("세션이 만료되었습니다. 다시 로그인해주세요.")]
    Unauthorized { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("응답을 해석할 수 없습니다: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        log::error!("request failed: {}", err);
        Self::Network(NETWORK_ERROR_MESSAGE.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Builds a server error from a raw response body, preferring the body's own message.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| server_message(&value))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::Server { status, message }
    }

    /// Replaces the generic server message with a call-site specific one.
    pub fn with_fallback(self, message: &str) -> Self {
        match self {
            Self::Server { status, message: m } if m == GENERIC_ERROR_MESSAGE => Self::Server {
                status,
                message: message.to_string(),
            },
            other => other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Network(_) => "REQUEST_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }
}

/// `message` first, then the first extraction log line (upload failures carry their reason there),
/// then the bare `error` string some endpoints return.
pub fn server_message(body: &Value) -> Option<String> {
    let non_empty = |v: &Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    body.get("message")
        .and_then(non_empty)
        .or_else(|| {
            body.get("logs")
                .and_then(|logs| logs.get(0))
                .and_then(|log| log.get("message"))
                .and_then(non_empty)
        })
        .or_else(|| body.get("error").and_then(non_empty))
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_message_prefers_message_field() {
        let body = json!({ "message": "이미 존재하는 사용자명입니다", "logs": [{ "message": "other" }] });
        assert_eq!(server_message(&body).as_deref(), Some("이미 존재하는 사용자명입니다"));
    }

    #[test]
    fn server_message_falls_back_to_first_log_line() {
        let body = json!({
            "status": "error",
            "logs": [
                { "level": "ERROR", "message": "파일 크기가 50MB를 초과합니다" },
                { "level": "INFO", "message": "ignored" }
            ]
        });
        assert_eq!(server_message(&body).as_deref(), Some("파일 크기가 50MB를 초과합니다"));
    }

    #[test]
    fn server_message_accepts_error_key_last() {
        let body = json!({ "error": "문서 삭제 중 오류 발생" });
        assert_eq!(server_message(&body).as_deref(), Some("문서 삭제 중 오류 발생"));
    }

    #[test]
    fn from_body_uses_generic_message_for_unstructured_bodies() {
        let err = ApiError::from_body(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: GENERIC_ERROR_MESSAGE.to_string()
            }
        );
        let blank = ApiError::from_body(400, r#"{"message": "  "}"#);
        assert_eq!(blank.to_string(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn display_and_code_follow_variant() {
        let validation = ApiError::validation("모든 필드를 입력해주세요");
        assert_eq!(validation.to_string(), "모든 필드를 입력해주세요");
        assert_eq!(validation.code(), "VALIDATION_ERROR");

        let unauthorized = ApiError::Unauthorized { status: 403 };
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.code(), "UNAUTHORIZED");

        let raw: String = ApiError::Server {
            status: 404,
            message: "not found".into(),
        }
        .into();
        assert_eq!(raw, "not found");
    }
}
