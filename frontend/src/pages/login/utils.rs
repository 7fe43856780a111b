use crate::api::{LoginRequest, RegisterRequest};

pub const REQUIRED_FIELDS_MESSAGE: &str = "모든 필드를 입력해주세요";
pub const USERNAME_LENGTH_MESSAGE: &str = "사용자명은 3-50자 사이여야 합니다";
pub const PASSWORD_LENGTH_MESSAGE: &str = "비밀번호는 최소 8자 이상이어야 합니다";
pub const LOGIN_SUCCESS_MESSAGE: &str = "로그인 성공! 리다이렉트 중...";

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;

pub const LOGIN_REDIRECT_DELAY_MS: u32 = 500;
pub const REGISTER_SWITCH_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthTab::Login => "문서 정보 추출 시스템에 로그인하세요.",
            AuthTab::Register => "새로운 계정을 생성하고 서비스를 시작하세요.",
        }
    }
}

fn validate_username(username: &str) -> Result<(), String> {
    let length = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return Err(USERNAME_LENGTH_MESSAGE.into());
    }
    Ok(())
}

/// Trims the username; the password is sent as typed.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE.into());
    }
    validate_username(username)?;
    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, String> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE.into());
    }
    validate_username(username)?;
    if password.chars().count() < PASSWORD_MIN {
        return Err(PASSWORD_LENGTH_MESSAGE.into());
    }
    Ok(RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            validate_login("  ", "secret").unwrap_err(),
            REQUIRED_FIELDS_MESSAGE
        );
        assert_eq!(validate_login("admin", "").unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn short_username_is_rejected() {
        assert_eq!(validate_login("ab", "secret").unwrap_err(), USERNAME_LENGTH_MESSAGE);
        let long = "a".repeat(51);
        assert_eq!(
            validate_register(&long, "a@b.c", "password1").unwrap_err(),
            USERNAME_LENGTH_MESSAGE
        );
    }

    #[test]
    fn login_trims_username() {
        let request = validate_login("  admin ", "pw").unwrap();
        assert_eq!(request.username, "admin");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn register_checks_password_length() {
        assert_eq!(
            validate_register("newuser", "n@securedoc.io", "short").unwrap_err(),
            PASSWORD_LENGTH_MESSAGE
        );
        let request = validate_register("newuser", " n@securedoc.io ", "longenough").unwrap();
        assert_eq!(request.email, "n@securedoc.io");
    }

    #[test]
    fn korean_usernames_count_characters() {
        assert!(validate_login("김철수", "pw").is_ok());
    }
}
