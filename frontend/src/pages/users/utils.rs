use crate::api::{CreateUserRequest, Role, UserAccount};

pub const LOAD_ERROR_MESSAGE: &str = "사용자 목록을 불러오는 중 오류가 발생했습니다.";
pub const EMPTY_MESSAGE: &str = "등록된 사용자가 없습니다.";
pub const NO_MATCH_MESSAGE: &str = "검색 결과가 없습니다.";
pub const ROLE_CHANGED_MESSAGE: &str = "역할이 변경되었습니다.";
pub const ROLE_FAILED_MESSAGE: &str = "역할 변경 중 오류가 발생했습니다.";
pub const STATUS_FAILED_MESSAGE: &str = "상태 변경 중 오류가 발생했습니다.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "모든 필드를 입력해주세요.";
pub const PASSWORD_LENGTH_MESSAGE: &str = "비밀번호는 최소 6자 이상이어야 합니다.";
pub const USER_ADDED_MESSAGE: &str = "사용자가 추가되었습니다.";
pub const ADD_FAILED_MESSAGE: &str = "사용자 추가 중 오류가 발생했습니다.";
pub const PASSWORD_MIN: usize = 6;

/// Verb for the status toggle, from the user's current state.
pub fn toggle_verb(currently_enabled: bool) -> &'static str {
    if currently_enabled {
        "비활성화"
    } else {
        "활성화"
    }
}

pub fn toggle_confirm(currently_enabled: bool) -> String {
    format!("정말로 이 사용자를 {}하시겠습니까?", toggle_verb(currently_enabled))
}

pub fn toggle_done(currently_enabled: bool) -> String {
    format!("사용자가 {}되었습니다.", toggle_verb(currently_enabled))
}

pub fn status_label(enabled: bool) -> &'static str {
    if enabled {
        "활성"
    } else {
        "비활성"
    }
}

pub fn status_badge_class(enabled: bool) -> &'static str {
    if enabled {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    }
}

/// Case-insensitive match over everything a row displays.
pub fn matches_search(user: &UserAccount, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        user.username.as_str(),
        user.email.as_deref().unwrap_or_default(),
        user.role.label(),
        status_label(user.enabled),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(&needle))
}

pub fn filter_users(users: &[UserAccount], search: &str) -> Vec<UserAccount> {
    users
        .iter()
        .filter(|u| matches_search(u, search))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for NewUserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::User,
        }
    }
}

impl NewUserForm {
    pub fn validate(&self) -> Result<CreateUserRequest, String> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE.to_string());
        }
        if self.password.chars().count() < PASSWORD_MIN {
            return Err(PASSWORD_LENGTH_MESSAGE.to_string());
        }
        Ok(CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

/// Target of the role-change dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChange {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl RoleChange {
    pub fn for_user(user: &UserAccount) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::user_account as user;

    #[test]
    fn search_covers_email_role_and_status() {
        let users = vec![
            user(1, "admin", Role::Admin, true),
            user(2, "kim", Role::User, false),
            user(3, "lee", Role::Manager, true),
        ];
        assert_eq!(filter_users(&users, "KIM@").len(), 1);
        assert_eq!(filter_users(&users, "최고")[0].id, 1);
        assert_eq!(filter_users(&users, "비활성")[0].id, 2);
        assert_eq!(filter_users(&users, "  ").len(), 3);
        assert!(filter_users(&users, "park").is_empty());
    }

    #[test]
    fn new_user_requires_all_fields_and_six_char_password() {
        let mut form = NewUserForm {
            username: " kim ".into(),
            email: "kim@securedoc.io".into(),
            password: "".into(),
            role: Role::Manager,
        };
        assert_eq!(form.validate(), Err(REQUIRED_FIELDS_MESSAGE.to_string()));
        form.password = "12345".into();
        assert_eq!(form.validate(), Err(PASSWORD_LENGTH_MESSAGE.to_string()));
        form.password = "123456".into();
        let request = form.validate().expect("valid form");
        assert_eq!(request.username, "kim");
        assert_eq!(request.role, Role::Manager);
    }

    #[test]
    fn toggle_messages_follow_current_state() {
        assert_eq!(toggle_confirm(true), "정말로 이 사용자를 비활성화하시겠습니까?");
        assert_eq!(toggle_done(false), "사용자가 활성화되었습니다.");
    }
}
