use leptos::{SignalGetUntracked, SignalWithUntracked};
use super::utils::{
    toggle_confirm, toggle_done, ADD_FAILED_MESSAGE, ROLE_CHANGED_MESSAGE, ROLE_FAILED_MESSAGE,
    STATUS_FAILED_MESSAGE, USER_ADDED_MESSAGE,
};
use super::view_model::UsersViewModel;
use crate::api::ApiError;

fn report_failure(vm: &UsersViewModel, err: &ApiError, message: &str) {
    log::error!("user mutation failed: {}", err);
    if !err.is_unauthorized() {
        vm.repository().client().navigator().alert(message);
    }
}

/// Applies the role picked in the dialog. The dialog itself is the confirmation step.
pub async fn change_role(vm: UsersViewModel) -> bool {
    let Some(change) = vm.role_change.get_untracked() else {
        return false;
    };
    let repository = vm.repository();
    match repository.change_role(change.user_id, change.role).await {
        Ok(user) => {
            log::info!("role of {} changed to {}", user.username, user.role);
            repository.client().navigator().alert(ROLE_CHANGED_MESSAGE);
            vm.close_role_change();
            vm.reload().await;
            true
        }
        Err(err) => {
            report_failure(&vm, &err, ROLE_FAILED_MESSAGE);
            false
        }
    }
}

pub async fn toggle_enabled(vm: UsersViewModel, user_id: i64, currently_enabled: bool) -> bool {
    let repository = vm.repository();
    let navigator = repository.client().navigator();
    if !navigator.confirm(&toggle_confirm(currently_enabled)) {
        return false;
    }
    match repository.set_enabled(user_id, !currently_enabled).await {
        Ok(_) => {
            navigator.alert(&toggle_done(currently_enabled));
            vm.reload().await;
            true
        }
        Err(err) => {
            report_failure(&vm, &err, STATUS_FAILED_MESSAGE);
            false
        }
    }
}

/// Validates locally; an invalid form never reaches the server.
pub async fn create_user(vm: UsersViewModel) -> bool {
    let repository = vm.repository();
    let navigator = repository.client().navigator();
    let request = match vm.new_user.with_untracked(|form| form.validate()) {
        Ok(request) => request,
        Err(message) => {
            navigator.alert(&message);
            return false;
        }
    };
    match repository.create(&request).await {
        Ok(user) => {
            log::info!("created user {}", user.username);
            navigator.alert(USER_ADDED_MESSAGE);
            vm.close_add();
            vm.reload().await;
            true
        }
        Err(err) => {
            let message = err.clone().with_fallback(ADD_FAILED_MESSAGE).to_string();
            report_failure(&vm, &err, &message);
            false
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::pages::users::utils::{RoleChange, PASSWORD_LENGTH_MESSAGE};
    use crate::test_support::helpers::{
        session_with_role, test_client, test_client_with_answers, user_account, TestClient,
    };
    use httpmock::prelude::*;
    use leptos::*;
    use serde_json::json;

    fn mock_list(server: &MockServer) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200)
                .json_body(serde_json::to_value(vec![user_account(5, "kim", Role::User, true)]).unwrap());
        })
    }

    #[tokio::test]
    async fn role_change_alerts_closes_dialog_and_reloads() {
        let server = MockServer::start_async().await;
        let list = mock_list(&server);
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/5/role")
                .json_body(json!({ "role": "MANAGER" }));
            then.status(200)
                .json_body(serde_json::to_value(user_account(5, "kim", Role::Manager, true)).unwrap());
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::Admin)));
        let vm = UsersViewModel::new_with_client(api);
        vm.role_change.set(Some(RoleChange {
            user_id: 5,
            username: "kim".into(),
            role: Role::Manager,
        }));

        assert!(change_role(vm).await);
        put.assert();
        list.assert_hits(1);
        assert!(vm.role_change.get_untracked().is_none());
        assert_eq!(navigator.alerts(), vec![ROLE_CHANGED_MESSAGE]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn declined_toggle_sends_nothing() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT).path("/api/users/5/status");
            then.status(200)
                .json_body(serde_json::to_value(user_account(5, "kim", Role::User, false)).unwrap());
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } = test_client_with_answers(
            Some(server.url("/api")),
            Some(session_with_role(Role::Admin)),
            &[false],
        );
        let vm = UsersViewModel::new_with_client(api);
        assert!(!toggle_enabled(vm, 5, true).await);
        put.assert_hits(0);
        assert_eq!(navigator.confirms(), vec!["정말로 이 사용자를 비활성화하시겠습니까?"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn toggle_sends_inverted_flag() {
        let server = MockServer::start_async().await;
        mock_list(&server);
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/5/status")
                .json_body(json!({ "enabled": true }));
            then.status(200)
                .json_body(serde_json::to_value(user_account(5, "kim", Role::User, true)).unwrap());
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::Admin)));
        let vm = UsersViewModel::new_with_client(api);
        assert!(toggle_enabled(vm, 5, false).await);
        put.assert();
        assert_eq!(navigator.alerts(), vec!["사용자가 활성화되었습니다."]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn short_password_never_hits_server() {
        let server = MockServer::start_async().await;
        let post = server.mock(|when, then| {
            when.method(POST).path("/api/users");
            then.status(200);
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::Admin)));
        let vm = UsersViewModel::new_with_client(api);
        vm.new_user.update(|f| {
            f.username = "park".into();
            f.email = "park@securedoc.io".into();
            f.password = "12345".into();
        });
        assert!(!create_user(vm).await);
        post.assert_hits(0);
        assert_eq!(navigator.alerts(), vec![PASSWORD_LENGTH_MESSAGE]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn duplicate_user_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users");
            then.status(400)
                .json_body(json!({ "message": "이미 존재하는 사용자명입니다." }));
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::Admin)));
        let vm = UsersViewModel::new_with_client(api);
        vm.open_add();
        vm.new_user.update(|f| {
            f.username = "kim".into();
            f.email = "kim@securedoc.io".into();
            f.password = "secret1".into();
        });
        assert!(!create_user(vm).await);
        assert_eq!(navigator.alerts(), vec!["이미 존재하는 사용자명입니다."]);
        assert!(vm.add_open.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn created_user_closes_form() {
        let server = MockServer::start_async().await;
        mock_list(&server);
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/users")
                .json_body(json!({
                    "username": "park",
                    "email": "park@securedoc.io",
                    "password": "secret1",
                    "role": "USER"
                }));
            then.status(200)
                .json_body(serde_json::to_value(user_account(6, "park", Role::User, true)).unwrap());
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::Admin)));
        let vm = UsersViewModel::new_with_client(api);
        vm.open_add();
        vm.new_user.update(|f| {
            f.username = "park".into();
            f.email = "park@securedoc.io".into();
            f.password = "secret1".into();
        });
        assert!(create_user(vm).await);
        assert!(!vm.add_open.get_untracked());
        assert_eq!(navigator.alerts(), vec![USER_ADDED_MESSAGE]);
        runtime.dispose();
    }
}
