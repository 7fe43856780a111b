use crate::{
    api::{types::Role, ApiClient, LOGIN_PATH},
    state::{auth::use_auth, session::Session},
    utils::navigation::Navigator,
};
use leptos::*;

pub const ACCESS_DENIED_MESSAGE: &str = "관리자만 접근할 수 있습니다.";
pub const DEFAULT_PAGE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    RedirectToLogin,
    Denied,
}

pub fn evaluate_access(session: Option<&Session>, requirement: Requirement) -> AccessDecision {
    match (session, requirement) {
        (None, _) => AccessDecision::RedirectToLogin,
        (Some(_), Requirement::Authenticated) => AccessDecision::Granted,
        (Some(session), Requirement::Role(role)) if session.role == role => {
            AccessDecision::Granted
        }
        (Some(_), Requirement::Role(_)) => AccessDecision::Denied,
    }
}

fn enforce(decision: AccessDecision, navigator: &dyn Navigator) {
    match decision {
        AccessDecision::Granted => {}
        AccessDecision::RedirectToLogin => navigator.redirect(LOGIN_PATH),
        AccessDecision::Denied => {
            navigator.alert(ACCESS_DENIED_MESSAGE);
            navigator.redirect(DEFAULT_PAGE);
        }
    }
}

/// Decides synchronously on creation, so denied content is never rendered.
fn guarded(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let navigator = use_context::<ApiClient>()
        .unwrap_or_else(ApiClient::new)
        .navigator();
    let decision =
        create_memo(move |_| auth.with(|s| evaluate_access(s.session.as_ref(), requirement)));

    enforce(decision.get_untracked(), navigator.as_ref());
    create_effect(move |previous: Option<AccessDecision>| {
        let current = decision.get();
        if previous.is_some_and(|p| p != current) {
            enforce(current, navigator.as_ref());
        }
        current
    });

    view! {
        <Show when=move || decision.get() == AccessDecision::Granted>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Authenticated, children)
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Role(role), children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireRole, ACCESS_DENIED_MESSAGE};
    use crate::api::{Role, LOGIN_PATH};
    use crate::state::auth::AuthProvider;
    use crate::state::session::Session;
    use crate::test_support::helpers::{session_with_role, test_client, TestClient};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::navigation::RecordingNavigator;
    use leptos::*;
    use std::rc::Rc;

    fn render_guarded(session: Option<Session>, role: Option<Role>) -> (String, Rc<RecordingNavigator>) {
        let TestClient { api, navigator, .. } = test_client(None, session);
        let html = render_to_string(move || {
            provide_context(api);
            match role {
                Some(role) => view! {
                    <AuthProvider>
                        <RequireRole role=role>
                            {|| view! { <div>"protected-content"</div> }}
                        </RequireRole>
                    </AuthProvider>
                }
                .into_view(),
                None => view! {
                    <AuthProvider>
                        <RequireAuth>
                            {|| view! { <div>"protected-content"</div> }}
                        </RequireAuth>
                    </AuthProvider>
                }
                .into_view(),
            }
        });
        (html, navigator)
    }

    #[test]
    fn require_auth_renders_children_with_session() {
        let (html, navigator) = render_guarded(Some(session_with_role(Role::User)), None);
        assert!(html.contains("protected-content"));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn require_auth_redirects_without_session() {
        let (html, navigator) = render_guarded(None, None);
        assert!(!html.contains("protected-content"));
        assert_eq!(navigator.redirects(), vec![LOGIN_PATH]);
    }

    #[test]
    fn require_role_alerts_and_sends_home_on_mismatch() {
        let (html, navigator) =
            render_guarded(Some(session_with_role(Role::User)), Some(Role::Admin));
        assert!(!html.contains("protected-content"));
        assert_eq!(navigator.alerts(), vec![ACCESS_DENIED_MESSAGE]);
        assert_eq!(navigator.redirects(), vec!["/"]);
    }

    #[test]
    fn require_role_renders_for_matching_role() {
        let (html, _) = render_guarded(Some(session_with_role(Role::Admin)), Some(Role::Admin));
        assert!(html.contains("protected-content"));
    }
}
