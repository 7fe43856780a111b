use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    state::session::{self, Session},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.username.clone())
    }
}

/// Snapshot of the stored session, read synchronously so guards can decide before first paint.
fn create_auth_context() -> AuthContext {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = session::load_session(api.session_store().as_ref());
    create_signal(AuthState { session })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(create_auth_context)
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    let session = repo.login(request).await?;
    set_auth_state.update(|state| state.session = Some(session.clone()));
    Ok(session)
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.update(|state| state.session = None);
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}
