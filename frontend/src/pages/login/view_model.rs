use std::rc::Rc;

use super::repository::LoginRepository;
use super::utils::{self, AuthTab, LOGIN_SUCCESS_MESSAGE};
use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest};
use crate::components::guard::DEFAULT_PAGE;
use crate::state::{auth, session::Session};
use crate::utils::navigation::Navigator;
use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FormMessage::Success(_) => "text-sm text-center text-green-600",
            FormMessage::Error(_) => "text-sm text-center text-red-600",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub tab: RwSignal<AuthTab>,
    pub login_form: LoginFormState,
    pub register_form: RegisterFormState,
    pub login_message: RwSignal<Option<FormMessage>>,
    pub register_message: RwSignal<Option<FormMessage>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
    pub register_action: Action<RegisterRequest, Result<String, ApiError>>,
}

impl LoginViewModel {
    /// Switching tabs hides both forms' messages.
    pub fn select_tab(&self, tab: AuthTab) {
        self.tab.set(tab);
        self.login_message.set(None);
        self.register_message.set(None);
    }

    pub fn submit_login(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let form = self.login_form;
        match utils::validate_login(&form.username.get_untracked(), &form.password.get_untracked())
        {
            Ok(request) => {
                self.login_message.set(None);
                self.login_action.dispatch(request);
            }
            Err(message) => self.login_message.set(Some(FormMessage::Error(message))),
        }
    }

    pub fn submit_register(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        let form = self.register_form;
        match utils::validate_register(
            &form.username.get_untracked(),
            &form.email.get_untracked(),
            &form.password.get_untracked(),
        ) {
            Ok(request) => {
                self.register_message.set(None);
                self.register_action.dispatch(request);
            }
            Err(message) => self.register_message.set(Some(FormMessage::Error(message))),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let navigator: Rc<dyn Navigator> = api.navigator();
    let repo = LoginRepository::new_with_client(Rc::new(api));

    if repo.has_session() {
        navigator.redirect(DEFAULT_PAGE);
    }

    let register_repo = repo.clone();
    let vm = LoginViewModel {
        tab: create_rw_signal(AuthTab::default()),
        login_form: LoginFormState::default(),
        register_form: RegisterFormState::default(),
        login_message: create_rw_signal(None),
        register_message: create_rw_signal(None),
        login_action: auth::use_login_action(),
        register_action: create_action(move |request: &RegisterRequest| {
            let repo = register_repo.clone();
            let request = request.clone();
            async move { repo.register(request).await }
        }),
    };

    let login_message = vm.login_message;
    let login_action = vm.login_action;
    create_effect(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        match result {
            Ok(_) => {
                login_message.set(Some(FormMessage::Success(LOGIN_SUCCESS_MESSAGE.into())));
                let navigator = navigator.clone();
                Timeout::new(utils::LOGIN_REDIRECT_DELAY_MS, move || {
                    navigator.redirect(DEFAULT_PAGE)
                })
                .forget();
            }
            Err(err) => login_message.set(Some(FormMessage::Error(err.to_string()))),
        }
    });

    create_effect(move |_| {
        let Some(result) = vm.register_action.value().get() else {
            return;
        };
        match result {
            Ok(message) => {
                vm.register_message.set(Some(FormMessage::Success(message)));
                vm.register_form.reset();
                Timeout::new(utils::REGISTER_SWITCH_DELAY_MS, move || {
                    vm.select_tab(AuthTab::Login)
                })
                .forget();
            }
            Err(err) => vm
                .register_message
                .set(Some(FormMessage::Error(err.to_string()))),
        }
    });

    vm
}
