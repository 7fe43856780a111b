use crate::{
    api::ApiClient,
    pages::login::repository::LoginRepository,
    state::auth::{self, use_auth},
};
use leptos::*;
use std::rc::Rc;

pub const LOGOUT_CONFIRM_MESSAGE: &str = "로그아웃 하시겠습니까?";

/// Two-letter avatar text shown in the header.
pub fn initials(username: &str) -> String {
    username.chars().take(2).collect::<String>().to_uppercase()
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let navigator = api.navigator();
    let repo = LoginRepository::new_with_client(Rc::new(api));

    let can_view_audit = move || {
        auth.with(|s| s.session.as_ref().map(|s| s.can_view_audit()).unwrap_or(false))
    };
    let is_admin = move || auth.with(|s| s.session.as_ref().map(|s| s.is_admin()).unwrap_or(false));
    let username = move || auth.with(|s| s.username()).unwrap_or_default();

    let on_logout = move |_| {
        if navigator.confirm(LOGOUT_CONFIRM_MESSAGE) {
            auth::logout(&repo, set_auth);
        }
    };

    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-slate-900">"SecureDoc"</a>
                    <nav class="flex items-center space-x-2">
                        <a href="/" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100">
                            "대시보드"
                        </a>
                        <a href="/extract" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100">
                            "문서 추출"
                        </a>
                        <a href="/documents" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100">
                            "문서 목록"
                        </a>
                        <Show when=can_view_audit>
                            <a href="/audit" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100">
                                "감사 로그"
                            </a>
                        </Show>
                        <Show when=is_admin>
                            <a href="/users" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100">
                                "사용자 관리"
                            </a>
                        </Show>
                        <button
                            class="ml-2 w-9 h-9 rounded-full bg-blue-600 text-white text-sm font-semibold"
                            title=move || format!("{} (로그아웃)", username())
                            on:click=on_logout
                        >
                            {move || initials(&username())}
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-8">
            <div class="h-8 w-8 animate-spin rounded-full border-4 border-blue-500 border-t-transparent"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded">
            {message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_two_characters() {
        assert_eq!(initials("admin"), "AD");
        assert_eq!(initials("k"), "K");
        assert_eq!(initials("김철수"), "김철");
    }
}
