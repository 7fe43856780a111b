use crate::pages::login::{
    components::{form::LoginForm, register::RegisterForm},
    utils::AuthTab,
    view_model::use_login_view_model,
};
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "flex-1 py-2 text-sm font-semibold border-b-2 border-blue-600 text-blue-600"
    } else {
        "flex-1 py-2 text-sm font-medium border-b-2 border-transparent text-slate-500 hover:text-slate-700"
    }
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let tab = vm.tab;

    let on_login = Callback::new(move |_| vm.submit_login());
    let on_register = Callback::new(move |_| vm.submit_register());
    let select = move |target: AuthTab| move |_: ev::MouseEvent| vm.select_tab(target);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 py-12 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8 space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-slate-900">"SecureDoc"</h2>
                    <p id="auth-subtitle" class="mt-2 text-sm text-slate-600">
                        {move || tab.get().subtitle()}
                    </p>
                </div>
                <div class="flex">
                    <button class=move || tab_class(tab.get() == AuthTab::Login) on:click=select(AuthTab::Login)>
                        "로그인"
                    </button>
                    <button class=move || tab_class(tab.get() == AuthTab::Register) on:click=select(AuthTab::Register)>
                        "회원가입"
                    </button>
                </div>
                <Show
                    when=move || tab.get() == AuthTab::Login
                    fallback=move || view! {
                        <RegisterForm
                            form=vm.register_form
                            message=vm.register_message
                            pending=vm.register_action.pending()
                            on_submit=on_register
                        />
                    }
                >
                    <LoginForm
                        form=vm.login_form
                        message=vm.login_message
                        pending=vm.login_action.pending()
                        on_submit=on_login
                    />
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::test_client;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_login_tab_first() {
        let api = test_client(None, None).api;
        let html = render_to_string(move || {
            provide_context(api);
            view! { <LoginPanel/> }
        });
        assert!(html.contains("문서 정보 추출 시스템에 로그인하세요."));
        assert!(html.contains("loginUsername"));
        assert!(!html.contains("registerEmail"));
    }
}
