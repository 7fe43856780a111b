use crate::pages::login::{
    components::messages::FormMessageLine,
    view_model::{FormMessage, LoginFormState},
};
use leptos::*;
use web_sys::HtmlInputElement;

pub const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-slate-300 rounded-md placeholder-slate-400 text-slate-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    message: RwSignal<Option<FormMessage>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <input
                id="loginUsername"
                type="text"
                class=INPUT_CLASS
                placeholder="사용자명"
                prop:value=form.username
                on:input=move |ev| {
                    form.username.set(event_target::<HtmlInputElement>(&ev).value());
                }
            />
            <input
                id="loginPassword"
                type="password"
                class=INPUT_CLASS
                placeholder="비밀번호"
                prop:value=form.password
                on:input=move |ev| {
                    form.password.set(event_target::<HtmlInputElement>(&ev).value());
                }
            />
            <FormMessageLine message=message />
            <button
                type="submit"
                disabled=pending
                class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
            >
                {move || if pending.get() { "로그인 중..." } else { "로그인" }}
            </button>
        </form>
    }
}
