use crate::pages::login::{
    components::{form::INPUT_CLASS, messages::FormMessageLine},
    view_model::{FormMessage, RegisterFormState},
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn RegisterForm(
    form: RegisterFormState,
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
                id="registerUsername"
                type="text"
                class=INPUT_CLASS
                placeholder="사용자명 (3-50자)"
                prop:value=form.username
                on:input=move |ev| form.username.set(event_target::<HtmlInputElement>(&ev).value())
            />
            <input
                id="registerEmail"
                type="email"
                class=INPUT_CLASS
                placeholder="이메일"
                prop:value=form.email
                on:input=move |ev| form.email.set(event_target::<HtmlInputElement>(&ev).value())
            />
            <input
                id="registerPassword"
                type="password"
                class=INPUT_CLASS
                placeholder="비밀번호 (8자 이상)"
                prop:value=form.password
                on:input=move |ev| form.password.set(event_target::<HtmlInputElement>(&ev).value())
            />
            <FormMessageLine message=message />
            <button
                type="submit"
                disabled=pending
                class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-slate-800 hover:bg-slate-900 disabled:opacity-50"
            >
                "회원가입"
            </button>
        </form>
    }
}
