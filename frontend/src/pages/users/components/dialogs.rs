use crate::api::Role;
use crate::pages::login::components::form::INPUT_CLASS;
use crate::pages::users::utils::{NewUserForm, RoleChange};
use leptos::*;
use std::str::FromStr;

fn role_options() -> impl IntoView {
    Role::ALL
        .iter()
        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
        .collect_view()
}

fn dialog_shell(title: &'static str, body: View, on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg shadow-xl w-full max-w-md p-6 space-y-4">
                <h3 class="text-lg font-semibold text-slate-900">{title}</h3>
                {body}
                <div class="flex justify-end gap-2">
                    <button
                        class="px-4 py-2 rounded-md text-sm border border-slate-300 text-slate-700 hover:bg-slate-50"
                        on:click=move |_| on_cancel.call(())
                    >
                        "취소"
                    </button>
                    <button
                        class="px-4 py-2 rounded-md text-sm bg-blue-600 text-white hover:bg-blue-700"
                        on:click=move |_| on_confirm.call(())
                    >
                        "확인"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RoleDialog(
    change: RwSignal<Option<RoleChange>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let username = move || change.with(|c| c.as_ref().map(|c| c.username.clone()).unwrap_or_default());
    let selected = move || change.with(|c| c.as_ref().map(|c| c.role.as_str()).unwrap_or_default());
    let on_select = move |ev: ev::Event| {
        if let Ok(role) = Role::from_str(&event_target_value(&ev)) {
            change.update(|c| {
                if let Some(c) = c.as_mut() {
                    c.role = role;
                }
            });
        }
    };

    view! {
        <Show when=move || change.with(Option::is_some)>
            {move || {
                let body = view! {
                    <div class="space-y-2">
                        <p class="text-sm text-slate-600">
                            <span class="font-medium text-slate-900">{username}</span>
                            " 사용자의 역할을 선택하세요"
                        </p>
                        <select class=INPUT_CLASS prop:value=selected on:change=on_select>
                            {role_options()}
                        </select>
                    </div>
                }
                .into_view();
                dialog_shell("역할 변경", body, on_cancel, on_confirm)
            }}
        </Show>
    }
}

fn text_input(
    form: RwSignal<NewUserForm>,
    label: &'static str,
    input_type: &'static str,
    read: fn(&NewUserForm) -> String,
    write: fn(&mut NewUserForm, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-slate-600 mb-1">{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn AddUserDialog(
    open: RwSignal<bool>,
    form: RwSignal<NewUserForm>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let on_role = move |ev: ev::Event| {
        if let Ok(role) = Role::from_str(&event_target_value(&ev)) {
            form.update(|f| f.role = role);
        }
    };

    view! {
        <Show when=move || open.get()>
            {move || {
                let body = view! {
                    <div class="space-y-3">
                        {text_input(form, "사용자명", "text", |f| f.username.clone(), |f, v| f.username = v)}
                        {text_input(form, "이메일", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {text_input(form, "비밀번호", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        <div>
                            <label class="block text-sm font-medium text-slate-600 mb-1">"역할"</label>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.role.as_str())
                                on:change=on_role
                            >
                                {role_options()}
                            </select>
                        </div>
                    </div>
                }
                .into_view();
                dialog_shell("사용자 추가", body, on_cancel, on_confirm)
            }}
        </Show>
    }
}
