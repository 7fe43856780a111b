use crate::api::UserAccount;
use crate::pages::users::{
    utils::{
        status_badge_class, status_label, toggle_verb, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE,
        NO_MATCH_MESSAGE,
    },
    view_model::{UsersState, UsersViewModel},
};
use crate::utils::time::format_date;
use leptos::*;

const COLUMNS: usize = 6;

#[component]
pub fn UsersTable(
    vm: UsersViewModel,
    on_role: Callback<UserAccount>,
    on_toggle: Callback<(i64, bool)>,
) -> impl IntoView {
    let row = move |user: UserAccount| {
        let id = user.id;
        let enabled = user.enabled;
        let toggle_class = if enabled {
            "text-red-600 hover:text-red-900"
        } else {
            "text-green-600 hover:text-green-900"
        };
        let target = user.clone();
        view! {
            <tr class="hover:bg-slate-50">
                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-slate-900">{user.username.clone()}</td>
                <td class="px-6 py-4 whitespace-nowrap text-sm text-slate-500">{user.email.clone().unwrap_or_default()}</td>
                <td class="px-6 py-4 whitespace-nowrap text-sm">
                    <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", user.role.badge_class())>
                        {user.role.label()}
                    </span>
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-sm">
                    <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", status_badge_class(enabled))>
                        {status_label(enabled)}
                    </span>
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-sm text-slate-500 font-mono">
                    {format_date(user.created_at.as_deref())}
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-sm">
                    <button class="text-blue-600 hover:text-blue-900 mr-3" on:click=move |_| on_role.call(target.clone())>
                        "역할 변경"
                    </button>
                    <button class=toggle_class on:click=move |_| on_toggle.call((id, enabled))>
                        {toggle_verb(enabled)}
                    </button>
                </td>
            </tr>
        }
    };

    let message_row = |class: &'static str, text: &'static str| {
        view! {
            <tr>
                <td colspan=COLUMNS class=format!("px-6 py-12 text-center {}", class)>{text}</td>
            </tr>
        }
        .into_view()
    };

    let body = move || {
        if vm.users.with(|s| *s == UsersState::Failed) {
            return message_row("text-red-400", LOAD_ERROR_MESSAGE);
        }
        match vm.visible() {
            None => message_row("text-slate-400", "불러오는 중..."),
            Some(users) if users.is_empty() => {
                if vm.total() == 0 {
                    message_row("text-slate-400", EMPTY_MESSAGE)
                } else {
                    message_row("text-slate-400", NO_MATCH_MESSAGE)
                }
            }
            Some(users) => users.into_iter().map(row).collect_view(),
        }
    };

    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-slate-200">
                <thead class="bg-slate-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"사용자명"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"이메일"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"역할"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"상태"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"가입일"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"관리"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-200">{body}</tbody>
            </table>
        </div>
    }
}
