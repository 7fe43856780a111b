use crate::api::AuditLogEntry;
use crate::pages::audit_log::utils::{
    action_badge_class, action_label, entry_action, status_badge_class, username, EMPTY_MESSAGE,
    LOAD_ERROR_MESSAGE,
};
use crate::state::list::{ListController, ListState};
use crate::utils::time::format_date_time;
use leptos::*;

const COLUMNS: usize = 6;

fn row(entry: AuditLogEntry, on_view: Callback<i64>) -> impl IntoView {
    let action = entry_action(&entry).to_string();
    let failed = entry.is_failed();
    let id = entry.id;
    view! {
        <tr class="hover:bg-slate-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-slate-600">
                {format_date_time(entry.timestamp.as_deref())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-slate-900">
                {username(&entry).to_string()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", action_badge_class(&action))>
                    {action_label(&action).to_string()}
                </span>
                <Show when=move || failed>
                    <span class=format!("ml-2 px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", status_badge_class(false))>
                        "실패"
                    </span>
                </Show>
            </td>
            <td class="px-6 py-4 text-sm text-slate-700">{entry.details.clone().unwrap_or_default()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-slate-500">
                {entry.ip_address.clone().unwrap_or_else(|| "-".into())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <button class="text-blue-600 hover:text-blue-900" on:click=move |_| on_view.call(id)>
                    "보기"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn AuditLogTable(
    #[prop(into)] list: Signal<ListController<AuditLogEntry>>,
    on_view: Callback<i64>,
) -> impl IntoView {
    let message_row = |class: &'static str, text: &'static str| {
        view! {
            <tr>
                <td colspan=COLUMNS class=format!("px-6 py-12 text-center {}", class)>{text}</td>
            </tr>
        }
        .into_view()
    };

    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-slate-200">
                <thead class="bg-slate-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"타임스탬프"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"사용자"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"활동"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"상세 정보"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"IP 주소"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"상세"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-200">
                    {move || match list.with(|c| c.state().clone()) {
                        ListState::Idle | ListState::Loading => message_row("text-slate-400", "불러오는 중..."),
                        ListState::Error(_) => message_row("text-red-400", LOAD_ERROR_MESSAGE),
                        ListState::Loaded(page) if page.items.is_empty() => {
                            message_row("text-slate-400", EMPTY_MESSAGE)
                        }
                        ListState::Loaded(page) => page
                            .items
                            .into_iter()
                            .map(|entry| row(entry, on_view))
                            .collect_view(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
