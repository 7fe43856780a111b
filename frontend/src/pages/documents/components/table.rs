use crate::api::Document;
use crate::components::badges::{ConfidenceBadge, StatusBadge};
use crate::pages::documents::{
    utils::{or_dash, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE},
    view_model::DocumentsViewModel,
};
use crate::state::list::ListState;
use crate::utils::time::format_date_minutes;
use leptos::*;

const COLUMNS: usize = 9;

#[component]
pub fn DocumentsTable(
    vm: DocumentsViewModel,
    on_open: Callback<i64>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let all_selected = move || {
        let keys = vm.page_keys();
        vm.selection
            .with(|s| s.all_selected(keys.iter().map(String::as_str)))
    };
    let toggle_all = move |_| {
        let keys = vm.page_keys();
        vm.selection
            .update(|s| s.toggle_all(keys.iter().map(String::as_str)));
    };

    let row = move |doc: Document| {
        let key = doc.key();
        let checked_key = key.clone();
        let toggle_key = key.clone();
        let id = doc.id;
        view! {
            <tr class="hover:bg-slate-50 cursor-pointer" on:click=move |_| on_open.call(id)>
                <td class="px-4 py-4" on:click=|ev| ev.stop_propagation()>
                    <input
                        type="checkbox"
                        prop:checked=move || vm.selection.with(|s| s.contains(&checked_key))
                        on:change=move |_| vm.selection.update(|s| s.toggle(&toggle_key))
                    />
                </td>
                <td class="px-6 py-4 text-sm font-medium text-slate-900">{format!("#{}", doc.id)}</td>
                <td class="px-6 py-4 text-sm text-slate-700">
                    {doc.filename.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "N/A".into())}
                </td>
                <td class="px-6 py-4 text-sm text-slate-700">{or_dash(doc.contractor_a.as_deref())}</td>
                <td class="px-6 py-4 text-sm text-slate-700">{or_dash(doc.contractor_b.as_deref())}</td>
                <td class="px-6 py-4 text-sm text-slate-700 font-medium">{or_dash(doc.contract_amount.as_deref())}</td>
                <td class="px-6 py-4 text-sm"><ConfidenceBadge percent=doc.confidence /></td>
                <td class="px-6 py-4 text-sm"><StatusBadge status=doc.status() /></td>
                <td class="px-6 py-4 text-sm text-slate-500">
                    <div class="flex items-center gap-3">
                        <span>{format_date_minutes(doc.created_at.as_deref())}</span>
                        <button
                            class="text-red-600 hover:text-red-800 text-xs"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete.call(key.clone());
                            }
                        >
                            "삭제"
                        </button>
                    </div>
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

    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-slate-200">
                <thead class="bg-slate-50">
                    <tr>
                        <th class="px-4 py-3">
                            <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                        </th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"ID"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"파일명"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"계약자 A"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"계약자 B"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"계약 금액"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"신뢰도"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"상태"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-slate-500">"업로드 일시"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-200">
                    {move || match vm.list.with(|c| c.state().clone()) {
                        ListState::Idle | ListState::Loading => message_row("text-slate-400", "불러오는 중..."),
                        ListState::Error(_) => message_row("text-red-500", LOAD_ERROR_MESSAGE),
                        ListState::Loaded(page) if page.items.is_empty() => {
                            message_row("text-slate-400", EMPTY_MESSAGE)
                        }
                        ListState::Loaded(page) => page.items.into_iter().map(row).collect_view(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
