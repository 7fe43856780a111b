use crate::api::DocumentStatus;
use crate::pages::documents::utils::DocumentFilter;
use leptos::*;

#[component]
pub fn DocumentFilters(filter: RwSignal<DocumentFilter>, on_change: Callback<()>) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-lg shadow flex flex-col md:flex-row gap-4">
            <input
                id="searchInput"
                type="text"
                class="flex-1 rounded-md border border-slate-300 px-3 py-2 text-sm"
                placeholder="파일명, 계약자, 금액으로 검색"
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                    on_change.call(());
                }
            />
            <select
                id="statusFilter"
                class="rounded-md border border-slate-300 px-3 py-2 text-sm"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| {
                        f.status = (!value.is_empty()).then(|| DocumentStatus::parse(Some(&value)));
                    });
                    on_change.call(());
                }
            >
                <option value="">"전체 상태"</option>
                {DocumentStatus::FILTERABLE
                    .iter()
                    .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
