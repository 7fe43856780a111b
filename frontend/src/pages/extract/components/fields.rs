use crate::components::badges::{ConfidenceBadge, REVIEW_THRESHOLD};
use crate::pages::extract::utils::{ExtractState, ExtractedFields};
use leptos::*;
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm";

fn field_input(
    state: RwSignal<ExtractState>,
    label: &'static str,
    read: fn(&ExtractedFields) -> String,
    write: fn(&mut ExtractedFields, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-slate-600">{label}</label>
            <input
                type="text"
                class=INPUT_CLASS
                prop:value=move || state.with(|s| read(&s.fields))
                on:input=move |ev| {
                    let value = event_target::<HtmlInputElement>(&ev).value();
                    state.update(|s| write(&mut s.fields, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ExtractedFieldsPanel(
    state: RwSignal<ExtractState>,
    on_export: Callback<()>,
) -> impl IntoView {
    let fields = move || state.with(|s| s.fields.clone());

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h2 class="text-lg font-semibold text-slate-900">{move || fields().title}</h2>
                    <p class="text-xs text-slate-500">{move || format!("ID: {}", fields().doc_id)}</p>
                    <p class="text-xs text-slate-500">{move || fields().pages_text()}</p>
                </div>
                {move || match fields().confidence {
                    Some(percent) => view! {
                        <ConfidenceBadge percent=Some(percent) prefix="Confidence: " />
                    }
                    .into_view(),
                    None => view! {
                        <span class="text-xs px-2 py-1 rounded bg-slate-100 text-slate-600">"Confidence: N/A"</span>
                    }
                    .into_view(),
                }}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {field_input(state, "계약자 A", |f| f.contractor_a.clone(), |f, v| f.contractor_a = v)}
                {field_input(state, "계약자 B", |f| f.contractor_b.clone(), |f, v| f.contractor_b = v)}
                {field_input(state, "시작일", |f| f.start_date.clone(), |f, v| f.start_date = v)}
                {field_input(state, "종료일", |f| f.end_date.clone(), |f, v| f.end_date = v)}
                {field_input(state, "계약 금액", |f| f.amount.clone(), |f, v| f.amount = v)}
            </div>
            <Show when=move || state.with(|s| s.fields.needs_review())>
                <p class="text-sm text-yellow-700 bg-yellow-50 border border-yellow-200 rounded px-3 py-2">
                    {format!("신뢰도가 {}% 미만입니다. 추출 결과를 확인해주세요.", REVIEW_THRESHOLD)}
                </p>
            </Show>
            <div>
                <h3 class="text-sm font-semibold text-slate-700">"원문 텍스트"</h3>
                <p class="mt-2 text-sm text-slate-600 whitespace-pre-wrap max-h-64 overflow-y-auto">
                    {move || fields().raw_text}
                </p>
            </div>
            <div class="flex justify-end">
                <button
                    class="px-4 py-2 rounded-md bg-green-600 text-white text-sm hover:bg-green-700"
                    on:click=move |_| on_export.call(())
                >
                    "CSV 내보내기"
                </button>
            </div>
        </div>
    }
}
