use crate::components::badges::{needs_review, ConfidenceBadge, StatusBadge};
use crate::pages::document_verify::{
    utils::{confidence, title, VerifyForm},
    view_model::VerifyViewModel,
};
use crate::pages::login::components::form::INPUT_CLASS;
use crate::api::DocumentStatus;
use crate::utils::time::format_date_time;
use leptos::*;
use web_sys::HtmlInputElement;

const WARNING_INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border-2 border-red-400 px-3 py-2 text-sm";

fn form_input(
    form: RwSignal<VerifyForm>,
    label: &'static str,
    input_type: &'static str,
    read: fn(&VerifyForm) -> String,
    write: fn(&mut VerifyForm, String),
    class: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-slate-600">{label}</label>
            <input
                type=input_type
                class=class
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target::<HtmlInputElement>(&ev).value();
                    form.update(|f| write(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn VerifyFields(
    vm: VerifyViewModel,
    on_reprocess: Callback<()>,
    on_finalize: Callback<()>,
    on_excel: Callback<()>,
) -> impl IntoView {
    let document = vm.document;
    let form = vm.form;
    let percent = Signal::derive(move || document.with(|d| d.as_ref().map(confidence)));
    let low_confidence = move || percent.get().is_some_and(needs_review);
    let amount_class = Signal::derive(move || {
        if low_confidence() {
            WARNING_INPUT_CLASS
        } else {
            INPUT_CLASS
        }
    });
    let plain = Signal::derive(|| INPUT_CLASS);
    let heading = move || document.with(|d| d.as_ref().map(title).unwrap_or_default());
    let uploaded = move || {
        document.with(|d| format_date_time(d.as_ref().and_then(|d| d.created_at.as_deref())))
    };
    let status = Signal::derive(move || {
        document.with(|d| d.as_ref().map(|d| d.status()).unwrap_or(DocumentStatus::Unknown))
    });

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h1 class="text-lg font-semibold text-slate-900">{heading}</h1>
                    <p class="text-xs text-slate-500">{move || format!("업로드: {}", uploaded())}</p>
                </div>
                <div class="flex items-center gap-2">
                    <StatusBadge status=status />
                    <ConfidenceBadge percent=percent prefix="Confidence: " />
                </div>
            </div>
            <div class="grid grid-cols-1 gap-4">
                {form_input(form, "계약자 A", "text", |f| f.contractor_a.clone(), |f, v| f.contractor_a = v, plain)}
                {form_input(form, "계약자 B", "text", |f| f.contractor_b.clone(), |f, v| f.contractor_b = v, plain)}
                {form_input(form, "계약 금액", "text", |f| f.contract_amount.clone(), |f, v| f.contract_amount = v, amount_class)}
                <Show when=low_confidence>
                    <p class="text-sm text-red-600">"신뢰도가 낮습니다. 계약 금액을 원본과 대조해주세요."</p>
                </Show>
                {form_input(form, "시작일", "date", |f| f.start_date.clone(), |f, v| f.start_date = v, plain)}
                {form_input(form, "종료일", "date", |f| f.end_date.clone(), |f, v| f.end_date = v, plain)}
            </div>
            <label class="flex items-center gap-2 text-sm text-slate-700">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.verified)
                    on:change=move |ev| {
                        let checked = event_target::<HtmlInputElement>(&ev).checked();
                        form.update(|f| f.verified = checked);
                    }
                />
                "추출 결과를 원본 문서와 대조하여 확인했습니다"
            </label>
            <div class="flex flex-wrap justify-end gap-2">
                <button
                    class="px-4 py-2 rounded-md text-sm border border-slate-300 text-slate-700 hover:bg-slate-50"
                    on:click=move |_| on_excel.call(())
                >
                    "엑셀 다운로드"
                </button>
                <button
                    class="px-4 py-2 rounded-md text-sm bg-yellow-500 text-white hover:bg-yellow-600"
                    on:click=move |_| on_reprocess.call(())
                >
                    "재추출"
                </button>
                <button
                    class="px-4 py-2 rounded-md text-sm bg-blue-600 text-white hover:bg-blue-700"
                    on:click=move |_| on_finalize.call(())
                >
                    "검증 완료"
                </button>
            </div>
        </div>
    }
}
