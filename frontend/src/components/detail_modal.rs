use leptos::*;

use crate::utils::detail::{DetailField, FieldStyle};

fn value_class(style: FieldStyle) -> &'static str {
    match style {
        FieldStyle::Plain => "text-slate-900",
        FieldStyle::Mono => "text-slate-900 font-mono text-sm break-all",
        FieldStyle::Block => "text-slate-700 bg-slate-50 p-3 rounded border border-slate-200",
        FieldStyle::Error => "text-red-700 bg-red-50 p-3 rounded border border-red-200",
    }
}

/// Modal showing a prepared field list. Hidden while `fields` is `None`.
#[component]
pub fn DetailModal(
    #[prop(into)] title: String,
    #[prop(into)] fields: Signal<Option<Vec<DetailField>>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || fields.with(Option::is_some)>
            <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
                <div class="bg-white rounded-lg shadow-xl w-full max-w-2xl p-6">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-lg font-semibold text-slate-900">{title.clone()}</h3>
                        <button class="text-slate-400 hover:text-slate-600" on:click=move |_| on_close.call(())>
                            "닫기"
                        </button>
                    </div>
                    <div class="space-y-4">
                        {move || {
                            fields
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|field| {
                                    let label_class = if field.style == FieldStyle::Error {
                                        "block text-sm font-medium text-red-500 mb-1"
                                    } else {
                                        "block text-sm font-medium text-slate-500 mb-1"
                                    };
                                    view! {
                                        <div>
                                            <label class=label_class>{field.label}</label>
                                            <p class=value_class(field.style)>{field.value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
