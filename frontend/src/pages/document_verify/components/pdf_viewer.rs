use crate::pages::document_verify::view_model::PdfState;
use leptos::*;

#[component]
pub fn PdfViewer(#[prop(into)] state: Signal<PdfState>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden h-[80vh]">
            {move || match state.get() {
                PdfState::Loading => view! {
                    <div class="flex h-full items-center justify-center text-sm text-slate-500">
                        "PDF 불러오는 중..."
                    </div>
                }
                .into_view(),
                PdfState::Ready(url) => view! {
                    <iframe src=url class="w-full h-full border-0" title="PDF"></iframe>
                }
                .into_view(),
                PdfState::Failed(message) => view! {
                    <div class="flex h-full items-center justify-center text-sm text-red-600">
                        {message}
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
