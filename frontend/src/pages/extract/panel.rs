use crate::components::layout::Layout;
use crate::pages::extract::{
    components::{ExtractedFieldsPanel, LogWindow, UploadArea},
    view_model::use_extract_view_model,
};
use leptos::*;

#[component]
pub fn ExtractPage() -> impl IntoView {
    let vm = use_extract_view_model();
    let on_export = Callback::new(move |_| vm.export_csv());

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-slate-900">"문서 추출"</h1>
                    <p class="mt-1 text-sm text-slate-600">"계약서 PDF를 업로드하면 주요 정보를 자동으로 추출합니다"</p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="space-y-6">
                        <UploadArea vm=vm />
                        <LogWindow state=vm.state />
                    </div>
                    <div class="lg:col-span-2">
                        <ExtractedFieldsPanel state=vm.state on_export=on_export />
                    </div>
                </div>
            </div>
        </Layout>
    }
}
