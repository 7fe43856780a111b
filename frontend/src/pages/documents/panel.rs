use crate::components::{layout::Layout, pagination::Pagination};
use crate::pages::documents::{
    actions::{delete_documents, DeleteScope},
    components::{DocumentFilters, DocumentsTable},
    view_model::use_documents_view_model,
};
use leptos::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let vm = use_documents_view_model();
    let navigator = vm.repository().client().navigator();

    create_effect(move |_| spawn_local(vm.reload()));

    let delete = move |scope: DeleteScope| {
        spawn_local(async move {
            if let Err(err) = delete_documents(vm, scope).await {
                log::warn!("document deletion failed: {}", err);
            }
        });
    };

    let on_open = Callback::new(move |id: i64| navigator.redirect(&format!("/documents/{}", id)));
    let on_delete = Callback::new(move |doc_id: String| delete(DeleteScope::One(doc_id)));
    let on_filter = Callback::new(move |_| vm.apply_filter());
    let on_page = Callback::new(move |page: usize| vm.goto_page(page));

    let page_index = Signal::derive(move || vm.list.with(|c| c.query().page_index));
    let total_pages = Signal::derive(move || vm.list.with(|c| c.page().map(|p| p.total_pages).unwrap_or(0)));
    let summary = move || vm.list.with(|c| c.page().map(|p| p.summary("문서")).unwrap_or_default());
    let selected = move || vm.selection.with(|s| s.len());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-end justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-slate-900">"문서 목록"</h1>
                        <p class="mt-1 text-sm text-slate-600">"추출된 계약서 문서를 검색하고 관리합니다"</p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            class="px-4 py-2 rounded-md text-sm bg-red-50 text-red-700 border border-red-200 hover:bg-red-100 disabled:opacity-50"
                            disabled=move || selected() == 0
                            on:click=move |_| delete(DeleteScope::Selected)
                        >
                            {move || format!("선택 삭제 ({})", selected())}
                        </button>
                        <button
                            class="px-4 py-2 rounded-md text-sm bg-red-600 text-white hover:bg-red-700"
                            on:click=move |_| delete(DeleteScope::All)
                        >
                            "전체 삭제"
                        </button>
                    </div>
                </div>
                <DocumentFilters filter=vm.filter on_change=on_filter />
                <DocumentsTable vm=vm on_open=on_open on_delete=on_delete />
                <div class="flex items-center justify-between">
                    <span class="text-sm text-slate-600">{summary}</span>
                    <Pagination page_index=page_index total_pages=total_pages on_page=on_page />
                </div>
            </div>
        </Layout>
    }
}
