use crate::components::{detail_modal::DetailModal, layout::Layout, pagination::Pagination};
use crate::pages::audit_log::{
    components::{ActionFilter, AuditLogTable},
    view_model::use_audit_log_view_model,
};
use leptos::*;

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let vm = use_audit_log_view_model();

    create_effect(move |_| spawn_local(vm.reload()));

    let on_filter = Callback::new(move |action: String| spawn_local(vm.filter_by_action(action)));
    let on_page = Callback::new(move |page: usize| spawn_local(vm.goto_page(page)));
    let on_view = Callback::new(move |id: i64| vm.show_detail(id));
    let on_close = Callback::new(move |_| vm.close_detail());
    let on_export = move |_| spawn_local(vm.export_csv());

    let page_index = Signal::derive(move || vm.list.with(|c| c.query().page_index));
    let total_pages = Signal::derive(move || vm.list.with(|c| c.page().map(|p| p.total_pages).unwrap_or(0)));
    let summary = move || vm.list.with(|c| c.page().map(|p| p.summary("로그")).unwrap_or_default());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-end justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-slate-900">"감사 로그"</h1>
                        <p class="mt-1 text-sm text-slate-600">"시스템 활동 기록을 조회합니다"</p>
                    </div>
                    <div class="flex gap-2">
                        <ActionFilter selected=vm.action_filter on_change=on_filter />
                        <button
                            class="px-4 py-2 rounded-md text-sm bg-green-600 text-white hover:bg-green-700"
                            on:click=on_export
                        >
                            "CSV 내보내기"
                        </button>
                    </div>
                </div>
                <AuditLogTable list=vm.list on_view=on_view />
                <div class="flex items-center justify-between">
                    <span class="text-sm text-slate-600">{summary}</span>
                    <Pagination page_index=page_index total_pages=total_pages on_page=on_page />
                </div>
            </div>
            <DetailModal title="로그 상세 정보" fields=vm.detail_view() on_close=on_close />
        </Layout>
    }
}
