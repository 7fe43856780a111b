use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-slate-900">"대시보드"</h1>
                    <p class="mt-1 text-sm text-slate-600">"문서 처리 현황과 최근 활동을 확인하세요"</p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
