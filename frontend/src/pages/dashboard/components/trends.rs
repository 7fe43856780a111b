use crate::{
    api::{ApiError, MonthlyTrends},
    components::layout::LoadingSpinner,
    pages::dashboard::utils::{trend_bars, TRENDS_ERROR_TEXT},
};
use leptos::*;

#[component]
pub fn TrendsSection(trends: Resource<(), Result<MonthlyTrends, ApiError>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-slate-900">"월별 처리 추이"</h3>
            {move || match trends.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(_)) => view! {
                    <div class="h-64 flex items-center justify-center text-slate-400">{TRENDS_ERROR_TEXT}</div>
                }
                .into_view(),
                Some(Ok(data)) => view! {
                    <div class="h-64 flex items-end gap-2">
                        {trend_bars(&data)
                            .into_iter()
                            .map(|bar| view! {
                                <div class="flex-1 flex flex-col items-center justify-end h-full">
                                    <span class="text-xs text-slate-600 mb-1">{bar.value}</span>
                                    <div
                                        class="w-full bg-blue-500/70 rounded-t"
                                        style=format!("height: {:.1}%", bar.height)
                                    ></div>
                                    <span class="text-xs text-slate-500 mt-1">{bar.label}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
