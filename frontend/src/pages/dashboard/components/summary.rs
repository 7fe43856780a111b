use crate::{
    api::{ApiError, DashboardStats},
    pages::dashboard::utils::stat_cards,
};
use leptos::*;

#[component]
pub fn SummarySection(stats: Resource<(), Result<DashboardStats, ApiError>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {move || {
                let result = stats.get();
                stat_cards(result.as_ref())
                    .into_iter()
                    .map(|card| view! { <Metric label=card.label value=card.value /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-white border border-slate-200 shadow-sm">
            <p class="text-xs font-semibold text-slate-500 uppercase tracking-wide">{label}</p>
            <p class="mt-2 text-3xl font-bold text-slate-900">{value}</p>
        </div>
    }
}
