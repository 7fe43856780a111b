use crate::{
    api::{Activity, ApiError},
    components::layout::LoadingSpinner,
    pages::dashboard::utils::{activity_row, ACTIVITIES_EMPTY_TEXT, ACTIVITIES_ERROR_TEXT},
    utils::time::now_local,
};
use leptos::*;

#[component]
pub fn ActivitiesSection(activities: Resource<(), Result<Vec<Activity>, ApiError>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-slate-900">"최근 활동"</h3>
            {move || match activities.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(_)) => view! {
                    <div class="text-center text-slate-400 py-8">{ACTIVITIES_ERROR_TEXT}</div>
                }
                .into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <div class="text-center text-slate-400 py-8">{ACTIVITIES_EMPTY_TEXT}</div>
                }
                .into_view(),
                Some(Ok(list)) => {
                    let now = now_local();
                    list.iter()
                        .map(|activity| activity_row(activity, now))
                        .map(|row| view! {
                            <div class="flex items-start gap-3 p-3 rounded-lg hover:bg-slate-50">
                                <div class="flex-1 min-w-0">
                                    <p class="text-sm font-medium text-slate-800 truncate">{row.username}</p>
                                    <p class="text-xs text-slate-600 truncate">{row.summary}</p>
                                    <p class="text-xs text-slate-400 mt-1">{row.when}</p>
                                </div>
                                {row.status.map(|(label, class)| view! {
                                    <span class=format!("text-xs px-2 py-1 rounded {}", class)>{label}</span>
                                })}
                            </div>
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}
