use crate::{
    api::{ApiError, Document},
    components::{
        badges::{ConfidenceBadge, StatusBadge},
        layout::LoadingSpinner,
    },
    pages::dashboard::utils::{DOCUMENTS_EMPTY_TEXT, DOCUMENTS_ERROR_TEXT},
    utils::time::format_date_minutes,
};
use leptos::*;

#[component]
pub fn RecentDocumentsSection(documents: Resource<(), Result<Vec<Document>, ApiError>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-base font-semibold text-slate-900">"최근 문서"</h3>
                <a href="/documents" class="text-sm text-blue-600 hover:underline">"전체 보기"</a>
            </div>
            {move || match documents.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(_)) => view! {
                    <div class="text-center text-slate-400 py-8">{DOCUMENTS_ERROR_TEXT}</div>
                }
                .into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <div class="text-center text-slate-400 py-8">{DOCUMENTS_EMPTY_TEXT}</div>
                }
                .into_view(),
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|doc| view! {
                        <a
                            href=format!("/documents/{}", doc.id)
                            class="flex items-center justify-between gap-3 p-3 rounded-lg hover:bg-slate-50"
                        >
                            <div class="min-w-0">
                                <p class="text-sm font-medium text-slate-800 truncate">
                                    {doc.display_name().unwrap_or("N/A").to_string()}
                                </p>
                                <p class="text-xs text-slate-400">{format_date_minutes(doc.created_at.as_deref())}</p>
                            </div>
                            <div class="flex items-center gap-2">
                                <ConfidenceBadge percent=doc.confidence />
                                <StatusBadge status=doc.status() />
                            </div>
                        </a>
                    })
                    .collect_view(),
            }}
        </div>
    }
}
