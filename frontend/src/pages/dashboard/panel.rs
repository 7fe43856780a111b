use crate::pages::dashboard::{
    components::{ActivitiesSection, RecentDocumentsSection, SummarySection, TrendsSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <SummarySection stats={vm.stats_resource} />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <TrendsSection trends={vm.trends_resource} />
                </div>
                <ActivitiesSection activities={vm.activities_resource} />
            </div>
            <RecentDocumentsSection documents={vm.documents_resource} />
        </DashboardFrame>
    }
}
