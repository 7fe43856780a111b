use crate::api::{Activity, ApiClient, ApiError, DashboardStats, Document, MonthlyTrends};
use crate::pages::dashboard::repository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats_resource: Resource<(), Result<DashboardStats, ApiError>>,
    pub trends_resource: Resource<(), Result<MonthlyTrends, ApiError>>,
    pub activities_resource: Resource<(), Result<Vec<Activity>, ApiError>>,
    pub documents_resource: Resource<(), Result<Vec<Document>, ApiError>>,
}

impl DashboardViewModel {
    /// Each section loads independently; one failing does not affect the others.
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let api_clone = api.clone();
        let stats_resource = create_resource(
            || (),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_stats(&api).await }
            },
        );

        let api_clone = api.clone();
        let trends_resource = create_resource(
            || (),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_trends(&api).await }
            },
        );

        let api_clone = api.clone();
        let activities_resource = create_resource(
            || (),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_activities(&api).await }
            },
        );

        let documents_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_recent_documents(&api).await }
            },
        );

        Self {
            stats_resource,
            trends_resource,
            activities_resource,
            documents_resource,
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
