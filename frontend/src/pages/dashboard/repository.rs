use crate::api::{
    dashboard::RECENT_ACTIVITY_LIMIT, Activity, ApiClient, ApiError, DashboardStats, Document,
    MonthlyTrends,
};

pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.dashboard_stats().await.inspect_err(|err| {
        log::error!("failed to load dashboard stats: {}", err);
    })
}

pub async fn fetch_trends(api: &ApiClient) -> Result<MonthlyTrends, ApiError> {
    api.monthly_trends().await.inspect_err(|err| {
        log::error!("failed to load monthly trends: {}", err);
    })
}

pub async fn fetch_activities(api: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    let recent = api
        .recent_activities(RECENT_ACTIVITY_LIMIT)
        .await
        .inspect_err(|err| log::error!("failed to load recent activities: {}", err))?;
    Ok(recent.activities)
}

pub async fn fetch_recent_documents(api: &ApiClient) -> Result<Vec<Document>, ApiError> {
    api.recent_documents().await.inspect_err(|err| {
        log::error!("failed to load recent documents: {}", err);
    })
}
