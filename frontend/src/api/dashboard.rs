use super::{
    client::ApiClient,
    error::ApiError,
    types::{DashboardStats, MonthlyTrends, RecentActivities},
};

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats", &[]).await
    }

    pub async fn monthly_trends(&self) -> Result<MonthlyTrends, ApiError> {
        self.get_json("/dashboard/monthly-trends", &[]).await
    }

    pub async fn recent_activities(&self, limit: usize) -> Result<RecentActivities, ApiError> {
        self.get_json("/dashboard/recent-activities", &[("limit", limit.to_string())])
            .await
    }
}
