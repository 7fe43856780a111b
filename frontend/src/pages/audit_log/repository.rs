use super::utils::EXPORT_PAGE_SIZE;
use crate::api::{ApiClient, ApiError, AuditLogEntry, Page};
use crate::state::list::ListQuery;

#[derive(Clone)]
pub struct AuditLogRepository {
    client: ApiClient,
}

impl AuditLogRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_page(&self, query: &ListQuery) -> Result<Page<AuditLogEntry>, ApiError> {
        self.client.list_audit_logs(query).await
    }

    /// Newest entries across all actions, as one oversized first page.
    pub async fn fetch_for_export(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        let query = ListQuery {
            page_size: EXPORT_PAGE_SIZE,
            ..ListQuery::default()
        };
        Ok(self.client.list_audit_logs(&query).await?.items)
    }
}
