use super::{
    client::{encode_segment, ApiClient},
    error::ApiError,
    types::{AuditLogEntry, Page},
};
use crate::state::list::ListQuery;

impl ApiClient {
    /// `query.filter` holds an action type; when set, the action-scoped listing is used.
    pub async fn list_audit_logs(
        &self,
        query: &ListQuery,
    ) -> Result<Page<AuditLogEntry>, ApiError> {
        let path = match query.filter.as_deref().filter(|a| !a.is_empty()) {
            Some(action) => format!("/audit/action/{}", encode_segment(action)),
            None => "/audit".to_string(),
        };
        self.get_json(&path, &query.sort_params()).await
    }
}
