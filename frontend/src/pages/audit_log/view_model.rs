use super::repository::AuditLogRepository;
use super::utils::{self, detail_fields, EXPORT_BASE_NAME, EXPORT_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
use crate::api::{ApiClient, ApiError, AuditLogEntry};
use crate::state::list::{complete_load, ListController, LoadTicket};
use crate::utils::{
    csv::{export_file_name, CSV_MIME},
    detail::DetailField,
    download::trigger_download,
    time::today_local,
};
use leptos::*;

pub type AuditLogList = ListController<AuditLogEntry>;

#[derive(Clone, Copy)]
pub struct AuditLogViewModel {
    pub list: RwSignal<AuditLogList>,
    pub action_filter: RwSignal<String>,
    pub detail: RwSignal<Option<AuditLogEntry>>,
    repository: StoredValue<AuditLogRepository>,
}

impl AuditLogViewModel {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self {
            list: create_rw_signal(AuditLogList::default()),
            action_filter: create_rw_signal(String::new()),
            detail: create_rw_signal(None),
            repository: store_value(AuditLogRepository::new_with_client(client)),
        }
    }

    fn repository(&self) -> AuditLogRepository {
        self.repository.get_value()
    }

    async fn run(self, change: impl FnOnce(&mut AuditLogList) -> LoadTicket) {
        let mut ticket = None;
        self.list.update(|c| ticket = Some(change(c)));
        let Some(ticket) = ticket else {
            return;
        };
        let repository = self.repository();
        complete_load(self.list, ticket, |query| async move {
            let result = repository.fetch_page(&query).await;
            if let Err(err) = &result {
                log::error!("failed to load audit logs: {}", err);
            }
            result
        })
        .await;
    }

    pub async fn reload(self) {
        self.run(AuditLogList::reload).await;
    }

    pub async fn goto_page(self, page_index: usize) {
        self.run(|c| c.goto_page(page_index)).await;
    }

    /// An empty action means all actions.
    pub async fn filter_by_action(self, action: String) {
        self.action_filter.set(action.clone());
        let filter = (!action.is_empty()).then_some(action);
        self.run(|c| c.set_filter(filter)).await;
    }

    /// The backend has no single-entry route, so only the loaded page is searched.
    pub fn show_detail(&self, id: i64) {
        let entry = self.list.with_untracked(|c| {
            c.page()
                .and_then(|p| p.items.iter().find(|e| e.id == id).cloned())
        });
        match entry {
            Some(entry) => self.detail.set(Some(entry)),
            None => {
                log::warn!("audit log {} is not on the loaded page", id);
                self.repository().client().navigator().alert(NOT_FOUND_MESSAGE);
            }
        }
    }

    pub fn close_detail(&self) {
        self.detail.set(None);
    }

    pub fn detail_view(&self) -> Signal<Option<Vec<DetailField>>> {
        let detail = self.detail;
        Signal::derive(move || detail.with(|d| d.as_ref().map(|e| detail_fields(e).into_vec())))
    }

    pub async fn export_bytes(self) -> Result<Vec<u8>, ApiError> {
        let entries = self.repository().fetch_for_export().await?;
        log::info!("exporting {} audit log entries", entries.len());
        Ok(utils::to_csv(&entries))
    }

    pub async fn export_csv(self) {
        let saved = match self.export_bytes().await {
            Ok(bytes) => trigger_download(
                &export_file_name(EXPORT_BASE_NAME, today_local()),
                &bytes,
                CSV_MIME,
            ),
            Err(err) if err.is_unauthorized() => return,
            Err(err) => Err(err.to_string()),
        };
        if let Err(err) = saved {
            log::error!("audit log export failed: {}", err);
            self.repository().client().navigator().alert(EXPORT_ERROR_MESSAGE);
        }
    }
}

pub fn use_audit_log_view_model() -> AuditLogViewModel {
    match use_context::<AuditLogViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
            let vm = AuditLogViewModel::new_with_client(api);
            provide_context(vm);
            vm
        }
    }
}
