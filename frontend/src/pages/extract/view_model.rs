use super::repository::{self, UploadRequest};
use super::utils::{is_pdf, ExtractState, EXPORT_DONE_MESSAGE, INVALID_FILE_MESSAGE};
use crate::api::{ApiClient, ApiError, ExtractionResult};
use crate::utils::{
    csv::CSV_MIME,
    download::trigger_download,
    time::{now_local, today_local},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ExtractViewModel {
    pub state: RwSignal<ExtractState>,
    pub upload_action: Action<UploadRequest, Result<ExtractionResult, ApiError>>,
}

impl ExtractViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let state = create_rw_signal(ExtractState::default());
        let upload_action = create_action(move |request: &UploadRequest| {
            let api = api.clone();
            let request = request.clone();
            async move { repository::upload(&api, request).await }
        });

        create_effect(move |_| {
            let Some(result) = upload_action.value().get() else {
                return;
            };
            let now = now_local();
            state.update(|s| match &result {
                Ok(result) => s.apply_result(result, now),
                Err(err) => s.apply_failure(&err.to_string(), now),
            });
        });

        Self {
            state,
            upload_action,
        }
    }

    /// Returns whether the file should be read and uploaded.
    pub fn accept_file(&self, file_name: &str, mime: &str, size_bytes: f64) -> bool {
        let now = now_local();
        if !is_pdf(file_name, mime) {
            self.state.update(|s| s.log("WARN", INVALID_FILE_MESSAGE, now));
            return false;
        }
        if self.upload_action.pending().get_untracked() {
            return false;
        }
        self.state
            .update(|s| s.begin_upload(file_name, size_bytes, now));
        true
    }

    pub fn upload(&self, file_name: String, bytes: Vec<u8>) {
        self.upload_action.dispatch(UploadRequest { file_name, bytes });
    }

    pub fn read_failed(&self, message: &str) {
        let now = now_local();
        self.state.update(|s| s.apply_failure(message, now));
    }

    pub fn export_csv(&self) {
        let fields = self.state.with_untracked(|s| s.fields.clone());
        let file_name = fields.export_file_name(today_local());
        let now = now_local();
        match trigger_download(&file_name, &fields.to_csv(), CSV_MIME) {
            Ok(()) => self.state.update(|s| s.log("INFO", EXPORT_DONE_MESSAGE, now)),
            Err(err) => self.state.update(|s| s.log("ERROR", err, now)),
        }
    }
}

pub fn use_extract_view_model() -> ExtractViewModel {
    match use_context::<ExtractViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ExtractViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
