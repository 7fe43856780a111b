use super::repository::VerifyRepository;
use super::utils::{
    excel_file_name, VerifyForm, DOCUMENTS_PATH, EXCEL_FAILED_MESSAGE, EXCEL_MIME,
    LOAD_FAILED_MESSAGE, MISSING_ID_MESSAGE, PDF_FAILED_MESSAGE, REPROCESS_CONFIRM,
    REPROCESS_DONE_MESSAGE, REPROCESS_FAILED_MESSAGE, VERIFY_DONE_MESSAGE, VERIFY_FAILED_MESSAGE,
    VERIFY_REQUIRED_MESSAGE,
};
use crate::api::{ApiClient, Document};
use crate::utils::download::{object_url, revoke_object_url, trigger_download};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfState {
    Loading,
    Ready(String),
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct VerifyViewModel {
    pub document: RwSignal<Option<Document>>,
    pub form: RwSignal<VerifyForm>,
    pub pdf: RwSignal<PdfState>,
    repository: StoredValue<VerifyRepository>,
}

impl VerifyViewModel {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self {
            document: create_rw_signal(None),
            form: create_rw_signal(VerifyForm::default()),
            pdf: create_rw_signal(PdfState::Loading),
            repository: store_value(VerifyRepository::new_with_client(client)),
        }
    }

    fn repository(&self) -> VerifyRepository {
        self.repository.get_value()
    }

    fn document_id(&self) -> Option<i64> {
        self.document.with_untracked(|d| d.as_ref().map(|d| d.id))
    }

    /// Loads the document into the form. Any failure sends the user back to the list.
    pub async fn load(self, id: Option<String>) -> bool {
        let repository = self.repository();
        let navigator = repository.client().navigator();
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            navigator.alert(MISSING_ID_MESSAGE);
            navigator.redirect(DOCUMENTS_PATH);
            return false;
        };

        match repository.load(&id).await {
            Ok(document) => {
                self.form.set(VerifyForm::from_document(&document));
                self.document.set(Some(document));
                true
            }
            Err(err) => {
                log::error!("failed to load document {}: {}", id, err);
                if !err.is_unauthorized() {
                    navigator.alert(LOAD_FAILED_MESSAGE);
                    navigator.redirect(DOCUMENTS_PATH);
                }
                false
            }
        }
    }

    /// Fetches the PDF with the bearer token and exposes it as an object URL.
    pub async fn load_pdf(self) {
        let Some(id) = self.document_id() else {
            return;
        };
        self.release_pdf();
        self.pdf.set(PdfState::Loading);
        let state = match self.repository().pdf(id).await {
            Ok(bytes) => match object_url(&bytes, "application/pdf") {
                Ok(url) => PdfState::Ready(url),
                Err(err) => {
                    log::error!("failed to display pdf: {}", err);
                    PdfState::Failed(PDF_FAILED_MESSAGE.to_string())
                }
            },
            Err(err) => {
                log::error!("failed to fetch pdf {}: {}", id, err);
                PdfState::Failed(PDF_FAILED_MESSAGE.to_string())
            }
        };
        self.pdf.set(state);
    }

    pub fn release_pdf(&self) {
        if let PdfState::Ready(url) = self.pdf.get_untracked() {
            revoke_object_url(&url);
        }
    }

    pub async fn reprocess(self) -> bool {
        let Some(id) = self.document_id() else {
            return false;
        };
        let repository = self.repository();
        let navigator = repository.client().navigator();
        if !navigator.confirm(REPROCESS_CONFIRM) {
            return false;
        }
        match repository.reprocess(id).await {
            Ok(_) => {
                navigator.alert(REPROCESS_DONE_MESSAGE);
                self.load(Some(id.to_string())).await
            }
            Err(err) => {
                log::error!("reprocess of {} failed: {}", id, err);
                if !err.is_unauthorized() {
                    navigator.alert(REPROCESS_FAILED_MESSAGE);
                }
                false
            }
        }
    }

    /// Saves the edited fields as completed. Requires the review checkbox.
    pub async fn finalize(self) -> bool {
        let Some(id) = self.document_id() else {
            return false;
        };
        let repository = self.repository();
        let navigator = repository.client().navigator();
        let form = self.form.get_untracked();
        if !form.verified {
            navigator.alert(VERIFY_REQUIRED_MESSAGE);
            return false;
        }
        match repository.finalize(id, &form.to_update()).await {
            Ok(_) => {
                log::info!("document {} verified", id);
                navigator.alert(VERIFY_DONE_MESSAGE);
                navigator.redirect(DOCUMENTS_PATH);
                true
            }
            Err(err) => {
                log::error!("finalize of {} failed: {}", id, err);
                if !err.is_unauthorized() {
                    navigator.alert(VERIFY_FAILED_MESSAGE);
                }
                false
            }
        }
    }

    pub async fn download_excel(self) {
        let Some(document) = self.document.get_untracked() else {
            return;
        };
        let repository = self.repository();
        let navigator = repository.client().navigator();
        let saved = match repository.excel(&document).await {
            Ok(bytes) => trigger_download(&excel_file_name(&document), &bytes, EXCEL_MIME),
            Err(err) if err.is_unauthorized() => return,
            Err(err) => Err(err.to_string()),
        };
        if let Err(err) = saved {
            log::error!("excel export failed: {}", err);
            navigator.alert(EXCEL_FAILED_MESSAGE);
        }
    }
}

pub fn use_verify_view_model() -> VerifyViewModel {
    match use_context::<VerifyViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
            let vm = VerifyViewModel::new_with_client(api);
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::helpers::{
        document, session_with_role, test_client, test_client_with_answers, TestClient,
    };
    use httpmock::prelude::*;

    fn mock_document(server: &MockServer) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(GET).path("/api/extract/documents/7");
            then.status(200)
                .json_body(serde_json::to_value(document(7, "DOC-7", "lease.pdf")).unwrap());
        })
    }

    #[tokio::test]
    async fn load_fills_form_from_document() {
        let server = MockServer::start_async().await;
        mock_document(&server);
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::User)));
        let vm = VerifyViewModel::new_with_client(api);

        assert!(vm.load(Some("7".into())).await);
        let form = vm.form.get_untracked();
        assert_eq!(form.contractor_a, "주식회사 갑");
        assert_eq!(form.contract_amount, "1,000,000");
        assert!(!form.verified);
        assert!(navigator.alerts().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn load_failure_returns_to_document_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/extract/documents/404");
            then.status(404).json_body(serde_json::json!({ "message": "not found" }));
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::User)));
        let vm = VerifyViewModel::new_with_client(api);

        assert!(!vm.load(Some("404".into())).await);
        assert_eq!(navigator.alerts(), vec![LOAD_FAILED_MESSAGE]);
        assert_eq!(navigator.redirects(), vec![DOCUMENTS_PATH]);
        assert!(vm.document.get_untracked().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_id_never_hits_server() {
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(None, Some(session_with_role(Role::User)));
        let vm = VerifyViewModel::new_with_client(api);
        assert!(!vm.load(None).await);
        assert_eq!(navigator.alerts(), vec![MISSING_ID_MESSAGE]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn finalize_requires_checkbox_then_saves_completed() {
        let server = MockServer::start_async().await;
        mock_document(&server);
        let save = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/extract/documents/7")
                .json_body_partial(r#"{ "status": "completed", "contractAmount": "2,500,000" }"#);
            then.status(200)
                .json_body(serde_json::to_value(document(7, "DOC-7", "lease.pdf")).unwrap());
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::User)));
        let vm = VerifyViewModel::new_with_client(api);
        vm.load(Some("7".into())).await;

        assert!(!vm.finalize().await);
        assert_eq!(navigator.alerts(), vec![VERIFY_REQUIRED_MESSAGE]);
        save.assert_hits(0);

        vm.form.update(|f| {
            f.contract_amount = "2,500,000".into();
            f.verified = true;
        });
        assert!(vm.finalize().await);
        save.assert();
        assert_eq!(navigator.last_redirect().as_deref(), Some(DOCUMENTS_PATH));
        assert_eq!(navigator.alerts().last().map(String::as_str), Some(VERIFY_DONE_MESSAGE));
        runtime.dispose();
    }

    #[tokio::test]
    async fn reprocess_declined_sends_nothing() {
        let server = MockServer::start_async().await;
        mock_document(&server);
        let reprocess = server.mock(|when, then| {
            when.method(POST).path("/api/extract/documents/7/reprocess");
            then.status(200).json_body(serde_json::json!({ "message": "ok" }));
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } = test_client_with_answers(
            Some(server.url("/api")),
            Some(session_with_role(Role::User)),
            &[false, true],
        );
        let vm = VerifyViewModel::new_with_client(api);
        vm.load(Some("7".into())).await;

        assert!(!vm.reprocess().await);
        reprocess.assert_hits(0);

        assert!(vm.reprocess().await);
        reprocess.assert_hits(1);
        assert_eq!(navigator.alerts(), vec![REPROCESS_DONE_MESSAGE]);
        assert_eq!(navigator.confirms(), vec![REPROCESS_CONFIRM, REPROCESS_CONFIRM]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_reprocess_keeps_document() {
        let server = MockServer::start_async().await;
        mock_document(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/extract/documents/7/reprocess");
            then.status(500);
        });
        let runtime = create_runtime();
        let TestClient { api, navigator, .. } =
            test_client(Some(server.url("/api")), Some(session_with_role(Role::User)));
        let vm = VerifyViewModel::new_with_client(api);
        vm.load(Some("7".into())).await;

        assert!(!vm.reprocess().await);
        assert_eq!(navigator.alerts(), vec![REPROCESS_FAILED_MESSAGE]);
        assert!(vm.document.get_untracked().is_some());
        assert!(navigator.redirects().is_empty());
        runtime.dispose();
    }
}
