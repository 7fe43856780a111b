use super::repository::DocumentsRepository;
use super::utils::{filter_documents, DocumentFilter};
use crate::api::{ApiClient, Document, Page};
use crate::state::{
    list::{ListController, ListQuery, LoadTicket},
    selection::SelectionSet,
};
use leptos::*;

pub type DocumentList = ListController<Document, DocumentFilter>;

fn local_page(all: &[Document], query: &ListQuery<DocumentFilter>) -> Page<Document> {
    let filtered = filter_documents(all, query.filter.as_ref());
    Page::from_slice(&filtered, query.page_index, query.page_size)
}

/// The server returns every document at once; filtering and paging happen on the cached copy.
#[derive(Clone, Copy)]
pub struct DocumentsViewModel {
    pub list: RwSignal<DocumentList>,
    pub selection: RwSignal<SelectionSet>,
    pub filter: RwSignal<DocumentFilter>,
    cache: RwSignal<Vec<Document>>,
    repository: StoredValue<DocumentsRepository>,
}

impl DocumentsViewModel {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self {
            list: create_rw_signal(DocumentList::default()),
            selection: create_rw_signal(SelectionSet::default()),
            filter: create_rw_signal(DocumentFilter::default()),
            cache: create_rw_signal(Vec::new()),
            repository: store_value(DocumentsRepository::new_with_client(client)),
        }
    }

    pub fn repository(&self) -> DocumentsRepository {
        self.repository.get_value()
    }

    /// Refetches from the server and re-applies the current page and filter.
    pub async fn reload(self) {
        let mut ticket = None;
        self.list.update(|c| ticket = Some(c.reload()));
        let Some(ticket) = ticket else {
            return;
        };
        let result = self.repository().fetch_all().await.map(|all| {
            let page = self.list.with_untracked(|c| local_page(&all, c.query()));
            self.cache.set(all);
            page
        });
        if let Err(err) = &result {
            log::error!("failed to load documents: {}", err);
        }
        self.list.update(|c| {
            c.finish(ticket, result);
        });
    }

    fn show_cached(&self, change: impl FnOnce(&mut DocumentList) -> LoadTicket) {
        let cache = self.cache;
        self.list.update(|c| {
            let ticket = change(c);
            let page = cache.with_untracked(|all| local_page(all, c.query()));
            c.finish(ticket, Ok(page));
        });
    }

    pub fn goto_page(&self, page_index: usize) {
        self.show_cached(|c| c.goto_page(page_index));
    }

    /// Applies the filter inputs, starting from the first page.
    pub fn apply_filter(&self) {
        let filter = self.filter.get_untracked();
        let filter = (!filter.is_empty()).then_some(filter);
        self.show_cached(|c| c.set_filter(filter));
    }

    pub fn page_keys(&self) -> Vec<String> {
        self.list.with(|c| {
            c.page()
                .map(|p| p.items.iter().map(Document::key).collect())
                .unwrap_or_default()
        })
    }
}

pub fn use_documents_view_model() -> DocumentsViewModel {
    match use_context::<DocumentsViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
            let vm = DocumentsViewModel::new_with_client(api);
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{DocumentStatus, Role};
    use crate::test_support::helpers::{document, session_with_role, test_client};
    use httpmock::prelude::*;

    fn documents_json(count: i64) -> serde_json::Value {
        let docs: Vec<Document> = (1..=count)
            .map(|i| document(i, &format!("DOC-{}", i), &format!("file-{}.pdf", i)))
            .collect();
        serde_json::to_value(docs).unwrap()
    }

    #[tokio::test]
    async fn pages_and_filters_use_cached_list() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/extract/documents");
            then.status(200).json_body(documents_json(45));
        });
        let runtime = create_runtime();
        let api = test_client(Some(server.url("/api")), Some(session_with_role(Role::User))).api;
        let vm = DocumentsViewModel::new_with_client(api);

        vm.reload().await;
        assert_eq!(vm.list.with_untracked(|c| c.page().map(|p| p.items.len())), Some(20));

        vm.goto_page(2);
        let page = vm.list.with_untracked(|c| c.page().cloned()).unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page_index, 2);

        vm.filter.set(DocumentFilter {
            search: "file-4".into(),
            status: Some(DocumentStatus::Completed),
        });
        vm.apply_filter();
        let page = vm.list.with_untracked(|c| c.page().cloned()).unwrap();
        assert_eq!(page.page_index, 0);
        assert_eq!(page.total_items, 7);
        mock.assert_hits(1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_load_sets_error_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/extract/documents");
            then.status(500).json_body(serde_json::json!({ "message": "db down" }));
        });
        let runtime = create_runtime();
        let api = test_client(Some(server.url("/api")), Some(session_with_role(Role::User))).api;
        let vm = DocumentsViewModel::new_with_client(api);

        vm.reload().await;
        assert_eq!(vm.list.with_untracked(|c| c.error().map(str::to_string)), Some("db down".into()));
        runtime.dispose();
    }
}
