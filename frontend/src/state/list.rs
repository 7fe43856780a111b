use std::future::Future;

use leptos::*;

use crate::api::{error::ApiError, types::Page};

pub const PAGE_SIZE: usize = 20;
pub const DEFAULT_SORT_FIELD: &str = "timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// What the user is currently looking at. `F` is the page-specific filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F = String> {
    pub page_index: usize,
    pub page_size: usize,
    pub filter: Option<F>,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: PAGE_SIZE,
            filter: None,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Desc,
        }
    }
}

impl<F> ListQuery<F> {
    pub fn sort_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page_index.to_string()),
            ("size", self.page_size.to_string()),
            ("sortBy", self.sort_field.clone()),
            ("sortDir", self.sort_direction.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Page<T>),
    Error(String),
}

/// Identifies one load. Only the most recently issued ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ListController<T, F = String> {
    query: ListQuery<F>,
    state: ListState<T>,
    generation: u64,
}

impl<T, F: Clone + PartialEq> Default for ListController<T, F> {
    fn default() -> Self {
        Self::new(ListQuery::default())
    }
}

impl<T, F: Clone + PartialEq> ListController<T, F> {
    pub fn new(query: ListQuery<F>) -> Self {
        Self {
            query,
            state: ListState::Idle,
            generation: 0,
        }
    }

    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn page(&self) -> Option<&Page<T>> {
        match &self.state {
            ListState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ListState::Loading;
        LoadTicket(self.generation)
    }

    /// Reloads the current page and filter.
    pub fn reload(&mut self) -> LoadTicket {
        self.begin()
    }

    pub fn goto_page(&mut self, page_index: usize) -> LoadTicket {
        self.query.page_index = page_index;
        self.begin()
    }

    /// A new filter always starts over from the first page.
    pub fn set_filter(&mut self, filter: Option<F>) -> LoadTicket {
        self.query.filter = filter;
        self.query.page_index = 0;
        self.begin()
    }

    /// Applies a finished load. Returns `false` and leaves state untouched for stale tickets.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Page<T>, ApiError>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "discarding stale list response (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(page) => {
                self.query.page_index = page.page_index;
                ListState::Loaded(page)
            }
            Err(error) => ListState::Error(error.to_string()),
        };
        true
    }
}

/// Runs `fetch` for the controller's current query and applies the result under `ticket`.
pub async fn complete_load<T, F, Fetch, Fut>(
    controller: RwSignal<ListController<T, F>>,
    ticket: LoadTicket,
    fetch: Fetch,
) where
    T: 'static,
    F: Clone + PartialEq + 'static,
    Fetch: FnOnce(ListQuery<F>) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let query = controller.with_untracked(|c| c.query().clone());
    let result = fetch(query).await;
    controller.update(|c| {
        c.finish(ticket, result);
    });
}
