use crate::api::{Document, DocumentStatus};

pub const LOAD_ERROR_MESSAGE: &str = "문서 목록을 불러오는데 실패했습니다.";
pub const EMPTY_MESSAGE: &str = "검색 결과가 없습니다.";
pub const NOTHING_SELECTED_MESSAGE: &str = "삭제할 문서를 선택해주세요.";
pub const DELETE_ONE_CONFIRM: &str = "이 문서를 삭제하시겠습니까?";
pub const DELETE_ALL_CONFIRM: &str = "모든 문서를 삭제하시겠습니까?";
pub const DELETE_ALL_FINAL_CONFIRM: &str =
    "이 작업은 되돌릴 수 없습니다. 정말로 모든 문서를 삭제하시겠습니까?";
pub const DELETE_DONE_MESSAGE: &str = "문서가 삭제되었습니다.";
pub const DELETE_FAILED_MESSAGE: &str = "문서 삭제에 실패했습니다.";

pub fn delete_selected_confirm(count: usize) -> String {
    format!("선택한 {}개의 문서를 삭제하시겠습니까?", count)
}

/// Search text and status applied to the cached document list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub search: String,
    pub status: Option<DocumentStatus>,
}

impl DocumentFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none()
    }

    /// Case-insensitive substring match over file name, both contractors and the amount.
    pub fn matches(&self, document: &Document) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || [
                document.display_name(),
                document.contractor_a.as_deref(),
                document.contractor_b.as_deref(),
                document.contract_amount.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&term));
        let matches_status = self.status.map_or(true, |status| document.status() == status);
        matches_search && matches_status
    }
}

pub fn filter_documents(all: &[Document], filter: Option<&DocumentFilter>) -> Vec<Document> {
    match filter {
        Some(filter) if !filter.is_empty() => {
            all.iter().filter(|d| filter.matches(d)).cloned().collect()
        }
        _ => all.to_vec(),
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::document;

    fn sample() -> Vec<Document> {
        let mut pending = document(2, "DOC-2", "lease.pdf");
        pending.status = Some("pending".into());
        pending.contractor_a = Some("Acme Corp".into());
        vec![document(1, "DOC-1", "contract.pdf"), pending]
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let docs = sample();
        let filter = DocumentFilter {
            search: "ACME".into(),
            status: None,
        };
        let found = filter_documents(&docs, Some(&filter));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let by_amount = DocumentFilter {
            search: "1,000".into(),
            status: None,
        };
        assert_eq!(filter_documents(&docs, Some(&by_amount)).len(), 2);
    }

    #[test]
    fn search_falls_back_to_camel_case_file_name() {
        let mut only_file_name = document(7, "DOC-7", "lease.pdf");
        only_file_name.filename = None;
        let filter = DocumentFilter {
            search: "lease".into(),
            status: None,
        };
        assert!(filter.matches(&only_file_name));
    }

    #[test]
    fn status_filter_combines_with_search() {
        let docs = sample();
        let filter = DocumentFilter {
            search: "pdf".into(),
            status: Some(DocumentStatus::Completed),
        };
        let found = filter_documents(&docs, Some(&filter));
        assert_eq!(found.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let docs = sample();
        assert_eq!(filter_documents(&docs, None).len(), 2);
        assert_eq!(filter_documents(&docs, Some(&DocumentFilter::default())).len(), 2);
    }

    #[test]
    fn dash_for_missing_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("갑")), "갑");
    }
}
