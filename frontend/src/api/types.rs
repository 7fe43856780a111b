use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "일반 사용자",
            Role::Manager => "관리자",
            Role::Admin => "최고 관리자",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Admin => "bg-purple-100 text-purple-800",
            Role::Manager => "bg-yellow-100 text-yellow-800",
            Role::User => "bg-blue-100 text-blue-800",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Shared by login and register; failures carry only `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One bounded slice of a server-side collection, in the Spring Data page shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "content", default)]
    pub items: Vec<T>,
    #[serde(rename = "number", default)]
    pub page_index: usize,
    #[serde(rename = "size", default)]
    pub page_size: usize,
    #[serde(rename = "totalElements", default)]
    pub total_items: usize,
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size,
            total_items: 0,
            total_pages: 0,
        }
    }

    /// 1-based inclusive range of the rows shown, `None` when the page is empty.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = self.page_index * self.page_size + 1;
        let end = ((self.page_index + 1) * self.page_size).min(self.total_items);
        Some((start, end))
    }

    /// e.g. `총 41개 로그 중 21-40 표시`.
    pub fn summary(&self, noun: &str) -> String {
        match self.row_range() {
            Some((start, end)) => format!(
                "총 {}개 {} 중 {}-{} 표시",
                self.total_items, noun, start, end
            ),
            None => format!("총 {}개 {}", self.total_items, noun),
        }
    }
}

impl<T: Clone> Page<T> {
    /// Slices an already fully loaded collection. Out-of-range indices clamp to the last page.
    pub fn from_slice(all: &[T], page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_items = all.len();
        let total_pages = total_items.div_ceil(page_size);
        let page_index = page_index.min(total_pages.saturating_sub(1));
        let start = page_index * page_size;
        let end = (start + page_size).min(total_items);
        Self {
            items: all.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
            page_index,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Error,
    Unknown,
}

impl DocumentStatus {
    pub const FILTERABLE: [DocumentStatus; 4] = [
        DocumentStatus::Completed,
        DocumentStatus::Pending,
        DocumentStatus::Processing,
        DocumentStatus::Error,
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("pending") => Self::Pending,
            Some("processing") => Self::Processing,
            Some("completed") => Self::Completed,
            Some("error") => Self::Error,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "대기 중",
            Self::Processing => "처리 중",
            Self::Completed => "완료",
            Self::Error => "오류",
            Self::Unknown => "알 수 없음",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-700",
            Self::Processing => "bg-blue-100 text-blue-700",
            Self::Completed => "bg-green-100 text-green-700",
            Self::Error => "bg-red-100 text-red-700",
            Self::Unknown => "bg-slate-100 text-slate-700",
        }
    }
}

/// A stored extraction. The backend emits the file name under both `fileName` and `filename`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, rename = "filename")]
    pub filename: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub contractor_a: Option<String>,
    #[serde(default)]
    pub contractor_b: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub contract_amount: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Document {
    /// Identifier accepted by the delete endpoints.
    pub fn key(&self) -> String {
        self.doc_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .or(self.file_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn status(&self) -> DocumentStatus {
        DocumentStatus::parse(self.status.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    pub contractor_a: String,
    pub contractor_b: String,
    pub contract_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl AuditLogEntry {
    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some("FAILED")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionLog {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub contractor_a: Option<String>,
    #[serde(default)]
    pub contractor_b: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    /// Ratio in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub logs: Vec<ExtractionLog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub monthly_documents: u64,
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub average_accuracy: f64,
    #[serde(default)]
    pub pending_documents: u64,
    #[serde(default)]
    pub error_documents: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrends {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<u64>,
}

impl MonthlyTrends {
    pub fn points(&self) -> Vec<(String, u64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivities {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub total: usize,
}

/// Body of the delete/reprocess endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_deserializes_spring_shape() {
        let page: Page<AuditLogEntry> = serde_json::from_value(json!({
            "content": [{ "id": 7, "username": "admin", "action": "LOGIN", "status": "SUCCESS" }],
            "number": 2,
            "size": 20,
            "totalElements": 41,
            "totalPages": 3
        }))
        .expect("page json");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.row_range(), Some((41, 41)));
        assert_eq!(page.summary("로그"), "총 41개 로그 중 41-41 표시");
    }

    #[test]
    fn from_slice_renders_expected_row_counts() {
        let all: Vec<u32> = (0..45).collect();
        for (index, expected) in [(0, 20), (1, 20), (2, 5)] {
            let page = Page::from_slice(&all, index, 20);
            assert_eq!(page.items.len(), expected);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.page_index, index);
        }
        let clamped = Page::from_slice(&all, 9, 20);
        assert_eq!(clamped.page_index, 2);
        assert_eq!(clamped.items, vec![40, 41, 42, 43, 44]);
    }

    #[test]
    fn from_slice_handles_empty_collections() {
        let page = Page::<u32>::from_slice(&[], 3, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.row_range(), None);
        assert_eq!(page.summary("문서"), "총 0개 문서");
    }

    #[test]
    fn document_accepts_both_file_name_keys() {
        let doc: Document = serde_json::from_value(json!({
            "id": 3,
            "docId": "DOC-abc",
            "fileName": "contract.pdf",
            "filename": "contract.pdf",
            "contractAmount": "1,200,000",
            "confidence": 82.5,
            "status": "completed"
        }))
        .expect("document json");
        assert_eq!(doc.key(), "DOC-abc");
        assert_eq!(doc.display_name(), Some("contract.pdf"));
        assert_eq!(doc.status(), DocumentStatus::Completed);
    }

    #[test]
    fn document_key_falls_back_to_numeric_id() {
        let doc = Document {
            id: 12,
            ..Document::default()
        };
        assert_eq!(doc.key(), "12");
        assert_eq!(doc.display_name(), None);
        assert_eq!(doc.status(), DocumentStatus::Unknown);
    }

    #[test]
    fn role_round_trips_through_wire_names() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert!("root".parse::<Role>().is_err());
        assert_eq!(serde_json::to_value(Role::Manager).expect("role"), json!("MANAGER"));
        assert_eq!(Role::User.label(), "일반 사용자");
    }

    #[test]
    fn monthly_trends_zip_labels_with_counts() {
        let trends = MonthlyTrends {
            labels: vec!["2025-01".into(), "2025-02".into(), "2025-03".into()],
            data: vec![4, 9],
        };
        assert_eq!(
            trends.points(),
            vec![("2025-01".to_string(), 4), ("2025-02".to_string(), 9)]
        );
    }
}
