use crate::api::AuditLogEntry;
use crate::utils::{
    csv::{self, Column},
    detail::{DetailFields, FieldStyle},
    time::format_date_time,
};

pub const LOAD_ERROR_MESSAGE: &str = "로그를 불러오는 중 오류가 발생했습니다.";
pub const EMPTY_MESSAGE: &str = "표시할 로그가 없습니다.";
pub const NOT_FOUND_MESSAGE: &str = "로그를 찾을 수 없습니다.";
pub const EXPORT_ERROR_MESSAGE: &str = "로그를 내보내는 중 오류가 발생했습니다.";
pub const EXPORT_BASE_NAME: &str = "audit_logs";
pub const EXPORT_PAGE_SIZE: usize = 10_000;
pub const ANONYMOUS: &str = "anonymous";

/// Action types offered by the filter, in display order.
pub const ACTIONS: [&str; 11] = [
    "LOGIN",
    "LOGOUT",
    "REGISTER",
    "DOCUMENT_UPLOAD",
    "DOCUMENT_VIEW",
    "DOCUMENT_DOWNLOAD",
    "DOCUMENT_EDIT",
    "DOCUMENT_DELETE",
    "DOCUMENT_EXPORT",
    "UNAUTHORIZED_ACCESS",
    "SETTINGS_CHANGE",
];

/// Unknown actions are shown as sent.
pub fn action_label(action: &str) -> &str {
    match action {
        "LOGIN" => "로그인",
        "LOGOUT" => "로그아웃",
        "REGISTER" => "회원가입",
        "DOCUMENT_UPLOAD" => "문서 업로드",
        "DOCUMENT_VIEW" => "문서 조회",
        "DOCUMENT_DOWNLOAD" => "문서 다운로드",
        "DOCUMENT_EDIT" => "문서 수정",
        "DOCUMENT_DELETE" => "문서 삭제",
        "DOCUMENT_EXPORT" => "문서 내보내기",
        "UNAUTHORIZED_ACCESS" => "무단 접근",
        "SETTINGS_CHANGE" => "설정 변경",
        other => other,
    }
}

pub fn action_badge_class(action: &str) -> &'static str {
    match action {
        "LOGIN" | "REGISTER" => "bg-blue-100 text-blue-800",
        "LOGOUT" => "bg-gray-100 text-gray-800",
        "UNAUTHORIZED_ACCESS" => "bg-red-100 text-red-800",
        a if a.starts_with("DOCUMENT") => "bg-green-100 text-green-800",
        _ => "bg-yellow-100 text-yellow-800",
    }
}

pub fn status_badge_class(success: bool) -> &'static str {
    if success {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    }
}

/// `None` when the entry carries no status.
pub fn status_label(entry: &AuditLogEntry) -> Option<&'static str> {
    match entry.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some("SUCCESS") => Some("성공"),
        Some(_) => Some("실패"),
    }
}

pub fn username(entry: &AuditLogEntry) -> &str {
    entry
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or(ANONYMOUS)
}

pub fn entry_action(entry: &AuditLogEntry) -> &str {
    entry.action.as_deref().unwrap_or_default()
}

pub fn detail_fields(entry: &AuditLogEntry) -> DetailFields {
    let id = entry.id.to_string();
    let timestamp = entry
        .timestamp
        .as_deref()
        .map(|raw| format_date_time(Some(raw)));
    DetailFields::new()
        .always("로그 ID", Some(id.as_str()), FieldStyle::Plain)
        .always("사용자", Some(username(entry)), FieldStyle::Plain)
        .always("활동 유형", entry.action.as_deref().map(action_label), FieldStyle::Plain)
        .always("상태", status_label(entry), FieldStyle::Plain)
        .always("타임스탬프", timestamp.as_deref(), FieldStyle::Mono)
        .always("IP 주소", entry.ip_address.as_deref(), FieldStyle::Mono)
        .always("리소스", entry.resource.as_deref(), FieldStyle::Plain)
        .optional("문서 ID", entry.document_id.as_deref(), FieldStyle::Mono)
        .always("상세 정보", entry.details.as_deref(), FieldStyle::Block)
        .optional("사용자 에이전트", entry.user_agent.as_deref(), FieldStyle::Mono)
        .optional("에러 메시지", entry.error_message.as_deref(), FieldStyle::Error)
}

fn export_columns() -> [Column<AuditLogEntry>; 8] {
    fn text(value: &Option<String>) -> String {
        value.clone().unwrap_or_default()
    }
    [
        Column::new("타임스탬프", |e| format_date_time(e.timestamp.as_deref())),
        Column::new("사용자", |e| text(&e.username)),
        Column::new("활동유형", |e| action_label(entry_action(e)).to_string()),
        Column::new("상태", |e| text(&e.status)),
        Column::new("리소스", |e| text(&e.resource)),
        Column::new("문서ID", |e| text(&e.document_id)),
        Column::new("상세정보", |e| text(&e.details)),
        Column::new("IP주소", |e| text(&e.ip_address)),
    ]
}

pub fn to_csv(entries: &[AuditLogEntry]) -> Vec<u8> {
    csv::to_csv(entries, &export_columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::audit_entry;

    #[test]
    fn labels_known_actions_and_passes_through_unknown() {
        assert_eq!(action_label("DOCUMENT_UPLOAD"), "문서 업로드");
        assert_eq!(action_label("PASSWORD_RESET"), "PASSWORD_RESET");
        assert_eq!(action_badge_class("DOCUMENT_VIEW"), "bg-green-100 text-green-800");
        assert_eq!(action_badge_class("UNAUTHORIZED_ACCESS"), "bg-red-100 text-red-800");
        assert_eq!(action_badge_class("SETTINGS_CHANGE"), "bg-yellow-100 text-yellow-800");
    }

    #[test]
    fn detail_omits_absent_optional_fields() {
        let entry = AuditLogEntry {
            id: 9,
            username: None,
            action: Some("LOGIN".into()),
            status: Some("SUCCESS".into()),
            ..AuditLogEntry::default()
        };
        let fields = detail_fields(&entry);
        assert_eq!(fields.get("사용자").map(|f| f.value.as_str()), Some(ANONYMOUS));
        assert_eq!(fields.get("IP 주소").map(|f| f.value.as_str()), Some("-"));
        assert_eq!(fields.get("타임스탬프").map(|f| f.value.as_str()), Some("-"));
        assert_eq!(fields.get("상태").map(|f| f.value.as_str()), Some("성공"));
        assert!(fields.get("문서 ID").is_none());
        assert!(fields.get("사용자 에이전트").is_none());
        assert!(fields.get("에러 메시지").is_none());

        let unknown = AuditLogEntry {
            status: None,
            ..entry.clone()
        };
        let fields = detail_fields(&unknown);
        assert_eq!(fields.get("상태").map(|f| f.value.as_str()), Some("-"));

        let blank = AuditLogEntry {
            status: Some("  ".into()),
            ..entry
        };
        assert_eq!(status_label(&blank), None);
    }

    #[test]
    fn failed_entry_shows_error_message() {
        let mut entry = audit_entry(3, "DOCUMENT_DELETE");
        entry.status = Some("FAILED".into());
        entry.error_message = Some("권한 없음".into());
        let fields = detail_fields(&entry);
        assert_eq!(fields.get("상태").map(|f| f.value.as_str()), Some("실패"));
        assert_eq!(
            fields.get("에러 메시지").map(|f| f.style),
            Some(FieldStyle::Error)
        );
        assert_eq!(fields.get("활동 유형").map(|f| f.value.as_str()), Some("문서 삭제"));
    }

    #[test]
    fn csv_uses_korean_headers() {
        let bytes = to_csv(&[audit_entry(1, "LOGIN")]);
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.trim_start_matches(csv::UTF8_BOM).lines();
        assert_eq!(
            lines.next(),
            Some("타임스탬프,사용자,활동유형,상태,리소스,문서ID,상세정보,IP주소")
        );
        assert_eq!(
            lines.next(),
            Some(r#""2025-01-02 10:00:00","admin","로그인","SUCCESS","/api/extract/upload","","contract.pdf","10.0.0.1""#)
        );
    }
}
