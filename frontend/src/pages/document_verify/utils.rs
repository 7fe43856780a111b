use crate::api::{Document, DocumentStatus, DocumentUpdate};

pub const MISSING_ID_MESSAGE: &str = "문서 ID가 없습니다.";
pub const LOAD_FAILED_MESSAGE: &str = "문서 데이터를 불러오는데 실패했습니다.";
pub const PDF_FAILED_MESSAGE: &str = "PDF를 불러올 수 없습니다";
pub const REPROCESS_CONFIRM: &str = "이 문서를 재추출 하시겠습니까?";
pub const REPROCESS_DONE_MESSAGE: &str = "재추출 요청이 완료되었습니다.";
pub const REPROCESS_FAILED_MESSAGE: &str = "재추출 요청에 실패했습니다.";
pub const VERIFY_REQUIRED_MESSAGE: &str = "검증 확인 체크박스를 체크해주세요.";
pub const VERIFY_DONE_MESSAGE: &str = "검증이 완료되었습니다.";
pub const VERIFY_FAILED_MESSAGE: &str = "검증 완료 처리에 실패했습니다.";
pub const EXCEL_FAILED_MESSAGE: &str = "엑셀 다운로드에 실패했습니다.";
pub const EXCEL_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const DOCUMENTS_PATH: &str = "/documents";

pub fn title(document: &Document) -> String {
    format!(
        "DOC-{} / {}",
        document.id,
        document.filename.as_deref().filter(|n| !n.is_empty()).unwrap_or("문서명 없음")
    )
}

/// Stored confidence is already a percentage.
pub fn confidence(document: &Document) -> f64 {
    document.confidence.unwrap_or(0.0)
}

pub fn excel_file_name(document: &Document) -> String {
    let base = document
        .display_name()
        .map(|name| {
            if name.to_ascii_lowercase().ends_with(".pdf") {
                name[..name.len() - 4].to_string()
            } else {
                name.to_string()
            }
        })
        .unwrap_or_else(|| document.key());
    format!("{}_추출결과.xlsx", base)
}

/// Editable copy of the extracted fields plus the reviewer's confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyForm {
    pub contractor_a: String,
    pub contractor_b: String,
    pub contract_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub verified: bool,
}

impl VerifyForm {
    pub fn from_document(document: &Document) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            contractor_a: text(&document.contractor_a),
            contractor_b: text(&document.contractor_b),
            contract_amount: text(&document.contract_amount),
            start_date: text(&document.start_date),
            end_date: text(&document.end_date),
            verified: false,
        }
    }

    /// Finalizing always marks the document completed.
    pub fn to_update(&self) -> DocumentUpdate {
        DocumentUpdate {
            contractor_a: self.contractor_a.clone(),
            contractor_b: self.contractor_b.clone(),
            contract_amount: self.contract_amount.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: DocumentStatus::Completed.as_str().to_string(),
        }
    }
}
