use chrono::{NaiveDate, NaiveDateTime};

use crate::api::ExtractionResult;
use crate::components::badges::{format_percent, needs_review, ratio_to_percent};
use crate::utils::csv::{export_file_name, to_csv, Column};

pub const PDF_MIME: &str = "application/pdf";
pub const INVALID_FILE_MESSAGE: &str = "Invalid file type dropped. Please drop a PDF file.";
pub const EXPORT_DONE_MESSAGE: &str = "Exported data to CSV file.";
pub const READY_BANNER: &str = "SecureDoc Extractor Ready.";
pub const ANALYZING_TEXT: &str = "파일을 분석 중입니다. 잠시만 기다려 주세요...";
pub const NO_TEXT: &str = "추출된 텍스트가 없습니다.";
pub const UNTITLED: &str = "문서명 없음";
pub const DEFAULT_EXPORT_BASE: &str = "extracted_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// `None` for the banner line.
    pub time: Option<String>,
    pub level: String,
    pub message: String,
}

impl LogLine {
    pub fn banner() -> Self {
        Self {
            time: None,
            level: String::new(),
            message: READY_BANNER.to_string(),
        }
    }

    pub fn text(&self) -> String {
        match &self.time {
            Some(time) => format!("[{}][{}] > {}", time, self.level, self.message),
            None => format!("> {}", self.message),
        }
    }

    pub fn class(&self) -> &'static str {
        match (self.time.is_some(), self.level.as_str()) {
            (false, _) => "text-white",
            (_, "INFO") => "text-green-400",
            (_, "WARN") => "text-yellow-400",
            (_, "ERROR") | (_, "FATAL") => "text-red-500",
            (_, "DEBUG") => "text-blue-400",
            _ => "text-slate-300",
        }
    }
}

/// The picker accepts a `.pdf` name; drops are checked by MIME type.
pub fn is_pdf(file_name: &str, mime: &str) -> bool {
    mime == PDF_MIME || (mime.is_empty() && file_name.to_ascii_lowercase().ends_with(".pdf"))
}

pub fn format_size_mb(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Groups digits by thousands: `1500000` → `"1,500,000"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn export_base_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    let base = if trimmed.to_ascii_lowercase().ends_with(".pdf") {
        &trimmed[..trimmed.len() - 4]
    } else {
        trimmed
    };
    if base.is_empty() {
        DEFAULT_EXPORT_BASE.to_string()
    } else {
        base.to_string()
    }
}

/// What the extraction panel currently shows. The structured fields are editable.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub title: String,
    pub doc_id: String,
    pub total_pages: Option<u32>,
    pub raw_text: String,
    pub contractor_a: String,
    pub contractor_b: String,
    pub start_date: String,
    pub end_date: String,
    pub amount: String,
    /// Percent. `None` after a failed upload.
    pub confidence: Option<f64>,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            doc_id: String::new(),
            total_pages: None,
            raw_text: String::new(),
            contractor_a: String::new(),
            contractor_b: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            amount: String::new(),
            confidence: Some(0.0),
        }
    }
}

impl ExtractedFields {
    pub fn processing(file_name: &str) -> Self {
        Self {
            title: file_name.to_string(),
            doc_id: "Processing...".to_string(),
            raw_text: ANALYZING_TEXT.to_string(),
            ..Self::default()
        }
    }

    pub fn from_result(result: &ExtractionResult) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            title: result
                .file_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            doc_id: result
                .doc_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            total_pages: result.total_pages,
            raw_text: result
                .raw_text
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TEXT.to_string()),
            contractor_a: text(&result.contractor_a),
            contractor_b: text(&result.contractor_b),
            start_date: text(&result.start_date),
            end_date: text(&result.end_date),
            amount: result.amount.map(format_amount).unwrap_or_default(),
            confidence: Some(ratio_to_percent(result.confidence)),
        }
    }

    pub fn mark_failed(&mut self) {
        self.doc_id = "ERROR".to_string();
        self.confidence = None;
    }

    pub fn confidence_text(&self) -> String {
        self.confidence
            .map(format_percent)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn needs_review(&self) -> bool {
        self.confidence.is_some_and(needs_review)
    }

    pub fn pages_text(&self) -> String {
        match self.total_pages {
            Some(pages) => format!("페이지 수: {}", pages),
            None => "페이지 수: N/A".to_string(),
        }
    }

    pub fn export_file_name(&self, today: NaiveDate) -> String {
        export_file_name(&export_base_name(&self.title), today)
    }

    pub fn to_csv(&self) -> Vec<u8> {
        to_csv(std::slice::from_ref(self), &export_columns())
    }
}

fn export_columns() -> [Column<ExtractedFields>; 8] {
    [
        Column::new("DocID", |f| f.doc_id.trim().to_string()),
        Column::new("FileName", |f| f.title.trim().to_string()),
        Column::new("ContractorA", |f| f.contractor_a.trim().to_string()),
        Column::new("ContractorB", |f| f.contractor_b.trim().to_string()),
        Column::new("StartDate", |f| f.start_date.trim().to_string()),
        Column::new("EndDate", |f| f.end_date.trim().to_string()),
        Column::new("Amount", |f| f.amount.trim().replace(',', "")),
        Column::new("Confidence", |f| f.confidence_text()),
    ]
}

/// Panel state: displayed fields plus the log window, newest line first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractState {
    pub fields: ExtractedFields,
    pub logs: Vec<LogLine>,
}

impl Default for ExtractState {
    fn default() -> Self {
        Self {
            fields: ExtractedFields::default(),
            logs: vec![LogLine::banner()],
        }
    }
}

impl ExtractState {
    pub fn log(&mut self, level: &str, message: impl Into<String>, now: NaiveDateTime) {
        self.logs.insert(
            0,
            LogLine {
                time: Some(now.format("%H:%M:%S").to_string()),
                level: level.to_string(),
                message: message.into(),
            },
        );
    }

    pub fn begin_upload(&mut self, file_name: &str, size_bytes: f64, now: NaiveDateTime) {
        self.log(
            "INFO",
            format!("File selected: {} ({})", file_name, format_size_mb(size_bytes)),
            now,
        );
        self.log("INFO", "Uploading file to backend API...", now);
        self.fields = ExtractedFields::processing(file_name);
    }

    /// Server-side logs replace the window on success.
    pub fn apply_result(&mut self, result: &ExtractionResult, now: NaiveDateTime) {
        self.log("INFO", "File uploaded and processed successfully!", now);
        self.fields = ExtractedFields::from_result(result);
        if !result.logs.is_empty() {
            self.logs = vec![LogLine::banner()];
            for entry in &result.logs {
                self.log(&entry.level, entry.message.clone(), now);
            }
        }
    }

    pub fn apply_failure(&mut self, message: &str, now: NaiveDateTime) {
        self.log("FATAL", format!("File processing failed! Error: {}", message), now);
        self.fields.mark_failed();
    }
}
