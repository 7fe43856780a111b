use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const PLACEHOLDER: &str = "-";

/// Accepts server `LocalDateTime` strings (optionally fractional) and RFC 3339 timestamps.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

fn format_with(raw: Option<&str>, pattern: &str) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        Some(raw) => parse_timestamp(raw)
            .map(|ts| ts.format(pattern).to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_date_time(raw: Option<&str>) -> String {
    format_with(raw, "%Y-%m-%d %H:%M:%S")
}

pub fn format_date_minutes(raw: Option<&str>) -> String {
    format_with(raw, "%Y-%m-%d %H:%M")
}

pub fn format_date(raw: Option<&str>) -> String {
    format_with(raw, "%Y-%m-%d")
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// "방금 전" under a minute, then minutes, hours and days up to a week, then the date.
pub fn relative_time(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "방금 전".to_string()
    } else if minutes < 60 {
        format!("{}분 전", minutes)
    } else if hours < 24 {
        format!("{}시간 전", hours)
    } else if days < 7 {
        format!("{}일 전", days)
    } else {
        timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}
