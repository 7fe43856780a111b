use chrono::NaiveDateTime;

use crate::api::{Activity, ApiError, DashboardStats, MonthlyTrends};
use crate::components::badges::format_percent;
use crate::utils::time::{parse_timestamp, relative_time};

pub const STATS_ERROR_TEXT: &str = "오류";
pub const TRENDS_ERROR_TEXT: &str = "차트 로드 실패";
pub const ACTIVITIES_EMPTY_TEXT: &str = "활동 내역이 없습니다";
pub const ACTIVITIES_ERROR_TEXT: &str = "활동 로드 실패";
pub const UNKNOWN_USER: &str = "Unknown";
pub const DOCUMENTS_EMPTY_TEXT: &str = "최근 처리된 문서가 없습니다";
pub const DOCUMENTS_ERROR_TEXT: &str = "문서 로드 실패";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// `None` while loading. A failed load shows "오류" in every card.
pub fn stat_cards(stats: Option<&Result<DashboardStats, ApiError>>) -> Vec<StatCard> {
    let values: [String; 4] = match stats {
        None => std::array::from_fn(|_| "-".to_string()),
        Some(Err(_)) => std::array::from_fn(|_| STATS_ERROR_TEXT.to_string()),
        Some(Ok(stats)) => [
            stats.monthly_documents.to_string(),
            format_percent(stats.average_accuracy),
            stats.pending_documents.to_string(),
            stats.error_documents.to_string(),
        ],
    };
    let labels = ["이번 달 처리 문서", "평균 정확도", "검토 대기", "오류 문서"];
    labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| StatCard { label, value })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendBar {
    pub label: String,
    pub value: u64,
    /// Bar height relative to the busiest month, 0-100.
    pub height: f64,
}

pub fn trend_bars(trends: &MonthlyTrends) -> Vec<TrendBar> {
    let points = trends.points();
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0);
    points
        .into_iter()
        .map(|(label, value)| TrendBar {
            label,
            value,
            height: if max == 0 {
                0.0
            } else {
                value as f64 / max as f64 * 100.0
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub username: String,
    pub summary: String,
    pub when: String,
    pub status: Option<(&'static str, &'static str)>,
}

pub fn activity_row(activity: &Activity, now: NaiveDateTime) -> ActivityRow {
    let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
    let when = match activity.timestamp.as_deref() {
        Some(raw) => parse_timestamp(raw)
            .map(|ts| relative_time(ts, now))
            .unwrap_or_else(|| raw.to_string()),
        None => "-".to_string(),
    };
    let status = match activity.status.as_deref() {
        Some("SUCCESS") => Some(("성공", "bg-green-100 text-green-700")),
        Some("FAILED") => Some(("실패", "bg-red-100 text-red-700")),
        _ => None,
    };
    ActivityRow {
        username: non_empty(&activity.username).unwrap_or_else(|| UNKNOWN_USER.to_string()),
        summary: non_empty(&activity.details)
            .or_else(|| non_empty(&activity.action))
            .unwrap_or_default(),
        when,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;

    #[test]
    fn stat_cards_show_error_text_on_failure() {
        let failed: Result<DashboardStats, ApiError> = Err(ApiError::network("down"));
        let cards = stat_cards(Some(&failed));
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.value == STATS_ERROR_TEXT));
    }

    #[test]
    fn stat_cards_format_accuracy_as_percent() {
        let stats = Ok(DashboardStats {
            monthly_documents: 12,
            average_accuracy: 87.5,
            pending_documents: 3,
            error_documents: 1,
            ..DashboardStats::default()
        });
        let values: Vec<_> = stat_cards(Some(&stats)).into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["12", "87.5%", "3", "1"]);
    }

    #[test]
    fn trend_bars_scale_to_busiest_month() {
        let trends = MonthlyTrends {
            labels: vec!["1월".into(), "2월".into()],
            data: vec![5, 10],
        };
        let bars = trend_bars(&trends);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[1].height, 100.0);
        let empty = trend_bars(&MonthlyTrends {
            labels: vec!["1월".into()],
            data: vec![0],
        });
        assert_eq!(empty[0].height, 0.0);
    }

    #[test]
    fn activity_row_falls_back_to_action_and_unknown_user() {
        let now = parse_timestamp("2025-01-02T12:00:00").unwrap();
        let activity = Activity {
            action: Some("LOGIN".into()),
            timestamp: Some("2025-01-02T11:30:00".into()),
            status: Some("FAILED".into()),
            ..Activity::default()
        };
        let row = activity_row(&activity, now);
        assert_eq!(row.username, UNKNOWN_USER);
        assert_eq!(row.summary, "LOGIN");
        assert_eq!(row.when, "30분 전");
        assert_eq!(row.status.map(|s| s.0), Some("실패"));
    }
}
