use leptos::*;

use crate::api::types::DocumentStatus;

pub const REVIEW_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Good,
    Fair,
    Low,
}

impl ConfidenceTier {
    /// `percent` is on a 0-100 scale.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::High
        } else if percent >= 70.0 {
            Self::Good
        } else if percent >= 50.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::High => "bg-green-100 text-green-700",
            Self::Good => "bg-blue-100 text-blue-700",
            Self::Fair => "bg-yellow-100 text-yellow-700",
            Self::Low => "bg-red-100 text-red-700",
        }
    }
}

pub fn needs_review(percent: f64) -> bool {
    percent < REVIEW_THRESHOLD
}

/// Upload results report a 0-1 ratio.
pub fn ratio_to_percent(ratio: f64) -> f64 {
    (ratio * 100.0).round()
}

pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}%", percent as i64)
    } else {
        format!("{:.1}%", percent)
    }
}

#[component]
pub fn ConfidenceBadge(
    #[prop(into)] percent: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] prefix: String,
) -> impl IntoView {
    view! {
        {move || match percent.get() {
            Some(value) => {
                let tier = ConfidenceTier::from_percent(value);
                view! {
                    <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", tier.badge_class())>
                        {format!("{}{}", prefix, format_percent(value))}
                    </span>
                }
                .into_view()
            }
            None => "-".into_view(),
        }}
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: MaybeSignal<DocumentStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("px-2 py-1 text-xs font-medium rounded-full {}", status.get().badge_class())>
            {move || status.get().label()}
        </span>
    }
}
