//! Colored pill for workflow status columns.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use records::{BookingStatus, InquiryStatus};

/// Visual tone of a badge; maps to a `status-badge--*` modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[must_use]
pub fn booking_tone(status: BookingStatus) -> Tone {
    match status {
        BookingStatus::Pending => Tone::Warning,
        BookingStatus::Confirmed => Tone::Info,
        BookingStatus::Cancelled => Tone::Danger,
        BookingStatus::Completed => Tone::Success,
    }
}

#[must_use]
pub fn inquiry_tone(status: InquiryStatus) -> Tone {
    match status {
        InquiryStatus::New => Tone::Warning,
        InquiryStatus::Replied => Tone::Success,
        InquiryStatus::Closed => Tone::Neutral,
    }
}

/// Boolean flag badge, e.g. published/draft or verified/pending.
#[must_use]
pub fn flag_tone(on: bool) -> Tone {
    if on { Tone::Success } else { Tone::Neutral }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-badge--{}", tone.modifier())>{label}</span>
    }
}
