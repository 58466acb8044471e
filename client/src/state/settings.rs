//! Site settings form.
//!
//! Settings are edited locally only; there is no remote table behind them.
//! Saving shows a confirmation and a "saved" badge for [`SAVED_BADGE_MS`].

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const SAVED_BADGE_MS: u32 = 3000;
pub const SAVED_ALERT: &str = "Settings saved successfully!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_email: String,
    pub site_phone: String,
    pub support_email: String,
    pub maintenance_mode: bool,
    pub allow_bookings: bool,
    pub max_booking_advance_days: u32,
    pub cancellation_deadline_days: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Karibu Safariz".to_owned(),
            site_email: "info@karibusafariz.com".to_owned(),
            site_phone: "+255 123 456 789".to_owned(),
            support_email: "support@karibusafariz.com".to_owned(),
            maintenance_mode: false,
            allow_bookings: true,
            max_booking_advance_days: 180,
            cancellation_deadline_days: 7,
        }
    }
}

/// Form state: the values plus the transient saved badge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub values: SiteSettings,
    pub saved: bool,
}

impl SettingsForm {
    /// Apply an edit; any change hides the saved badge.
    pub fn edit(&mut self, change: impl FnOnce(&mut SiteSettings)) {
        change(&mut self.values);
        self.saved = false;
    }

    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    pub fn clear_badge(&mut self) {
        self.saved = false;
    }
}

/// Parse a number input, keeping `current` when the text is not a count.
#[must_use]
pub fn parse_days(text: &str, current: u32) -> u32 {
    text.trim().parse().unwrap_or(current)
}
