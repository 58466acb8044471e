//! Display formatting for prices, counts and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Insert `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount, e.g. `$12,500`. Negative and fractional input is
/// rounded and clamped at zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn usd(amount: f64) -> String {
    let whole = if amount.is_finite() { amount.max(0.0).round() as u64 } else { 0 };
    format!("${}", group_thousands(whole))
}

/// Amount with its currency code, e.g. `2,400 TZS`; USD uses [`usd`].
#[must_use]
pub fn money(amount: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("USD") {
        usd(amount)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = if amount.is_finite() { amount.max(0.0).round() as u64 } else { 0 };
        format!("{} {}", group_thousands(whole), currency.to_uppercase())
    }
}

/// Date part of an ISO timestamp, or `-` when missing.
#[must_use]
pub fn date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.trim().is_empty() => ts.split_once('T').map_or(ts, |(day, _)| day).to_owned(),
        _ => "-".to_owned(),
    }
}

/// `1 day` / `7 days`.
#[must_use]
pub fn days(count: u32) -> String {
    if count == 1 { "1 day".to_owned() } else { format!("{count} days") }
}

/// Filled and empty stars for a 0-5 rating.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
