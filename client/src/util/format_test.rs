use super::*;

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn usd_rounds_to_whole_dollars() {
    assert_eq!(usd(2599.5), "$2,600");
    assert_eq!(usd(-3.0), "$0");
    assert_eq!(usd(f64::NAN), "$0");
}

#[test]
fn money_uses_code_for_other_currencies() {
    assert_eq!(money(1500.0, "usd"), "$1,500");
    assert_eq!(money(5_500_000.0, "tzs"), "5,500,000 TZS");
}

#[test]
fn date_keeps_day_part() {
    assert_eq!(date(Some("2024-05-01T08:00:00Z")), "2024-05-01");
    assert_eq!(date(Some("2024-05-01")), "2024-05-01");
    assert_eq!(date(None), "-");
}

#[test]
fn days_pluralises() {
    assert_eq!(days(1), "1 day");
    assert_eq!(days(7), "7 days");
}

#[test]
fn stars_fill_rating() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
}

#[test]
fn stars_cap_at_five() {
    assert_eq!(stars(9), "★★★★★");
}
