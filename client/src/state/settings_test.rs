use super::*;

#[test]
fn defaults_match_site_identity() {
    let form = SettingsForm::default();
    assert_eq!(form.values.site_name, "Karibu Safariz");
    assert!(form.values.allow_bookings);
    assert_eq!(form.values.max_booking_advance_days, 180);
    assert!(!form.saved);
}

#[test]
fn edit_hides_saved_badge() {
    let mut form = SettingsForm::default();
    form.mark_saved();
    assert!(form.saved);
    form.edit(|s| s.maintenance_mode = true);
    assert!(!form.saved);
    assert!(form.values.maintenance_mode);
}

#[test]
fn parse_days_keeps_current_on_bad_input() {
    assert_eq!(parse_days(" 30 ", 7), 30);
    assert_eq!(parse_days("", 7), 7);
    assert_eq!(parse_days("-2", 7), 7);
}
