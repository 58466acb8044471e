use super::*;

#[test]
fn only_denied_gate_redirects() {
    assert!(should_redirect(AdminGate::Denied));
    assert!(!should_redirect(AdminGate::Checking));
    assert!(!should_redirect(AdminGate::Allowed));
}
