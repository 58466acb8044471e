use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = to_html("## Packing\n\n- boots\n- hat\n");
    assert!(html.contains("<h2>Packing</h2>"));
    assert!(html.contains("<li>boots</li>"));
}

#[test]
fn drops_raw_html() {
    let html = to_html("Hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Hello"));
}

#[test]
fn reading_minutes_rounds_up() {
    assert_eq!(reading_minutes(""), 1);
    assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
}
