use super::*;

#[test]
fn root_has_no_trail() {
    assert!(trail("/").is_empty());
    assert!(trail("").is_empty());
}

#[test]
fn segments_become_title_case_with_cumulative_paths() {
    let crumbs = trail("/tours/mountain-climbing/machame-route");
    let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
    let paths: Vec<_> = crumbs.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(labels, ["Tours", "Mountain Climbing", "Machame Route"]);
    assert_eq!(paths, ["/tours", "/tours/mountain-climbing", "/tours/mountain-climbing/machame-route"]);
}

#[test]
fn trailing_slash_and_encoded_spaces() {
    let crumbs = trail("/blog/big%20five/");
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[1].label, "Big five");
}
