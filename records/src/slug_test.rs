use super::*;

#[test]
fn slugify_title_with_trailing_punctuation() {
    assert_eq!(slugify("Mount Kilimanjaro Trek!"), "mount-kilimanjaro-trek");
}

#[test]
fn slugify_collapses_runs_and_strips_edges() {
    assert_eq!(slugify("  --Serengeti   & Ngorongoro--  "), "serengeti-ngorongoro");
    assert_eq!(slugify("7-Day   Machame Route"), "7-day-machame-route");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Zanzibar Café Tour"), "zanzibar-caf-tour");
}

#[test]
fn slugify_empty_and_symbol_only_titles() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!! ???"), "");
}

#[test]
fn slugify_is_idempotent() {
    let titles = [
        "Mount Kilimanjaro Trek!",
        "Lemosho Route -- 8 Days",
        "Tarangire & Lake Manyara (Day Trip)",
        "already-a-slug",
        "ÉLAN Safari",
    ];
    for title in titles {
        let once = slugify(title);
        assert_eq!(slugify(&once), once, "title: {title}");
    }
}
