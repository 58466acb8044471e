//! URL slug derivation.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Derive a URL-safe slug from a human-readable title.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and drops leading and trailing hyphens.
/// Uniqueness is not checked here.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}
