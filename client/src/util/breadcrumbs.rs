//! Breadcrumb trail derived from the current path.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

/// One crumb per path segment with a cumulative link. `/` has no trail.
#[must_use]
pub fn trail(pathname: &str) -> Vec<Crumb> {
    let mut path = String::new();
    pathname
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            path.push('/');
            path.push_str(segment);
            Crumb {
                label: label(segment),
                path: path.clone(),
            }
        })
        .collect()
}

/// `mount-kilimanjaro` → `Mount Kilimanjaro`; `%20` decodes to a space.
fn label(segment: &str) -> String {
    segment
        .replace("%20", " ")
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
