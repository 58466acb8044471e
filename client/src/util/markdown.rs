//! Markdown rendering for blog posts and travel guides.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `markdown` to HTML for `inner_html`.
///
/// Raw HTML blocks and inline tags are dropped; editors write markdown only.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Rough reading time at 200 words per minute, at least one minute.
#[must_use]
pub fn reading_minutes(markdown: &str) -> usize {
    markdown.split_whitespace().count().div_ceil(200).max(1)
}
