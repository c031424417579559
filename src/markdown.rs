//! Notes Markdown
//!
//! pulldown-cmark with strikethrough, tables and task lists. Raw HTML in
//! notes is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Render task notes to HTML
pub fn render_notes(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Empty notes render as nothing
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
