//! Recommendation Markdown
//!
//! The service writes its summary as markdown (bullets, bold, headings).
//! Rendered with pulldown-cmark; raw HTML in the input is shown as text and
//! link/image destinations are limited to http, https, mailto and relative URLs.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Schemes a link or image may point at
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render the recommendation summary to HTML
pub fn render_recommendation(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Keep relative URLs and allowed schemes; anything else becomes `#`
fn safe_url(dest: CowStr<'_>) -> CowStr<'_> {
    // Browsers ignore whitespace and control chars inside a scheme
    let compact: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let scheme = match compact.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(pos) if compact[pos..].starts_with(':') => Some(compact[..pos].to_ascii_lowercase()),
        _ => None,
    };
    match scheme {
        Some(scheme) if !ALLOWED_SCHEMES.contains(&scheme.as_str()) => CowStr::Borrowed("#"),
        _ => dest,
    }
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}
