//! Section Renderers
//!
//! Pure `records -> HTML fragment` functions, one per section. Each record
//! becomes one card; list fields become inline fragments joined with no
//! separator. An empty list renders as an empty string.

mod certificates;
mod projects;
mod skills;
mod timeline;

pub use certificates::render_certificates;
pub use projects::render_projects;
pub use skills::render_skills;
pub use timeline::render_timeline;

/// Escape text for element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Map each entry through `wrap` (receiving escaped text) and concatenate
pub(crate) fn join_fragments(entries: &[String], wrap: impl Fn(&str) -> String) -> String {
    entries.iter().map(|e| wrap(&escape_html(e))).collect()
}
