//! Inline Markdown
//!
//! Description fields in the content files may carry light formatting
//! (`**bold**`, `*em*`, `` `code` ``, links). They are rendered with
//! pulldown-cmark and flattened to inline markup so the result can sit
//! inside the card's own `<p>`: blocks are separated by `<br>`, list items
//! get a bullet, headings turn bold.
//!
//! Raw HTML in the source is shown as text. Links and images whose scheme
//! is not http, https or mailto keep their text but lose the element.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Markdown to HTML for use inside an existing element
pub fn inline(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut flatten = Flatten::default();
    let events = Parser::new_ext(text, options()).flat_map(|event| flatten.map(event));

    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output.trim_end().to_string()
}

/// Relative URLs and http, https, mailto
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = url[..i].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

/// Block structure to inline markup
#[derive(Default)]
struct Flatten {
    /// A block has been opened already, so the next one needs a break
    started: bool,
    /// Just opened a list item; its first paragraph continues the bullet line
    in_item_head: bool,
    /// Open links and images, `true` where the element is kept
    anchors: Vec<bool>,
}

impl Flatten {
    fn map<'a>(&mut self, event: Event<'a>) -> Vec<Event<'a>> {
        match event {
            Event::Start(Tag::Paragraph) => self.block_break().into_iter().collect(),
            Event::Start(Tag::Heading { .. }) => {
                let mut out: Vec<Event> = self.block_break().into_iter().collect();
                out.push(Event::InlineHtml("<strong>".into()));
                out
            }
            Event::End(TagEnd::Heading(_)) => vec![Event::InlineHtml("</strong>".into())],
            Event::Start(Tag::CodeBlock(_)) => {
                let mut out: Vec<Event> = self.block_break().into_iter().collect();
                out.push(Event::InlineHtml("<code>".into()));
                out
            }
            Event::End(TagEnd::CodeBlock) => vec![Event::InlineHtml("</code>".into())],
            Event::Start(Tag::Item) => {
                let mut out: Vec<Event> = self.block_break().into_iter().collect();
                out.push(Event::Text("• ".into()));
                self.in_item_head = true;
                out
            }
            Event::Rule => self.block_break().into_iter().collect(),

            Event::Start(tag @ (Tag::Link { .. } | Tag::Image { .. })) => {
                let keep = match &tag {
                    Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => is_safe_url(dest_url),
                    _ => true,
                };
                self.anchors.push(keep);
                self.inline_event(Event::Start(tag), keep)
            }
            Event::End(end @ (TagEnd::Link | TagEnd::Image)) => {
                let keep = self.anchors.pop().unwrap_or(false);
                self.inline_event(Event::End(end), keep)
            }

            Event::Start(tag @ (Tag::Emphasis | Tag::Strong | Tag::Strikethrough)) => {
                self.inline_event(Event::Start(tag), true)
            }
            Event::End(end @ (TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough)) => {
                self.inline_event(Event::End(end), true)
            }
            // lists, quotes, paragraph and item ends
            Event::Start(_) | Event::End(_) => Vec::new(),

            Event::Html(raw) | Event::InlineHtml(raw) => self.inline_event(Event::Text(raw), true),
            other => self.inline_event(other, true),
        }
    }

    /// `<br>` before every block but the first
    fn block_break<'a>(&mut self) -> Option<Event<'a>> {
        if std::mem::take(&mut self.in_item_head) {
            return None;
        }
        if std::mem::replace(&mut self.started, true) {
            Some(Event::InlineHtml(CowStr::Borrowed("<br>")))
        } else {
            None
        }
    }

    fn inline_event<'a>(&mut self, event: Event<'a>, keep: bool) -> Vec<Event<'a>> {
        self.in_item_head = false;
        self.started = true;
        if keep {
            vec![event]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_strips_paragraph() {
        assert_eq!(inline("Built with **Rust**"), "Built with <strong>Rust</strong>");
    }

    #[test]
    fn inline_joins_paragraphs_with_break() {
        assert_eq!(inline("one\n\ntwo"), "one<br>two");
    }

    #[test]
    fn inline_escapes_text() {
        assert_eq!(inline("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(inline("   "), "");
    }

    #[test]
    fn raw_html_is_shown_as_text() {
        let html = inline("hi <img src=x onerror=alert(1)> there");
        assert!(!html.contains("<img"), "{}", html);
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"), "{}", html);

        let block = inline("<div onclick=\"x()\">boo</div>");
        assert!(!block.contains("<div"), "{}", block);
    }

    #[test]
    fn unsafe_links_keep_only_their_text() {
        let html = inline("[click](javascript:alert(1)) and ![pic](data:text/html,x)");
        assert!(!html.contains("javascript:"), "{}", html);
        assert!(!html.contains("<a") && !html.contains("<img"), "{}", html);
        assert!(html.starts_with("click and"), "{}", html);
    }

    #[test]
    fn safe_links_survive() {
        assert_eq!(
            inline("see [site](https://example.com) or [cv](files/cv.pdf)"),
            r#"see <a href="https://example.com">site</a> or <a href="files/cv.pdf">cv</a>"#
        );
        assert!(inline("[mail](mailto:me@example.com)").contains(r#"href="mailto:me@example.com""#));
    }

    #[test]
    fn url_schemes() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("HTTP://example.com"));
        assert!(is_safe_url("/img/a.png"));
        assert!(is_safe_url("#projects"));
        assert!(is_safe_url("page?x=a:b"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("vbscript:x"));
    }

    #[test]
    fn lists_flatten_to_bullet_lines() {
        assert_eq!(inline("- a\n- b"), "• a<br>• b");
        assert_eq!(inline("Learned:\n\n- a\n\n- b"), "Learned:<br>• a<br>• b");
    }

    #[test]
    fn headings_turn_bold() {
        assert_eq!(inline("# Title\n\nbody"), "<strong>Title</strong><br>body");
    }

    #[test]
    fn no_block_elements_escape() {
        let html = inline("# h\n\n> quote\n\n1. one\n\n```\ncode\n```\n\n---\n\nend");
        for tag in ["<p>", "<ul>", "<ol>", "<li>", "<h1>", "<blockquote>", "<pre>", "<hr"] {
            assert!(!html.contains(tag), "{} in {}", tag, html);
        }
        assert!(html.ends_with("end"), "{}", html);
    }
}
