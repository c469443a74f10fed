use crate::markdown;
use crate::models::{present, TimelineEvent};

use super::{escape_html, join_fragments};

const TIMELINE_LINE: &str = r#"<div class="timeline-line"></div>"#;

/// Timeline: the vertical line followed by one entry per event
pub fn render_timeline(events: &[TimelineEvent]) -> String {
    if events.is_empty() {
        return String::new();
    }
    let mut html = String::from(TIMELINE_LINE);
    html.extend(events.iter().map(timeline_item));
    html
}

/// Extra class on the dot: `active` for the current stage, `future` for upcoming ones
pub fn dot_class(status_class: Option<&str>) -> &'static str {
    match status_class {
        Some("current") => "active",
        Some("future") => "future",
        _ => "",
    }
}

fn timeline_item(event: &TimelineEvent) -> String {
    let status = present(&event.status_class);
    let dot = match dot_class(status) {
        "" => "timeline-dot".to_string(),
        extra => format!("timeline-dot {}", extra),
    };
    let content = match status {
        Some(status) => format!("timeline-content glass-card {}", escape_html(status)),
        None => "timeline-content glass-card".to_string(),
    };
    let tags = join_fragments(&event.tags, |tag| format!(r#"<span class="tag">{}</span>"#, tag));

    format!(
        r#"
        <div class="timeline-item animate-on-scroll" data-side="{side}">
            <div class="{dot}"></div>
            <div class="{content}">
                <span class="timeline-date">{date}</span>
                <h3 class="timeline-title">{title}</h3>
                <p class="timeline-description">{description}</p>
                <div class="timeline-tags">{tags}</div>
            </div>
        </div>
    "#,
        side = event.side.as_str(),
        dot = dot,
        content = content,
        date = escape_html(&event.date_label),
        title = escape_html(&event.title),
        description = markdown::inline(&event.description),
        tags = tags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn event(status: Option<&str>, side: Side) -> TimelineEvent {
        TimelineEvent {
            side,
            status_class: status.map(String::from),
            date_label: "2024 - Present".into(),
            title: "B.Sc. Computer Science".into(),
            description: "Systems & networks".into(),
            tags: vec!["C".into(), "Linux".into()],
        }
    }

    #[test]
    fn line_precedes_items() {
        let html = render_timeline(&[event(Some("past"), Side::Left), event(Some("current"), Side::Right)]);
        assert!(html.starts_with(TIMELINE_LINE));
        assert_eq!(html.matches("timeline-item animate-on-scroll").count(), 2);
        assert!(html.contains(r#"data-side="right""#));
    }

    #[test]
    fn status_drives_dot_and_content_classes() {
        let current = render_timeline(&[event(Some("current"), Side::Left)]);
        assert!(current.contains(r#"<div class="timeline-dot active"></div>"#));
        assert!(current.contains(r#"class="timeline-content glass-card current""#));

        let future = render_timeline(&[event(Some("future"), Side::Left)]);
        assert!(future.contains(r#"<div class="timeline-dot future"></div>"#));

        let plain = render_timeline(&[event(None, Side::Left)]);
        assert!(plain.contains(r#"<div class="timeline-dot"></div>"#));
        assert!(plain.contains(r#"class="timeline-content glass-card""#));
    }

    #[test]
    fn tags_and_text() {
        let html = render_timeline(&[event(None, Side::Left)]);
        assert!(html.contains(r#"<div class="timeline-tags"><span class="tag">C</span><span class="tag">Linux</span></div>"#));
        assert!(html.contains("Systems &amp; networks"));
        assert!(html.contains(r#"<span class="timeline-date">2024 - Present</span>"#));
    }

    #[test]
    fn empty_list_is_empty_fragment() {
        assert_eq!(render_timeline(&[]), "");
    }
}
