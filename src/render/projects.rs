use crate::markdown;
use crate::models::{present, ProjectRecord};

use super::{escape_html, join_fragments};

const DEFAULT_ICON: &str = "fas fa-laptop-code";
const DEFAULT_CATEGORY: &str = "general";

/// Project cards with image (or icon placeholder), links, learnings and tech tags
pub fn render_projects(projects: &[ProjectRecord]) -> String {
    projects.iter().map(project_card).collect()
}

fn project_card(project: &ProjectRecord) -> String {
    let title = escape_html(&project.title);

    let media = match present(&project.image) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="project-img-content">"#,
            escape_html(src),
            title
        ),
        None => format!(
            r#"<div class="project-placeholder"><i class="{}"></i></div>"#,
            escape_html(present(&project.icon_class).unwrap_or(DEFAULT_ICON))
        ),
    };

    let mut links = String::new();
    if let Some(href) = present(&project.live_link) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link"><i class="fas fa-external-link-alt"></i></a>"#,
            escape_html(href)
        ));
    }
    if let Some(href) = present(&project.github_link) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link"><i class="fab fa-github"></i></a>"#,
            escape_html(href)
        ));
    }

    let learnings = join_fragments(&project.learnings, |l| format!("<li>{}</li>", l));
    let tech = join_fragments(&project.tech_stack, |t| format!("<span>{}</span>", t));

    format!(
        r#"
        <div class="project-card glass-card animate-on-scroll" data-tilt>
            <div class="project-image">
                {media}
                <div class="project-overlay">{links}</div>
            </div>
            <div class="project-content">
                <span class="project-category">{category}</span>
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <div class="project-learned">
                    <h4>What I Learned:</h4>
                    <ul>{learnings}</ul>
                </div>
                <div class="project-tech">{tech}</div>
            </div>
        </div>
    "#,
        media = media,
        links = links,
        category = escape_html(present(&project.category).unwrap_or(DEFAULT_CATEGORY)),
        title = title,
        description = markdown::inline(&project.description),
        learnings = learnings,
        tech = tech,
    )
}
