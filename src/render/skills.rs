use crate::markdown;
use crate::models::{present, SkillRecord};

use super::{escape_html, join_fragments};

const DEFAULT_ICON: &str = "fas fa-code";
const DEFAULT_CATEGORY: &str = "general";

/// Skills grid: one glass card per skill with a checklist and progress bar
pub fn render_skills(skills: &[SkillRecord]) -> String {
    skills.iter().map(skill_card).collect()
}

fn skill_card(skill: &SkillRecord) -> String {
    let category = present(&skill.category_id).unwrap_or(DEFAULT_CATEGORY);
    let icon = present(&skill.icon).unwrap_or(DEFAULT_ICON);
    let progress = skill.progress.value();
    let items = join_fragments(&skill.list_items, |item| {
        format!(r#"<li><i class="fas fa-check"></i> {}</li>"#, item)
    });

    format!(
        r#"
        <div class="skill-card glass-card animate-on-scroll" data-category="{category}">
            <div class="skill-glow"></div>
            <div class="skill-icon">
                <i class="{icon}"></i>
            </div>
            <h3 class="skill-title">{title}</h3>
            <p class="skill-description">{description}</p>
            <ul class="skill-list">{items}</ul>
            <div class="skill-progress">
                <div class="progress-bar" data-progress="{progress}"></div>
                <span class="progress-label">{progress}% Complete</span>
            </div>
        </div>
    "#,
        category = escape_html(category),
        icon = escape_html(icon),
        title = escape_html(&skill.title),
        description = markdown::inline(&skill.description),
        items = items,
        progress = progress,
    )
}
