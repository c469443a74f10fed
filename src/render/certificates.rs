use crate::markdown;
use crate::models::{present, CertificateRecord};

use super::{escape_html, join_fragments};

const DEFAULT_ICON: &str = "fas fa-certificate";

/// Certification cards with status badge, preparation bar and topics
pub fn render_certificates(certs: &[CertificateRecord]) -> String {
    certs.iter().map(cert_card).collect()
}

/// Badge modifier for a certificate status; unknown statuses read as planned
pub fn badge_class(status: &str) -> &'static str {
    match status.trim() {
        "In Progress" => "in-progress",
        "Upcoming" => "upcoming",
        _ => "planned",
    }
}

fn cert_card(cert: &CertificateRecord) -> String {
    let title = escape_html(&cert.title);

    let icon = match present(&cert.image) {
        Some(src) => format!(r#"<img src="{}" alt="{}" class="cert-image">"#, escape_html(src), title),
        None => format!(r#"<i class="{}"></i>"#, escape_html(present(&cert.icon).unwrap_or(DEFAULT_ICON))),
    };

    let link = present(&cert.certificate_link)
        .map(|href| {
            format!(
                r#"<a href="{}" target="_blank" class="cert-link">View Certificate <i class="fas fa-external-link-alt"></i></a>"#,
                escape_html(href)
            )
        })
        .unwrap_or_default();

    let progress = cert.progress.value();
    let topics = join_fragments(&cert.topics, |t| format!("<span>{}</span>", t));

    format!(
        r#"
        <div class="cert-card glass-card animate-on-scroll">
            <div class="cert-badge {badge}">
                <span>{status}</span>
            </div>
            <div class="cert-icon">{icon}</div>
            <h3 class="cert-title">{title}</h3>
            {link}
            <p class="cert-description">{description}</p>
            <div class="cert-progress">
                <div class="cert-progress-bar" style="--progress: {progress}%"></div>
                <span>{progress}% Prepared</span>
            </div>
            <div class="cert-topics">{topics}</div>
        </div>
    "#,
        badge = badge_class(&cert.status),
        status = escape_html(&cert.status),
        icon = icon,
        title = title,
        link = link,
        description = markdown::inline(&cert.description),
        progress = progress,
        topics = topics,
    )
}
