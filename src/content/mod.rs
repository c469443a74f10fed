//! Content Sections
//!
//! Each section ties together where its data lives on the network, where it
//! is cached, which container shows it and how it renders.

mod loader;

pub use loader::ContentLoader;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{CertificateRecord, ProjectRecord, SkillRecord, TimelineEvent};
use crate::render;

/// A JSON-driven page section
pub trait Section {
    type Record: Serialize + DeserializeOwned;

    /// Short name for logs
    const NAME: &'static str;
    /// File name under the content base
    const PATH: &'static str;
    /// Local cache slot
    const CACHE_KEY: &'static str;
    /// Id of the container element
    const CONTAINER_ID: &'static str;

    fn render(records: &[Self::Record]) -> String;
}

pub struct Skills;
pub struct Timeline;
pub struct Projects;
pub struct Certificates;

impl Section for Skills {
    type Record = SkillRecord;
    const NAME: &'static str = "skills";
    const PATH: &'static str = "skills.json";
    const CACHE_KEY: &'static str = "skills_cache_v1";
    const CONTAINER_ID: &'static str = "skills-container";

    fn render(records: &[SkillRecord]) -> String {
        render::render_skills(records)
    }
}

impl Section for Timeline {
    type Record = TimelineEvent;
    const NAME: &'static str = "timeline";
    const PATH: &'static str = "timeline.json";
    const CACHE_KEY: &'static str = "timeline_cache_v1";
    const CONTAINER_ID: &'static str = "timeline-container";

    fn render(records: &[TimelineEvent]) -> String {
        render::render_timeline(records)
    }
}

impl Section for Projects {
    type Record = ProjectRecord;
    const NAME: &'static str = "projects";
    const PATH: &'static str = "projects.json";
    const CACHE_KEY: &'static str = "projects_cache_v1";
    const CONTAINER_ID: &'static str = "projects-container";

    fn render(records: &[ProjectRecord]) -> String {
        render::render_projects(records)
    }
}

impl Section for Certificates {
    type Record = CertificateRecord;
    const NAME: &'static str = "certificates";
    const PATH: &'static str = "certificates.json";
    const CACHE_KEY: &'static str = "certs_cache_v1";
    const CONTAINER_ID: &'static str = "certificates-container";

    fn render(records: &[CertificateRecord]) -> String {
        render::render_certificates(records)
    }
}
