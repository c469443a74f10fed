//! Site Configuration
//!
//! Read from `data-*` attributes on `<body>`, so the same wasm bundle can be
//! dropped into differently hosted copies of the page:
//!
//! ```html
//! <body data-content-base="/static/content/"
//!       data-form-endpoint="https://formsubmit.co/ajax/me@example.com"
//!       data-particle-count="30"
//!       data-log-level="debug">
//! ```

use log::{warn, LevelFilter};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Where `skills.json` and friends live
    pub content_base: String,
    /// Contact form POST target; no form is mounted without one
    pub form_endpoint: Option<String>,
    pub particle_count: usize,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_base: "content/".to_string(),
            form_endpoint: None,
            particle_count: 50,
            log_level: LevelFilter::Info,
        }
    }
}

/// Upper bound for `data-particle-count`
const MAX_PARTICLES: usize = 500;

impl SiteConfig {
    /// Read from the current document's `<body>`, defaults where absent
    pub fn from_document(document: &web_sys::Document) -> Self {
        match document.body() {
            Some(body) => Self::from_lookup(|name| body.get_attribute(&format!("data-{}", name))),
            None => Self::default(),
        }
    }

    /// Build from a `name -> value` lookup (`content-base`, `form-endpoint`, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(base) = get("content-base") {
            config.content_base = base;
        }
        config.form_endpoint = get("form-endpoint");

        if let Some(raw) = get("particle-count") {
            match raw.parse::<usize>() {
                Ok(n) => config.particle_count = n.min(MAX_PARTICLES),
                Err(_) => warn!("ignoring data-particle-count={:?}", raw),
            }
        }
        if let Some(raw) = get("log-level") {
            match raw.parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => warn!("ignoring data-log-level={:?}", raw),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> SiteConfig {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        SiteConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_without_attributes() {
        assert_eq!(from_pairs(&[]), SiteConfig::default());
        assert_eq!(SiteConfig::default().content_base, "content/");
        assert_eq!(SiteConfig::default().particle_count, 50);
    }

    #[test]
    fn reads_every_attribute() {
        let config = from_pairs(&[
            ("content-base", " /static/content/ "),
            ("form-endpoint", "https://formsubmit.co/ajax/me@example.com"),
            ("particle-count", "20"),
            ("log-level", "debug"),
        ]);
        assert_eq!(config.content_base, "/static/content/");
        assert_eq!(config.form_endpoint.as_deref(), Some("https://formsubmit.co/ajax/me@example.com"));
        assert_eq!(config.particle_count, 20);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = from_pairs(&[("particle-count", "lots"), ("log-level", "chatty"), ("form-endpoint", "  ")]);
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.form_endpoint, None);
    }

    #[test]
    fn particle_count_is_capped() {
        assert_eq!(from_pairs(&[("particle-count", "100000")]).particle_count, MAX_PARTICLES);
    }
}
