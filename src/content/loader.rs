//! Stale-While-Revalidate Loader
//!
//! Per section: render the cached copy right away, then fetch, render and
//! re-cache the network copy. The four sections run as one joined future on
//! the UI task, so a slow or failing section never holds up the others.

use log::{debug, info, warn};

use crate::error::ContentError;
use crate::models::Envelope;
use crate::net::{content_url, ContentSource};
use crate::page::Page;
use crate::store::{ContentCache, KeyValueStore};

use super::{Certificates, Projects, Section, Skills, Timeline};

/// Outcome of one section load
#[derive(Debug)]
pub struct SectionReport {
    pub section: &'static str,
    /// Cached copy was found and rendered
    pub rendered_cached: bool,
    /// Number of fresh records rendered, or why the network step failed
    pub fresh: Result<usize, ContentError>,
}

/// Outcome of a full page load, available once every section has settled
#[derive(Debug)]
pub struct LoadReport {
    pub sections: [SectionReport; 4],
}

impl LoadReport {
    pub fn failures(&self) -> impl Iterator<Item = &SectionReport> {
        self.sections.iter().filter(|s| s.fresh.is_err())
    }

    pub fn all_fresh(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Loads sections from `source` into `page`, mirroring them in `cache`
pub struct ContentLoader<K, N, P> {
    cache: ContentCache<K>,
    source: N,
    page: P,
    content_base: String,
}

impl<K, N, P> ContentLoader<K, N, P>
where
    K: KeyValueStore,
    N: ContentSource,
    P: Page,
{
    pub fn new(cache: ContentCache<K>, source: N, page: P, content_base: impl Into<String>) -> Self {
        Self {
            cache,
            source,
            page,
            content_base: content_base.into(),
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &ContentCache<K> {
        &self.cache
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Load all four sections concurrently
    pub async fn load_all(&self) -> LoadReport {
        let (skills, timeline, projects, certificates) = futures::join!(
            self.load::<Skills>(),
            self.load::<Timeline>(),
            self.load::<Projects>(),
            self.load::<Certificates>(),
        );
        let report = LoadReport {
            sections: [skills, timeline, projects, certificates],
        };
        info!(
            "content settled: {} fresh, {} failed",
            report.sections.len() - report.failures().count(),
            report.failures().count()
        );
        report
    }

    /// Cache first, then network. Never fails; failures are logged and reported.
    pub async fn load<S: Section>(&self) -> SectionReport {
        let rendered_cached = self.show_cached::<S>();
        let fresh = self.revalidate::<S>().await;
        match &fresh {
            Ok(count) => debug!("[{}] rendered {} fresh records", S::NAME, count),
            Err(e) if e.is_network_failure() => warn!("[{}] failed to load: {}", S::NAME, e),
            Err(e) => warn!("[{}] {}", S::NAME, e),
        }
        SectionReport {
            section: S::NAME,
            rendered_cached,
            fresh,
        }
    }

    fn show_cached<S: Section>(&self) -> bool {
        match self.cache.read::<S>() {
            Ok(Some(records)) => {
                debug!("[{}] rendering {} cached records", S::NAME, records.len());
                self.show::<S>(&records);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("[{}] cache error: {}", S::NAME, e);
                false
            }
        }
    }

    async fn revalidate<S: Section>(&self) -> Result<usize, ContentError> {
        let url = content_url(&self.content_base, S::PATH);
        let body = self.source.fetch_text(&url).await?;
        let envelope: Envelope<S::Record> =
            serde_json::from_str(&body).map_err(|source| ContentError::Decode { url, source })?;

        self.show::<S>(&envelope.items);
        if let Err(e) = self.cache.write::<S>(&envelope.items) {
            warn!("[{}] cache not updated: {}", S::NAME, e);
        }
        Ok(envelope.items.len())
    }

    fn show<S: Section>(&self, records: &[S::Record]) {
        let html = S::render(records);
        if self.page.replace_content(S::CONTAINER_ID, &html) {
            self.page.refresh_animations();
        } else {
            debug!("[{}] no #{} on this page", S::NAME, S::CONTAINER_ID);
        }
    }
}
