//! Portfolio Frontend Entry Point

mod components;
mod config;
mod contact;
mod content;
mod effects;
mod error;
mod logging;
mod markdown;
mod models;
mod net;
mod page;
mod render;
mod store;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn, LevelFilter};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use components::ContactForm;
use config::SiteConfig;
use content::ContentLoader;
use effects::Effects;
use net::BrowserFetch;
use page::DomPage;
use store::{ContentCache, KeyValueStore, LocalStore, MemoryStore};

/// Element the contact form is mounted into
const CONTACT_FORM_ROOT: &str = "contact-form-root";

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        if let Some(handle) = dom_listeners::on_document::<Event, _>("DOMContentLoaded", move |_| start(doc.clone())) {
            handle.forget();
        }
    } else {
        start(document);
    }
}

fn start(document: Document) {
    let config = SiteConfig::from_document(&document);
    log::set_max_level(config.log_level);
    logging::banner();

    let effects = Effects::install(document.clone(), &config);
    mount_contact_form(&document, &config);

    let store: Box<dyn KeyValueStore> = match LocalStore::open() {
        Some(local) => Box::new(local),
        None => {
            warn!("localStorage unavailable, caching for this visit only");
            Box::new(MemoryStore::new())
        }
    };
    let loader = ContentLoader::new(
        ContentCache::new(store),
        BrowserFetch,
        DomPage::new(document, Rc::clone(&effects)),
        config.content_base,
    );
    effects.keep_alive();

    spawn_local(async move {
        let report = loader.load_all().await;
        for section in &report.sections {
            debug!(
                "[{}] cached: {}, fresh: {}",
                section.section,
                section.rendered_cached,
                section.fresh.is_ok()
            );
        }
        if report.all_fresh() {
            info!("all sections up to date");
        }
    });
}

fn mount_contact_form(document: &Document, config: &SiteConfig) {
    let Some(root) = document
        .get_element_by_id(CONTACT_FORM_ROOT)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(endpoint) = config.form_endpoint.clone() else {
        warn!("#{} present but no data-form-endpoint configured", CONTACT_FORM_ROOT);
        return;
    };

    leptos::mount::mount_to(root, move || view! { <ContactForm endpoint=endpoint /> }).forget();
}
