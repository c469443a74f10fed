//! In-page anchor links scroll smoothly and clear the fixed navbar

use dom_listeners::{listen, ListenerHandle};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::motion::ANCHOR_OFFSET;
use super::select_all;

pub fn bind(document: &Document) -> Vec<Option<ListenerHandle>> {
    select_all(document, r##"a[href^="#"]"##)
        .into_iter()
        .map(|link| {
            let doc = document.clone();
            let anchor = link.clone();
            listen::<MouseEvent, _>(link.as_ref(), "click", move |ev| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                if href == "#" {
                    return;
                }
                ev.prevent_default();
                scroll_to(&doc, &href);
            })
        })
        .collect()
}

fn scroll_to(document: &Document, selector: &str) {
    let Some(target) = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top() - ANCHOR_OFFSET));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
