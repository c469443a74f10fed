//! Navigation Bar
//!
//! Compact style on scroll, hamburger menu, and the active-section link.

use dom_listeners::{listen, on_window, ListenerHandle};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use super::motion::{active_section, NAVBAR_SCROLLED_AFTER};
use super::select_all;

fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn bind(document: &Document) -> Vec<Option<ListenerHandle>> {
    let mut handles = Vec::new();
    let find = |selector: &str| document.query_selector(selector).ok().flatten();

    if let Some(navbar) = find(".navbar") {
        handles.push(on_window::<Event, _>("scroll", move |_| {
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", scroll_y() > NAVBAR_SCROLLED_AFTER);
        }));
    }

    let hamburger = find(".hamburger");
    let menu = find(".nav-menu");
    if let (Some(burger), Some(menu)) = (hamburger.clone(), menu.clone()) {
        let target = burger.clone();
        handles.push(listen::<MouseEvent, _>(target.as_ref(), "click", move |_| {
            let _ = burger.class_list().toggle("active");
            let _ = menu.class_list().toggle("active");
        }));
    }

    let links = select_all(document, ".nav-link");
    for link in &links {
        let (burger, menu) = (hamburger.clone(), menu.clone());
        handles.push(listen::<MouseEvent, _>(link.as_ref(), "click", move |_| {
            for el in burger.iter().chain(menu.iter()) {
                let _ = el.class_list().remove_1("active");
            }
        }));
    }

    if !links.is_empty() {
        let doc = document.clone();
        handles.push(on_window::<Event, _>("scroll", move |_| highlight_current(&doc, &links)));
    }

    handles
}

fn highlight_current(document: &Document, links: &[Element]) {
    let sections: Vec<(String, f64)> = select_all(document, "section")
        .into_iter()
        .filter_map(|s| {
            let top = f64::from(s.dyn_ref::<HtmlElement>()?.offset_top());
            Some((s.id(), top))
        })
        .collect();

    let current = active_section(&sections, scroll_y()).map(|id| format!("#{}", id));
    for link in links {
        let is_current = current.is_some() && link.get_attribute("href") == current;
        let _ = link.class_list().toggle_with_force("active", is_current);
    }
}
