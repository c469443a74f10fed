//! Page Effects
//!
//! Decorative behaviour layered over the static page and the rendered
//! sections. Every effect skips elements that aren't there.
//!
//! Elements are claimed through a `data-fx` token list before anything is
//! bound to them, so `refresh` can run after every render without stacking
//! observers or listeners on the same card.

mod motion;
mod navbar;
mod observe;
mod particles;
mod pointer;
mod smooth_scroll;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dom_listeners::ListenerGroup;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, NodeList};

use crate::config::SiteConfig;
use crate::error::js_error_string;
use observe::Observer;

const FX_ATTR: &str = "data-fx";

pub struct Effects {
    document: Document,
    reveal: Option<Observer>,
    progress: Option<Observer>,
    counters: Option<Observer>,
    /// Listeners on rendered cards, pruned as cards are replaced
    card_listeners: RefCell<ListenerGroup>,
    /// Window/document/navigation listeners, detached on drop
    _page_listeners: ListenerGroup,
    frame_pending: Cell<bool>,
}

impl Effects {
    /// Start every effect on `document` and bind whatever is already on the page
    pub fn install(document: Document, config: &SiteConfig) -> Rc<Self> {
        if let Err(e) = particles::spawn(&document, config.particle_count) {
            warn!("particles: {}", js_error_string(&e));
        }

        let observer = |name: &str, made: Result<Observer, JsValue>| match made {
            Ok(o) => Some(o),
            Err(e) => {
                warn!("{} observer unavailable: {}", name, js_error_string(&e));
                None
            }
        };

        let mut page_listeners = ListenerGroup::new();
        page_listeners.extend(navbar::bind(&document));
        page_listeners.extend(smooth_scroll::bind(&document));
        page_listeners.push(pointer::bind_cursor(&document));
        page_listeners.push(pointer::bind_parallax(&document));

        let effects = Rc::new(Self {
            reveal: observer("reveal", observe::reveal()),
            progress: observer("progress", observe::progress_bars()),
            counters: observer("counter", observe::counters()),
            document,
            card_listeners: RefCell::new(ListenerGroup::new()),
            _page_listeners: page_listeners,
            frame_pending: Cell::new(false),
        });
        effects.refresh();
        effects
    }

    /// Bind effects to elements not seen before
    pub fn refresh(&self) {
        let mut cards = self.card_listeners.borrow_mut();
        cards.retain(|handle| handle.target().dyn_ref::<Node>().map_or(true, Node::is_connected));

        for (index, el) in select_all(&self.document, ".animate-on-scroll").iter().enumerate() {
            if let Some(reveal) = &self.reveal {
                if claim(el, "reveal") {
                    set_style(el, "transition-delay", &motion::stagger_delay(index));
                    reveal.observe(el);
                }
            }
        }

        if let Some(progress) = &self.progress {
            for bar in select_all(&self.document, ".progress-bar") {
                if claim(&bar, "progress") {
                    progress.observe(&bar);
                }
            }
        }

        if let Some(counters) = &self.counters {
            for counter in select_all(&self.document, ".stat-number[data-count]") {
                if claim(&counter, "count") {
                    counters.observe(&counter);
                }
            }
        }

        for card in select_all(&self.document, "[data-tilt]") {
            if claim(&card, "tilt") {
                cards.extend(pointer::bind_tilt(&card));
            }
        }

        for card in select_all(&self.document, ".skill-card, .project-card, .cert-card") {
            if claim(&card, "glow") {
                cards.push(pointer::bind_glow(&card));
            }
        }

        debug!("effects refreshed: {} card listeners", cards.len());
    }

    /// Run `refresh` on the next animation frame; repeated calls within a frame coalesce
    pub fn schedule_refresh(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }
        let effects = Rc::clone(self);
        let callback = Closure::once_into_js(move || {
            effects.frame_pending.set(false);
            effects.refresh();
        });

        let scheduled = web_sys::window()
            .map(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !scheduled {
            self.frame_pending.set(false);
            self.refresh();
        }
    }

    /// Keep effects bound for the rest of the page lifetime.
    ///
    /// Without this, dropping the last `Rc` detaches every listener and
    /// disconnects the observers.
    pub fn keep_alive(self: Rc<Self>) {
        std::mem::forget(self);
    }
}

/// Mark `el` as bound for `token`; `false` if it already was
fn claim(el: &Element, token: &str) -> bool {
    match motion::add_token(el.get_attribute(FX_ATTR).as_deref(), token) {
        Some(tokens) => el.set_attribute(FX_ATTR, &tokens).is_ok(),
        None => false,
    }
}

pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector))
}

pub(crate) fn select_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
