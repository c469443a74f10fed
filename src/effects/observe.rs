//! Visibility Observers
//!
//! Reveal-on-scroll, progress bar fill and counters, all driven by
//! `IntersectionObserver`.

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::motion::{counter_steps, COUNTER_DURATION_MS, COUNTER_STEPS};
use super::{select_within, set_style};

/// Delay before a visible progress bar starts filling
const PROGRESS_FILL_DELAY_MS: u32 = 300;

/// An `IntersectionObserver` that owns its callback and disconnects on drop
pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Call `on_enter` for every observed element that becomes visible
    pub fn new<F>(threshold: f64, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));
        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &Element) {
        self.inner.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

/// `.animate-on-scroll`: mark visible and push `--progress` into child bars
pub fn reveal() -> Result<Observer, JsValue> {
    Observer::new(0.1, |el, _| {
        let _ = el.class_list().add_1("visible");
        for bar in select_within(&el, ".progress-bar") {
            if let Some(progress) = bar.get_attribute("data-progress") {
                set_style(&bar, "--progress", &format!("{}%", progress));
            }
        }
    })
}

/// `.progress-bar`: fill to `data-progress` shortly after it shows up
pub fn progress_bars() -> Result<Observer, JsValue> {
    Observer::new(0.5, |bar, _| {
        let Some(progress) = bar.get_attribute("data-progress") else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(PROGRESS_FILL_DELAY_MS).await;
            set_style(&bar, "--width", &format!("{}%", progress));
        });
    })
}

/// `.stat-number[data-count]`: count up once, then stop watching
pub fn counters() -> Result<Observer, JsValue> {
    Observer::new(0.5, |el, observer| {
        observer.unobserve(&el);
        let Some(target) = el
            .get_attribute("data-count")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
        else {
            return;
        };
        spawn_local(count_up(el, target));
    })
}

async fn count_up(el: Element, target: u32) {
    let step_ms = COUNTER_DURATION_MS / COUNTER_STEPS;
    for value in counter_steps(target) {
        TimeoutFuture::new(step_ms).await;
        el.set_text_content(Some(&value.to_string()));
    }
}
