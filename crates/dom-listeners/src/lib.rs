//! DOM Listener Handles
//!
//! Event listeners bound through `wasm_bindgen` closures, paired with their
//! removal. A `ListenerHandle` keeps its closure alive and detaches it from
//! the target when dropped, so listener lifetime follows Rust ownership
//! instead of `Closure::forget`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An attached event listener. Dropping it removes the listener.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    /// Detach now (same as dropping)
    pub fn detach(self) {}

    /// Keep the listener attached for the rest of the page lifetime
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach `handler` to `target` for `event`.
///
/// Events that can't be cast to `E` are ignored, so a typed handler
/// (e.g. `web_sys::MouseEvent`) never sees a foreign event type.
/// Returns `None` if the browser rejects the listener.
pub fn listen<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Option<ListenerHandle>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .ok()?;

    Some(ListenerHandle {
        target: target.clone(),
        event,
        closure,
    })
}

/// Attach to the global `window`
pub fn on_window<E, F>(event: &'static str, handler: F) -> Option<ListenerHandle>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let win = web_sys::window()?;
    listen(win.as_ref(), event, handler)
}

/// Attach to the global `document`
pub fn on_document<E, F>(event: &'static str, handler: F) -> Option<ListenerHandle>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let doc = web_sys::window()?.document()?;
    listen(doc.as_ref(), event, handler)
}

/// A set of listeners that live and die together
#[derive(Default)]
pub struct ListenerGroup {
    handles: Vec<ListenerHandle>,
}

impl ListenerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle; `None` (failed attach) is skipped
    pub fn push(&mut self, handle: Option<ListenerHandle>) {
        if let Some(handle) = handle {
            self.handles.push(handle);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Keep only handles matching `keep`; the rest are detached
    pub fn retain(&mut self, keep: impl FnMut(&ListenerHandle) -> bool) {
        self.handles.retain(keep);
    }

    /// Detach every listener in the group
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

impl Extend<Option<ListenerHandle>> for ListenerGroup {
    fn extend<I: IntoIterator<Item = Option<ListenerHandle>>>(&mut self, iter: I) {
        for handle in iter {
            self.push(handle);
        }
    }
}
