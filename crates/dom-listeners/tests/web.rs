#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use dom_listeners::{listen, ListenerGroup};
use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_target() -> EventTarget {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.create_element("div").unwrap().into()
}

fn fire(target: &EventTarget, name: &str) {
    let ev = Event::new(name).unwrap();
    target.dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
fn handler_runs_while_handle_is_alive() {
    let target = fresh_target();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();

    let handle = listen::<Event, _>(&target, "ping", move |_| counter.set(counter.get() + 1)).unwrap();
    fire(&target, "ping");
    fire(&target, "ping");
    assert_eq!(hits.get(), 2);

    handle.detach();
    fire(&target, "ping");
    assert_eq!(hits.get(), 2);
}

#[wasm_bindgen_test]
fn clearing_group_detaches_all() {
    let target = fresh_target();
    let hits = Rc::new(Cell::new(0));
    let mut group = ListenerGroup::new();

    for _ in 0..3 {
        let counter = hits.clone();
        group.push(listen::<Event, _>(&target, "ping", move |_| counter.set(counter.get() + 1)));
    }
    assert_eq!(group.len(), 3);

    fire(&target, "ping");
    assert_eq!(hits.get(), 3);

    group.clear();
    fire(&target, "ping");
    assert_eq!(hits.get(), 3);
}

#[wasm_bindgen_test]
fn mismatched_event_type_is_ignored() {
    let target = fresh_target();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();

    let _handle = listen::<web_sys::MouseEvent, _>(&target, "ping", move |_| counter.set(counter.get() + 1));
    fire(&target, "ping");
    assert_eq!(hits.get(), 0);
}
