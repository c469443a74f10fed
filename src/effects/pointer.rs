//! Pointer And Scroll Motion
//!
//! Card tilt, card glow, the custom cursor and parallax shapes.

use dom_listeners::{listen, on_document, on_window, ListenerHandle};
use web_sys::{Document, Element, Event, MouseEvent};

use super::motion::{glow_position, parallax_transform, tilt_transform, TILT_RESET};
use super::{select_all, set_style};

/// `[data-tilt]` card follows the pointer in 3D and settles on leave
pub fn bind_tilt(card: &Element) -> [Option<ListenerHandle>; 2] {
    let el = card.clone();
    let on_move = listen::<MouseEvent, _>(card.as_ref(), "mousemove", move |ev| {
        let rect = el.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        set_style(&el, "transform", &tilt_transform(x, y, rect.width(), rect.height()));
    });

    let el = card.clone();
    let on_leave = listen::<MouseEvent, _>(card.as_ref(), "mouseleave", move |_| {
        set_style(&el, "transform", TILT_RESET);
    });

    [on_move, on_leave]
}

/// Card highlight tracks the pointer via `--mouse-x` / `--mouse-y`
pub fn bind_glow(card: &Element) -> Option<ListenerHandle> {
    let el = card.clone();
    listen::<MouseEvent, _>(card.as_ref(), "mousemove", move |ev| {
        let rect = el.get_bounding_client_rect();
        let (x, y) = glow_position(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
        );
        set_style(&el, "--mouse-x", &format!("{}%", x));
        set_style(&el, "--mouse-y", &format!("{}%", y));
    })
}

/// `.custom-cursor` follows the pointer
pub fn bind_cursor(document: &Document) -> Option<ListenerHandle> {
    let doc = document.clone();
    on_document::<MouseEvent, _>("mousemove", move |ev| {
        if let Ok(Some(cursor)) = doc.query_selector(".custom-cursor") {
            set_style(&cursor, "left", &format!("{}px", ev.client_x()));
            set_style(&cursor, "top", &format!("{}px", ev.client_y()));
        }
    })
}

/// `.shape` decorations drift at increasing speeds while scrolling
pub fn bind_parallax(document: &Document) -> Option<ListenerHandle> {
    let doc = document.clone();
    on_window::<Event, _>("scroll", move |_| {
        let scrolled = web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
        for (index, shape) in select_all(&doc, ".shape").iter().enumerate() {
            set_style(shape, "transform", &parallax_transform(scrolled, index));
        }
    })
}
