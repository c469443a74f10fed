//! Page Surface
//!
//! Where rendered sections land. The loader only knows this trait; the DOM
//! implementation swaps container `innerHTML` and asks the effects layer to
//! pick up the new cards on the next frame.

use std::rc::Rc;

use web_sys::Document;

use crate::effects::Effects;

pub trait Page {
    /// Replace the whole content of `#container_id`. `false` if there is no such element.
    fn replace_content(&self, container_id: &str, html: &str) -> bool;

    /// Bind scroll/tilt/progress effects to anything new. Safe to call repeatedly.
    fn refresh_animations(&self);
}

/// The live document
pub struct DomPage {
    document: Document,
    effects: Rc<Effects>,
}

impl DomPage {
    pub fn new(document: Document, effects: Rc<Effects>) -> Self {
        Self { document, effects }
    }
}

impl Page for DomPage {
    fn replace_content(&self, container_id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(container_id) {
            Some(container) => {
                container.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn refresh_animations(&self) {
        self.effects.schedule_refresh();
    }
}
