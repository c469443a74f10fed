//! UI Components
//!
//! Leptos components mounted into the static page.

mod contact_form;

pub use contact_form::ContactForm;
