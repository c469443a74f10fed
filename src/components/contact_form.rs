//! Contact Form Component
//!
//! Validated contact form that posts to an external form handler.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::contact::{ContactMessage, Field, FieldError};
use crate::net;

/// How long the sent/failed state stays on the button
const RESET_AFTER_MS: u32 = 3000;
const ERROR_COLOR: &str = "#ff4757";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitState {
    fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Sending => "Sending...",
            SubmitState::Sent => "Message Sent!",
            SubmitState::Failed => "Error! Try again.",
        }
    }

    fn background(self) -> &'static str {
        match self {
            SubmitState::Sent => "linear-gradient(135deg, #00ff88 0%, #00cc6a 100%)",
            SubmitState::Failed => "var(--error-color, #ff4757)",
            SubmitState::Idle | SubmitState::Sending => "",
        }
    }
}

/// Contact form posting to `endpoint`
#[component]
pub fn ContactForm(#[prop(into)] endpoint: String) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (state, set_state) = signal(SubmitState::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() != SubmitState::Idle {
            return;
        }

        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let found = msg.validate();
        let valid = found.is_empty();
        set_errors.set(found);
        if !valid {
            return;
        }

        set_state.set(SubmitState::Sending);
        let endpoint = endpoint.clone();
        spawn_local(async move {
            match net::post_contact(&endpoint, &msg).await {
                Ok(()) => {
                    info!("contact message sent");
                    set_state.set(SubmitState::Sent);
                    for field in [name, email, subject, message] {
                        field.set(String::new());
                    }
                }
                Err(e) => {
                    error!("Submission error: {}", e);
                    set_state.set(SubmitState::Failed);
                }
            }
            TimeoutFuture::new(RESET_AFTER_MS).await;
            set_state.set(SubmitState::Idle);
        });
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <FieldGroup field=Field::Name label="Your Name" value=name errors=errors />
            <FieldGroup field=Field::Email label="Your Email" value=email errors=errors />
            <FieldGroup field=Field::Subject label="Subject" value=subject errors=errors />
            <FieldGroup field=Field::Message label="Your Message" value=message errors=errors multiline=true />
            <button
                type="submit"
                class="btn btn-primary btn-submit"
                disabled=move || state.get() != SubmitState::Idle
                style:background=move || state.get().background()
            >
                <span class="btn-text">{move || state.get().label()}</span>
                <i class="fas fa-paper-plane"></i>
            </button>
        </form>
    }
}

/// One labelled input with its inline error
#[component]
fn FieldGroup(
    field: Field,
    label: &'static str,
    value: RwSignal<String>,
    errors: ReadSignal<Vec<FieldError>>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = move || errors.with(|errs| errs.iter().find(|e| e.field == field).map(|e| e.message));
    let border = move || if error().is_some() { ERROR_COLOR } else { "" };
    let key = field.key();
    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = if multiline {
        view! {
            <textarea
                id=key
                name=key
                rows="5"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                style:border-color=border
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                id=key
                name=key
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                style:border-color=border
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            {control}
            <label for=key>{label}</label>
            {move || error().map(|msg| view! {
                <span
                    class="error-message"
                    style="color: #ff4757; font-size: 0.8rem; margin-top: 0.5rem; display: block;"
                >
                    {msg}
                </span>
            })}
        </div>
    }
}
