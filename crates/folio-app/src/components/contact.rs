//! Contact form. Submission never leaves the app; the engine validates and
//! acknowledges locally.

use dioxus::prelude::*;

use folio_core::dom::ElementId;
use folio_core::markup::{CONTACT_FORM_ID, error_id};
use folio_core::{Field, PageEvent};

use crate::state::AppState;

#[component]
pub fn ContactSection(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let style = state.read().style(&ElementId::from("contact"));

    rsx! {
        section {
            id: "contact",
            class: "section contact",
            style: "{style}",

            h2 { class: "section-title", "Get In Touch" }

            form {
                id: CONTACT_FORM_ID,
                class: "contact-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    state_write.write().dispatch(PageEvent::Submit);
                },

                for field in Field::all().iter().copied() {
                    FieldRow { key: "{field}", state, field }
                }

                button { r#type: "submit", class: "submit-btn", "Send Message" }
            }
        }
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Message => "Your Message",
    }
}

/// One input with its inline error display.
#[component]
fn FieldRow(state: Signal<AppState>, field: Field) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let value = state_read.value(&ElementId::from(field.default_id()));
    let error_display = error_id(field);
    let error = state_read.text(&ElementId::new(error_display.clone()));

    let on_input = move |evt: FormEvent| {
        state_write.write().dispatch(PageEvent::FieldInput {
            field,
            value: evt.value(),
        });
    };

    rsx! {
        div {
            class: "form-group",
            if field == Field::Message {
                textarea {
                    id: field.default_id(),
                    name: field.default_id(),
                    rows: 5,
                    placeholder: placeholder(field),
                    value: "{value}",
                    oninput: on_input,
                }
            } else {
                input {
                    id: field.default_id(),
                    name: field.default_id(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    placeholder: placeholder(field),
                    value: "{value}",
                    oninput: on_input,
                }
            }
            span { id: "{error_display}", class: "error-message", "{error}" }
        }
    }
}
