//! About section and footer.

use dioxus::prelude::*;

use folio_core::dom::ElementId;
use folio_core::{PageEvent, SocialLink};

use crate::state::AppState;

#[component]
pub fn AboutSection(state: Signal<AppState>) -> Element {
    let state_read = state.read();
    let style = state_read.style(&ElementId::from("about"));
    let about = state_read.content.about.clone();

    rsx! {
        section {
            id: "about",
            class: "section about",
            style: "{style}",
            h2 { class: "section-title", "About Me" }
            p { class: "about-text", "{about}" }
        }
    }
}

/// Footer with the placeholder social links.
#[component]
pub fn Footer(state: Signal<AppState>) -> Element {
    let owner = state.read().content.owner.clone();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "social-links",
                for link in SocialLink::all().iter().copied() {
                    SocialButton { state, link }
                }
            }
            p { class: "footer-text", "© {owner}" }
        }
    }
}

#[component]
fn SocialButton(state: Signal<AppState>, link: SocialLink) -> Element {
    let mut state_write = state;

    rsx! {
        a {
            id: link.default_id(),
            class: "social-btn",
            href: "#",
            title: link.label(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                state_write.write().dispatch(PageEvent::SocialClicked(link));
            },
            i { class: link.icon_class() }
        }
    }
}
