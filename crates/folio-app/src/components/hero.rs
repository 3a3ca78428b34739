//! Hero section with the rotating tagline.

use dioxus::prelude::*;

use folio_core::dom::ElementId;
use folio_core::markup::TAGLINE_ID;

use crate::state::AppState;

#[component]
pub fn Hero(state: Signal<AppState>) -> Element {
    let state_read = state.read();
    let section_style = state_read.style(&ElementId::from("home"));
    let tagline = ElementId::from(TAGLINE_ID);
    let tagline_style = state_read.style(&tagline);
    let tagline_text = state_read.text(&tagline);
    let owner = state_read.content.owner.clone();

    rsx! {
        section {
            id: "home",
            class: "hero",
            style: "{section_style}",

            div {
                class: "hero-content",
                h1 { class: "hero-title", "Hi, I'm {owner}" }
                p {
                    id: TAGLINE_ID,
                    class: "tagline",
                    style: "{tagline_style}",
                    "{tagline_text}"
                }
            }
        }
    }
}
