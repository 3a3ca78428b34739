//! Modal acknowledgment overlay.

use dioxus::prelude::*;

use crate::state::AppState;

/// Shows the oldest pending notice until dismissed.
#[component]
pub fn NoticeModal(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let notice = state.read().notice();

    rsx! {
        if let Some(message) = notice {
            div {
                class: "notice-backdrop",
                div {
                    class: "notice",
                    p { class: "notice-text", "{message}" }
                    button {
                        class: "notice-btn",
                        onclick: move |_| state_write.write().dismiss_notice(),
                        "OK"
                    }
                }
            }
        }
    }
}
