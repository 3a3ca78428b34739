//! Theme wrapper for the portfolio window.
//!
//! The theme itself is reflected by the engine onto the document root; this
//! wrapper only mirrors the root's `data-theme` onto the rendered tree so
//! the stylesheet can select on it.

use dioxus::prelude::*;

use crate::state::AppState;

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(state: Signal<AppState>, children: Element) -> Element {
    let theme = state.read().theme();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
