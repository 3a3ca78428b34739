//! Navigation bar with the theme toggle.

use dioxus::prelude::*;

use folio_core::PageEvent;
use folio_core::dom::ElementId;
use folio_core::markup::{THEME_ICON_ID, THEME_TOGGLE_ID};

use crate::bridge;
use crate::state::AppState;

/// Header component with section links and the theme toggle.
#[component]
pub fn Header(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();

    let owner = state_read.content.owner.clone();
    let icon_class = state_read.class(&ElementId::from(THEME_ICON_ID));
    let links: Vec<(String, String)> = state_read
        .content
        .sections
        .iter()
        .map(|s| (format!("#{}", s.id), s.title.clone()))
        .collect();

    rsx! {
        header {
            class: "header",

            nav {
                class: "navbar",

                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        state_write.write().dispatch(PageEvent::AnchorClicked("#home".to_string()));
                        bridge::flush_scrolls(state_write);
                    },
                    "{owner}"
                }

                ul {
                    class: "nav-links",
                    for (href, title) in links {
                        NavLink { state, href, title }
                    }
                }

                button {
                    id: THEME_TOGGLE_ID,
                    class: "theme-toggle",
                    title: "Toggle theme",
                    onclick: move |_| {
                        state_write.write().dispatch(PageEvent::ToggleTheme);
                    },
                    i { id: THEME_ICON_ID, class: "{icon_class}" }
                }
            }
        }
    }
}

/// In-page link that scrolls smoothly instead of jumping.
#[component]
fn NavLink(state: Signal<AppState>, href: String, title: String) -> Element {
    let mut state_write = state;
    let target = href.clone();

    rsx! {
        li {
            a {
                class: "nav-link",
                href: "{href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state_write.write().dispatch(PageEvent::AnchorClicked(target.clone()));
                    bridge::flush_scrolls(state_write);
                },
                "{title}"
            }
        }
    }
}
