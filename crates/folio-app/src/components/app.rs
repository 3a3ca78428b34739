//! Root application component for the portfolio page.

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemedRoot;

use super::{AboutSection, ContactSection, Footer, Header, Hero, NoticeModal, ProjectsSection};

/// Root application component.
#[component]
pub fn App(state: Signal<AppState>) -> Element {
    rsx! {
        ThemedRoot {
            state,
            div {
                class: "portfolio",

                Header { state }

                main {
                    class: "main-content",

                    Hero { state }
                    AboutSection { state }
                    ProjectsSection { state }
                    ContactSection { state }
                }

                Footer { state }

                // Acknowledgment overlay
                NoticeModal { state }
            }
        }
    }
}
