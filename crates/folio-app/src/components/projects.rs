//! Project gallery with category filter buttons.

use dioxus::prelude::*;

use folio_core::PageEvent;
use folio_core::dom::ElementId;
use folio_core::markup::{Project, filter_button_id};

use crate::state::AppState;

#[component]
pub fn ProjectsSection(state: Signal<AppState>) -> Element {
    let state_read = state.read();
    let style = state_read.style(&ElementId::from("projects"));

    let mut filters = vec![("all".to_string(), "All".to_string())];
    filters.extend(
        state_read
            .content
            .categories
            .iter()
            .map(|c| (c.token.clone(), c.label.clone())),
    );
    let projects = state_read.content.projects.clone();

    rsx! {
        section {
            id: "projects",
            class: "section projects",
            style: "{style}",

            h2 { class: "section-title", "Projects" }

            div {
                class: "filter-bar",
                for (token, label) in filters {
                    FilterButton { key: "{token}", state, token, label }
                }
            }

            div {
                class: "project-grid",
                for project in projects {
                    ProjectCard { key: "{project.slug}", state, project }
                }
            }
        }
    }
}

#[component]
fn FilterButton(state: Signal<AppState>, token: String, label: String) -> Element {
    let mut state_write = state;
    let id = ElementId::new(filter_button_id(&token));
    let class = state.read().class(&id);
    let clicked = id.clone();

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            "data-filter": "{token}",
            onclick: move |_| {
                state_write.write().dispatch(PageEvent::FilterClicked(clicked.clone()));
            },
            "{label}"
        }
    }
}

#[component]
fn ProjectCard(state: Signal<AppState>, project: Project) -> Element {
    let id = project.element_id();
    let state_read = state.read();
    let class = state_read.class(&id);
    let style = state_read.style(&id);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            "data-category": "{project.category}",
            style: "{style}",

            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            div {
                class: "project-tags",
                for tag in project.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
        }
    }
}
