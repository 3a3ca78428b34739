//! Portfolio content and the document built from it.

use serde::{Deserialize, Serialize};

use crate::dom::{Document, Element, ElementId};
use crate::filter::{ACTIVE_CLASS, CATEGORY_ATTRIBUTE, FILTER_ATTRIBUTE};
use crate::social::SocialLink;
use crate::validation::Field;

pub const ROOT_ID: &str = "body";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_ID: &str = "theme-icon";
pub const TAGLINE_ID: &str = "tagline";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const SECTION_TAG: &str = "section";

/// Id of the error display next to a form field.
pub fn error_id(field: Field) -> String {
    format!("{}-error", field.default_id())
}

/// Id of a filter button.
pub fn filter_button_id(token: &str) -> String {
    format!("filter-{token}")
}

/// A page section reachable from the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
}

/// A filter category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub token: String,
    pub label: String,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Project {
    pub fn element_id(&self) -> ElementId {
        ElementId::new(format!("project-{}", self.slug))
    }
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner: String,
    pub about: String,
    pub sections: Vec<SectionInfo>,
    /// Filter categories, excluding the `all` wildcard.
    pub categories: Vec<Category>,
    pub projects: Vec<Project>,
}

fn project(slug: &str, title: &str, description: &str, category: &str, tags: &[&str]) -> Project {
    Project {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        let sections = [
            ("home", "Home"),
            ("about", "About"),
            ("projects", "Projects"),
            ("contact", "Contact"),
        ]
        .into_iter()
        .map(|(id, title)| SectionInfo {
            id: id.to_string(),
            title: title.to_string(),
        })
        .collect();

        let categories = [("web", "Web"), ("design", "Design"), ("mobile", "Mobile")]
            .into_iter()
            .map(|(token, label)| Category {
                token: token.to_string(),
                label: label.to_string(),
            })
            .collect();

        Self {
            owner: "Yrean".to_string(),
            about: "Web developer and designer building fast, friendly interfaces.".to_string(),
            sections,
            categories,
            projects: vec![
                project(
                    "storefront",
                    "E-Commerce Storefront",
                    "A responsive shop with cart, checkout and order tracking.",
                    "web",
                    &["HTML", "CSS", "JavaScript"],
                ),
                project(
                    "brand-kit",
                    "Brand Identity Kit",
                    "Logo, palette and typography system for a local bakery.",
                    "design",
                    &["Figma", "Illustrator"],
                ),
                project(
                    "fitness-app",
                    "Fitness Tracker",
                    "Workout logging with streaks and weekly summaries.",
                    "mobile",
                    &["React Native"],
                ),
                project(
                    "dashboard",
                    "Analytics Dashboard",
                    "Live charts over a REST API with saved filters.",
                    "web",
                    &["TypeScript", "Charts"],
                ),
                project(
                    "poster-series",
                    "Poster Series",
                    "Event posters exploring bold grids and type.",
                    "design",
                    &["Photoshop"],
                ),
            ],
        }
    }
}

impl PortfolioContent {
    /// Builds the document tree the engine reflects onto.
    pub fn build_document(&self, first_tagline: Option<&str>) -> Document {
        let mut doc = Document::new(Element::new(ROOT_ID, "body"));
        doc.push(Element::new(THEME_TOGGLE_ID, "button"))
            .push(Element::new(THEME_ICON_ID, "i"));

        for section in &self.sections {
            doc.push(
                Element::new(format!("nav-{}", section.id), "a")
                    .with_class("nav-link")
                    .with_attr("href", &format!("#{}", section.id))
                    .with_text(section.title.as_str()),
            );
        }

        for section in &self.sections {
            doc.push(Element::new(section.id.as_str(), SECTION_TAG));
            match section.id.as_str() {
                "home" => {
                    doc.push(
                        Element::new(TAGLINE_ID, "p")
                            .with_class("tagline")
                            .with_text(first_tagline.unwrap_or_default()),
                    );
                }
                "projects" => self.push_projects(&mut doc),
                "contact" => push_contact_form(&mut doc),
                _ => {}
            }
        }

        for link in SocialLink::all() {
            doc.push(Element::new(link.default_id(), "a").with_class("social-btn"));
        }
        doc
    }

    fn push_projects(&self, doc: &mut Document) {
        doc.push(
            Element::new(filter_button_id("all"), "button")
                .with_class(FILTER_BUTTON_CLASS)
                .with_class(ACTIVE_CLASS)
                .with_attr(FILTER_ATTRIBUTE, "all")
                .with_text("All"),
        );
        for category in &self.categories {
            doc.push(
                Element::new(filter_button_id(&category.token), "button")
                    .with_class(FILTER_BUTTON_CLASS)
                    .with_attr(FILTER_ATTRIBUTE, &category.token)
                    .with_text(category.label.as_str()),
            );
        }
        for project in &self.projects {
            doc.push(
                Element::new(project.element_id(), "div")
                    .with_class(PROJECT_CARD_CLASS)
                    .with_attr(CATEGORY_ATTRIBUTE, &project.category),
            );
        }
    }
}

fn push_contact_form(doc: &mut Document) {
    doc.push(Element::new(CONTACT_FORM_ID, "form"));
    for &field in Field::all() {
        let tag = if field == Field::Message { "textarea" } else { "input" };
        doc.push(Element::new(field.default_id(), tag))
            .push(Element::new(error_id(field), "span").with_class("error-message"));
    }
}
