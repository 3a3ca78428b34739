//! Project filter reflection.
//!
//! One filter button is active at a time. Selection is exclusive: applying
//! a filter clears every button before marking the selected one.

use std::fmt;

use crate::dom::{ElementId, RenderSurface};
use crate::visual::{CardVisibility, apply_visual};

/// Attribute on a filter button naming its token.
pub const FILTER_ATTRIBUTE: &str = "data-filter";
/// Attribute on a project card naming its category.
pub const CATEGORY_ATTRIBUTE: &str = "data-category";
/// Class marking the selected filter button.
pub const ACTIVE_CLASS: &str = "active";

/// Wire token of the wildcard filter.
const ALL_TOKEN: &str = "all";

/// Selected project category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterToken {
    #[default]
    All,
    Category(String),
}

impl FilterToken {
    pub fn parse(raw: &str) -> Self {
        match raw {
            ALL_TOKEN => FilterToken::All,
            other => FilterToken::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterToken::All => ALL_TOKEN,
            FilterToken::Category(c) => c,
        }
    }

    /// Whether a card of `category` passes this filter.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Category(c) => c == category,
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FilterToken {
    fn from(raw: &str) -> Self {
        FilterToken::parse(raw)
    }
}

/// A filter button bound at load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub id: ElementId,
    pub token: FilterToken,
}

/// A project card bound at load. The category never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ElementId,
    pub category: String,
}

impl ProjectCard {
    pub fn is_visible_under(&self, filter: &FilterToken) -> bool {
        filter.admits(&self.category)
    }
}

/// Result of one filter application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub active_button: Option<ElementId>,
    pub visible_cards: usize,
    pub hidden_cards: usize,
}

/// Marks the button for `selected` active and reflects every card.
///
/// The first button whose token matches `selected` wins. A token no button
/// represents changes nothing and returns `None`, so the previous selection
/// stays. Without any buttons only the cards are reflected.
pub fn apply_filter<R: RenderSurface + ?Sized>(
    surface: &mut R,
    selected: &FilterToken,
    buttons: &[FilterButton],
    cards: &[ProjectCard],
) -> Option<FilterOutcome> {
    let active = buttons.iter().find(|b| &b.token == selected).map(|b| &b.id);
    if active.is_none() && !buttons.is_empty() {
        tracing::debug!(%selected, "No filter button for token, keeping selection");
        return None;
    }
    mark_active(surface, active, buttons);
    Some(reflect_cards(surface, selected, cards, active.cloned()))
}

/// Applies the filter of a clicked button, `None` if `clicked` is not a
/// filter button.
pub fn apply_button<R: RenderSurface + ?Sized>(
    surface: &mut R,
    clicked: &ElementId,
    buttons: &[FilterButton],
    cards: &[ProjectCard],
) -> Option<FilterOutcome> {
    let button = buttons.iter().find(|b| &b.id == clicked)?;
    // The attribute is authoritative, the bound token is the fallback.
    let selected = surface
        .attribute(&button.id, FILTER_ATTRIBUTE)
        .map(FilterToken::parse)
        .unwrap_or_else(|| button.token.clone());
    mark_active(surface, Some(&button.id), buttons);
    Some(reflect_cards(surface, &selected, cards, Some(button.id.clone())))
}

fn mark_active<R: RenderSurface + ?Sized>(
    surface: &mut R,
    active: Option<&ElementId>,
    buttons: &[FilterButton],
) {
    for button in buttons {
        surface.remove_class(&button.id, ACTIVE_CLASS);
    }
    if let Some(id) = active {
        surface.add_class(id, ACTIVE_CLASS);
    }
}

fn reflect_cards<R: RenderSurface + ?Sized>(
    surface: &mut R,
    selected: &FilterToken,
    cards: &[ProjectCard],
    active_button: Option<ElementId>,
) -> FilterOutcome {
    let mut visible_cards = 0;
    for card in cards {
        let state = CardVisibility::from_visible(card.is_visible_under(selected));
        if state.is_visible() {
            visible_cards += 1;
        }
        apply_visual(surface, &card.id, &state);
    }

    tracing::debug!(filter = %selected, visible = visible_cards, total = cards.len(), "Filter applied");

    FilterOutcome {
        active_button,
        visible_cards,
        hidden_cards: cards.len() - visible_cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};

    fn fixture() -> (Document, Vec<FilterButton>, Vec<ProjectCard>) {
        let mut doc = Document::new(Element::new("body", "body"));
        let mut buttons = Vec::new();
        for token in ["all", "web", "design", "mobile"] {
            let id = format!("filter-{token}");
            doc.push(
                Element::new(id.as_str(), "button")
                    .with_class("filter-btn")
                    .with_attr(FILTER_ATTRIBUTE, token),
            );
            buttons.push(FilterButton {
                id: ElementId::from(id),
                token: FilterToken::parse(token),
            });
        }
        doc.add_class(&buttons[0].id, ACTIVE_CLASS);

        let mut cards = Vec::new();
        for (i, category) in ["web", "design", "design", "mobile", "web"].iter().enumerate() {
            let id = format!("project-{i}");
            doc.push(
                Element::new(id.as_str(), "div")
                    .with_class("project-card")
                    .with_attr(CATEGORY_ATTRIBUTE, category),
            );
            cards.push(ProjectCard {
                id: ElementId::from(id),
                category: category.to_string(),
            });
        }
        (doc, buttons, cards)
    }

    fn active_count(doc: &Document, buttons: &[FilterButton]) -> usize {
        buttons
            .iter()
            .filter(|b| doc.has_class(&b.id, ACTIVE_CLASS))
            .count()
    }

    #[test]
    fn test_all_shows_every_card() {
        let (mut doc, buttons, cards) = fixture();
        let outcome = apply_filter(&mut doc, &FilterToken::All, &buttons, &cards).unwrap();

        assert_eq!(outcome.visible_cards, cards.len());
        for card in &cards {
            assert_eq!(doc.style(&card.id, "display"), Some("block"));
        }
    }

    #[test]
    fn test_category_shows_exactly_matching_cards() {
        let (mut doc, buttons, cards) = fixture();
        let outcome =
            apply_filter(&mut doc, &FilterToken::from("design"), &buttons, &cards).unwrap();

        assert_eq!(outcome.visible_cards, 2);
        assert_eq!(outcome.hidden_cards, 3);
        for card in &cards {
            let shown = doc.style(&card.id, "display") == Some("block");
            assert_eq!(shown, card.category == "design");
            let opacity = doc.style(&card.id, "opacity");
            assert_eq!(opacity, Some(if shown { "1" } else { "0" }));
        }
    }

    #[test]
    fn test_exactly_one_button_active() {
        let (mut doc, buttons, cards) = fixture();
        for token in ["web", "all", "mobile", "design", "design"] {
            apply_filter(&mut doc, &FilterToken::from(token), &buttons, &cards);
            assert_eq!(active_count(&doc, &buttons), 1);
        }
        assert!(doc.has_class(&ElementId::from("filter-design"), ACTIVE_CLASS));
    }

    #[test]
    fn test_unrepresented_token_keeps_selection() {
        let (mut doc, buttons, cards) = fixture();
        apply_filter(&mut doc, &FilterToken::from("web"), &buttons, &cards);
        let before = doc.clone();

        assert!(apply_filter(&mut doc, &FilterToken::from("games"), &buttons, &cards).is_none());
        assert_eq!(doc, before);
        assert_eq!(active_count(&doc, &buttons), 1);
        assert!(doc.has_class(&ElementId::from("filter-web"), ACTIVE_CLASS));
    }

    #[test]
    fn test_without_buttons_cards_are_still_filtered() {
        let (mut doc, _, cards) = fixture();
        let outcome = apply_filter(&mut doc, &FilterToken::from("design"), &[], &cards).unwrap();
        assert_eq!(outcome.active_button, None);
        assert_eq!(outcome.visible_cards, 2);
    }

    #[test]
    fn test_button_click_reads_data_filter() {
        let (mut doc, buttons, cards) = fixture();
        let clicked = ElementId::from("filter-mobile");
        let outcome = apply_button(&mut doc, &clicked, &buttons, &cards).unwrap();

        assert_eq!(outcome.active_button, Some(clicked));
        assert_eq!(outcome.visible_cards, 1);
        assert_eq!(active_count(&doc, &buttons), 1);
    }

    #[test]
    fn test_unknown_button_is_ignored() {
        let (mut doc, buttons, cards) = fixture();
        let before = doc.clone();
        assert!(apply_button(&mut doc, &ElementId::from("nope"), &buttons, &cards).is_none());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_empty_card_set_is_noop() {
        let (mut doc, buttons, _) = fixture();
        let outcome = apply_filter(&mut doc, &FilterToken::All, &buttons, &[]).unwrap();
        assert_eq!(outcome.visible_cards, 0);
        assert_eq!(outcome.hidden_cards, 0);
    }
}
