//! Named compound visual states.
//!
//! Properties that animate together are only ever written together, through
//! [`apply_visual`]. A card half way between hidden and visible (display set,
//! opacity not) is not a state the page can reach.

use crate::dom::{ElementId, RenderSurface};

/// A named set of inline style declarations.
pub trait VisualState {
    fn declarations(&self) -> Vec<(&'static str, String)>;
}

/// Writes every declaration of `state` onto element `id`.
pub fn apply_visual<S, V>(surface: &mut S, id: &ElementId, state: &V)
where
    S: RenderSurface + ?Sized,
    V: VisualState + ?Sized,
{
    for (property, value) in state.declarations() {
        surface.set_style(id, property, &value);
    }
}

/// Filter visibility of a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    Visible,
    Hidden,
}

impl CardVisibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            CardVisibility::Visible
        } else {
            CardVisibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, CardVisibility::Visible)
    }
}

impl VisualState for CardVisibility {
    fn declarations(&self) -> Vec<(&'static str, String)> {
        let (display, opacity, scale) = match self {
            CardVisibility::Visible => ("block", "1", "1"),
            CardVisibility::Hidden => ("none", "0", "0.8"),
        };
        vec![
            ("display", display.to_string()),
            ("opacity", opacity.to_string()),
            ("transform", format!("scale({scale})")),
        ]
    }
}

/// Scroll reveal state of a section or card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVisual<'a> {
    /// Pre-reveal: transparent, pushed down, transition armed.
    Concealed { offset_px: u32, transition: &'a str },
    Revealed,
}

impl VisualState for RevealVisual<'_> {
    fn declarations(&self) -> Vec<(&'static str, String)> {
        match self {
            RevealVisual::Concealed {
                offset_px,
                transition,
            } => vec![
                ("opacity", "0".to_string()),
                ("transform", format!("translateY({offset_px}px)")),
                ("transition", transition.to_string()),
            ],
            RevealVisual::Revealed => vec![
                ("opacity", "1".to_string()),
                ("transform", "translateY(0)".to_string()),
            ],
        }
    }
}

/// Fade state of the rotating tagline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaglineFade {
    Shown,
    Faded,
}

impl VisualState for TaglineFade {
    fn declarations(&self) -> Vec<(&'static str, String)> {
        let opacity = match self {
            TaglineFade::Shown => "1",
            TaglineFade::Faded => "0",
        };
        vec![("opacity", opacity.to_string())]
    }
}
