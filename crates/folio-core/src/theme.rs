//! Theme reflection: the active theme, its persisted preference and the
//! toggle indicator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dom::{ElementId, RenderSurface};
use crate::store::PreferenceStore;

/// Attribute on the root element carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Available page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the `data-theme` attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Icon class for the toggle indicator.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

/// Error for an unrecognised theme string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Elements and storage key the theme is reflected onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeBinding {
    /// Element carrying `data-theme`.
    pub root: ElementId,
    /// Toggle indicator whose class list encodes the theme.
    pub icon: Option<ElementId>,
    /// Preference key.
    pub key: String,
}

impl ThemeBinding {
    /// Reads the persisted theme, falling back to the default.
    pub fn get_theme<P: PreferenceStore + ?Sized>(&self, store: &P) -> Theme {
        match store.get(&self.key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Theme preference unreadable, using default");
                Theme::default()
            }
        }
    }

    /// Theme currently shown on the page, if the root carries one.
    pub fn current<R: RenderSurface + ?Sized>(&self, surface: &R) -> Option<Theme> {
        surface
            .attribute(&self.root, THEME_ATTRIBUTE)
            .and_then(|v| v.parse().ok())
    }

    /// Reflects `theme` on the page without persisting it.
    pub fn apply<R: RenderSurface + ?Sized>(&self, surface: &mut R, theme: Theme) {
        surface.set_attribute(&self.root, THEME_ATTRIBUTE, theme.css_value());
        if let Some(icon) = &self.icon {
            surface.set_class_name(icon, theme.icon_class());
        }
    }

    /// Reflects and persists `theme`.
    ///
    /// A failed store write leaves the theme applied for this session.
    pub fn set_theme<R, P>(&self, surface: &mut R, store: &mut P, theme: Theme)
    where
        R: RenderSurface + ?Sized,
        P: PreferenceStore + ?Sized,
    {
        self.apply(surface, theme);
        if let Err(e) = store.set(&self.key, theme.css_value()) {
            tracing::warn!(error = %e, %theme, "Theme not persisted, applied for this session only");
        }
        tracing::debug!(%theme, "Theme set");
    }

    /// Switches to the other theme and returns it.
    pub fn toggle_theme<R, P>(&self, surface: &mut R, store: &mut P) -> Theme
    where
        R: RenderSurface + ?Sized,
        P: PreferenceStore + ?Sized,
    {
        let current = self
            .current(surface)
            .unwrap_or_else(|| self.get_theme(store));
        let next = current.toggled();
        self.set_theme(surface, store, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};
    use crate::store::{MemoryStore, UnavailableStore};

    fn fixture() -> (Document, ThemeBinding) {
        let mut doc = Document::new(Element::new("body", "body"));
        doc.push(Element::new("theme-icon", "i"));
        let binding = ThemeBinding {
            root: ElementId::from("body"),
            icon: Some(ElementId::from("theme-icon")),
            key: "theme".to_string(),
        };
        (doc, binding)
    }

    #[test]
    fn test_default_is_dark() {
        let (_, binding) = fixture();
        assert_eq!(binding.get_theme(&MemoryStore::new()), Theme::Dark);
        assert_eq!(binding.get_theme(&UnavailableStore), Theme::Dark);
    }

    #[test]
    fn test_unrecognised_stored_value_falls_back() {
        let (_, binding) = fixture();
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").unwrap();
        assert_eq!(binding.get_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_set_theme_reflects_and_persists() {
        let (mut doc, binding) = fixture();
        let mut store = MemoryStore::new();
        binding.set_theme(&mut doc, &mut store, Theme::Light);

        assert_eq!(doc.attribute(&binding.root, THEME_ATTRIBUTE), Some("light"));
        assert_eq!(doc.class_string(&ElementId::from("theme-icon")), "fas fa-sun");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let (mut doc, binding) = fixture();
        let mut store = MemoryStore::new();
        binding.set_theme(&mut doc, &mut store, Theme::Dark);
        let before = store.get("theme").unwrap();

        assert_eq!(binding.toggle_theme(&mut doc, &mut store), Theme::Light);
        assert_eq!(binding.toggle_theme(&mut doc, &mut store), Theme::Dark);

        assert_eq!(binding.current(&doc), Some(Theme::Dark));
        assert_eq!(store.get("theme").unwrap(), before);
    }

    #[test]
    fn test_toggle_without_storage_still_applies() {
        let (mut doc, binding) = fixture();
        let mut store = UnavailableStore;
        binding.apply(&mut doc, Theme::Dark);

        assert_eq!(binding.toggle_theme(&mut doc, &mut store), Theme::Light);
        assert_eq!(binding.current(&doc), Some(Theme::Light));
        assert_eq!(doc.class_string(&ElementId::from("theme-icon")), "fas fa-sun");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Light".parse::<Theme>().is_err());
    }
}
