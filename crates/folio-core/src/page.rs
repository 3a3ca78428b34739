//! The page context: element bindings resolved once at load, the
//! collaborators, and event dispatch.

use crate::config::PageConfig;
use crate::dom::{Document, ElementId, RenderSurface};
use crate::error::{FolioError, Result};
use crate::filter::{self, FILTER_ATTRIBUTE, CATEGORY_ATTRIBUTE, FilterButton, FilterOutcome, FilterToken, ProjectCard};
use crate::markup::{
    CONTACT_FORM_ID, FILTER_BUTTON_CLASS, PROJECT_CARD_CLASS, ROOT_ID, SECTION_TAG, TAGLINE_ID,
    THEME_ICON_ID, error_id,
};
use crate::navigation;
use crate::notify::Notifier;
use crate::reveal::{IntersectionEntry, IntersectionNotifier, RevealTracker};
use crate::social::SocialLink;
use crate::store::PreferenceStore;
use crate::tagline::{TaglineRotator, TaglineStep};
use crate::theme::{Theme, ThemeBinding};
use crate::validation::{ContactForm, Field, FieldBinding, FieldError, SubmitOutcome};

/// Every element the handlers touch, bound once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    pub theme: ThemeBinding,
    pub filter_buttons: Vec<FilterButton>,
    pub cards: Vec<ProjectCard>,
    /// Sections then cards, in document order.
    pub reveal_targets: Vec<ElementId>,
    pub form: ContactForm,
    pub tagline: Option<ElementId>,
    pub social: Vec<(SocialLink, ElementId)>,
}

fn optional(doc: &Document, id: &str) -> Option<ElementId> {
    let id = ElementId::from(id);
    doc.contains(&id).then_some(id)
}

fn required(doc: &Document, id: &str) -> Result<ElementId> {
    optional(doc, id).ok_or_else(|| FolioError::MissingElement(id.to_string()))
}

impl PageBindings {
    /// Resolves bindings against the default markup ids.
    ///
    /// The contact form and its fields are required; everything else may be
    /// absent.
    pub fn discover(doc: &Document, config: &PageConfig) -> Result<Self> {
        let root = if doc.contains(&ElementId::from(ROOT_ID)) {
            ElementId::from(ROOT_ID)
        } else {
            doc.root().clone()
        };

        let theme = ThemeBinding {
            root,
            icon: optional(doc, THEME_ICON_ID),
            key: config.theme_key.clone(),
        };

        let filter_buttons = doc
            .ids_with_class(FILTER_BUTTON_CLASS)
            .into_iter()
            .filter_map(|id| match doc.attribute(&id, FILTER_ATTRIBUTE) {
                Some(token) => Some(FilterButton {
                    token: FilterToken::parse(token),
                    id,
                }),
                None => {
                    tracing::warn!(%id, "Filter button without {FILTER_ATTRIBUTE}, skipping");
                    None
                }
            })
            .collect();

        let cards: Vec<ProjectCard> = doc
            .ids_with_class(PROJECT_CARD_CLASS)
            .into_iter()
            .map(|id| ProjectCard {
                category: doc
                    .attribute(&id, CATEGORY_ATTRIBUTE)
                    .unwrap_or_default()
                    .to_string(),
                id,
            })
            .collect();

        let mut reveal_targets = doc.ids_with_tag(SECTION_TAG);
        reveal_targets.extend(cards.iter().map(|c| c.id.clone()));

        let field = |field: Field| -> Result<FieldBinding> {
            Ok(FieldBinding {
                input: required(doc, field.default_id())?,
                error: required(doc, &error_id(field))?,
            })
        };
        let form = ContactForm {
            form: required(doc, CONTACT_FORM_ID)?,
            name: field(Field::Name)?,
            email: field(Field::Email)?,
            message: field(Field::Message)?,
        };

        let social = SocialLink::all()
            .iter()
            .filter_map(|&link| optional(doc, link.default_id()).map(|id| (link, id)))
            .collect();

        Ok(Self {
            theme,
            filter_buttons,
            cards,
            reveal_targets,
            form,
            tagline: optional(doc, TAGLINE_ID),
            social,
        })
    }

    pub fn social_link(&self, id: &ElementId) -> Option<SocialLink> {
        self.social
            .iter()
            .find(|(_, bound)| bound == id)
            .map(|(link, _)| *link)
    }
}

/// A discrete page event.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ToggleTheme,
    FilterClicked(ElementId),
    FieldInput { field: Field, value: String },
    Submit,
    AnchorClicked(String),
    SocialClicked(SocialLink),
    Intersection(Vec<IntersectionEntry>),
    Tagline(TaglineStep),
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Theme(Theme),
    Filter(Option<FilterOutcome>),
    Field {
        field: Field,
        result: std::result::Result<(), FieldError>,
    },
    Submit(SubmitOutcome),
    Navigated(bool),
    Notified,
    Revealed(usize),
    Tagline,
}

/// Page state and collaborators, built once and handed to every handler.
pub struct Page<S, N> {
    bindings: PageBindings,
    config: PageConfig,
    store: S,
    notifier: N,
    reveal: RevealTracker,
    tagline: TaglineRotator,
    filter: FilterToken,
}

impl<S: PreferenceStore, N: Notifier> Page<S, N> {
    pub fn new(doc: &Document, store: S, notifier: N, config: PageConfig) -> Result<Self> {
        config.validate()?;
        let bindings = PageBindings::discover(doc, &config)?;
        tracing::debug!(
            buttons = bindings.filter_buttons.len(),
            cards = bindings.cards.len(),
            reveal_targets = bindings.reveal_targets.len(),
            "Page bound"
        );
        Ok(Self {
            reveal: RevealTracker::new(config.reveal.clone()),
            tagline: TaglineRotator::from(&config.tagline),
            filter: FilterToken::All,
            bindings,
            config,
            store,
            notifier,
        })
    }

    /// Applies the stored theme, shows the first tagline and registers
    /// every reveal target.
    pub fn init<R, I>(&mut self, surface: &mut R, intersection: &mut I) -> Theme
    where
        R: RenderSurface + ?Sized,
        I: IntersectionNotifier + ?Sized,
    {
        let theme = self.bindings.theme.get_theme(&self.store);
        self.bindings.theme.apply(surface, theme);

        if let Some(target) = &self.bindings.tagline {
            self.tagline.show(surface, target);
        }

        self.reveal
            .register(surface, intersection, &self.bindings.reveal_targets);

        tracing::info!(%theme, "Page initialised");
        theme
    }

    pub fn dispatch<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        event: PageEvent,
    ) -> DispatchOutcome {
        match event {
            PageEvent::ToggleTheme => DispatchOutcome::Theme(self.toggle_theme(surface)),
            PageEvent::FilterClicked(id) => DispatchOutcome::Filter(self.click_filter(surface, &id)),
            PageEvent::FieldInput { field, value } => DispatchOutcome::Field {
                field,
                result: self.input(surface, field, &value),
            },
            PageEvent::Submit => DispatchOutcome::Submit(self.submit(surface)),
            PageEvent::AnchorClicked(href) => {
                DispatchOutcome::Navigated(navigation::scroll_to_anchor(surface, &href))
            }
            PageEvent::SocialClicked(link) => {
                link.activate(&mut self.notifier);
                DispatchOutcome::Notified
            }
            PageEvent::Intersection(entries) => {
                DispatchOutcome::Revealed(self.reveal.process(surface, &entries))
            }
            PageEvent::Tagline(step) => {
                if let Some(target) = &self.bindings.tagline {
                    self.tagline.step(surface, target, step);
                }
                DispatchOutcome::Tagline
            }
        }
    }

    /// Persisted theme, or the default.
    pub fn stored_theme(&self) -> Theme {
        self.bindings.theme.get_theme(&self.store)
    }

    pub fn set_theme<R: RenderSurface + ?Sized>(&mut self, surface: &mut R, theme: Theme) {
        self.bindings.theme.set_theme(surface, &mut self.store, theme);
    }

    pub fn toggle_theme<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) -> Theme {
        self.bindings.theme.toggle_theme(surface, &mut self.store)
    }

    pub fn apply_filter<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        selected: FilterToken,
    ) -> Option<FilterOutcome> {
        let outcome = filter::apply_filter(
            surface,
            &selected,
            &self.bindings.filter_buttons,
            &self.bindings.cards,
        )?;
        self.filter = selected;
        Some(outcome)
    }

    pub fn click_filter<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        button: &ElementId,
    ) -> Option<FilterOutcome> {
        let outcome = filter::apply_button(
            surface,
            button,
            &self.bindings.filter_buttons,
            &self.bindings.cards,
        )?;
        let bound = self.bindings.filter_buttons.iter().find(|b| &b.id == button);
        if let Some(token) = surface
            .attribute(button, FILTER_ATTRIBUTE)
            .map(FilterToken::parse)
            .or_else(|| bound.map(|b| b.token.clone()))
        {
            self.filter = token;
        }
        Some(outcome)
    }

    pub fn input<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        field: Field,
        value: &str,
    ) -> std::result::Result<(), FieldError> {
        self.bindings.form.on_input(surface, field, value)
    }

    pub fn submit<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) -> SubmitOutcome {
        self.bindings
            .form
            .submit(surface, &mut self.notifier, &self.config.acknowledgment)
    }

    pub fn active_filter(&self) -> &FilterToken {
        &self.filter
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn tagline(&self) -> &TaglineRotator {
        &self.tagline
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
