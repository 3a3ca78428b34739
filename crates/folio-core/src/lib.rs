//! # Folio Core
//!
//! UI state reflection engine for a single-page portfolio.
//!
//! A handful of named state variables (active theme, active filter, field
//! validation messages, reveal flags, tagline index) are mapped onto
//! attribute, class, style and text writes of a [`dom::Document`]. The
//! engine owns no display: it talks to the page through
//! [`dom::RenderSurface`], to storage through [`store::PreferenceStore`],
//! to the viewport through [`reveal::IntersectionNotifier`] and to the
//! visitor through [`notify::Notifier`].
//!
//! ## Example
//!
//! ```
//! use folio_core::prelude::*;
//!
//! let content = PortfolioContent::default();
//! let config = PageConfig::default();
//! let mut doc = content.build_document(config.tagline.lines.first().map(String::as_str));
//! let mut page = Page::new(&doc, MemoryStore::new(), NoticeQueue::new(), config).unwrap();
//! page.init(&mut doc, &mut ObserveRequests::new());
//!
//! assert_eq!(page.toggle_theme(&mut doc), Theme::Light);
//! page.apply_filter(&mut doc, FilterToken::from("design"));
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod markup;
pub mod navigation;
pub mod notify;
pub mod page;
pub mod reveal;
pub mod social;
pub mod store;
pub mod tagline;
pub mod theme;
pub mod validation;
pub mod visual;

pub use config::{PageConfig, RevealConfig, TaglineConfig};
pub use dom::{Document, Element, ElementId, RenderSurface};
pub use error::{ConfigError, FolioError, Result, StoreError};
pub use filter::{FilterButton, FilterOutcome, FilterToken, ProjectCard, apply_filter};
pub use markup::PortfolioContent;
pub use notify::{NoticeQueue, Notifier};
pub use page::{DispatchOutcome, Page, PageBindings, PageEvent};
pub use reveal::{IntersectionEntry, IntersectionNotifier, ObserveRequests, RevealOptions, RevealTracker};
pub use social::SocialLink;
pub use store::{FileStore, MemoryStore, PreferenceStore, UnavailableStore};
pub use tagline::{TaglineRotator, TaglineStep, drive_rotation};
pub use theme::Theme;
pub use validation::{
    Field, FieldError, FormReport, SubmitOutcome, validate_email, validate_message, validate_name,
};
pub use visual::{CardVisibility, RevealVisual, TaglineFade, VisualState, apply_visual};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::dom::{Document, Element, ElementId, RenderSurface};
    pub use crate::error::FolioError;
    pub use crate::filter::FilterToken;
    pub use crate::markup::PortfolioContent;
    pub use crate::notify::{NoticeQueue, Notifier};
    pub use crate::page::{DispatchOutcome, Page, PageEvent};
    pub use crate::reveal::{IntersectionEntry, IntersectionNotifier, ObserveRequests};
    pub use crate::social::SocialLink;
    pub use crate::store::{FileStore, MemoryStore, PreferenceStore, UnavailableStore};
    pub use crate::tagline::TaglineStep;
    pub use crate::theme::Theme;
    pub use crate::validation::{Field, SubmitOutcome};
}
