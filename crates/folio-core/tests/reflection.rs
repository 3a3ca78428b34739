//! End-to-end reflection tests over the default portfolio markup.
//!
//! Each test builds the page the way the desktop shell does and drives it
//! only through `PageEvent`s.

use folio_core::prelude::*;
use folio_core::filter::ACTIVE_CLASS;
use folio_core::markup::{ROOT_ID, TAGLINE_ID, THEME_ICON_ID};
use folio_core::{DispatchOutcome, StoreError};

/// Notifier that records every message.
#[derive(Default)]
struct SpyNotifier {
    messages: Vec<String>,
}

impl Notifier for SpyNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Store whose writes always fail but whose reads succeed.
#[derive(Default)]
struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io("read-only file system".to_string()))
    }
}

fn build<S: PreferenceStore>(store: S) -> (Document, Page<S, SpyNotifier>) {
    let config = PageConfig::default();
    let content = PortfolioContent::default();
    let mut doc = content.build_document(None);
    let mut page = Page::new(&doc, store, SpyNotifier::default(), config).unwrap();
    page.init(&mut doc, &mut ObserveRequests::new());
    (doc, page)
}

fn id(raw: &str) -> ElementId {
    ElementId::from(raw)
}

fn input<S: PreferenceStore>(doc: &mut Document, page: &mut Page<S, SpyNotifier>, field: Field, value: &str) {
    page.dispatch(
        doc,
        PageEvent::FieldInput {
            field,
            value: value.to_string(),
        },
    );
}

#[test]
fn test_valid_submit_acknowledges_once_and_resets() {
    let (mut doc, mut page) = build(MemoryStore::new());
    input(&mut doc, &mut page, Field::Name, "Ada");
    input(&mut doc, &mut page, Field::Email, "ada@example.com");
    input(&mut doc, &mut page, Field::Message, "I would like to hire you.");

    let outcome = page.dispatch(&mut doc, PageEvent::Submit);
    assert_eq!(outcome, DispatchOutcome::Submit(SubmitOutcome::Accepted));

    assert_eq!(
        page.notifier().messages,
        vec!["Thank you for your message! I'll get back to you soon.".to_string()]
    );
    for raw in ["name", "email", "message"] {
        assert_eq!(doc.value(&id(raw)), Some(""));
    }
}

#[test]
fn test_invalid_submit_writes_every_display_and_does_not_reset() {
    let (mut doc, mut page) = build(MemoryStore::new());
    input(&mut doc, &mut page, Field::Name, "A");
    assert_eq!(
        doc.text(&id("name-error")),
        Some("Name must be at least 2 characters long")
    );
    // Corrected without an input event: submit must still rewrite the display.
    doc.set_value(&id("name"), "Al");
    input(&mut doc, &mut page, Field::Email, "al@localhost");

    let outcome = page.dispatch(&mut doc, PageEvent::Submit);
    assert!(matches!(
        outcome,
        DispatchOutcome::Submit(SubmitOutcome::Rejected(_))
    ));

    assert!(page.notifier().messages.is_empty());
    assert_eq!(doc.text(&id("name-error")), Some(""));
    assert_eq!(
        doc.text(&id("email-error")),
        Some("Please enter a valid email address")
    );
    assert_eq!(doc.text(&id("message-error")), Some("Message is required"));
    assert_eq!(doc.value(&id("name")), Some("Al"));
    assert_eq!(doc.value(&id("email")), Some("al@localhost"));
}

#[test]
fn test_input_only_touches_its_own_field() {
    let (mut doc, mut page) = build(MemoryStore::new());
    input(&mut doc, &mut page, Field::Email, "nope");

    assert_eq!(
        doc.text(&id("email-error")),
        Some("Please enter a valid email address")
    );
    assert_eq!(doc.text(&id("name-error")), Some(""));
    assert_eq!(doc.text(&id("message-error")), Some(""));
}

#[test]
fn test_filter_sequence_keeps_single_active_button() {
    let (mut doc, mut page) = build(MemoryStore::new());
    let buttons: Vec<ElementId> = page
        .bindings()
        .filter_buttons
        .iter()
        .map(|b| b.id.clone())
        .collect();

    for clicked in ["filter-design", "filter-mobile", "filter-all", "filter-web"] {
        page.dispatch(&mut doc, PageEvent::FilterClicked(id(clicked)));
        let active: Vec<_> = buttons
            .iter()
            .filter(|b| doc.has_class(b, ACTIVE_CLASS))
            .collect();
        assert_eq!(active, vec![&id(clicked)]);
    }

    let visible: Vec<_> = page
        .bindings()
        .cards
        .iter()
        .filter(|c| doc.style(&c.id, "display") == Some("block"))
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(visible, vec!["web", "web"]);
}

#[test]
fn test_theme_toggle_twice_restores_persisted_value() {
    let (mut doc, mut page) = build(MemoryStore::new());
    page.set_theme(&mut doc, Theme::Light);
    let persisted = page.store().get("theme").unwrap();

    page.dispatch(&mut doc, PageEvent::ToggleTheme);
    assert_eq!(doc.attribute(&id(ROOT_ID), "data-theme"), Some("dark"));
    assert_eq!(doc.class_string(&id(THEME_ICON_ID)), "fas fa-moon");
    page.dispatch(&mut doc, PageEvent::ToggleTheme);

    assert_eq!(doc.attribute(&id(ROOT_ID), "data-theme"), Some("light"));
    assert_eq!(page.store().get("theme").unwrap(), persisted);
}

#[test]
fn test_theme_applies_when_store_rejects_writes() {
    let (mut doc, mut page) = build(ReadOnlyStore);
    let outcome = page.dispatch(&mut doc, PageEvent::ToggleTheme);

    assert_eq!(outcome, DispatchOutcome::Theme(Theme::Light));
    assert_eq!(doc.attribute(&id(ROOT_ID), "data-theme"), Some("light"));
}

#[test]
fn test_theme_survives_reload_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let (mut doc, mut page) = build(FileStore::in_dir(dir.path()).unwrap());
        page.dispatch(&mut doc, PageEvent::ToggleTheme);
    }
    let (doc, page) = build(FileStore::in_dir(dir.path()).unwrap());
    assert_eq!(page.stored_theme(), Theme::Light);
    assert_eq!(doc.attribute(&id(ROOT_ID), "data-theme"), Some("light"));
}

#[test]
fn test_reveal_through_dispatch_is_one_way() {
    let (mut doc, mut page) = build(MemoryStore::new());
    let about = id("about");
    assert_eq!(doc.style(&about, "opacity"), Some("0"));

    let outcome = page.dispatch(
        &mut doc,
        PageEvent::Intersection(vec![IntersectionEntry::new("about", true)]),
    );
    assert_eq!(outcome, DispatchOutcome::Revealed(1));

    let outcome = page.dispatch(
        &mut doc,
        PageEvent::Intersection(vec![
            IntersectionEntry::new("about", false),
            IntersectionEntry::new("about", true),
        ]),
    );
    assert_eq!(outcome, DispatchOutcome::Revealed(0));
    assert_eq!(doc.style(&about, "opacity"), Some("1"));
    assert!(page.reveal().is_revealed(&about));
}

#[test]
fn test_tagline_full_cycle_returns_to_first_line() {
    let (mut doc, mut page) = build(MemoryStore::new());
    let first = doc.text(&id(TAGLINE_ID)).map(str::to_string);

    for _ in 0..4 {
        page.dispatch(&mut doc, PageEvent::Tagline(TaglineStep::FadeOut));
        page.dispatch(&mut doc, PageEvent::Tagline(TaglineStep::FadeIn));
    }

    assert_eq!(page.tagline().index(), 0);
    assert_eq!(doc.text(&id(TAGLINE_ID)).map(str::to_string), first);
    assert_eq!(doc.style(&id(TAGLINE_ID), "opacity"), Some("1"));
}

#[test]
fn test_anchor_navigation() {
    let (mut doc, mut page) = build(MemoryStore::new());

    let outcome = page.dispatch(&mut doc, PageEvent::AnchorClicked("#contact".to_string()));
    assert_eq!(outcome, DispatchOutcome::Navigated(true));
    let outcome = page.dispatch(&mut doc, PageEvent::AnchorClicked("#missing".to_string()));
    assert_eq!(outcome, DispatchOutcome::Navigated(false));

    let requests = doc.take_scroll_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, id("contact"));
}

#[test]
fn test_social_placeholders() {
    let (mut doc, mut page) = build(MemoryStore::new());
    page.dispatch(&mut doc, PageEvent::SocialClicked(SocialLink::Instagram));

    assert_eq!(
        page.notifier().messages,
        vec!["Instagram link would open here. Follow me at @yrean!".to_string()]
    );
}

#[test]
fn test_rotation_timer_drives_page() {
    let (mut doc, mut page) = build(MemoryStore::new());
    let mut steps = 0;

    tokio_test::block_on(folio_core::drive_rotation(
        std::time::Duration::from_millis(10),
        std::time::Duration::from_millis(2),
        |step| {
            page.dispatch(&mut doc, PageEvent::Tagline(step));
            steps += 1;
            if steps == 4 {
                std::ops::ControlFlow::Break(())
            } else {
                std::ops::ControlFlow::Continue(())
            }
        },
    ));

    assert_eq!(steps, 4);
    assert_eq!(page.tagline().index(), 2);
    assert_eq!(doc.style(&id(TAGLINE_ID), "opacity"), Some("1"));
}
