//! Application state held in the root signal.

use std::path::PathBuf;

use folio_core::dom::ScrollRequest;
use folio_core::prelude::*;
use folio_core::reveal::RevealOptions;

/// Where the theme preference lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageChoice {
    /// `preferences.json` under this directory.
    Directory(PathBuf),
    /// Session-only, nothing written to disk.
    Ephemeral,
}

/// Everything needed to build the page, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub config: PageConfig,
    pub content: PortfolioContent,
    pub storage: StorageChoice,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            config: PageConfig::default(),
            content: PortfolioContent::default(),
            storage: StorageChoice::Ephemeral,
        }
    }
}

/// Preference store owned by the app state.
pub type BoxedStore = Box<dyn PreferenceStore + Send>;

/// Opens the preference store, degrading to a session-only theme when the
/// directory cannot be used.
pub fn open_store(choice: &StorageChoice) -> BoxedStore {
    match choice {
        StorageChoice::Ephemeral => Box::new(MemoryStore::new()),
        StorageChoice::Directory(dir) => match FileStore::in_dir(dir) {
            Ok(store) => {
                tracing::info!("Preferences at {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    "Preferences unavailable at {}: {}; theme will not persist",
                    dir.display(),
                    e
                );
                Box::new(UnavailableStore)
            }
        },
    }
}

/// Main application state.
pub struct AppState {
    /// Document the engine reflects onto; the components render from it.
    pub doc: Document,

    /// Page context with store and notice queue.
    pub page: Page<BoxedStore, NoticeQueue>,

    /// Content the components lay out.
    pub content: PortfolioContent,

    /// Observe requests not yet installed in the webview.
    pending_observations: ObserveRequests,
}

impl AppState {
    /// Builds the document, binds the page and runs initialisation.
    pub fn open(settings: &AppSettings) -> folio_core::Result<Self> {
        let store = open_store(&settings.storage);
        Self::with_store(settings, store)
    }

    pub fn with_store(
        settings: &AppSettings,
        store: BoxedStore,
    ) -> folio_core::Result<Self> {
        let first = settings.config.tagline.lines.first().map(String::as_str);
        let mut doc = settings.content.build_document(first);
        let mut page = Page::new(&doc, store, NoticeQueue::new(), settings.config.clone())?;
        let mut pending_observations = ObserveRequests::new();
        page.init(&mut doc, &mut pending_observations);

        Ok(Self {
            doc,
            page,
            content: settings.content.clone(),
            pending_observations,
        })
    }

    pub fn dispatch(&mut self, event: PageEvent) -> DispatchOutcome {
        tracing::trace!(?event, "Dispatch");
        self.page.dispatch(&mut self.doc, event)
    }

    /// Theme currently reflected on the root element.
    pub fn theme(&self) -> Theme {
        self.page
            .bindings()
            .theme
            .current(&self.doc)
            .unwrap_or_default()
    }

    /// Message on screen, if any.
    pub fn notice(&self) -> Option<String> {
        self.page.notifier().current().map(str::to_string)
    }

    pub fn dismiss_notice(&mut self) {
        self.page.notifier_mut().dismiss();
    }

    pub fn take_observations(&mut self) -> Vec<(ElementId, RevealOptions)> {
        self.pending_observations.take()
    }

    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        self.doc.take_scroll_requests()
    }

    pub fn style(&self, id: &ElementId) -> String {
        self.doc.style_string(id)
    }

    pub fn class(&self, id: &ElementId) -> String {
        self.doc.class_string(id)
    }

    pub fn text(&self, id: &ElementId) -> String {
        self.doc.text(id).unwrap_or_default().to_string()
    }

    pub fn value(&self, id: &ElementId) -> String {
        self.doc.value(id).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_registers_every_reveal_target() {
        let mut state = AppState::open(&AppSettings::default()).unwrap();
        assert_eq!(state.theme(), Theme::Dark);
        let observations = state.take_observations();
        assert_eq!(observations.len(), 4 + state.content.projects.len());
        assert!(state.take_observations().is_empty());
    }

    #[test]
    fn test_unusable_directory_degrades_to_session_theme() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "{}").unwrap();
        let settings = AppSettings {
            // A directory path nested under a regular file cannot be created.
            storage: StorageChoice::Directory(blocker.join("nested")),
            ..AppSettings::default()
        };

        let mut state = AppState::open(&settings).unwrap();
        state.dispatch(PageEvent::ToggleTheme);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_state_can_be_built_before_launch() {
        fn assert_send<T: Send>(_: &T) {}

        let state = AppState::open(&AppSettings::default()).unwrap();
        assert_send(&state);
        let slot = std::sync::Mutex::new(Some(state));
        let taken = slot.lock().unwrap().take();
        assert!(taken.is_some());
        assert!(slot.lock().unwrap().is_none());
    }

    #[test]
    fn test_notice_lifecycle() {
        let mut state = AppState::open(&AppSettings::default()).unwrap();
        state.dispatch(PageEvent::SocialClicked(SocialLink::Instagram));
        assert!(state.notice().is_some());
        state.dismiss_notice();
        assert_eq!(state.notice(), None);
    }
}
