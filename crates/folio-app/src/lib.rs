//! Desktop portfolio page.
//!
//! The page is rendered by Dioxus from an in-memory [`folio_core::Document`];
//! every interaction is dispatched to the reflection engine and the
//! components re-render from the reflected element state.

pub mod bridge;
pub mod components;
pub mod state;
pub mod theme;

pub use state::{AppSettings, AppState, StorageChoice};
