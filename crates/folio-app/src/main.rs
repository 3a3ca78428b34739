//! Entry point for the portfolio desktop app.
//!
//! Resolves settings from the command line, opens the preference store
//! and launches the page in a Dioxus desktop window.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use folio_app::bridge;
use folio_app::components::App;
use folio_app::state::{AppSettings, AppState, StorageChoice};
use folio_core::{PageConfig, PageEvent, PortfolioContent};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Environment variable overriding the preference directory.
const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";

/// Page state built before launch, taken once by the root component.
static PREPARED: Mutex<Option<AppState>> = Mutex::new(None);

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio with persistent theme")]
struct Args {
    /// JSON page configuration (tagline lines, timings, reveal options)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding preferences.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep the theme for this session only
    #[arg(long, conflicts_with = "data_dir")]
    ephemeral: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting folio");

    let config = match &args.config {
        Some(path) => match PageConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PageConfig::default(),
    };

    let storage = if args.ephemeral {
        StorageChoice::Ephemeral
    } else {
        match args
            .data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|d| d.join("folio")))
        {
            Some(dir) => StorageChoice::Directory(dir),
            None => {
                tracing::warn!("No data directory found; theme will not persist");
                StorageChoice::Ephemeral
            }
        }
    };

    let settings = AppSettings {
        config,
        content: PortfolioContent::default(),
        storage,
    };

    let state = match AppState::open(&settings) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Cannot build page: {}", e);
            std::process::exit(1);
        }
    };

    let title = format!("{} - Portfolio", settings.content.owner);
    if let Ok(mut slot) = PREPARED.lock() {
        *slot = Some(state);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component: takes the prepared state into a signal.
#[component]
fn RootApp() -> Element {
    let prepared = use_hook(|| {
        PREPARED
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .map(Signal::new)
    });

    match prepared {
        Some(state) => rsx! {
            Portfolio { state }
        },
        None => {
            tracing::error!("Page state missing at launch");
            rsx! {
                p { class: "startup-error", "The page could not be prepared." }
            }
        }
    }
}

/// Runs the background drivers for the lifetime of the page.
#[component]
fn Portfolio(state: Signal<AppState>) -> Element {
    // Tagline rotation
    use_future(move || {
        let mut state = state;
        let tagline = state.read().page.config().tagline.clone();
        let interval = Duration::from_millis(tagline.interval_ms);
        let fade = Duration::from_millis(tagline.fade_ms);

        async move {
            folio_core::drive_rotation(interval, fade, |step| {
                state.write().dispatch(PageEvent::Tagline(step));
                ControlFlow::Continue(())
            })
            .await;
        }
    });

    // Scroll reveal
    use_future(move || bridge::run_reveal_bridge(state));

    use_drop(|| tracing::info!("Shutting down folio"));

    rsx! {
        App { state }
    }
}
