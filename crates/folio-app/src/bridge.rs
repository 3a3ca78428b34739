//! Webview bridge: the intersection observer and scroll requests run as
//! JavaScript inside the desktop webview.

use dioxus::prelude::*;

use folio_core::dom::{ElementId, ScrollBehavior, ScrollBlock, ScrollRequest};
use folio_core::{IntersectionEntry, PageEvent};
use folio_core::reveal::RevealOptions;

use crate::state::AppState;

/// Delay between attempts to find observed elements that are not mounted yet.
const MOUNT_RETRY_MS: u32 = 50;

fn js_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

/// Script installing one `IntersectionObserver` per distinct option set.
///
/// Every notification is posted back as `{ target, isIntersecting }`.
pub fn observer_script(requests: &[(ElementId, RevealOptions)]) -> String {
    let mut groups: Vec<(RevealOptions, Vec<&ElementId>)> = Vec::new();
    for (id, options) in requests {
        match groups.iter_mut().find(|(o, _)| *o == *options) {
            Some((_, ids)) => ids.push(id),
            None => groups.push((*options, vec![id])),
        }
    }

    let mut script = String::new();
    for (options, ids) in groups {
        let ids = ids
            .iter()
            .map(|id| js_string(id.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        script.push_str(&format!(
            r#"(function() {{
    const ids = [{ids}];
    const observer = new IntersectionObserver((entries) => {{
        entries.forEach((entry) => dioxus.send({{ target: entry.target.id, isIntersecting: entry.isIntersecting }}));
    }}, {{ threshold: {threshold}, rootMargin: {margin} }});
    const attach = () => {{
        const missing = ids.filter((id) => !document.getElementById(id));
        if (missing.length > 0) {{ setTimeout(attach, {MOUNT_RETRY_MS}); return; }}
        ids.forEach((id) => observer.observe(document.getElementById(id)));
    }};
    attach();
}})();
"#,
            threshold = options.threshold,
            margin = js_string(&options.root_margin()),
        ));
    }
    script
}

/// Script executing one scroll request.
pub fn scroll_script(request: &ScrollRequest) -> String {
    let behavior = match request.options.behavior {
        ScrollBehavior::Smooth => "smooth",
        ScrollBehavior::Instant => "instant",
    };
    let block = match request.options.block {
        ScrollBlock::Start => "start",
        ScrollBlock::Center => "center",
        ScrollBlock::End => "end",
    };
    format!(
        "var el = document.getElementById({}); if (el) el.scrollIntoView({{ behavior: '{behavior}', block: '{block}' }});",
        js_string(request.target.as_str())
    )
}

/// Runs every scroll the engine requested since the last flush.
pub fn flush_scrolls(mut state: Signal<AppState>) {
    let requests = state.write().take_scroll_requests();
    for request in requests {
        document::eval(&scroll_script(&request));
    }
}

/// Installs the observer and feeds its notifications to the engine for the
/// lifetime of the page.
pub async fn run_reveal_bridge(mut state: Signal<AppState>) {
    let observations = state.write().take_observations();
    if observations.is_empty() {
        return;
    }
    tracing::debug!(count = observations.len(), "Installing intersection observer");

    let mut eval = document::eval(&observer_script(&observations));
    loop {
        match eval.recv::<IntersectionEntry>().await {
            Ok(entry) => {
                state.write().dispatch(PageEvent::Intersection(vec![entry]));
            }
            Err(e) => {
                tracing::warn!("Intersection bridge closed: {:?}", e);
                break;
            }
        }
    }
}
