//! In-page anchor navigation.

use crate::dom::{ElementId, RenderSurface, ScrollBehavior, ScrollBlock, ScrollOptions};

/// Scroll used for every in-page anchor.
pub const ANCHOR_SCROLL: ScrollOptions = ScrollOptions {
    behavior: ScrollBehavior::Smooth,
    block: ScrollBlock::Start,
};

/// Target id of an in-page `href`, `None` for external links and bare `#`.
pub fn anchor_target(href: &str) -> Option<ElementId> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(ElementId::from(id))
    }
}

/// Smoothly scrolls to the anchor's target. A missing target is ignored.
///
/// Returns whether a scroll was requested.
pub fn scroll_to_anchor<R: RenderSurface + ?Sized>(surface: &mut R, href: &str) -> bool {
    let Some(target) = anchor_target(href) else {
        tracing::trace!(%href, "Not an in-page anchor");
        return false;
    };
    if !surface.contains(&target) {
        tracing::trace!(%target, "Anchor target missing, ignoring");
        return false;
    }
    surface.scroll_into_view(&target, ANCHOR_SCROLL);
    true
}
