//! Scroll-triggered reveal reflection.
//!
//! Every observed element starts concealed and is revealed the first time
//! the notifier reports it intersecting. Reveal is one-way: later
//! notifications, intersecting or not, never touch the element again.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::RevealConfig;
use crate::dom::{ElementId, RenderSurface};
use crate::visual::{RevealVisual, apply_visual};

/// Observation parameters handed to the notifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealOptions {
    /// Fraction of the element's area that must be visible.
    pub threshold: f64,
    /// Bottom root margin; negative values trigger before the element
    /// reaches the viewport's bottom edge.
    pub root_margin_bottom_px: i32,
}

impl RevealOptions {
    /// CSS `rootMargin` string.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom_px)
    }
}

/// Source of per-element visibility notifications.
pub trait IntersectionNotifier {
    fn observe(&mut self, target: &ElementId, options: &RevealOptions);
}

/// One visibility notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<ElementId>, is_intersecting: bool) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
        }
    }
}

/// Records observe calls for a host that installs the real observer later.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObserveRequests {
    requests: Vec<(ElementId, RevealOptions)>,
}

impl ObserveRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[(ElementId, RevealOptions)] {
        &self.requests
    }

    pub fn take(&mut self) -> Vec<(ElementId, RevealOptions)> {
        std::mem::take(&mut self.requests)
    }
}

impl IntersectionNotifier for ObserveRequests {
    fn observe(&mut self, target: &ElementId, options: &RevealOptions) {
        self.requests.push((target.clone(), *options));
    }
}

/// Reveal state of every observed element.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    config: RevealConfig,
    revealed: HashMap<ElementId, bool>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            revealed: HashMap::new(),
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.config.options()
    }

    /// Conceals each target and subscribes it to the notifier.
    ///
    /// Targets already registered are skipped so a revealed element is never
    /// concealed again.
    pub fn register<R, I>(&mut self, surface: &mut R, notifier: &mut I, targets: &[ElementId])
    where
        R: RenderSurface + ?Sized,
        I: IntersectionNotifier + ?Sized,
    {
        let options = self.options();
        let concealed = RevealVisual::Concealed {
            offset_px: self.config.offset_px,
            transition: &self.config.transition,
        };
        for target in targets {
            if self.revealed.contains_key(target) {
                continue;
            }
            apply_visual(surface, target, &concealed);
            notifier.observe(target, &options);
            self.revealed.insert(target.clone(), false);
        }
        tracing::debug!(count = self.revealed.len(), "Reveal targets registered");
    }

    /// Handles one notification; returns whether the element was revealed
    /// by it.
    pub fn on_intersection<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        entry: &IntersectionEntry,
    ) -> bool {
        if !entry.is_intersecting {
            return false;
        }
        match self.revealed.get_mut(&entry.target) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                apply_visual(surface, &entry.target, &RevealVisual::Revealed);
                tracing::debug!(target = %entry.target, "Revealed");
                true
            }
            Some(_) => false,
            None => {
                tracing::trace!(target = %entry.target, "Notification for unobserved element");
                false
            }
        }
    }

    /// Handles a batch in order; returns how many elements were revealed.
    pub fn process<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        entries: &[IntersectionEntry],
    ) -> usize {
        let mut count = 0;
        for entry in entries {
            if self.on_intersection(surface, entry) {
                count += 1;
            }
        }
        count
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    pub fn is_registered(&self, id: &ElementId) -> bool {
        self.revealed.contains_key(id)
    }

    pub fn registered_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.values().filter(|r| **r).count()
    }
}
