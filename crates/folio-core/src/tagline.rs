//! Rotating hero tagline.
//!
//! A rotation is two steps: fade out while advancing the index, then after
//! the fade delay swap the text and fade back in.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::config::TaglineConfig;
use crate::dom::{ElementId, RenderSurface};
use crate::visual::{TaglineFade, apply_visual};

/// Phase of one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaglineStep {
    FadeOut,
    FadeIn,
}

/// Cyclic tagline sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaglineRotator {
    lines: Vec<String>,
    index: usize,
}

impl TaglineRotator {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.lines.get(self.index).map(String::as_str)
    }

    /// Moves to the next line, wrapping at the end.
    pub fn advance(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.lines.len();
        self.current()
    }

    /// Writes the current line, fully shown.
    pub fn show<R: RenderSurface + ?Sized>(&self, surface: &mut R, target: &ElementId) {
        if let Some(line) = self.current() {
            surface.set_text(target, line);
            apply_visual(surface, target, &TaglineFade::Shown);
        }
    }

    /// First half of a rotation: advance and fade out.
    pub fn fade_out<R: RenderSurface + ?Sized>(&mut self, surface: &mut R, target: &ElementId) {
        if self.advance().is_some() {
            apply_visual(surface, target, &TaglineFade::Faded);
            tracing::trace!(index = self.index, "Tagline fading out");
        }
    }

    /// Second half of a rotation: swap text and fade in.
    pub fn fade_in<R: RenderSurface + ?Sized>(&self, surface: &mut R, target: &ElementId) {
        self.show(surface, target);
    }

    pub fn step<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        target: &ElementId,
        step: TaglineStep,
    ) {
        match step {
            TaglineStep::FadeOut => self.fade_out(surface, target),
            TaglineStep::FadeIn => self.fade_in(surface, target),
        }
    }
}

impl From<&TaglineConfig> for TaglineRotator {
    fn from(config: &TaglineConfig) -> Self {
        Self::new(config.lines.clone())
    }
}

/// Emits rotation steps forever: `FadeOut` every `interval`, `FadeIn`
/// `fade` after each. Returns when `on_step` breaks.
pub async fn drive_rotation<F>(interval: Duration, fade: Duration, mut on_step: F)
where
    F: FnMut(TaglineStep) -> ControlFlow<()>,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if on_step(TaglineStep::FadeOut).is_break() {
            return;
        }
        tokio::time::sleep(fade).await;
        if on_step(TaglineStep::FadeIn).is_break() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};

    fn four() -> TaglineRotator {
        TaglineRotator::from(&TaglineConfig::default())
    }

    #[test]
    fn test_index_wraps_after_full_cycle() {
        let mut rotator = four();
        assert_eq!(rotator.index(), 0);
        for expected in [1, 2, 3, 0] {
            rotator.advance();
            assert_eq!(rotator.index(), expected);
        }
    }

    #[test]
    fn test_empty_rotation_is_noop() {
        let mut rotator = TaglineRotator::new(Vec::new());
        assert_eq!(rotator.advance(), None);
        let mut doc = Document::new(Element::new("tagline", "p").with_text("static"));
        let id = ElementId::from("tagline");
        rotator.fade_out(&mut doc, &id);
        rotator.fade_in(&mut doc, &id);
        assert_eq!(doc.text(&id), Some("static"));
        assert_eq!(doc.style(&id, "opacity"), None);
    }

    #[test]
    fn test_fade_out_then_in_swaps_text() {
        let mut rotator = four();
        let mut doc = Document::new(Element::new("tagline", "p"));
        let id = ElementId::from("tagline");
        rotator.show(&mut doc, &id);
        let first = doc.text(&id).map(str::to_string);

        rotator.step(&mut doc, &id, TaglineStep::FadeOut);
        assert_eq!(doc.style(&id, "opacity"), Some("0"));
        assert_eq!(doc.text(&id).map(str::to_string), first);

        rotator.step(&mut doc, &id, TaglineStep::FadeIn);
        assert_eq!(doc.style(&id, "opacity"), Some("1"));
        assert_eq!(doc.text(&id), Some("Building the Future, One Line of Code at a Time"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_rotation_timing() {
        let start = Instant::now();
        let mut seen = Vec::new();
        drive_rotation(Duration::from_millis(5000), Duration::from_millis(500), |step| {
            seen.push((step, start.elapsed().as_millis()));
            if seen.len() == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;

        assert_eq!(
            seen,
            vec![
                (TaglineStep::FadeOut, 5000),
                (TaglineStep::FadeIn, 5500),
                (TaglineStep::FadeOut, 10000),
                (TaglineStep::FadeIn, 10500),
            ]
        );
    }
}
