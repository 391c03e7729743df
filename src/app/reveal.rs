//! Scroll-reveal: viewport intersection watching and one-shot reveal state

use crate::constants::{REVEAL_AREA_THRESHOLD, REVEAL_BOTTOM_MARGIN, REVEAL_FADE_SECS};
use crate::types::SectionId;
use egui::{pos2, Rect};
use std::collections::HashMap;

/// Viewport-intersection watcher. Marked sections are registered each frame
/// with their current rect and polled against the visible viewport.
/// Injectable so tests can substitute a fake.
pub trait ViewportWatcher {
    fn observe(&mut self, id: SectionId, rect: Rect);

    /// Ids of observed targets currently intersecting the viewport.
    fn intersecting(&self, viewport: Rect) -> Vec<SectionId>;
}

/// Real watcher: a target intersects once at least `REVEAL_AREA_THRESHOLD`
/// of its area falls inside the viewport, whose bottom edge is pulled up by
/// `REVEAL_BOTTOM_MARGIN` so sections fire slightly early.
pub struct FrameWatcher {
    targets: HashMap<SectionId, Rect>,
    area_threshold: f32,
    bottom_margin: f32,
}

impl FrameWatcher {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            area_threshold: REVEAL_AREA_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

impl ViewportWatcher for FrameWatcher {
    fn observe(&mut self, id: SectionId, rect: Rect) {
        self.targets.insert(id, rect);
    }

    fn intersecting(&self, viewport: Rect) -> Vec<SectionId> {
        let clipped = Rect::from_min_max(
            viewport.min,
            pos2(viewport.max.x, viewport.max.y - self.bottom_margin),
        );
        self.targets
            .iter()
            .filter(|(_, rect)| {
                let area = rect.area();
                if area <= 0.0 {
                    return false;
                }
                let overlap = rect.intersect(clipped);
                overlap.is_positive() && overlap.area() / area >= self.area_threshold
            })
            .map(|(&id, _)| id)
            .collect()
    }
}

/// One-shot reveal bookkeeping: ids only ever enter, never leave. The
/// recorded time drives the fade-in.
#[derive(Default)]
pub struct RevealState {
    revealed_at: HashMap<SectionId, f64>,
}

impl RevealState {
    /// Poll the watcher and flag everything intersecting. Targets already
    /// revealed keep their original timestamp.
    pub fn step(&mut self, watcher: &dyn ViewportWatcher, viewport: Rect, now: f64) {
        for id in watcher.intersecting(viewport) {
            self.revealed_at.entry(id).or_insert(now);
        }
    }

    pub fn revealed(&self, id: SectionId) -> bool {
        self.revealed_at.contains_key(&id)
    }

    /// 0.0 before reveal, ramping to 1.0 over the fade window afterwards.
    pub fn fade_alpha(&self, id: SectionId, now: f64) -> f32 {
        match self.revealed_at.get(&id) {
            Some(&t) => (((now - t) / REVEAL_FADE_SECS).clamp(0.0, 1.0)) as f32,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn unobserved_sections_never_intersect() {
        let watcher = FrameWatcher::new();
        assert!(watcher.intersecting(viewport()).is_empty());
    }

    #[test]
    fn section_below_threshold_does_not_fire() {
        let mut watcher = FrameWatcher::new();
        // 400 tall, only 20 visible above the (margin-shrunk) bottom edge: 5%
        watcher.observe(
            SectionId::About,
            Rect::from_min_size(pos2(0.0, 530.0), vec2(800.0, 400.0)),
        );
        assert!(watcher.intersecting(viewport()).is_empty());
    }

    #[test]
    fn section_above_threshold_fires() {
        let mut watcher = FrameWatcher::new();
        // 400 tall, 100 visible after the margin: 25%
        watcher.observe(
            SectionId::About,
            Rect::from_min_size(pos2(0.0, 450.0), vec2(800.0, 400.0)),
        );
        assert_eq!(watcher.intersecting(viewport()), vec![SectionId::About]);
    }

    #[test]
    fn bottom_margin_delays_sections_near_the_edge() {
        let mut watcher = FrameWatcher::new();
        // 60 of 100 below the raw bottom edge, but the 50-unit margin leaves
        // only overlap ending at 550: 10 of 100 visible = exactly threshold
        watcher.observe(
            SectionId::Contact,
            Rect::from_min_size(pos2(0.0, 540.0), vec2(800.0, 100.0)),
        );
        assert_eq!(watcher.intersecting(viewport()), vec![SectionId::Contact]);

        // One unit lower falls under the threshold
        watcher.observe(
            SectionId::Contact,
            Rect::from_min_size(pos2(0.0, 541.0), vec2(800.0, 100.0)),
        );
        assert!(watcher.intersecting(viewport()).is_empty());
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut watcher = FrameWatcher::new();
        let mut reveals = RevealState::default();

        // In view: revealed
        watcher.observe(
            SectionId::Projects,
            Rect::from_min_size(pos2(0.0, 100.0), vec2(800.0, 300.0)),
        );
        reveals.step(&watcher, viewport(), 1.0);
        assert!(reveals.revealed(SectionId::Projects));

        // Scrolled far away: stays revealed with the original timestamp
        watcher.observe(
            SectionId::Projects,
            Rect::from_min_size(pos2(0.0, 5000.0), vec2(800.0, 300.0)),
        );
        reveals.step(&watcher, viewport(), 9.0);
        assert!(reveals.revealed(SectionId::Projects));
        assert_eq!(reveals.fade_alpha(SectionId::Projects, 9.0), 1.0);
    }

    #[test]
    fn fade_ramps_from_zero_to_one() {
        let mut watcher = FrameWatcher::new();
        let mut reveals = RevealState::default();
        assert_eq!(reveals.fade_alpha(SectionId::About, 0.0), 0.0);

        watcher.observe(
            SectionId::About,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 300.0)),
        );
        reveals.step(&watcher, viewport(), 2.0);
        assert!(reveals.fade_alpha(SectionId::About, 2.1) < 1.0);
        assert_eq!(reveals.fade_alpha(SectionId::About, 4.0), 1.0);
    }
}
