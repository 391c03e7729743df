//! Smooth scroll animation and the back-to-top control

use super::App;
use crate::constants::SCROLL_TOP_THRESHOLD;

/// Animated vertical scroll position. While a target is set the offset
/// eases toward it each frame; user scrolling in between is folded back in
/// via `sync` rather than cancelling the animation.
pub struct ScrollMotion {
    pub offset: f32,
    target: Option<f32>,
}

impl ScrollMotion {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            target: None,
        }
    }

    pub fn animate_to(&mut self, y: f32) {
        self.target = Some(y.max(0.0));
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance toward the target with easing (exponential decay, ~0.2s
    /// feel). Returns true while still moving so the caller keeps
    /// repainting.
    pub fn step(&mut self, dt: f32) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let diff = target - self.offset;
        if diff.abs() < 0.5 {
            self.offset = target;
            self.target = None;
            false
        } else {
            let t = 1.0 - (-10.0 * dt.min(0.1)).exp();
            self.offset += diff * t;
            true
        }
    }

    /// Fold the scroll area's actual offset back in after a frame.
    pub fn sync(&mut self, actual: f32) {
        self.offset = actual;
    }

    /// Keep the target reachable once the content height is known.
    pub fn clamp_target(&mut self, max_scroll: f32) {
        if let Some(t) = self.target.as_mut() {
            *t = t.min(max_scroll);
        }
    }
}

/// Pure function of the scroll offset; re-evaluated every frame with no
/// hysteresis. The boundary offset itself counts as hidden.
pub fn back_to_top_visible(offset: f32) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

impl App {
    /// Back-to-top activation: animate to the very top.
    pub fn scroll_to_top(&mut self) {
        self.scroll.animate_to(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_boundary_is_exclusive() {
        assert!(back_to_top_visible(301.0));
        assert!(!back_to_top_visible(300.0));
        assert!(!back_to_top_visible(0.0));
    }

    #[test]
    fn animation_converges_and_stops() {
        let mut motion = ScrollMotion::new();
        motion.offset = 800.0;
        motion.animate_to(0.0);

        let mut steps = 0;
        while motion.step(1.0 / 60.0) {
            steps += 1;
            assert!(steps < 600, "animation failed to converge");
        }
        assert_eq!(motion.offset, 0.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn target_is_clamped_to_reachable_range() {
        let mut motion = ScrollMotion::new();
        motion.animate_to(5000.0);
        motion.clamp_target(1200.0);
        motion.offset = 1199.9;
        assert!(!motion.step(1.0 / 60.0));
        assert_eq!(motion.offset, 1200.0);
    }

    #[test]
    fn negative_targets_are_floored_at_zero() {
        let mut motion = ScrollMotion::new();
        motion.animate_to(-50.0);
        while motion.step(1.0 / 60.0) {}
        assert_eq!(motion.offset, 0.0);
    }
}
