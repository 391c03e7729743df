//! Navigation menu state and in-page link routing

use super::App;
use crate::constants::HEADER_CLEARANCE;
use crate::types::SectionId;
use eframe::egui;
use tracing::debug;

impl App {
    /// Flip the menu open/closed. The trigger icon, the panel, and the
    /// scroll-lock all follow this one flag, so they change in lock-step.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "Menu toggled");
    }

    /// Page scrolling is suppressed while the menu is open.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    /// Route a nav link: close the menu if open, then animate to the
    /// section's top minus the header clearance. A target the page does
    /// not know is a silent no-op.
    pub fn navigate(&mut self, target: SectionId) {
        if self.menu_open {
            self.toggle_menu();
        }
        let Some(&top) = self.section_offsets.get(&target) else {
            return;
        };
        self.scroll.animate_to((top - HEADER_CLEARANCE).max(0.0));
    }

    /// A pointer press outside the navigation region closes an open menu.
    /// `nav_rects` is rebuilt every frame from the header bar and the menu
    /// panel, so the check runs against the previous frame's geometry.
    pub fn handle_outside_press(&mut self, press: egui::Pos2) {
        if self.menu_open && !self.nav_rects.iter().any(|r| r.contains(press)) {
            self.toggle_menu();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_app;
    use crate::types::SectionId;
    use egui::{pos2, Rect};

    #[test]
    fn toggling_twice_restores_state_and_lock() {
        let mut app = test_app();
        assert!(!app.scroll_locked());

        app.toggle_menu();
        assert!(app.menu_open);
        assert!(app.scroll_locked());

        app.toggle_menu();
        assert!(!app.menu_open);
        assert!(!app.scroll_locked());
    }

    #[test]
    fn navigating_applies_header_clearance() {
        let mut app = test_app();
        app.section_offsets.insert(SectionId::Projects, 900.0);

        app.navigate(SectionId::Projects);
        assert!(app.scroll.is_animating());
        while app.scroll.step(1.0 / 60.0) {}
        assert_eq!(app.scroll.offset, 820.0);
    }

    #[test]
    fn navigating_near_the_top_clamps_to_zero() {
        let mut app = test_app();
        app.section_offsets.insert(SectionId::Home, 0.0);
        app.scroll.offset = 400.0;

        app.navigate(SectionId::Home);
        while app.scroll.step(1.0 / 60.0) {}
        assert_eq!(app.scroll.offset, 0.0);
    }

    #[test]
    fn unknown_target_is_a_silent_noop() {
        let mut app = test_app();
        app.scroll.offset = 123.0;

        app.navigate(SectionId::Contact);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.offset, 123.0);
    }

    #[test]
    fn navigating_closes_an_open_menu_even_without_target() {
        let mut app = test_app();
        app.toggle_menu();

        app.navigate(SectionId::About);
        assert!(!app.menu_open);
    }

    #[test]
    fn outside_press_closes_menu_inside_press_does_not() {
        let mut app = test_app();
        app.toggle_menu();
        app.nav_rects = vec![Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 64.0))];

        app.handle_outside_press(pos2(400.0, 32.0));
        assert!(app.menu_open);

        app.handle_outside_press(pos2(400.0, 500.0));
        assert!(!app.menu_open);
    }
}
