//! App module - contains the main application state and logic

pub(crate) mod images;
mod nav;
pub(crate) mod reveal;
pub(crate) mod scroll;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::{SectionId, ThemeMode};
use chrono::Datelike;
use eframe::egui;
use self::reveal::{FrameWatcher, RevealState, ViewportWatcher};
use self::scroll::ScrollMotion;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Theme
    pub(crate) theme_mode: ThemeMode,
    /// The value persisted to settings. Stays `None` until the user toggles
    /// explicitly, so an OS-hinted startup is not pinned by a mere exit.
    pub(crate) saved_theme: Option<ThemeMode>,
    // Navigation menu
    pub(crate) menu_open: bool,
    pub(crate) nav_rects: Vec<egui::Rect>,
    // Scrolling
    pub(crate) scroll: ScrollMotion,
    pub(crate) section_offsets: HashMap<SectionId, f32>,
    // Scroll-reveal
    pub(crate) watcher: Box<dyn ViewportWatcher>,
    pub(crate) reveals: RevealState,
    // Footer
    pub(crate) footer_year: i32,
    // Image cache warming
    pub(crate) image_cache: HashMap<String, egui::TextureHandle>,
    pub(crate) warmed_tx: mpsc::Sender<images::WarmedImage>,
    pub(crate) warmed_rx: mpsc::Receiver<images::WarmedImage>,
    pub(crate) warm_started: bool,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Window chrome
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Resolve and apply the startup theme: saved choice, then OS hint,
        // then light.
        let os_dark = theme::os_prefers_dark();
        let theme_mode = theme::initial_mode(settings.theme, os_dark);
        cc.egui_ctx.set_theme(if theme_mode.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        theme::apply_visuals(&cc.egui_ctx, theme_mode);
        info!(
            mode = ?theme_mode,
            saved = settings.theme.is_some(),
            os_dark,
            "Theme initialized"
        );

        // Footer year is stamped once; a year rollover mid-session is
        // acceptable staleness.
        let footer_year = chrono::Local::now().year();

        let (warmed_tx, warmed_rx) = mpsc::channel();

        Self {
            theme_mode,
            saved_theme: settings.theme,
            menu_open: false,
            nav_rects: Vec::new(),
            scroll: ScrollMotion::new(),
            section_offsets: HashMap::new(),
            watcher: Box::new(FrameWatcher::new()),
            reveals: RevealState::default(),
            footer_year,
            image_cache: HashMap::new(),
            warmed_tx,
            warmed_rx,
            warm_started: false,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            theme: self.saved_theme,
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Flip the active mode and persist the new choice by name.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.flipped();
        self.saved_theme = Some(self.theme_mode);
        self.save_settings();
        debug!(mode = ?self.theme_mode, "Theme toggled");
    }

    pub fn palette(&self) -> theme::Palette {
        theme::palette(self.theme_mode)
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    let (warmed_tx, warmed_rx) = mpsc::channel();
    App {
        theme_mode: ThemeMode::Light,
        saved_theme: None,
        menu_open: false,
        nav_rects: Vec::new(),
        scroll: ScrollMotion::new(),
        section_offsets: HashMap::new(),
        watcher: Box::new(FrameWatcher::new()),
        reveals: RevealState::default(),
        footer_year: 2026,
        image_cache: HashMap::new(),
        warmed_tx,
        warmed_rx,
        warm_started: false,
        runtime: tokio::runtime::Runtime::new().unwrap(),
        logo_texture: None,
        window_pos: None,
        window_size: None,
        needs_center: false,
        data_dir: std::env::temp_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_theme_twice_restores_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        app.data_dir = dir.path().to_path_buf();
        let before = app.theme_mode;

        app.toggle_theme();
        assert_eq!(app.theme_mode, before.flipped());
        app.toggle_theme();
        assert_eq!(app.theme_mode, before);

        // Persisted value matches the final active mode
        let reloaded = Settings::load(dir.path());
        assert_eq!(reloaded.theme, Some(before));
    }

    #[test]
    fn theme_is_not_persisted_until_toggled() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        app.data_dir = dir.path().to_path_buf();

        app.save_settings();
        assert_eq!(Settings::load(dir.path()).theme, None);

        app.toggle_theme();
        assert_eq!(Settings::load(dir.path()).theme, Some(ThemeMode::Dark));
    }
}
