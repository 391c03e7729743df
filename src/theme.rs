//! Centralized theme constants for folio
//! Colors, sizes, and styling should reference this module

use crate::types::ThemeMode;
use egui::Color32;

// =============================================================================
// PALETTE - one per theme mode
// =============================================================================

/// Resolved color set for the active theme mode.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_surface: Color32,
    pub header_fill: Color32,
    pub card_fill: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,

    pub accent: Color32,
    pub accent_contrast: Color32,

    pub border_subtle: Color32,
    pub border_default: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            bg_base: Color32::from_rgb(0x09, 0x09, 0x0b), // zinc-950
            bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
            bg_surface: Color32::from_rgb(0x27, 0x27, 0x2a), // zinc-800
            header_fill: Color32::from_rgba_unmultiplied(0x09, 0x09, 0x0b, 0xf2),
            card_fill: Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 150),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
            text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
            text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),       // zinc-500
            accent: Color32::from_rgb(0x2d, 0xd4, 0xbf),         // teal-400
            accent_contrast: Color32::from_rgb(0x04, 0x2f, 0x2e), // teal-950
            border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a),  // zinc-800
            border_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
        }
    }

    pub fn light() -> Self {
        Self {
            bg_base: Color32::from_rgb(0xfa, 0xfa, 0xfa), // zinc-50
            bg_elevated: Color32::WHITE,
            bg_surface: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
            header_fill: Color32::from_rgba_unmultiplied(0xfa, 0xfa, 0xfa, 0xf2),
            card_fill: Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 220),
            text_primary: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
            text_secondary: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
            text_muted: Color32::from_rgb(0x71, 0x71, 0x7a),   // zinc-500
            text_dim: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
            accent: Color32::from_rgb(0x0d, 0x94, 0x88),       // teal-600
            accent_contrast: Color32::WHITE,
            border_subtle: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
            border_default: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300
        }
    }
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette::dark(),
        ThemeMode::Light => Palette::light(),
    }
}

// =============================================================================
// STARTUP MODE RESOLUTION
// =============================================================================

/// Resolve the startup theme: a saved choice wins, then the OS hint, and
/// light is the final fallback. Absence of either signal is a normal branch.
pub fn initial_mode(saved: Option<ThemeMode>, os_prefers_dark: bool) -> ThemeMode {
    match saved {
        Some(mode) => mode,
        None if os_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Read the OS color-scheme hint. Detection failure counts as "no hint".
pub fn os_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 34.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SECTION_GAP: f32 = 96.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode) {
    let pal = palette(mode);
    let base = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: mode.is_dark(),
        panel_fill: pal.bg_base,
        window_fill: pal.bg_elevated,
        extreme_bg_color: pal.bg_base,
        faint_bg_color: pal.bg_elevated,
        hyperlink_color: pal.accent,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: pal.bg_elevated,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: pal.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: pal.bg_surface,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: pal.bg_surface,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: pal.bg_surface,
                weak_bg_fill: pal.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, pal.border_default),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 20.0;
        style.spacing.scroll.floating_allocated_width = 0.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Menu panel frame
// =============================================================================
pub fn menu_frame(pal: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(pal.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button visuals
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press
/// effects. Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_choice_wins_over_os_hint() {
        assert_eq!(
            initial_mode(Some(ThemeMode::Light), true),
            ThemeMode::Light
        );
        assert_eq!(initial_mode(Some(ThemeMode::Dark), false), ThemeMode::Dark);
    }

    #[test]
    fn os_hint_applies_without_saved_choice() {
        assert_eq!(initial_mode(None, true), ThemeMode::Dark);
    }

    #[test]
    fn light_is_the_final_fallback() {
        assert_eq!(initial_mode(None, false), ThemeMode::Light);
    }

    #[test]
    fn palettes_diverge_on_base_background() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert!(dark.bg_base.r() < 0x20);
        assert!(light.bg_base.r() > 0xe0);
    }
}
