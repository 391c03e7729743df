//! Reusable UI components
//!
//! Standalone painted widgets used by the header, menu, and page sections.

use crate::theme::{self, Palette};
use eframe::egui;

/// Square icon button with a hover fill (header controls).
pub fn icon_button(ui: &mut egui::Ui, icon: &str, pal: &Palette) -> egui::Response {
    let size = 32.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            ui.painter()
                .rect_filled(rect, theme::RADIUS_DEFAULT, pal.bg_surface);
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(18.0),
            pal.text_secondary,
        );
    }

    response
}

/// Inline header nav link: plain label, accent on hover.
pub fn nav_link(ui: &mut egui::Ui, label: &str, pal: &Palette) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_LABEL);
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        font.clone(),
        pal.text_secondary,
    );
    let padding = egui::vec2(10.0, 8.0);
    let (rect, response) = ui.allocate_exact_size(
        galley.size() + padding * 2.0,
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let color = if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            pal.accent
        } else {
            pal.text_secondary
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            font,
            color,
        );
    }

    response
}

/// Menu panel item with icon. Returns true if clicked.
pub fn menu_item(ui: &mut egui::Ui, icon: &str, label: &str, pal: &Palette) -> bool {
    let text = format!("{}  {}", icon, label);
    let w = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, 28.0), egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter()
            .rect_filled(rect, theme::RADIUS_DEFAULT, pal.bg_surface);
    }
    let text_pos = rect.left_center() + egui::vec2(8.0, 0.0);
    ui.painter().text(
        text_pos,
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(theme::FONT_BODY),
        pal.text_secondary,
    );

    response.clicked()
}

/// Accent pill button (hero calls to action).
pub fn accent_button(ui: &mut egui::Ui, label: &str, pal: &Palette) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font.clone(), pal.accent_contrast);
    let padding = egui::vec2(18.0, 10.0);
    let (rect, response) =
        ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let (fill, draw_rect) = theme::button_visual(&response, pal.accent, rect);
        ui.painter()
            .rect_filled(draw_rect, draw_rect.height() / 2.0, fill);
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            font,
            pal.accent_contrast,
        );
    }

    response
}
