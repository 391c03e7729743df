//! View rendering (page sections, floating header, overlays)

use super::scroll::back_to_top_visible;
use super::App;
use crate::constants::{HEADER_HEIGHT, NAV_COLLAPSE_WIDTH};
use crate::page;
use crate::theme::{self, Palette};
use crate::types::SectionId;
use crate::ui::components::{accent_button, icon_button, menu_item, nav_link};
use crate::utils;
use eframe::egui;

const COLUMN_WIDTH: f32 = 680.0;
const CARD_IMAGE_HEIGHT: f32 = 120.0;
const AVATAR_SIZE: f32 = 140.0;

// ============================================================================
// PAGE
// ============================================================================

impl App {
    pub fn render_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut area = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .id_salt("page_scroll");

        // Scroll-lock while the menu is open; programmatic animation still
        // runs, only user scrolling is suppressed.
        if self.scroll_locked() {
            area = area.enable_scrolling(false);
        }
        if self.scroll.is_animating() {
            area = area.vertical_scroll_offset(self.scroll.offset);
        }

        let output = area.show(ui, |ui| {
            let origin = ui.cursor().top();
            ui.add_space(HEADER_HEIGHT);

            let full_width = ui.available_width();
            let column = full_width.min(COLUMN_WIDTH);
            let margin = ((full_width - column) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(column);
                    self.render_sections(ui, ctx, origin);
                });
            });
        });

        self.scroll.sync(output.state.offset.y);
        let max_scroll = (output.content_size.y - output.inner_rect.height()).max(0.0);
        self.scroll.clamp_target(max_scroll);

        // Poll the reveal watcher against what is actually visible
        let now = ctx.input(|i| i.time);
        self.reveals
            .step(self.watcher.as_ref(), output.inner_rect, now);
    }

    fn render_sections(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, origin: f32) {
        let now = ctx.input(|i| i.time);

        for section in &page::SECTIONS {
            // Content-space offset of this section, for link routing
            let top = ui.cursor().top() - origin;
            self.section_offsets.insert(section.id, top);

            let alpha = if section.reveal {
                self.reveals.fade_alpha(section.id, now)
            } else {
                1.0
            };

            let response = ui
                .scope(|ui| {
                    ui.set_opacity(alpha);
                    match section.id {
                        SectionId::Home => self.render_hero(ui),
                        SectionId::About => self.render_about(ui, section.title),
                        SectionId::Projects => self.render_projects(ui, ctx, section.title),
                        SectionId::Contact => self.render_contact(ui, section.title),
                    }
                })
                .response;

            if section.reveal {
                self.watcher.observe(section.id, response.rect);
                if self.reveals.revealed(section.id) && alpha < 1.0 {
                    ctx.request_repaint();
                }
            }

            ui.add_space(theme::SECTION_GAP);
        }

        self.render_footer(ui);
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();
        ui.add_space(48.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(page::OWNER_NAME)
                    .size(theme::FONT_HERO)
                    .strong()
                    .color(pal.text_primary),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(page::OWNER_TAGLINE)
                    .size(theme::FONT_HEADING)
                    .color(pal.accent),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);
        ui.add(
            egui::Label::new(
                egui::RichText::new(page::OWNER_INTRO)
                    .size(theme::FONT_BODY)
                    .color(pal.text_muted),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_XL);
        ui.horizontal(|ui| {
            if accent_button(ui, "View work", &pal).clicked() {
                self.navigate(SectionId::Projects);
            }
            if nav_link(ui, "Get in touch", &pal).clicked() {
                self.navigate(SectionId::Contact);
            }
        });
    }

    fn render_about(&mut self, ui: &mut egui::Ui, title: &str) {
        let pal = self.palette();
        section_heading(ui, title, &pal);

        ui.horizontal_top(|ui| {
            self.render_image(
                ui,
                page::AVATAR_IMAGE,
                egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
                egui_phosphor::regular::USER,
            );
            ui.add_space(theme::SPACING_XL);
            ui.vertical(|ui| {
                for paragraph in page::ABOUT_PARAGRAPHS {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(paragraph)
                                .size(theme::FONT_BODY)
                                .color(pal.text_secondary),
                        )
                        .wrap()
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                }
            });
        });
    }

    fn render_projects(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, title: &str) {
        let pal = self.palette();
        section_heading(ui, title, &pal);

        let gap = theme::SPACING_LG;
        let card_w = ((ui.available_width() - gap * 2.0) / 3.0).floor();
        let card_h = CARD_IMAGE_HEIGHT + 96.0;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(gap, gap);
            for project in &page::PROJECTS {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(card_w, card_h), egui::Sense::click());

                if ui.is_rect_visible(rect) {
                    let painter = ui.painter();
                    painter.rect_filled(rect, theme::RADIUS_LARGE, pal.card_fill);
                    let border = if response.hovered() {
                        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                        pal.accent
                    } else {
                        pal.border_subtle
                    };
                    painter.rect_stroke(
                        rect,
                        theme::RADIUS_LARGE,
                        egui::Stroke::new(theme::STROKE_DEFAULT, border),
                        egui::StrokeKind::Inside,
                    );

                    // Image strip across the top of the card
                    let image_rect = egui::Rect::from_min_size(
                        rect.min,
                        egui::vec2(rect.width(), CARD_IMAGE_HEIGHT),
                    );
                    self.paint_image_or_placeholder(
                        ui,
                        image_rect,
                        project.image,
                        egui_phosphor::regular::IMAGE,
                    );

                    let painter = ui.painter();
                    let text_x = rect.min.x + theme::SPACING_LG;
                    painter.text(
                        egui::pos2(text_x, image_rect.bottom() + theme::SPACING_LG),
                        egui::Align2::LEFT_TOP,
                        project.name,
                        egui::FontId::proportional(theme::FONT_HEADING),
                        pal.text_primary,
                    );
                    let blurb = painter.layout(
                        project.blurb.to_string(),
                        egui::FontId::proportional(theme::FONT_LABEL),
                        pal.text_muted,
                        rect.width() - theme::SPACING_LG * 2.0,
                    );
                    painter.galley(
                        egui::pos2(text_x, image_rect.bottom() + theme::SPACING_LG + 24.0),
                        blurb,
                        pal.text_muted,
                    );
                }

                if response.clicked() {
                    let _ = open::that(project.link);
                }
            }
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, title: &str) {
        let pal = self.palette();
        section_heading(ui, title, &pal);

        ui.add(
            egui::Label::new(
                egui::RichText::new("Have a project in mind? My inbox is open.")
                    .size(theme::FONT_BODY)
                    .color(pal.text_secondary),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        if nav_link(ui, page::CONTACT_EMAIL, &pal).clicked() {
            let _ = open::that(format!("mailto:{}", page::CONTACT_EMAIL));
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            for social in &page::SOCIAL_LINKS {
                let response = icon_button(ui, social.icon, &pal);
                if response.clicked() {
                    let _ = open::that(social.url);
                }
                response.on_hover_text(social.label);
            }
        });
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();
        ui.separator();
        ui.add_space(theme::SPACING_LG);
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(footer_line(self.footer_year))
                        .size(theme::FONT_SMALL)
                        .color(pal.text_dim),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_XL);
    }

    // ------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------

    fn render_image(
        &mut self,
        ui: &mut egui::Ui,
        path: &str,
        size: egui::Vec2,
        placeholder_icon: &str,
    ) {
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            self.paint_image_or_placeholder(ui, rect, path, placeholder_icon);
        }
    }

    /// Draw a warmed texture clipped to rounded corners, or a placeholder
    /// tile when the asset never arrived.
    fn paint_image_or_placeholder(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        path: &str,
        placeholder_icon: &str,
    ) {
        let pal = self.palette();
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_LARGE, pal.bg_surface);

        if let Some(texture) = self.image_texture(path) {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            let brush = egui::epaint::Brush {
                fill_texture_id: texture.id(),
                uv,
            };
            let mut shape = egui::epaint::RectShape::filled(
                rect,
                egui::CornerRadius::same(theme::RADIUS_LARGE as u8),
                egui::Color32::WHITE,
            );
            shape.brush = Some(std::sync::Arc::new(brush));
            painter.add(shape);
        } else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                placeholder_icon,
                egui::FontId::proportional(28.0),
                pal.text_dim,
            );
        }
    }
}

// ============================================================================
// FLOATING CHROME (header, menu, back-to-top)
// ============================================================================

impl App {
    pub fn render_header(&mut self, ctx: &egui::Context) {
        let pal = self.palette();
        let screen = ctx.screen_rect();
        let header_rect =
            egui::Rect::from_min_size(screen.min, egui::vec2(screen.width(), HEADER_HEIGHT));

        self.nav_rects.clear();
        self.nav_rects.push(header_rect);

        let collapsed = screen.width() < NAV_COLLAPSE_WIDTH;
        // Widening past the breakpoint discards a stale open menu (and its
        // scroll-lock)
        if !collapsed && self.menu_open {
            self.toggle_menu();
        }

        egui::Area::new(egui::Id::new("header"))
            .fixed_pos(screen.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.painter().rect_filled(header_rect, 0.0, pal.header_fill);
                ui.painter().line_segment(
                    [header_rect.left_bottom(), header_rect.right_bottom()],
                    egui::Stroke::new(theme::STROKE_DEFAULT, pal.border_subtle),
                );

                let inner = header_rect.shrink2(egui::vec2(24.0, 0.0));
                ui.allocate_ui_at_rect(inner, |ui| {
                    ui.horizontal_centered(|ui| {
                        let texture = self.logo_texture.get_or_insert_with(|| {
                            let (pixels, w, h) = utils::rasterize_logo(56);
                            ctx.load_texture(
                                "logo",
                                egui::ColorImage::from_rgba_unmultiplied(
                                    [w as usize, h as usize],
                                    &pixels,
                                ),
                                egui::TextureOptions::LINEAR,
                            )
                        });
                        ui.image(egui::load::SizedTexture::new(
                            texture.id(),
                            egui::vec2(28.0, 28.0),
                        ));
                        ui.add_space(theme::SPACING_SM);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(page::OWNER_NAME)
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(pal.text_primary),
                            )
                            .selectable(false),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                // Theme toggle: sun in dark mode, moon in light
                                let theme_icon = if self.theme_mode.is_dark() {
                                    egui_phosphor::regular::SUN
                                } else {
                                    egui_phosphor::regular::MOON
                                };
                                if icon_button(ui, theme_icon, &pal).clicked() {
                                    self.toggle_theme();
                                    ctx.set_theme(if self.theme_mode.is_dark() {
                                        egui::Theme::Dark
                                    } else {
                                        egui::Theme::Light
                                    });
                                    theme::apply_visuals(ctx, self.theme_mode);
                                }

                                if collapsed {
                                    // Trigger icon reflects the open state in
                                    // lock-step with the panel
                                    let menu_icon = if self.menu_open {
                                        egui_phosphor::regular::X
                                    } else {
                                        egui_phosphor::regular::LIST
                                    };
                                    if icon_button(ui, menu_icon, &pal).clicked() {
                                        self.toggle_menu();
                                    }
                                } else {
                                    for entry in page::NAV_ENTRIES.iter().rev() {
                                        if nav_link(ui, entry.label, &pal).clicked() {
                                            self.navigate(entry.target);
                                        }
                                    }
                                }
                            },
                        );
                    });
                });
            });
    }

    pub fn render_menu_overlay(&mut self, ctx: &egui::Context) {
        if !self.menu_open {
            return;
        }
        let pal = self.palette();
        let screen = ctx.screen_rect();
        let panel_width = 220.0;
        let pos = egui::pos2(
            screen.right() - panel_width - theme::SPACING_XL * 2.0,
            HEADER_HEIGHT + theme::SPACING_MD,
        );

        let response = egui::Area::new(egui::Id::new("nav_menu"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                theme::menu_frame(&pal).show(ui, |ui| {
                    ui.set_width(panel_width);
                    for entry in &page::NAV_ENTRIES {
                        if menu_item(ui, entry.icon, entry.label, &pal) {
                            self.navigate(entry.target);
                        }
                    }
                });
            });

        self.nav_rects.push(response.response.rect);
    }

    pub fn render_back_to_top(&mut self, ctx: &egui::Context) {
        // Hidden below the threshold, and therefore non-interactive
        if !back_to_top_visible(self.scroll.offset) {
            return;
        }
        let pal = self.palette();

        egui::Area::new(egui::Id::new("back_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let size = 44.0;
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                let (fill, draw_rect) = theme::button_visual(&response, pal.accent, rect);
                ui.painter()
                    .circle_filled(draw_rect.center(), draw_rect.width() / 2.0, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::ARROW_UP,
                    egui::FontId::proportional(18.0),
                    pal.accent_contrast,
                );
                if response.clicked() {
                    self.scroll_to_top();
                }
            });
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn section_heading(ui: &mut egui::Ui, title: &str, pal: &Palette) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(title)
                .size(theme::FONT_TITLE)
                .strong()
                .color(pal.text_primary),
        )
        .selectable(false),
    );
    ui.add_space(theme::SPACING_SM);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 3.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.5, pal.accent);
    ui.add_space(theme::SPACING_XL);
}

fn footer_line(year: i32) -> String {
    format!("© {} {} · All rights reserved", year, page::OWNER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_the_startup_year() {
        assert_eq!(
            footer_line(2026),
            "© 2026 Sean Novak · All rights reserved"
        );
    }
}
