//! Image cache warming
//!
//! The fixed asset list is decoded once, in the background, so textures are
//! ready by the time the user scrolls to them. A missing or unreadable
//! asset is skipped silently; the views fall back to a placeholder.

use super::App;
use crate::constants::PRELOAD_IMAGES;
use eframe::egui;
use tracing::{debug, warn};

/// A decoded asset on its way from the warm task to the texture cache.
pub struct WarmedImage {
    pub path: String,
    pub image: egui::ColorImage,
}

impl App {
    pub fn start_image_warm(&mut self, ctx: &egui::Context) {
        if self.warm_started {
            return;
        }
        self.warm_started = true;

        let tx = self.warmed_tx.clone();
        let ctx = ctx.clone();

        debug!(count = PRELOAD_IMAGES.len(), "Warming image cache");

        self.runtime.spawn(async move {
            for path in PRELOAD_IMAGES {
                let Ok(bytes) = std::fs::read(path) else {
                    debug!(path, "Preload asset not found, skipping");
                    continue;
                };
                match image::load_from_memory(&bytes) {
                    Ok(img) => {
                        let rgba = img.to_rgba8();
                        let size = [rgba.width() as usize, rgba.height() as usize];
                        let image =
                            egui::ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw());
                        if tx
                            .send(WarmedImage {
                                path: path.to_string(),
                                image,
                            })
                            .is_err()
                        {
                            return;
                        }
                        ctx.request_repaint();
                    }
                    Err(e) => {
                        warn!(path, error = %e, "Failed to decode preload asset");
                    }
                }
            }
        });
    }

    /// Move warmed images into GPU textures. Called at the top of every
    /// frame; cheap when the channel is empty.
    pub fn drain_warmed_images(&mut self, ctx: &egui::Context) {
        while let Ok(warmed) = self.warmed_rx.try_recv() {
            let texture =
                ctx.load_texture(warmed.path.clone(), warmed.image, egui::TextureOptions::LINEAR);
            self.image_cache.insert(warmed.path, texture);
        }
    }

    pub fn image_texture(&self, path: &str) -> Option<&egui::TextureHandle> {
        self.image_cache.get(path)
    }
}
