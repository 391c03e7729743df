//! Utility functions

use std::path::PathBuf;

// Geometric monogram mark. Paths only, no <text>, so rasterization needs
// no font database.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 96 96"><defs><style>.m1{fill:#2dd4bf}.m2{fill:#fff}</style></defs><rect x="0" y="0" width="96" height="96" rx="20" fill="#18181b"/><circle class="m1" cx="48" cy="48" r="30"/><path class="m2" d="M34 62 62 34l6 6-28 28z"/><circle class="m2" cx="37" cy="37" r="6"/><circle class="m1" cx="59" cy="59" r="6"/></svg>"##;

/// Rasterize the logo SVG to a square image (window icon, header mark).
pub fn rasterize_logo(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the per-user data directory for settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_at_requested_size() {
        let (pixels, w, h) = rasterize_logo(32);
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }
}
