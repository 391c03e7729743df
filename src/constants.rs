//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vertical clearance kept between a routed section and the top of the
/// viewport, so content clears the floating header.
pub const HEADER_CLEARANCE: f32 = 80.0;

/// Height of the floating header bar.
pub const HEADER_HEIGHT: f32 = 64.0;

/// Below this window width the inline nav collapses into the menu button.
pub const NAV_COLLAPSE_WIDTH: f32 = 760.0;

/// Scroll offset above which the back-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Fraction of a section's area that must be visible before it reveals.
pub const REVEAL_AREA_THRESHOLD: f32 = 0.1;

/// The reveal viewport's bottom edge is pulled up by this much, so sections
/// reveal shortly before they reach the real bottom edge.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Duration of the fade/slide-in once a section reveals.
pub const REVEAL_FADE_SECS: f64 = 0.45;

/// Assets decoded in the background at startup so they are warm by the
/// time the user scrolls to them.
pub const PRELOAD_IMAGES: [&str; 4] = [
    "assets/images/avatar.jpg",
    "assets/images/project-web.jpg",
    "assets/images/project-brand.jpg",
    "assets/images/project-3d.jpg",
];
