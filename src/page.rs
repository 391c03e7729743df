//! Page content: sections, nav entries, and the data each section renders.
//!
//! The interaction layer (routing, reveal, warming) consumes this by
//! `SectionId` and never hard-codes positions, so reordering sections here
//! does not touch any handler.

use crate::types::SectionId;

/// A top-level page section.
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    /// Sections carrying the reveal marker animate in the first time they
    /// scroll into view; the rest are visible from the start.
    pub reveal: bool,
}

/// A header/menu navigation entry.
pub struct NavEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: SectionId,
}

pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub static SECTIONS: [Section; 4] = [
    Section { id: SectionId::Home, title: "Home", reveal: false },
    Section { id: SectionId::About, title: "About", reveal: true },
    Section { id: SectionId::Projects, title: "Projects", reveal: true },
    Section { id: SectionId::Contact, title: "Contact", reveal: true },
];

pub static NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Home",
        icon: egui_phosphor::regular::HOUSE,
        target: SectionId::Home,
    },
    NavEntry {
        label: "About",
        icon: egui_phosphor::regular::USER,
        target: SectionId::About,
    },
    NavEntry {
        label: "Projects",
        icon: egui_phosphor::regular::SQUARES_FOUR,
        target: SectionId::Projects,
    },
    NavEntry {
        label: "Contact",
        icon: egui_phosphor::regular::ENVELOPE,
        target: SectionId::Contact,
    },
];

pub const OWNER_NAME: &str = "Sean Novak";
pub const OWNER_TAGLINE: &str = "Designer & creative developer";
pub const OWNER_INTRO: &str =
    "I build small, fast, carefully finished things for the web and beyond.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Ten years of shipping interfaces, identities, and the occasional \
     3D experiment. I care about the last 5%: the load time nobody \
     notices and the empty state nobody praises.",
    "When I'm not pushing pixels I'm usually restoring old synths or \
     riding somewhere flat and windy.",
];

pub const AVATAR_IMAGE: &str = "assets/images/avatar.jpg";

pub static PROJECTS: [Project; 3] = [
    Project {
        name: "Relay",
        blurb: "Design system and marketing site for a logistics startup.",
        image: "assets/images/project-web.jpg",
        link: "https://example.com/relay",
    },
    Project {
        name: "Meridian",
        blurb: "Brand identity for an independent coffee roaster.",
        image: "assets/images/project-brand.jpg",
        link: "https://example.com/meridian",
    },
    Project {
        name: "Hollow",
        blurb: "Real-time 3D product configurator built on WebGL.",
        image: "assets/images/project-3d.jpg",
        link: "https://example.com/hollow",
    },
];

pub const CONTACT_EMAIL: &str = "hello@seannovak.dev";

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        icon: egui_phosphor::regular::GITHUB_LOGO,
        url: "https://github.com/seannovak",
    },
    SocialLink {
        label: "Dribbble",
        icon: egui_phosphor::regular::DRIBBBLE_LOGO,
        url: "https://dribbble.com/seannovak",
    },
    SocialLink {
        label: "LinkedIn",
        icon: egui_phosphor::regular::LINKEDIN_LOGO,
        url: "https://linkedin.com/in/seannovak",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: SectionId) -> &'static Section {
        SECTIONS.iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn every_nav_entry_targets_a_section() {
        for entry in &NAV_ENTRIES {
            assert!(
                SECTIONS.iter().any(|s| s.id == entry.target),
                "{}",
                entry.label
            );
        }
    }

    #[test]
    fn hero_is_exempt_from_reveal() {
        assert!(!find(SectionId::Home).reveal);
        assert!(find(SectionId::Projects).reveal);
    }
}
