//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Active visual mode. Persisted as the literal string `"light"` or
/// `"dark"` in settings.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Identity of a page section. Nav links and the reveal watcher refer to
/// sections by id, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_restores_mode() {
        assert_eq!(ThemeMode::Light.flipped().flipped(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
    }

    #[test]
    fn mode_serializes_as_lowercase_literal() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<ThemeMode>("\"light\"").unwrap(),
            ThemeMode::Light
        );
    }
}
