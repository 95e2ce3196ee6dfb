//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting different themes like emoji, Unicode, and ASCII
//! fallbacks.

use serde::{Deserialize, Serialize};

use crate::policy::PolicyCategory;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

impl IconTheme {
    /// Parse a theme from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "emoji" => Some(Self::Emoji),
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// Policy category icons
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub distribution: &'static str,
    pub minting: &'static str,
    pub recognition: &'static str,
    pub compliance: &'static str,
    /// Fallback glyph for categories the client does not know about
    pub generic: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Status and metadata icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub busy: &'static str,
    pub system: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub category: CategoryIcons,
    pub ui: UiIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                distribution: "📤",
                minting: "🪙",
                recognition: "🏅",
                compliance: "🛡️",
                generic: "📄",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            status: StatusIcons {
                busy: "🔄",
                system: "🔒",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                distribution: "⇄",
                minting: "◎",
                recognition: "★",
                compliance: "§",
                generic: "◆",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            status: StatusIcons {
                busy: "⟳",
                system: "⬟",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                distribution: ">>",
                minting: "$",
                recognition: "*",
                compliance: "%",
                generic: "#",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            status: StatusIcons {
                busy: "...",
                system: "[S]",
            },
        }
    }

    /// Glyph for a policy category; unknown categories get the generic glyph.
    #[must_use]
    pub fn category(&self, category: &PolicyCategory) -> &'static str {
        let icons = self.icons().category;
        match category {
            PolicyCategory::Distribution => icons.distribution,
            PolicyCategory::Minting => icons.minting,
            PolicyCategory::Recognition => icons.recognition,
            PolicyCategory::Compliance => icons.compliance,
            PolicyCategory::Other(_) => icons.generic,
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn busy(&self) -> &'static str {
        self.icons().status.busy
    }

    #[must_use]
    pub fn system(&self) -> &'static str {
        self.icons().status.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(IconTheme::from_name("emoji"), Some(IconTheme::Emoji));
        assert_eq!(IconTheme::from_name("unicode"), Some(IconTheme::Unicode));
        assert_eq!(IconTheme::from_name("ascii"), Some(IconTheme::Ascii));
        assert_eq!(IconTheme::from_name("neon"), None);
    }

    #[test]
    fn test_category_icons_per_theme() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.category(&PolicyCategory::Minting), "$");
        assert_eq!(service.category(&PolicyCategory::Other("mystery".to_string())), "#");

        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.category(&PolicyCategory::Recognition), "★");
        assert_eq!(service.category(&PolicyCategory::Other("mystery".to_string())), "◆");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
