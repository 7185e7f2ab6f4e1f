//! Theme system for the text field
//!
//! Colour roles used when computing the rendered style, with a light and a
//! dark preset. The light preset is the default.

mod colors;

pub use colors::*;

use crate::{Error, Result};

// ============================================================================
// Theme Structure
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Rendered as the `color-scheme` style
    pub is_dark: bool,

    /// Focus border colour
    pub primary: Rgba,

    // Text colors
    pub text: Rgba,
    pub text_disabled: Rgba,

    // Background colors
    pub background: Rgba,
    pub background_disabled: Rgba,

    /// Resting border colour
    pub border: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        light()
    }
}

impl Theme {
    /// CSS `color-scheme` value.
    pub fn color_scheme(&self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }

    /// Look up a preset by id.
    pub fn by_id(id: &str) -> Result<Theme> {
        match id {
            "light" => Ok(light()),
            "dark" => Ok(dark()),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Ids of the built-in presets.
pub fn preset_ids() -> &'static [&'static str] {
    &["light", "dark"]
}

// ============================================================================
// Presets
// ============================================================================

pub fn light() -> Theme {
    let text = with_alpha(hex("#000000"), 0.87);
    let background = hex("#ffffff");
    Theme {
        id: "light",
        name: "Light",
        is_dark: false,
        primary: hex("#1976d2"),
        text,
        text_disabled: with_alpha(hex("#000000"), 0.38),
        background,
        background_disabled: mix(background, hex("#000000"), 0.06),
        border: hex("#c4c4c4"),
    }
}

pub fn dark() -> Theme {
    let background = hex("#121212");
    Theme {
        id: "dark",
        name: "Dark",
        is_dark: true,
        primary: hex("#90caf9"),
        text: hex("#ffffff"),
        text_disabled: with_alpha(hex("#ffffff"), 0.5),
        background,
        background_disabled: lighten(background, 0.05),
        border: darken(hex("#ffffff"), 0.6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.id, "light");
        assert_eq!(theme.primary.to_css(), "rgb(25, 118, 210)");
        assert_ne!(theme.border, theme.primary);
    }

    #[test]
    fn test_by_id() {
        for id in preset_ids() {
            assert_eq!(Theme::by_id(id).unwrap().id, *id);
        }
        assert!(matches!(
            Theme::by_id("solarized"),
            Err(Error::UnknownTheme(id)) if id == "solarized"
        ));
    }

    #[test]
    fn test_dark_disabled_background_is_lighter() {
        let theme = dark();
        assert_eq!(theme.color_scheme(), "dark");
        assert_eq!(light().color_scheme(), "light");
        assert!(theme.background_disabled.r > theme.background.r);
    }
}
