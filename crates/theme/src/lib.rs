pub mod colors;

pub use colors::Color;

use hud_config::{PanelColors, ThemeConfig};

/// Resolved colours for a single strip-chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Palette {
    /// Resolve a config colour pair.  Invalid strings become black.
    pub fn from_config(cfg: &PanelColors) -> Self {
        Self {
            foreground: Color::from_hex_or_black(&cfg.foreground),
            background: Color::from_hex_or_black(&cfg.background),
        }
    }
}

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colours are pre-parsed once here so panels never touch hex strings
/// while drawing.  Construction is infallible.
#[derive(Debug, Clone)]
pub struct Theme {
    pub font_size: f32,
    pub fps:       Palette,
    pub ms:        Palette,
    pub mb:        Palette,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            font_size: cfg.font_size,
            fps:       Palette::from_config(&cfg.fps),
            ms:        Palette::from_config(&cfg.ms),
            mb:        Palette::from_config(&cfg.mb),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
