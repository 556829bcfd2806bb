use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `hud.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Overlay surface and sampling settings.
    pub overlay: OverlayConfig,
    /// Panel colours and label styling.
    pub theme: ThemeConfig,
}

/// Overlay surface and sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Device-resolution multiplier applied to every panel buffer (1 – 8).
    pub pixel_scale: u32,
    /// Show the memory panel when the platform exposes memory telemetry.
    pub memory: bool,
    /// Cadence of the overlay's own update timer (milliseconds).
    pub interval_ms: u64,
    /// Screen corner the overlay is anchored to.
    pub position: Corner,
    /// Overall background opacity (0.0 – 1.0).
    pub opacity: f32,
    /// Panel shown at start-up (normalised modulo the panel count).
    pub initial_panel: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pixel_scale:   1,
            memory:        true,
            interval_ms:   16,
            position:      Corner::TopLeft,
            opacity:       0.9,
            initial_panel: 0,
        }
    }
}

/// Screen corner for the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Foreground/background pair for one panel (hex strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelColors {
    pub foreground: String,
    pub background: String,
}

impl PanelColors {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Label font size in logical points.
    pub font_size: f32,
    /// Frame-rate panel colours.
    pub fps: PanelColors,
    /// Frame-duration panel colours.
    pub ms: PanelColors,
    /// Memory panel colours.
    pub mb: PanelColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            fps:       PanelColors::new("#0ff", "#002"),
            ms:        PanelColors::new("#0f0", "#020"),
            mb:        PanelColors::new("#f08", "#201"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg: HudConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.overlay.interval_ms, 16);
        assert_eq!(cfg.overlay.position, Corner::TopLeft);
        assert_eq!(cfg.theme.ms, PanelColors::new("#0f0", "#020"));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let raw = r##"
            [overlay]
            position = "bottom-right"
            memory = false

            [theme]
            fps = { foreground = "#ff0", background = "#000" }
        "##;
        let cfg: HudConfig = toml::from_str(raw).unwrap();

        assert_eq!(cfg.overlay.position, Corner::BottomRight);
        assert!(!cfg.overlay.memory);
        assert_eq!(cfg.overlay.pixel_scale, 1);
        assert_eq!(cfg.theme.fps.foreground, "#ff0");
        assert_eq!(cfg.theme.mb.foreground, "#f08");
    }
}
