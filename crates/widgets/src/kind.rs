use hud_theme::{Palette, Theme};

/// The metrics a [`crate::Stats`] can chart, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Frames per second, sampled once per window.
    Rate,
    /// Milliseconds since the previous cycle, sampled every cycle.
    Duration,
    /// Process memory in MiB, sampled once per window.
    Memory,
}

impl PanelKind {
    /// Name shown before the first sample arrives.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rate     => "FPS",
            Self::Duration => "MS",
            Self::Memory   => "MB",
        }
    }

    /// Value at which the bar reaches full height.
    pub const fn ceiling(self) -> f64 {
        match self {
            Self::Rate     => 100.0,
            Self::Duration => 200.0,
            Self::Memory   => 100.0,
        }
    }

    pub fn palette(self, theme: &Theme) -> Palette {
        match self {
            Self::Rate     => theme.fps,
            Self::Duration => theme.ms,
            Self::Memory   => theme.mb,
        }
    }
}
