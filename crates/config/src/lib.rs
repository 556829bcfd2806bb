pub mod schema;
pub mod watcher;

pub use schema::{Corner, HudConfig, OverlayConfig, PanelColors, ThemeConfig};
pub use watcher::ConfigWatcher;

use hud_core::{HudError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `HudConfig::default()` if
/// the file doesn't exist so the overlay always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<HudConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(HudConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| HudError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a config document already held in memory.
pub fn parse(raw: &str) -> Result<HudConfig> {
    toml::from_str(raw).map_err(|e| HudError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("hud").join("hud.toml")
}
