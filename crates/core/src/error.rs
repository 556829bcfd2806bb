use thiserror::Error;

/// Top-level error type shared by every crate in the workspace.
#[derive(Debug, Error)]
pub enum HudError {
    #[error("config error: {0}")]
    Config(String),

    #[error("system error: {0}")]
    System(String),

    #[error("overlay error: {0}")]
    Overlay(String),
}

pub type Result<T, E = HudError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_prefix_their_domain() {
        let e = HudError::Overlay("no layer-shell protocol".into());
        assert_eq!(e.to_string(), "overlay error: no layer-shell protocol");
        assert_eq!(HudError::Config("bad".into()).to_string(), "config error: bad");
    }
}
