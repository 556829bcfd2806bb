use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Notifies the overlay whenever `hud.toml` is written, created or replaced.
///
/// The parent directory is watched rather than the file itself, so the
/// watcher survives editors that save by renaming a temp file over the
/// original, and a config created after start-up is still picked up.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = hud_config::ConfigWatcher::spawn("/home/user/.config/hud/hud.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, rebuilding panels");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current Tokio runtime.
    /// Returns the handle and a receiver that fires once per relevant change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}' ({e}); live reload disabled", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if touches_config(&e, &path) => {
                debug!("Config event: {:?}", e.kind);
                // A full channel already holds a pending reload.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

fn touches_config(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_)) && event.paths.iter().any(|p| p == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, ModifyKind};

    #[test]
    fn only_writes_to_the_config_file_count() {
        let path = PathBuf::from("/tmp/hud/hud.toml");

        let write = notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        let create = notify::Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        let sibling = notify::Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/hud/other.toml"));
        let access = notify::Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(path.clone());

        assert!(touches_config(&write, &path));
        assert!(touches_config(&create, &path));
        assert!(!touches_config(&sibling, &path));
        assert!(!touches_config(&access, &path));
    }
}
