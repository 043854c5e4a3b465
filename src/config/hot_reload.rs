use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Settings;
use crate::error::ConfigError;

/// Source of the settings a conversion runs with.
///
/// The converter calls [`SettingsProvider::refresh`] before every blacklist
/// check, then reads [`SettingsProvider::current`], so edits made while the
/// program runs apply to the next action.
pub trait SettingsProvider: Send + Sync {
    /// Snapshot of the active settings. Lock-free.
    fn current(&self) -> Arc<Settings>;

    /// Re-read the backing store.
    fn refresh(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Live-reloadable settings holder.
///
/// Wraps `Settings` in an `ArcSwap` so readers never block and writers
/// atomically swap the pointer. When backed by a file, [`SettingsHandle::reload`]
/// picks up changes from disk.
pub struct SettingsHandle {
    inner: Arc<ArcSwap<Settings>>,
    path: Option<PathBuf>,
}

impl SettingsHandle {
    /// Handle backed by the settings file at `path`, seeded with `settings`.
    pub fn new(settings: Settings, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(settings)),
            path: Some(path.into()),
        }
    }

    /// Handle with no backing file; refreshing keeps the seeded value.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(settings)),
            path: None,
        }
    }

    /// Load current settings snapshot. Lock-free.
    pub fn load(&self) -> arc_swap::Guard<Arc<Settings>> {
        self.inner.load()
    }

    /// Reload settings from disk, atomically swapping the active snapshot.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut fresh = Settings::load_from_path(path)?;
        fresh.apply_env_overrides();
        self.inner.store(Arc::new(fresh));
        tracing::debug!(path = %path.display(), "settings reloaded");
        Ok(())
    }

    /// Manually swap in new settings (e.g. after programmatic mutation).
    pub fn store(&self, settings: Settings) {
        self.inner.store(Arc::new(settings));
    }

    /// Settings file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Clone for SettingsHandle {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            path: self.path.clone(),
        }
    }
}

impl SettingsProvider for SettingsHandle {
    fn current(&self) -> Arc<Settings> {
        self.inner.load_full()
    }

    fn refresh(&self) -> Result<(), ConfigError> {
        self.reload()
    }
}
