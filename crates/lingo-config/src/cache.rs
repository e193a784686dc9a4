//! Thread-safe settings caching with arc-swap for lock-free reads.

use crate::loader::SettingsLoader;
use crate::schema::Settings;
use arc_swap::ArcSwap;
use lingo_common::Result;
use std::sync::Arc;

/// Thread-safe settings cache using arc-swap for lock-free reads.
pub struct SettingsCache {
    settings: ArcSwap<Settings>,
}

impl SettingsCache {
    /// Creates a cache holding the given initial settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
        }
    }

    /// The current settings.
    #[must_use]
    pub fn get(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Replaces the settings atomically.
    pub fn update(&self, settings: Settings) {
        self.settings.store(Arc::new(settings));
    }

    /// Reloads from disk and swaps the result in.
    ///
    /// The previous settings stay in place when loading fails.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SettingsLoader::load`].
    pub async fn reload(&self, loader: &SettingsLoader) -> Result<()> {
        let settings = loader.load().await?;
        self.update(settings);
        Ok(())
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
