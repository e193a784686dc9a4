//! Settings loading from disk.

use crate::schema::Settings;
use crate::validator::SettingsValidator;
use lingo_common::{LingoError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads settings (and any referenced pack files) from a single file.
///
/// The format is chosen by extension: `.yaml`/`.yml`, `.json`, or
/// `.toml`. A `packs.dir` entry is resolved relative to the settings
/// file, and every pack file in it is merged under the language named by
/// its file stem; inline pack entries win over file entries for the same
/// key.
pub struct SettingsLoader {
    path: PathBuf,
}

impl SettingsLoader {
    /// Creates a loader for the given settings file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads, merges, and validates settings.
    ///
    /// # Errors
    ///
    /// Returns [`LingoError::Io`] when a file cannot be read,
    /// [`LingoError::Serialization`] when it cannot be parsed, and
    /// [`LingoError::Config`] when the merged settings fail validation.
    pub async fn load(&self) -> Result<Settings> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let mut settings = parse_by_extension::<Settings>(&raw, &self.path)?;

        if let Some(dir) = settings.packs.dir.clone() {
            let dir = match self.path.parent() {
                Some(parent) if dir.is_relative() => parent.join(dir),
                _ => dir,
            };
            self.load_pack_dir(&dir, &mut settings).await?;
        }

        SettingsValidator::validate(&settings)?;
        debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    async fn load_pack_dir(&self, dir: &Path, settings: &mut Settings) -> Result<()> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut loaded = 0usize;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let Some(lang) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !has_supported_extension(&path) {
                continue;
            }

            let raw = tokio::fs::read_to_string(&path).await?;
            let pack = parse_by_extension::<HashMap<String, String>>(&raw, &path)?;

            // Inline entries are the inner layer: their keys win.
            let inline = settings.packs.inline.entry(lang.to_string()).or_default();
            for (key, template) in pack {
                inline.entry(key).or_insert(template);
            }
            loaded += 1;
        }

        debug!("Loaded {} pack file(s) from {}", loaded, dir.display());
        Ok(())
    }
}

fn has_supported_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml" | "json" | "toml")
    )
}

fn parse_by_extension<T>(raw: &str, path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match format {
        "yaml" | "yml" => {
            serde_yaml::from_str(raw).map_err(|e| LingoError::Serialization(e.to_string()))
        }
        "json" => serde_json::from_str(raw).map_err(|e| LingoError::Serialization(e.to_string())),
        "toml" => toml::from_str(raw).map_err(|e| LingoError::Serialization(e.to_string())),
        other => Err(LingoError::Config(format!(
            "unsupported settings format '{other}' for {}",
            path.display()
        ))),
    }
}
