//! String-pack storage.
//!
//! A [`StringPack`] is a flat mapping of message key to raw template
//! string for one language. The [`PackStore`] maps language codes to
//! packs and is shared by every resolution call. Mutation is additive
//! only: registering a pack for a language that already has one overlays
//! the new keys per key, it never replaces the pack wholesale, and there
//! is no deletion operation.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Message key to raw template mapping for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringPack {
    entries: HashMap<String, String>,
}

impl StringPack {
    /// Creates an empty pack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a template, overwriting any existing entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Looks up the raw template for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the pack contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Overlays another pack's entries onto this one, key by key.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pack has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in this pack.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl From<HashMap<String, String>> for StringPack {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for StringPack {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Shared mapping of language code to [`StringPack`].
///
/// Reads clone the resolved template out of the lock, so no guard is held
/// while a template is being expanded.
#[derive(Debug, Default)]
pub struct PackStore {
    packs: RwLock<HashMap<String, StringPack>>,
}

impl PackStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a pack into the store for a language.
    ///
    /// Keys in the incoming pack overwrite existing entries for the same
    /// language; keys absent from it are left untouched.
    pub fn register(&self, code: impl Into<String>, pack: impl Into<StringPack>) {
        let code = code.into();
        let pack = pack.into();
        let added = pack.len();
        self.packs.write().entry(code.clone()).or_default().merge(pack);
        debug!("Registered {} string(s) for language '{}'", added, code);
    }

    /// Whether any pack is registered for the language.
    #[must_use]
    pub fn has_pack(&self, code: &str) -> bool {
        self.packs.read().contains_key(code)
    }

    /// Looks up the raw template for a key in a language's pack.
    #[must_use]
    pub fn template(&self, code: &str, key: &str) -> Option<String> {
        self.packs
            .read()
            .get(code)
            .and_then(|pack| pack.get(key).map(String::from))
    }

    /// All language codes with a registered pack, sorted for
    /// deterministic output.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.packs.read().keys().cloned().collect();
        codes.sort_unstable();
        codes
    }
}
