//! Per-call locale context: resolution policy plus the string-pack
//! universe a single resolution sees.

use crate::store::StringPack;
use lingo_common::LingoError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Observer invoked when resolution fails for a key.
pub type MissingHook = Arc<dyn Fn(&MissingEvent) + Send + Sync>;

/// Payload delivered to [`MissingHook`] observers.
///
/// Purely informational; the hook cannot influence the resolution result.
#[derive(Debug)]
pub struct MissingEvent {
    /// The unresolved message key.
    pub key: String,
    /// The effective chain that was walked.
    pub langs: Vec<String>,
    /// Synthetic error value describing the miss.
    pub error: LingoError,
}

/// Resolution policy and pack universe for one resolution call.
///
/// Contexts are built fresh per call and never mutated during resolution.
/// Packs carried here shadow the resolver's shared store per key: a key
/// absent from a context pack still resolves from the store's pack for the
/// same language.
#[derive(Clone)]
pub struct LocaleContext {
    /// The user's languages in order of preference.
    pub accept_langs: Vec<String>,
    /// Limits the languages that may be used. Imposed by the app.
    pub permit_langs: Option<HashSet<String>>,
    /// Language appended to the end of the preference order when none of
    /// the preferred languages resolves.
    pub default_lang: Option<String>,
    /// When a pack is found but the key is not, whether to continue to the
    /// next language. `false` makes a found pack authoritative.
    pub allow_fallback: bool,
    /// Context-local packs, overlaid per key on the shared store.
    pub packs: HashMap<String, StringPack>,
    /// Observer for resolution failures.
    pub on_missing: Option<MissingHook>,
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self {
            accept_langs: Vec::new(),
            permit_langs: None,
            default_lang: Some("en".to_string()),
            allow_fallback: false,
            packs: HashMap::new(),
            on_missing: None,
        }
    }
}

impl fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleContext")
            .field("accept_langs", &self.accept_langs)
            .field("permit_langs", &self.permit_langs)
            .field("default_lang", &self.default_lang)
            .field("allow_fallback", &self.allow_fallback)
            .field("packs", &self.packs.keys().collect::<Vec<_>>())
            .field("on_missing", &self.on_missing.as_ref().map(|_| "hook"))
            .finish()
    }
}

impl LocaleContext {
    /// Creates a context for the given preference order.
    pub fn new<I, S>(accept_langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accept_langs: accept_langs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Replaces the preference order.
    #[must_use]
    pub fn with_accept_langs<I, S>(mut self, accept_langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_langs = accept_langs.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts resolution to the given set of languages.
    #[must_use]
    pub fn with_permit_langs<I, S>(mut self, permit_langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permit_langs = Some(permit_langs.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the language tried after all preferred languages.
    #[must_use]
    pub fn with_default_lang(mut self, code: impl Into<String>) -> Self {
        self.default_lang = Some(code.into());
        self
    }

    /// Removes the trailing default language.
    #[must_use]
    pub fn no_default_lang(mut self) -> Self {
        self.default_lang = None;
        self
    }

    /// Sets whether a found pack without the key falls through to the next
    /// language.
    #[must_use]
    pub const fn with_allow_fallback(mut self, allow: bool) -> Self {
        self.allow_fallback = allow;
        self
    }

    /// Adds a context-local pack for a language, merging per key with any
    /// pack already carried for that language.
    #[must_use]
    pub fn with_pack(mut self, code: impl Into<String>, pack: impl Into<StringPack>) -> Self {
        self.packs.entry(code.into()).or_default().merge(pack.into());
        self
    }

    /// Installs a missing-key observer.
    #[must_use]
    pub fn with_on_missing<F>(mut self, hook: F) -> Self
    where
        F: Fn(&MissingEvent) + Send + Sync + 'static,
    {
        self.on_missing = Some(Arc::new(hook));
        self
    }
}
