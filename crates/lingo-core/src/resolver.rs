//! The resolution service: owns the shared pack store and the
//! process-wide switches, and walks fallback chains for callers.

use crate::chain::effective_chain;
use crate::context::{LocaleContext, MissingEvent};
use crate::report;
use crate::store::{PackStore, StringPack};
use crate::template;
use crate::token::{join_text, Params, Token};
use lingo_common::{LingoError, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Outcome of a chain walk, before any rendering.
enum Walk {
    /// A language supplied the key.
    Hit { lang: String, template: String },
    /// No language supplied the key. `consulted_pack` records whether any
    /// chain entry had a pack at all, which gates test-mode output.
    Miss { consulted_pack: bool },
}

/// Resolves message keys to token sequences.
///
/// Holds the state the application configures once and every resolution
/// reads: the shared [`PackStore`], the test-mode switch, and the default
/// language preference used when a context supplies none. Multiple
/// resolvers coexist without cross-contamination, so per-test or
/// per-tenant instances are cheap.
///
/// # Example
///
/// ```rust
/// use lingo_core::{pack, params, LocaleContext, Params, Resolver};
///
/// # fn example() -> lingo_common::Result<()> {
/// let resolver = Resolver::new();
/// resolver.register_pack("en", pack! { "greeting" => "Hello {name}" });
///
/// let context = LocaleContext::new(["en"]);
/// let params: Params = params! { "name" => "Alice" };
/// let text = resolver.resolve_text("greeting", &params, &context)?;
/// assert_eq!(text, "Hello Alice");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Resolver {
    store: PackStore,
    default_langs: RwLock<Vec<String>>,
    test_mode: AtomicBool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Creates a resolver with an empty store, test mode off, and `["en"]`
    /// as the default language preference.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: PackStore::new(),
            default_langs: RwLock::new(vec!["en".to_string()]),
            test_mode: AtomicBool::new(false),
        }
    }

    /// Merges a pack into the shared store for a language.
    pub fn register_pack(&self, code: impl Into<String>, pack: impl Into<StringPack>) {
        self.store.register(code, pack);
    }

    /// The shared pack store.
    #[must_use]
    pub const fn store(&self) -> &PackStore {
        &self.store
    }

    /// Switches deterministic test-mode reporting on or off.
    pub fn set_test_mode(&self, enabled: bool) {
        self.test_mode.store(enabled, Ordering::SeqCst);
    }

    /// Whether test mode is on.
    #[must_use]
    pub fn test_mode(&self) -> bool {
        self.test_mode.load(Ordering::SeqCst)
    }

    /// Replaces the default language preference used when a context
    /// carries no preference order of its own.
    pub fn set_default_languages<I, S>(&self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.default_langs.write() = codes.into_iter().map(Into::into).collect();
    }

    /// The default language preference.
    #[must_use]
    pub fn default_languages(&self) -> Vec<String> {
        self.default_langs.read().clone()
    }

    /// Resolves a key against a context, producing a token sequence.
    ///
    /// A context with an empty preference order inherits the resolver's
    /// default languages. A failed lookup is not an error: it produces the
    /// canonical missing-token sequence (or the test-mode sequence) and
    /// fires the context's `on_missing` observer.
    ///
    /// # Errors
    ///
    /// Returns [`LingoError::ExpectedFunction`] when the resolved template
    /// names a non-function parameter in call position.
    pub fn resolve<C: Clone>(
        &self,
        key: &str,
        params: &Params<C>,
        context: &LocaleContext,
    ) -> Result<Vec<Token<C>>> {
        let merged;
        let context = if context.accept_langs.is_empty() {
            merged = context.clone().with_accept_langs(self.default_languages());
            &merged
        } else {
            context
        };

        let chain = effective_chain(context);
        let test_mode = self.test_mode();

        match self.walk(key, &chain, context) {
            Walk::Hit { lang, template } => {
                if test_mode {
                    return Ok(report::test_tokens(key, params));
                }
                debug!("Resolved key '{}' from language '{}'", key, lang);
                template::expand(key, &template, params)
            }
            Walk::Miss { consulted_pack } => {
                warn!(
                    "No localization for key '{}' (tried: {})",
                    key,
                    chain.join(",")
                );
                self.notify_missing(key, &chain, context);
                if test_mode && consulted_pack {
                    return Ok(report::test_tokens(key, params));
                }
                Ok(report::missing_tokens(key, &chain))
            }
        }
    }

    /// Resolves a key and joins the textual tokens into a single string.
    ///
    /// Opaque content tokens contribute nothing to the joined text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Resolver::resolve`].
    pub fn resolve_text<C: Clone>(
        &self,
        key: &str,
        params: &Params<C>,
        context: &LocaleContext,
    ) -> Result<String> {
        Ok(join_text(&self.resolve(key, params, context)?))
    }

    /// Resolves a key against the resolver's default language preference,
    /// for callers that carry no context of their own.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Resolver::resolve`].
    pub fn resolve_default<C: Clone>(&self, key: &str, params: &Params<C>) -> Result<Vec<Token<C>>> {
        let context = LocaleContext::new(self.default_languages()).no_default_lang();
        self.resolve(key, params, &context)
    }

    /// Walks the chain looking for the first language that supplies the
    /// key.
    ///
    /// A language without any pack never terminates the walk; a language
    /// whose pack lacks the key terminates it unless the context allows
    /// fallback.
    fn walk(&self, key: &str, chain: &[String], context: &LocaleContext) -> Walk {
        let mut consulted_pack = false;

        for code in chain {
            let context_pack = context.packs.get(code);
            if context_pack.is_none() && !self.store.has_pack(code) {
                continue;
            }
            consulted_pack = true;

            let template = context_pack
                .and_then(|pack| pack.get(key).map(String::from))
                .or_else(|| self.store.template(code, key));

            match template {
                Some(template) => {
                    return Walk::Hit {
                        lang: code.clone(),
                        template,
                    }
                }
                None if context.allow_fallback => {
                    debug!(
                        "Key '{}' not in pack for '{}', falling back to next language",
                        key, code
                    );
                }
                None => return Walk::Miss { consulted_pack },
            }
        }

        Walk::Miss { consulted_pack }
    }

    fn notify_missing(&self, key: &str, chain: &[String], context: &LocaleContext) {
        if let Some(hook) = &context.on_missing {
            hook(&MissingEvent {
                key: key.to_string(),
                langs: chain.to_vec(),
                error: LingoError::MissingKey {
                    key: key.to_string(),
                    chain: chain.join(","),
                },
            });
        }
    }
}
