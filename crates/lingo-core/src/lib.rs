//! # Lingo Core
//!
//! Message-key localization: resolves a symbolic key plus a user's
//! language preferences into localized, parameterized text (or a mix of
//! text and opaque rich-content fragments).
//!
//! The crate provides:
//!
//! - Locale contexts and fallback-chain construction
//! - A shared, additively merged string-pack store
//! - Key resolution across the fallback chain
//! - `{name}` / `{name(argument)}` template expansion into token sequences
//! - Deterministic missing-key and test-mode reporting
//! - Scoped context propagation for async call chains
//!
//! # Example
//!
//! ```rust
//! use lingo_core::{pack, params, LocaleContext, Params, Resolver};
//!
//! # fn example() -> lingo_common::Result<()> {
//! let resolver = Resolver::new();
//! resolver.register_pack("en", pack! { "greeting" => "Hello {name}" });
//! resolver.register_pack("fr", pack! { "greeting" => "Bonjour {name}" });
//!
//! let context = LocaleContext::new(["fr-CA"]).no_default_lang();
//! let params: Params = params! { "name" => "Alice" };
//! let text = resolver.resolve_text("greeting", &params, &context)?;
//! // "fr-CA" has no pack of its own; its base form "fr" supplies the key.
//! assert_eq!(text, "Bonjour Alice");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chain;
pub mod context;
pub mod macros;
pub mod report;
pub mod resolver;
pub mod scoped;
pub mod store;
pub mod template;
pub mod token;

pub use chain::effective_chain;
pub use context::{LocaleContext, MissingEvent, MissingHook};
pub use report::{missing_tokens, test_tokens};
pub use resolver::Resolver;
pub use scoped::{current, sync_scope, with_context};
pub use store::{PackStore, StringPack};
pub use template::expand;
pub use token::{join_text, ParamFn, ParamValue, Params, Token};

// Re-export the shared error surface so downstream callers need only one
// import.
pub use lingo_common::{LingoError, Result};
