//! Fallback chain construction.
//!
//! Turns a [`LocaleContext`] into the ordered, deduplicated list of
//! language codes a resolution call will try.

use crate::context::LocaleContext;
use lingo_common::base_language;

/// Derives the effective chain for a context.
///
/// The chain is built in four steps:
///
/// 1. the preference order, deduplicated (first occurrence wins);
/// 2. the default language, appended if not already present;
/// 3. the base-language form of every code so far, appended in first-seen
///    order (`["en-CA", "fr-CA"]` gains `"en"`, `"fr"`);
/// 4. the permit filter, dropping codes not in the permitted set without
///    disturbing the order of the survivors.
///
/// An empty preference order with no default language yields an empty
/// chain, which the resolver treats as an immediate miss.
#[must_use]
pub fn effective_chain(context: &LocaleContext) -> Vec<String> {
    let mut chain: Vec<String> = Vec::with_capacity(context.accept_langs.len() * 2 + 1);

    for code in &context.accept_langs {
        push_unique(&mut chain, code);
    }

    if let Some(default) = &context.default_lang {
        push_unique(&mut chain, default);
    }

    let explicit = chain.clone();
    for code in &explicit {
        push_unique(&mut chain, base_language(code));
    }

    if let Some(permit) = &context.permit_langs {
        chain.retain(|code| permit.contains(code));
    }

    chain
}

fn push_unique(chain: &mut Vec<String>, code: &str) {
    if !chain.iter().any(|existing| existing == code) {
        chain.push(code.to_string());
    }
}
