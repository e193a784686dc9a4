//! Property-based invariant tests for chain construction and templating.
//!
//! Verifies structural guarantees:
//!
//! 1. The effective chain never contains duplicates
//! 2. Chain construction is deterministic
//! 3. Accept-language relative order is preserved
//! 4. Every chain entry's base form appears in the chain (no permit set)
//! 5. With a permit set, every chain entry is permitted
//! 6. Templates without placeholders expand to a single identity token
//! 7. Substituted values are never re-scanned for placeholders
//! 8. Expansion never panics on arbitrary template text
//! 9. The missing token always matches the contract format

use lingo_common::test_utils::property_testing::{
    key_strategy, language_code_strategy, literal_text_strategy, param_name_strategy,
};
use lingo_common::base_language;
use lingo_core::{effective_chain, expand, join_text, LocaleContext, Params, Resolver, Token};
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn chain_has_no_duplicates(accept in vec(language_code_strategy(), 0..6)) {
        let chain = effective_chain(&LocaleContext::new(accept));
        let mut seen = std::collections::HashSet::new();
        for code in &chain {
            prop_assert!(seen.insert(code.clone()), "duplicate '{}' in {:?}", code, chain);
        }
    }

    #[test]
    fn chain_is_deterministic(accept in vec(language_code_strategy(), 0..6)) {
        let context = LocaleContext::new(accept);
        prop_assert_eq!(effective_chain(&context), effective_chain(&context));
    }

    #[test]
    fn chain_preserves_accept_order(accept in vec(language_code_strategy(), 0..6)) {
        let context = LocaleContext::new(accept.clone()).no_default_lang();
        let chain = effective_chain(&context);

        let mut first_seen: Vec<String> = Vec::new();
        for code in &accept {
            if !first_seen.contains(code) {
                first_seen.push(code.clone());
            }
        }

        // The positions of the (deduplicated) accept languages within the
        // chain must be strictly increasing.
        let mut last: Option<usize> = None;
        for code in &first_seen {
            let position = chain.iter().position(|c| c == code);
            prop_assert!(position.is_some(), "'{}' missing from {:?}", code, chain);
            let position = position.unwrap_or_default();
            if let Some(previous) = last {
                prop_assert!(position > previous, "order of '{}' broken in {:?}", code, chain);
            }
            last = Some(position);
        }
    }

    #[test]
    fn chain_contains_base_forms(accept in vec(language_code_strategy(), 0..6)) {
        let context = LocaleContext::new(accept).no_default_lang();
        let chain = effective_chain(&context);
        for code in &chain {
            prop_assert!(
                chain.iter().any(|c| c == base_language(code)),
                "base of '{}' missing from {:?}",
                code,
                chain
            );
        }
    }

    #[test]
    fn chain_respects_permit_set(
        accept in vec(language_code_strategy(), 0..6),
        permit in vec(language_code_strategy(), 0..6),
    ) {
        let context = LocaleContext::new(accept).with_permit_langs(permit.clone());
        for code in effective_chain(&context) {
            prop_assert!(permit.contains(&code), "'{}' not permitted", code);
        }
    }

    #[test]
    fn expansion_without_placeholders_is_identity(text in literal_text_strategy()) {
        let params: Params = Params::new();
        let tokens = expand("k", &text, &params).unwrap();
        prop_assert_eq!(tokens, vec![Token::Text(text)]);
    }

    #[test]
    fn substituted_values_are_not_rescanned(
        name in param_name_strategy(),
        value in "\\{[a-z]{1,8}\\}",
    ) {
        let template = format!("x {{{name}}} y");
        let mut params: Params = Params::new();
        params.insert(name, value.clone().into());
        let text = join_text(&expand("k", &template, &params).unwrap());
        prop_assert_eq!(text, format!("x {value} y"));
    }

    #[test]
    fn expansion_never_panics(template in ".*") {
        let params: Params = Params::new();
        let _ = expand("k", &template, &params);
    }

    #[test]
    fn missing_token_matches_contract_format(
        key in key_strategy(),
        accept in vec(language_code_strategy(), 1..4),
    ) {
        let resolver = Resolver::new();
        let params: Params = Params::new();
        let context = LocaleContext::new(accept).no_default_lang();
        let chain = effective_chain(&context);
        let text = resolver.resolve_text(&key, &params, &context).unwrap();
        prop_assert_eq!(text, format!("[I18N-MISSING({}):{}]", chain.join(","), key));
    }
}
