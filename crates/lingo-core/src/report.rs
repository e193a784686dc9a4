//! Canonical missing-key and test-mode token sequences.
//!
//! The literal formats produced here are part of the observable contract:
//! consumers (including tests and UI bindings) match on them verbatim.

use crate::token::{Params, ParamValue, Token};

/// The single-token sequence reported for an unresolvable key.
///
/// Format: `[I18N-MISSING(<chain>):<key>]` with the full effective chain,
/// comma-joined. The same format is used for a terminal miss and for an
/// exhausted chain.
#[must_use]
pub fn missing_tokens<C>(key: &str, chain: &[String]) -> Vec<Token<C>> {
    vec![Token::Text(format!(
        "[I18N-MISSING({}):{}]",
        chain.join(","),
        key
    ))]
}

/// The deterministic placeholder sequence reported in test mode.
///
/// Emits `[TEST:<key>]`, then invokes every function parameter with
/// `[TEST:<key>--<name>]` in parameter-iteration order (lexicographic by
/// name), splicing each result in. This keeps function-parameter wiring
/// exercised while the output stays predictable for assertions.
#[must_use]
pub fn test_tokens<C: Clone>(key: &str, params: &Params<C>) -> Vec<Token<C>> {
    let mut tokens = vec![Token::Text(format!("[TEST:{key}]"))];
    for (name, value) in params {
        if let ParamValue::Func(func) = value {
            tokens.push(func(&format!("[TEST:{key}--{name}]")));
        }
    }
    tokens
}
