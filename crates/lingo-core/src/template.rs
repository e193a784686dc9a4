//! Template expansion.
//!
//! Expands a raw template string against a parameter map, producing an
//! ordered token sequence. Two placeholder forms are recognized:
//!
//! - `{name}` — plain parameter reference;
//! - `{name(argument literal)}` — function reference; the argument is a
//!   literal word/space sequence passed to the function verbatim, never a
//!   nested template.
//!
//! Substituted values are never re-scanned for placeholders.

use crate::token::{Params, ParamValue, Token};
use lingo_common::{LingoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PARAM_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());
static CALL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\(([\w\s]+)\)").unwrap());

/// Expands `template` for `key` against `params`.
///
/// Literal text between placeholders becomes text tokens; empty segments
/// (leading, trailing, or between adjacent placeholders) are preserved as
/// empty text tokens so the sequence keeps its positional structure for
/// rich-content consumers.
///
/// # Errors
///
/// Returns [`LingoError::ExpectedFunction`] when a call-shaped placeholder
/// names a parameter that is not a function. Every other mismatch degrades
/// to an empty text token.
pub fn expand<C: Clone>(key: &str, template: &str, params: &Params<C>) -> Result<Vec<Token<C>>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for span in PARAM_SPAN.find_iter(template) {
        tokens.push(Token::Text(template[cursor..span.start()].to_string()));

        let inner = &template[span.start() + 1..span.end() - 1];
        if let Some(call) = CALL_SHAPE.captures(inner) {
            let name = &call[1];
            let argument = &call[2];
            match params.get(name) {
                Some(ParamValue::Func(func)) => tokens.push(func(argument)),
                _ => {
                    return Err(LingoError::ExpectedFunction {
                        key: key.to_string(),
                        param: name.to_string(),
                    })
                }
            }
        } else {
            tokens.push(plain_token(params.get(inner)));
        }

        cursor = span.end();
    }

    tokens.push(Token::Text(template[cursor..].to_string()));
    Ok(tokens)
}

/// Token for a plain `{name}` reference.
///
/// Absent and explicitly empty values render as empty text, never as the
/// word "null" or similar. A function value in plain position has no
/// literal form and renders empty as well.
fn plain_token<C: Clone>(value: Option<&ParamValue<C>>) -> Token<C> {
    match value {
        Some(ParamValue::Str(s)) => Token::Text(s.clone()),
        Some(ParamValue::Num(n)) => Token::Number(*n),
        Some(ParamValue::Content(content)) => Token::Content(content.clone()),
        Some(ParamValue::Empty | ParamValue::Func(_)) | None => Token::Text(String::new()),
    }
}
