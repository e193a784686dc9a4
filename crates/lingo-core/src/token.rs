//! Token and parameter value types for resolved messages.
//!
//! A resolved message is an ordered sequence of [`Token`]s. Concatenating
//! the text and number tokens yields the user-visible string; opaque
//! content tokens stand in place for rich content supplied by the caller
//! and are never stringified or re-parsed.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An atomic unit of a resolved message.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<C = ()> {
    /// A literal text segment.
    Text(String),
    /// A numeric value, rendered with its display form (`0` -> "0",
    /// `NaN` -> "NaN").
    Number(f64),
    /// Opaque caller-supplied content, passed through unsplit and
    /// unmodified.
    Content(C),
}

impl<C> Token<C> {
    /// The textual form of this token, if it has one.
    ///
    /// Opaque content has no textual form and yields `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Content(_) => None,
        }
    }

    /// Whether this token is an empty text segment.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl<C> From<&str> for Token<C> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<C> From<String> for Token<C> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<C> From<f64> for Token<C> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Joins the textual tokens of a sequence into a single string.
///
/// Opaque content tokens contribute nothing: they cannot be stringified,
/// and the joined form is only meaningful for text-only consumers. Callers
/// that render rich content must walk the token sequence instead.
#[must_use]
pub fn join_text<C>(tokens: &[Token<C>]) -> String {
    let mut out = String::new();
    for token in tokens {
        if let Some(text) = token.as_text() {
            out.push_str(&text);
        }
    }
    out
}

/// A unary function parameter: receives the literal argument text from a
/// call-shaped placeholder and produces a token to splice in.
pub type ParamFn<C> = Arc<dyn Fn(&str) -> Token<C> + Send + Sync>;

/// A parameter value supplied to resolution.
///
/// Modeled as a tagged union so templates never have to inspect runtime
/// types: a value is a literal, an explicit blank, opaque content, or a
/// function.
#[derive(Clone)]
pub enum ParamValue<C = ()> {
    /// A literal string.
    Str(String),
    /// A literal number; `0` and `NaN` render as-is.
    Num(f64),
    /// An explicitly absent value; renders as an empty text segment.
    Empty,
    /// Opaque content spliced into the output untouched.
    Content(C),
    /// A function invoked with the placeholder's literal argument text.
    Func(ParamFn<C>),
}

impl<C> ParamValue<C> {
    /// Wraps a closure as a function parameter.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&str) -> Token<C> + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Whether this value is a function parameter.
    #[must_use]
    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }
}

impl<C: fmt::Debug> fmt::Debug for ParamValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Num(n) => f.debug_tuple("Num").field(n).finish(),
            Self::Empty => f.write_str("Empty"),
            Self::Content(c) => f.debug_tuple("Content").field(c).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<C> From<&str> for ParamValue<C> {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl<C> From<String> for ParamValue<C> {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<C> From<f64> for ParamValue<C> {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl<C> From<i32> for ParamValue<C> {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl<C> From<i64> for ParamValue<C> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Num(value as f64)
    }
}

impl<C, T> From<Option<T>> for ParamValue<C>
where
    T: Into<ParamValue<C>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Parameter map for a resolution call.
///
/// A `BTreeMap` keeps parameter iteration deterministic (lexicographic by
/// name), which the test-mode reporter relies on.
pub type Params<C = ()> = BTreeMap<String, ParamValue<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        let text: Token = Token::Text("hi".to_string());
        let number: Token = Token::Number(0.0);
        let content = Token::Content(42u8);
        assert_eq!(text.as_text().as_deref(), Some("hi"));
        assert_eq!(number.as_text().as_deref(), Some("0"));
        assert_eq!(content.as_text(), None);
    }

    #[test]
    fn test_number_display_edge_cases() {
        let nan: Token = Token::Number(f64::NAN);
        let zero: Token = Token::Number(0.0);
        let frac: Token = Token::Number(2.5);
        assert_eq!(nan.as_text().as_deref(), Some("NaN"));
        assert_eq!(zero.as_text().as_deref(), Some("0"));
        assert_eq!(frac.as_text().as_deref(), Some("2.5"));
    }

    #[test]
    fn test_join_text_skips_content() {
        let tokens = vec![
            Token::Text("a".to_string()),
            Token::Content("rich"),
            Token::Number(7.0),
        ];
        assert_eq!(join_text(&tokens), "a7");
    }

    #[test]
    fn test_join_text_keeps_empty_segments_harmless() {
        let tokens: Vec<Token> = vec![
            Token::Text(String::new()),
            Token::Text("x".to_string()),
            Token::Text(String::new()),
        ];
        assert_eq!(join_text(&tokens), "x");
    }

    #[test]
    fn test_param_value_conversions() {
        let s: ParamValue = "hello".into();
        let n: ParamValue = 3i32.into();
        let none: ParamValue = None::<&str>.into();
        assert!(matches!(s, ParamValue::Str(ref v) if v == "hello"));
        assert!(matches!(n, ParamValue::Num(v) if (v - 3.0).abs() < f64::EPSILON));
        assert!(matches!(none, ParamValue::Empty));
    }

    #[test]
    fn test_func_invocation() {
        let quote: ParamValue = ParamValue::func(|text| Token::Text(format!("\"{text}\"")));
        assert!(quote.is_func());
        if let ParamValue::Func(f) = quote {
            assert_eq!(f("nice car"), Token::Text("\"nice car\"".to_string()));
        }
    }
}
