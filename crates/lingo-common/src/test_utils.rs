//! Test utilities and shared test helpers for the lingo workspace.
//!
//! This module provides common testing utilities, fixtures, and helper
//! functions that can be used across all crates in the workspace for unit
//! and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
}

/// String-pack fixtures shared by resolution tests across the workspace.
pub mod pack_fixtures {
    use std::collections::HashMap;

    /// English pack covering plain, parameterized, and call-shaped templates.
    #[must_use]
    pub fn english_pack() -> HashMap<String, String> {
        [
            ("big-thing", "The thing is big"),
            ("dynamic-big-thing", "The {thing} is big"),
            ("dynamic-big-obj", "The \"{obj}\" is big"),
            ("func-big-thing", "The {quote(nice car)} is big"),
            ("with-children", "This one has {children} dude"),
            ("multiple-params", "My name is {name} and I am {age} years old"),
            (
                "common.dropdown.selectedFraction",
                "({numerator}/{denominator} selected)",
            ),
            ("english-only", "Only English"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// French pack: a strict subset of the English keys.
    #[must_use]
    pub fn french_pack() -> HashMap<String, String> {
        [
            ("big-thing", "Le chose est grand"),
            ("dynamic-big-thing", "Le {thing} est grand"),
            ("dynamic-big-obj", "Le {obj} est grand"),
            ("func-big-thing", "Le {quote(choses)} est grand"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for bare or region-qualified language codes.
    pub fn language_code_strategy() -> impl Strategy<Value = String> {
        prop_oneof!["[a-z]{2}", "[a-z]{2}-[A-Z]{2}"]
    }

    /// Strategy for message keys.
    pub fn key_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,12}(\\.[a-z][a-z0-9-]{0,12}){0,2}"
    }

    /// Strategy for template text with no placeholder syntax in it.
    pub fn literal_text_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?]{0,40}"
    }

    /// Strategy for parameter names.
    pub fn param_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9_]{0,10}"
    }
}
