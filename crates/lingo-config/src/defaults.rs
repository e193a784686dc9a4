//! Default values for settings fields.

use crate::schema::LanguagesSettings;

/// Default preference order.
#[must_use]
pub fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

/// Default ultimate-fallback language.
#[must_use]
pub fn fallback_language() -> Option<String> {
    Some("en".to_string())
}

impl Default for LanguagesSettings {
    fn default() -> Self {
        Self {
            default: default_languages(),
            permitted: None,
            fallback: fallback_language(),
            allow_fallback: false,
        }
    }
}
