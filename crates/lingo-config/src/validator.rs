//! Settings validation.

use crate::schema::Settings;
use lingo_common::{is_valid_code, LingoError, Result};
use std::collections::HashSet;

/// Settings validator.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validates settings before they are applied to a resolver.
    ///
    /// # Errors
    ///
    /// Returns [`LingoError::Config`] when the language policy or pack
    /// tables contain unusable codes or keys.
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.languages.default.is_empty() {
            return Err(LingoError::Config(
                "languages.default must list at least one language".to_string(),
            ));
        }

        for code in &settings.languages.default {
            Self::check_code(code, "languages.default")?;
        }

        if let Some(permitted) = &settings.languages.permitted {
            let mut seen = HashSet::new();
            for code in permitted {
                Self::check_code(code, "languages.permitted")?;
                if !seen.insert(code.as_str()) {
                    return Err(LingoError::Config(format!(
                        "languages.permitted lists '{code}' more than once"
                    )));
                }
            }
        }

        if let Some(code) = &settings.languages.fallback {
            Self::check_code(code, "languages.fallback")?;
        }

        for (code, pack) in &settings.packs.inline {
            Self::check_code(code, "packs.inline")?;
            for key in pack.keys() {
                if key.trim().is_empty() {
                    return Err(LingoError::Config(format!(
                        "packs.inline.{code} contains an empty message key"
                    )));
                }
            }
        }

        Ok(())
    }

    fn check_code(code: &str, field: &str) -> Result<()> {
        if is_valid_code(code) {
            Ok(())
        } else {
            Err(LingoError::Config(format!(
                "{field} contains an invalid language code: '{code}'"
            )))
        }
    }
}
