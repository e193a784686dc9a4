//! Settings schema definitions using serde.

use crate::defaults;
use lingo_core::{LocaleContext, Resolver};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level settings for a resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Language policy.
    #[serde(default)]
    pub languages: LanguagesSettings,
    /// Deterministic test-mode reporting switch.
    #[serde(default)]
    pub test_mode: bool,
    /// String packs to register.
    #[serde(default)]
    pub packs: PacksSettings,
}

/// Language policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesSettings {
    /// Default preference order, applied when a caller supplies none.
    #[serde(default = "defaults::default_languages")]
    pub default: Vec<String>,
    /// Optional allow-list restricting which languages may resolve.
    #[serde(default)]
    pub permitted: Option<Vec<String>>,
    /// Language appended after all preferred languages.
    #[serde(default = "defaults::fallback_language")]
    pub fallback: Option<String>,
    /// Whether a found pack that lacks a key falls through to the next
    /// language.
    #[serde(default)]
    pub allow_fallback: bool,
}

/// String-pack sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacksSettings {
    /// Inline packs: language code to key/template mapping.
    #[serde(default)]
    pub inline: HashMap<String, HashMap<String, String>>,
    /// Optional directory of per-language pack files
    /// (`<lang>.yaml|.yml|.json|.toml`), resolved relative to the
    /// settings file.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Builds a resolver configured with these settings: default
    /// languages, test mode, and every inline pack registered.
    #[must_use]
    pub fn build_resolver(&self) -> Resolver {
        let resolver = Resolver::new();
        resolver.set_default_languages(self.languages.default.clone());
        resolver.set_test_mode(self.test_mode);
        for (code, pack) in &self.packs.inline {
            resolver.register_pack(code.clone(), pack.clone());
        }
        resolver
    }

    /// Builds the locale context these settings describe: the default
    /// preference order with the configured permit set, fallback language,
    /// and fallback behavior.
    #[must_use]
    pub fn base_context(&self) -> LocaleContext {
        let mut context = LocaleContext::new(self.languages.default.clone())
            .with_allow_fallback(self.languages.allow_fallback);
        context = match &self.languages.fallback {
            Some(code) => context.with_default_lang(code.clone()),
            None => context.no_default_lang(),
        };
        if let Some(permitted) = &self.languages.permitted {
            context = context.with_permit_langs(permitted.clone());
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.languages.default, vec!["en"]);
        assert_eq!(settings.languages.fallback.as_deref(), Some("en"));
        assert!(!settings.languages.allow_fallback);
        assert!(!settings.test_mode);
        assert!(settings.packs.inline.is_empty());
        assert!(settings.packs.dir.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("test_mode: true").unwrap();
        assert!(settings.test_mode);
        assert_eq!(settings.languages.default, vec!["en"]);
    }

    #[test]
    fn test_build_resolver_registers_inline_packs() {
        let yaml = r#"
languages:
  default: ["fr"]
packs:
  inline:
    fr:
      greeting: "Bonjour"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        let resolver = settings.build_resolver();
        assert_eq!(resolver.default_languages(), vec!["fr"]);
        assert!(resolver.store().has_pack("fr"));
    }

    #[test]
    fn test_base_context_reflects_policy() {
        let yaml = r#"
languages:
  default: ["fr-CA"]
  permitted: ["fr-CA", "fr", "en"]
  fallback: "en"
  allow_fallback: true
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        let context = settings.base_context();
        assert_eq!(context.accept_langs, vec!["fr-CA"]);
        assert_eq!(context.default_lang.as_deref(), Some("en"));
        assert!(context.allow_fallback);
        assert!(context.permit_langs.unwrap().contains("fr"));
    }
}
