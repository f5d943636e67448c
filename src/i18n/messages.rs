//! Localized UI messages.
//!
//! Messages are nested JSON bundles, one per locale, addressed with dotted
//! keys (`"nav.shop"`). Lookup never fails: a missing or empty entry falls
//! back to the default locale's bundle and finally to the key itself.

use crate::i18n::{Locale, LocaleRegistry};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Per-locale message bundles with a default-locale fallback.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    default_locale: Locale,
    bundles: HashMap<Locale, Value>,
}

static BUILTIN: OnceLock<MessageCatalog> = OnceLock::new();

impl MessageCatalog {
    /// Create an empty catalog falling back to `default_locale`.
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            bundles: HashMap::new(),
        }
    }

    /// Built-in navigation and language-switcher messages for every
    /// locale of the global registry.
    pub fn builtin() -> &'static MessageCatalog {
        BUILTIN.get_or_init(|| {
            let registry = LocaleRegistry::get();
            let mut catalog = MessageCatalog::new(registry.default_locale());
            for config in registry.list_all() {
                if let Some(locale) = registry.locale(config.code) {
                    catalog.insert(locale, builtin_bundle(config.code, config.native_name));
                }
            }
            catalog
        })
    }

    /// Install (or replace) the bundle for `locale`.
    pub fn insert(&mut self, locale: Locale, bundle: Value) {
        self.bundles.insert(locale, bundle);
    }

    /// Parse a JSON bundle and install it for `locale`.
    pub fn insert_json(&mut self, locale: Locale, source: &str) -> Result<()> {
        let bundle: Value = serde_json::from_str(source)
            .with_context(|| format!("Failed to parse message bundle for '{}'", locale))?;
        self.insert(locale, bundle);
        Ok(())
    }

    /// Translate `key` for `locale`.
    pub fn translate<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        if let Some(message) = self.lookup(locale, key) {
            return message;
        }
        if locale != self.default_locale {
            if let Some(message) = self.lookup(self.default_locale, key) {
                debug!("Message '{}' missing for '{}', using default locale", key, locale);
                return message;
            }
        }
        debug!("Message '{}' missing in every bundle, using key", key);
        key
    }

    /// Get a non-empty string at a dotted key path in one bundle.
    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let bundle = self.bundles.get(&locale)?;
        let value = key
            .split('.')
            .try_fold(bundle, |node, part| node.get(part))?;
        value.as_str().filter(|message| !message.is_empty())
    }
}

fn builtin_bundle(code: &str, native_name: &str) -> Value {
    let (home, shop, blog, language) = match code {
        "et" => ("Avaleht", "Pood", "Blogi", "Keel"),
        "de" => ("Startseite", "Shop", "Blog", "Sprache"),
        "fi" => ("Etusivu", "Kauppa", "Blogi", "Kieli"),
        "sv" => ("Hem", "Butik", "Blogg", "Språk"),
        "fr" => ("Accueil", "Boutique", "Journal", "Langue"),
        _ => ("Home", "Shop", "Blog", "Language"),
    };
    json!({
        "nav": { "home": home, "shop": shop, "blog": blog },
        "language": { "label": language, "name": native_name },
    })
}
