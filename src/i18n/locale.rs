//! Locale type: a validated handle onto a registry entry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// A validated locale.
///
/// Only registry lookups hand these out, so a `Locale` always names a
/// supported locale of the registry it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    /// Locale code (e.g., "en", "et")
    code: &'static str,
}

impl Locale {
    pub(crate) fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Create a Locale from a code using the global registry.
    ///
    /// # Example
    /// ```ignore
    /// let estonian = Locale::from_code("et")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().locale(code) {
            Some(locale) => Ok(locale),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The default locale of the global registry.
    pub fn default_locale() -> Locale {
        LocaleRegistry::get().default_locale()
    }

    /// The locale code as it appears in paths.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full configuration from the global registry.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// Native name of the language (e.g., "Eesti"), for language switchers.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_estonian() {
        let locale = Locale::from_code("et").expect("Should succeed");
        assert_eq!(locale.code(), "et");
        assert_eq!(locale.native_name(), "Eesti");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(Locale::default_locale().code(), "en");
    }

    #[test]
    fn test_display_and_serialize_use_code() {
        let locale = Locale::from_code("fi").unwrap();
        assert_eq!(locale.to_string(), "fi");
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"fi\"");
    }

    #[test]
    fn test_locale_equality() {
        let a = Locale::from_code("de").unwrap();
        let b = LocaleRegistry::get().locale("de").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Locale::default_locale());
    }
}
