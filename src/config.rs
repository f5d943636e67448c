use crate::i18n::{Locale, LocaleRegistry};
use crate::redirects::RedirectFormat;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Build-time settings for exporting the redirect table.
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale legacy paths are redirected into (defaults to the registry default)
    pub fallback_locale: Locale,

    /// Where the rendered table is written
    pub output_path: PathBuf,

    pub format: RedirectFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(registry_or_fail()?, |key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup<F>(registry: &LocaleRegistry, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback_locale = match lookup("REDIRECTS_FALLBACK_LOCALE") {
            Some(code) => match registry.locale(code.trim()) {
                Some(locale) => locale,
                None => bail!(
                    "REDIRECTS_FALLBACK_LOCALE '{}' is not a supported locale",
                    code
                ),
            },
            None => registry.default_locale(),
        };

        let format = match lookup("REDIRECTS_FORMAT") {
            Some(name) => RedirectFormat::from_name(&name)
                .with_context(|| format!("REDIRECTS_FORMAT '{}' must be 'json' or 'netlify'", name))?,
            None => RedirectFormat::Json,
        };

        Ok(Self {
            fallback_locale,
            output_path: lookup("REDIRECTS_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("redirects.json")),
            format,
        })
    }
}

fn registry_or_fail() -> Result<&'static LocaleRegistry> {
    LocaleRegistry::init().context("Locale registry failed validation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(LocaleRegistry::get(), |key| values.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).expect("Should load");
        assert_eq!(config.fallback_locale.code(), "en");
        assert_eq!(config.output_path, PathBuf::from("redirects.json"));
        assert_eq!(config.format, RedirectFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("REDIRECTS_FALLBACK_LOCALE", "et"),
            ("REDIRECTS_OUTPUT", "public/_redirects"),
            ("REDIRECTS_FORMAT", "netlify"),
        ])
        .expect("Should load");
        assert_eq!(config.fallback_locale.code(), "et");
        assert_eq!(config.output_path, PathBuf::from("public/_redirects"));
        assert_eq!(config.format, RedirectFormat::Netlify);
    }

    #[test]
    fn test_unsupported_fallback_locale() {
        let err = from_pairs(&[("REDIRECTS_FALLBACK_LOCALE", "xx")]).unwrap_err();
        assert!(err.to_string().contains("not a supported locale"));
    }

    #[test]
    fn test_unknown_format() {
        let err = from_pairs(&[("REDIRECTS_FORMAT", "yaml")]).unwrap_err();
        assert!(err.to_string().contains("REDIRECTS_FORMAT"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("REDIRECTS_FALLBACK_LOCALE", "fi");
        std::env::remove_var("REDIRECTS_FORMAT");
        std::env::remove_var("REDIRECTS_OUTPUT");

        let config = Config::from_env();
        std::env::remove_var("REDIRECTS_FALLBACK_LOCALE");

        assert_eq!(config.expect("Should load").fallback_locale.code(), "fi");
    }
}
