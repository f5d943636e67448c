//! Market context for catalog queries.
//!
//! Maps a locale to the `(country, catalog language)` pair the catalog
//! provider uses for pricing, availability and translated content.

use crate::i18n::{Locale, LocaleRegistry};
use serde::Serialize;

/// Country and catalog language for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleContext {
    /// ISO 3166-1 alpha-2 country (e.g., "EE")
    pub country: &'static str,

    /// Uppercase two-letter content language (e.g., "ET")
    pub catalog_language: &'static str,
}

/// Resolve the catalog context of a locale.
///
/// # Panics
/// Panics if `locale` does not belong to `registry`. Falling back to some
/// default here would quietly show customers the wrong currency or language.
pub fn resolve_context(registry: &LocaleRegistry, locale: Locale) -> LocaleContext {
    let config = registry.config(locale);
    LocaleContext {
        country: config.country,
        catalog_language: config.catalog_language,
    }
}

/// Parameters for a catalog/content lookup by handle.
///
/// Serialized with the variable names the storefront GraphQL queries expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub handle: String,
    pub country: &'static str,
    pub catalog_language: &'static str,
}

impl CatalogQuery {
    pub fn new(context: LocaleContext, handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            country: context.country,
            catalog_language: context.catalog_language,
        }
    }

    /// The query as a JSON variables object.
    pub fn to_variables(&self) -> serde_json::Value {
        serde_json::json!({
            "handle": self.handle,
            "country": self.country,
            "catalogLanguage": self.catalog_language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_a_context() {
        let registry = LocaleRegistry::get();
        for locale in registry.all_locales() {
            let context = resolve_context(registry, locale);
            assert_eq!(context.country.len(), 2);
            assert_eq!(context.catalog_language.len(), 2);
        }
    }

    #[test]
    fn test_estonian_context() {
        let registry = LocaleRegistry::get();
        let et = registry.locale("et").unwrap();
        assert_eq!(
            resolve_context(registry, et),
            LocaleContext {
                country: "EE",
                catalog_language: "ET",
            }
        );
    }

    #[test]
    fn test_english_prices_in_home_market() {
        let registry = LocaleRegistry::get();
        let context = resolve_context(registry, registry.default_locale());
        assert_eq!(context.country, "EE");
        assert_eq!(context.catalog_language, "EN");
    }

    #[test]
    fn test_context_serializes_camel_case() {
        let registry = LocaleRegistry::get();
        let sv = registry.locale("sv").unwrap();
        let json = serde_json::to_string(&resolve_context(registry, sv)).unwrap();
        assert_eq!(json, r#"{"country":"SE","catalogLanguage":"SV"}"#);
    }

    #[test]
    fn test_catalog_query_variables() {
        let registry = LocaleRegistry::get();
        let de = registry.locale("de").unwrap();
        let query = CatalogQuery::new(resolve_context(registry, de), "outdoor-grill");

        let variables = query.to_variables();
        assert_eq!(variables["handle"], "outdoor-grill");
        assert_eq!(variables["country"], "DE");
        assert_eq!(variables["catalogLanguage"], "DE");
        assert!(variables.get("language").is_none());
    }

    #[test]
    fn test_catalog_query_serializes_like_variables() {
        let registry = LocaleRegistry::get();
        let et = registry.locale("et").unwrap();
        let query = CatalogQuery::new(resolve_context(registry, et), "leather-bag");

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, query.to_variables());
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"handle":"leather-bag","country":"EE","catalogLanguage":"ET"}"#
        );
    }
}
