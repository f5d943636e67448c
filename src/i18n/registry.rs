//! Locale registry: single source of truth for all supported storefront locales.
//!
//! This module provides the table of locales the storefront is served in,
//! together with each locale's localized path words and the market context
//! (country, catalog language) used for catalog queries. The process-wide
//! instance is validated once at startup and is immutable thereafter.

use crate::i18n::validator::validate_locales;
use crate::i18n::{Locale, SegmentKind};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code as it appears in the first path segment (e.g., "en", "et")
    pub code: &'static str,

    /// English name of the language (e.g., "Estonian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Eesti")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,

    /// ISO 3166-1 alpha-2 country used for pricing and availability
    pub country: &'static str,

    /// Two-letter language code used for translated catalog content
    pub catalog_language: &'static str,

    /// Localized path word for each segment kind
    pub segments: &'static [(SegmentKind, &'static str)],
}

/// Configuration errors detected while validating a locale table.
///
/// Any of these means users would be served mislocalized or unreachable
/// pages, so a registry that produces one is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("locale registry is empty")]
    EmptyLocaleSet,

    #[error("locale code '{code}' is not a valid path segment")]
    InvalidLocaleCode { code: String },

    #[error("locale '{code}' is registered more than once")]
    DuplicateLocale { code: String },

    #[error("no default locale is configured")]
    NoDefaultLocale,

    #[error("multiple default locales configured: '{first}' and '{second}'")]
    MultipleDefaultLocales { first: String, second: String },

    #[error("locale '{locale}' has no path word for segment '{kind}'")]
    MissingSegment { locale: String, kind: SegmentKind },

    #[error("locale '{locale}' defines segment '{kind}' more than once")]
    DuplicateSegmentKind { locale: String, kind: SegmentKind },

    #[error("locale '{locale}' uses the word '{word}' for both '{first}' and '{second}'")]
    DuplicateSegmentWord {
        locale: String,
        word: String,
        first: SegmentKind,
        second: SegmentKind,
    },

    #[error("locale '{locale}' has path word '{word}' which is not a URL-safe slug")]
    InvalidSegmentWord { locale: String, word: String },

    #[error("locale '{locale}' has invalid country '{country}'")]
    InvalidCountry { locale: String, country: String },

    #[error("locale '{locale}' has invalid catalog language '{language}'")]
    InvalidCatalogLanguage { locale: String, language: String },
}

/// Registry of supported locales.
///
/// Built either from the compiled-in table via [`LocaleRegistry::get`] or from
/// an arbitrary table via [`LocaleRegistry::new`]. Construction always
/// validates, so every lookup on an existing registry is total.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Validate a locale table and build a registry from it.
    ///
    /// Every problem in the table is logged; the first one is returned.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, RegistryError> {
        let report = validate_locales(&locales);

        for warning in &report.warnings {
            warn!("Locale registry: {}", warning);
        }

        if let Some(first) = report.errors.first() {
            for err in &report.errors {
                error!("Locale registry: {}", err);
            }
            return Err(first.clone());
        }

        let default_index = locales
            .iter()
            .position(|locale| locale.is_default)
            .ok_or(RegistryError::NoDefaultLocale)?;

        debug!(
            "Locale registry ready with {} locales (default '{}')",
            locales.len(),
            locales[default_index].code
        );

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Validate and install the compiled-in table as the global registry.
    ///
    /// Binaries call this at startup so a broken table stops the process
    /// before any request is handled.
    pub fn init() -> Result<&'static LocaleRegistry, RegistryError> {
        if let Some(registry) = REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::new(default_locales())?;
        Ok(REGISTRY.get_or_init(|| registry))
    }

    /// Get the global locale registry instance.
    ///
    /// # Panics
    /// Panics if the compiled-in locale table fails validation.
    pub fn get() -> &'static LocaleRegistry {
        match Self::init() {
            Ok(registry) => registry,
            Err(err) => panic!("Compiled-in locale table is invalid: {}", err),
        }
    }

    /// All supported locales in table order.
    pub fn all_locales(&self) -> Vec<Locale> {
        self.locales
            .iter()
            .map(|config| Locale::new(config.code))
            .collect()
    }

    /// The default locale. Always a member of [`all_locales`](Self::all_locales).
    pub fn default_locale(&self) -> Locale {
        Locale::new(self.locales[self.default_index].code)
    }

    /// Case-sensitive membership check for a raw locale code.
    pub fn is_supported_locale(&self, candidate: &str) -> bool {
        self.get_by_code(candidate).is_some()
    }

    /// Look up a locale by its code.
    pub fn locale(&self, code: &str) -> Option<Locale> {
        self.get_by_code(code).map(|config| Locale::new(config.code))
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// All locale configurations in table order.
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the configuration of a locale handed out by this registry.
    ///
    /// # Panics
    /// Panics if `locale` was obtained from a different registry that
    /// contains codes this one does not.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        self.get_by_code(locale.code()).unwrap_or_else(|| {
            panic!(
                "Locale '{}' is not part of this registry",
                locale.code()
            )
        })
    }

    /// Localized path word for `kind` in `locale`.
    ///
    /// # Panics
    /// Panics if the entry is missing, which validation rules out for any
    /// locale belonging to this registry.
    pub fn localized_segment(&self, kind: SegmentKind, locale: Locale) -> &'static str {
        self.config(locale)
            .segments
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, word)| *word)
            .unwrap_or_else(|| {
                panic!(
                    "Locale '{}' has no path word for segment '{}'",
                    locale.code(),
                    kind
                )
            })
    }

    /// Reverse lookup of a (decoded) path word within one locale.
    ///
    /// Kinds are tried in [`SegmentKind::ALL`] order; the first match wins.
    pub fn segment_for_word(&self, locale: Locale, word: &str) -> Option<SegmentKind> {
        SegmentKind::ALL
            .into_iter()
            .find(|kind| self.localized_segment(*kind, locale) == word)
    }
}

/// Default locale configurations.
///
/// English is the default; Estonian is the home market, so English pricing
/// is also quoted for Estonia.
pub(crate) fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            country: "EE",
            catalog_language: "EN",
            segments: &[(SegmentKind::Shop, "shop"), (SegmentKind::Blog, "blog")],
        },
        LocaleConfig {
            code: "et",
            name: "Estonian",
            native_name: "Eesti",
            is_default: false,
            country: "EE",
            catalog_language: "ET",
            segments: &[(SegmentKind::Shop, "pood"), (SegmentKind::Blog, "blogi")],
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            country: "DE",
            catalog_language: "DE",
            segments: &[(SegmentKind::Shop, "shop-de"), (SegmentKind::Blog, "blog-de")],
        },
        LocaleConfig {
            code: "fi",
            name: "Finnish",
            native_name: "Suomi",
            is_default: false,
            country: "FI",
            catalog_language: "FI",
            segments: &[(SegmentKind::Shop, "kauppa"), (SegmentKind::Blog, "blogi")],
        },
        LocaleConfig {
            code: "sv",
            name: "Swedish",
            native_name: "Svenska",
            is_default: false,
            country: "SE",
            catalog_language: "SV",
            segments: &[(SegmentKind::Shop, "butik"), (SegmentKind::Blog, "blogg")],
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            country: "FR",
            catalog_language: "FR",
            segments: &[(SegmentKind::Shop, "boutique"), (SegmentKind::Blog, "journal")],
        },
    ]
}
