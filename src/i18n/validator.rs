//! Locale table validation.
//!
//! Checks a locale table for everything that would make path resolution
//! ambiguous or produce mislocalized pages: duplicate locales, a missing or
//! repeated default, missing or colliding segment words, and malformed
//! market codes.

use crate::i18n::{LocaleConfig, RegistryError, SegmentKind};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the table unusable
    pub errors: Vec<RegistryError>,

    /// Suspicious but workable entries
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKET_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_locale_code(code: &str) -> bool {
    LOCALE_CODE_REGEX
        .get_or_init(|| Regex::new(r"^[a-z]{2,3}(?:-[a-z0-9]{2,8})*$").unwrap())
        .is_match(code)
}

fn is_slug(word: &str) -> bool {
    SLUG_REGEX
        .get_or_init(|| Regex::new(r"^[\p{Ll}\p{Lo}0-9]+(?:[-_][\p{Ll}\p{Lo}0-9]+)*$").unwrap())
        .is_match(word)
}

fn is_market_code(code: &str) -> bool {
    MARKET_CODE_REGEX
        .get_or_init(|| Regex::new(r"^[A-Z]{2}$").unwrap())
        .is_match(code)
}

/// Validate a whole locale table, collecting every problem found.
pub fn validate_locales(locales: &[LocaleConfig]) -> ValidationReport {
    let mut report = ValidationReport::new();

    if locales.is_empty() {
        report.errors.push(RegistryError::EmptyLocaleSet);
        return report;
    }

    let codes: HashSet<&str> = locales.iter().map(|config| config.code).collect();
    let mut seen_codes = HashSet::new();
    let mut default_code: Option<&str> = None;

    for config in locales {
        if !is_locale_code(config.code) {
            report.errors.push(RegistryError::InvalidLocaleCode {
                code: config.code.to_string(),
            });
        }

        if !seen_codes.insert(config.code) {
            report.errors.push(RegistryError::DuplicateLocale {
                code: config.code.to_string(),
            });
        }

        if config.is_default {
            match default_code {
                Some(first) => report.errors.push(RegistryError::MultipleDefaultLocales {
                    first: first.to_string(),
                    second: config.code.to_string(),
                }),
                None => default_code = Some(config.code),
            }
        }

        if !is_market_code(config.country) {
            report.errors.push(RegistryError::InvalidCountry {
                locale: config.code.to_string(),
                country: config.country.to_string(),
            });
        }

        if !is_market_code(config.catalog_language) {
            report.errors.push(RegistryError::InvalidCatalogLanguage {
                locale: config.code.to_string(),
                language: config.catalog_language.to_string(),
            });
        }

        validate_segments(config, &codes, &mut report);
    }

    if default_code.is_none() {
        report.errors.push(RegistryError::NoDefaultLocale);
    }

    report
}

fn validate_segments(config: &LocaleConfig, codes: &HashSet<&str>, report: &mut ValidationReport) {
    for kind in SegmentKind::ALL {
        let count = config
            .segments
            .iter()
            .filter(|(candidate, _)| *candidate == kind)
            .count();
        match count {
            0 => report.errors.push(RegistryError::MissingSegment {
                locale: config.code.to_string(),
                kind,
            }),
            1 => {}
            _ => report.errors.push(RegistryError::DuplicateSegmentKind {
                locale: config.code.to_string(),
                kind,
            }),
        }
    }

    for (index, (kind, word)) in config.segments.iter().enumerate() {
        if !is_slug(word) {
            report.errors.push(RegistryError::InvalidSegmentWord {
                locale: config.code.to_string(),
                word: word.to_string(),
            });
        }

        // Only pairs of distinct kinds; repeated kinds are reported above.
        if let Some((first, _)) = config.segments[..index]
            .iter()
            .find(|(other_kind, other_word)| other_word == word && other_kind != kind)
        {
            report.errors.push(RegistryError::DuplicateSegmentWord {
                locale: config.code.to_string(),
                word: word.to_string(),
                first: *first,
                second: *kind,
            });
        }

        if codes.contains(word) {
            report.warnings.push(format!(
                "Locale '{}' uses the locale code '{}' as its '{}' path word",
                config.code, word, kind
            ));
        }
    }
}
