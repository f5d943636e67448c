//! Redirect planning for legacy, non-localized URLs.
//!
//! The storefront used to serve `/shop`, `/blog` and a few other paths
//! without a locale prefix. The planner turns the fixed alias table into
//! permanent redirects onto the canonical localized paths of one fallback
//! locale, and serializes them for the hosting layer.

use crate::i18n::{Locale, LocaleRegistry, SegmentKind};
use crate::paths::{build_page_path, build_segment_path};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Wildcard matching everything below a legacy path, including nested segments.
const SPLAT_SOURCE: &str = "*";

/// Where the hosting layer substitutes the text matched by [`SPLAT_SOURCE`].
const SPLAT_DESTINATION: &str = ":splat";

/// Where a legacy alias should now point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyTarget {
    /// A localized segment; a splat rule for everything below it is emitted too
    Segment(SegmentKind),
    /// A generic content page under the locale
    Page(&'static str),
}

/// A legacy top-level path and its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAlias {
    pub source: &'static str,
    pub target: LegacyTarget,
}

/// Legacy paths still linked from search engines and old newsletters.
pub const LEGACY_ALIASES: &[LegacyAlias] = &[
    LegacyAlias {
        source: "/shop",
        target: LegacyTarget::Segment(SegmentKind::Shop),
    },
    LegacyAlias {
        source: "/blog",
        target: LegacyTarget::Segment(SegmentKind::Blog),
    },
    LegacyAlias {
        source: "/pood",
        target: LegacyTarget::Segment(SegmentKind::Shop),
    },
    LegacyAlias {
        source: "/products",
        target: LegacyTarget::Segment(SegmentKind::Shop),
    },
    LegacyAlias {
        source: "/account_page",
        target: LegacyTarget::Page("account"),
    },
];

/// One hosting-level redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRule {
    #[serde(rename = "source")]
    pub source_path: String,
    #[serde(rename = "destination")]
    pub destination_path: String,
    pub permanent: bool,
}

impl RedirectRule {
    fn permanent(source_path: String, destination_path: String) -> Self {
        Self {
            source_path,
            destination_path,
            permanent: true,
        }
    }
}

/// Build-time configuration errors in the redirect table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("redirect source '{source_path}' is defined twice (to '{first}' and to '{second}')")]
    DuplicateSource {
        source_path: String,
        first: String,
        second: String,
    },

    #[error("redirect source '{source_path}' must be an absolute path")]
    RelativeSource { source_path: String },

    #[error("redirect source '{source_path}' would shadow localized content for '{locale}'")]
    ShadowsLocalizedPath { source_path: String, locale: String },
}

/// Output format for the redirect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectFormat {
    /// JSON array of `{source, destination, permanent}` objects
    Json,
    /// Netlify `_redirects` lines
    Netlify,
}

impl RedirectFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(RedirectFormat::Json),
            "netlify" => Some(RedirectFormat::Netlify),
            _ => None,
        }
    }
}

/// Redirects for the built-in legacy aliases.
///
/// `fallback` defaults to the registry's default locale.
pub fn build_redirects(
    registry: &LocaleRegistry,
    fallback: Option<Locale>,
) -> Result<Vec<RedirectRule>, RedirectError> {
    plan_redirects(registry, fallback, LEGACY_ALIASES)
}

/// Redirects for an arbitrary alias table, in table order.
///
/// Segment aliases produce the index rule followed by a `/*` → `/:splat`
/// rule, so nested paths such as `/blog/recipes/summer` keep their tail. Output depends only on the inputs, so repeated builds diff cleanly.
pub fn plan_redirects(
    registry: &LocaleRegistry,
    fallback: Option<Locale>,
    aliases: &[LegacyAlias],
) -> Result<Vec<RedirectRule>, RedirectError> {
    let locale = fallback.unwrap_or_else(|| registry.default_locale());
    let mut rules = Vec::with_capacity(aliases.len() * 2);

    for alias in aliases {
        check_source(registry, alias.source)?;
        match alias.target {
            LegacyTarget::Segment(kind) => {
                let destination = build_segment_path(registry, locale, kind);
                let nested = RedirectRule::permanent(
                    format!("{}/{}", alias.source.trim_end_matches('/'), SPLAT_SOURCE),
                    format!("{}/{}", destination, SPLAT_DESTINATION),
                );
                rules.push(RedirectRule::permanent(alias.source.to_string(), destination));
                rules.push(nested);
            }
            LegacyTarget::Page(slug) => {
                rules.push(RedirectRule::permanent(
                    alias.source.to_string(),
                    build_page_path(locale, slug),
                ));
            }
        }
    }

    check_unique_sources(&rules)?;

    info!("Planned {} redirects onto locale '{}'", rules.len(), locale);
    Ok(rules)
}

fn check_source(registry: &LocaleRegistry, source: &str) -> Result<(), RedirectError> {
    if !source.starts_with('/') {
        return Err(RedirectError::RelativeSource {
            source_path: source.to_string(),
        });
    }
    let first = source.split('/').find(|s| !s.is_empty()).unwrap_or_default();
    if registry.is_supported_locale(first) {
        return Err(RedirectError::ShadowsLocalizedPath {
            source_path: source.to_string(),
            locale: first.to_string(),
        });
    }
    Ok(())
}

fn check_unique_sources(rules: &[RedirectRule]) -> Result<(), RedirectError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for rule in rules {
        if let Some(first) = seen.insert(&rule.source_path, &rule.destination_path) {
            return Err(RedirectError::DuplicateSource {
                source_path: rule.source_path.clone(),
                first: first.to_string(),
                second: rule.destination_path.clone(),
            });
        }
    }
    debug!("All {} redirect sources are unique", rules.len());
    Ok(())
}

/// Serialize rules in the requested format.
pub fn render_redirects(
    rules: &[RedirectRule],
    format: RedirectFormat,
) -> serde_json::Result<String> {
    match format {
        RedirectFormat::Json => to_json(rules),
        RedirectFormat::Netlify => Ok(to_netlify(rules)),
    }
}

/// Pretty-printed JSON array, with a trailing newline.
pub fn to_json(rules: &[RedirectRule]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(rules)?;
    json.push('\n');
    Ok(json)
}

/// Netlify `_redirects` syntax: `source destination status`.
pub fn to_netlify(rules: &[RedirectRule]) -> String {
    rules
        .iter()
        .map(|rule| {
            let status = if rule.permanent { 301 } else { 302 };
            format!("{} {} {}\n", rule.source_path, rule.destination_path, status)
        })
        .collect()
}
