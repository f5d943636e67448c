//! Incoming path resolution.

use crate::i18n::{resolve_context, CatalogQuery, Locale, LocaleRegistry, SegmentKind};
use crate::paths::RouteTarget;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::borrow::Cow;

/// Outcome of resolving one request path.
///
/// `slug` is empty when nothing follows the locale and segment word. On an
/// invalid route `segment_kind` and `slug` are filled in best-effort for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRoute {
    pub locale: Option<Locale>,
    pub segment_kind: Option<SegmentKind>,
    pub slug: String,
    pub is_valid: bool,
}

impl ResolvedRoute {
    /// What the route points at, for valid routes only.
    pub fn target(&self) -> Option<RouteTarget> {
        if !self.is_valid {
            return None;
        }
        let target = match (self.segment_kind, self.slug.is_empty()) {
            (Some(kind), true) => RouteTarget::Segment { kind },
            (Some(kind), false) => RouteTarget::Detail {
                kind,
                handle: self.slug.clone(),
            },
            (None, true) => RouteTarget::Home,
            (None, false) => RouteTarget::Page {
                slug: self.slug.clone(),
            },
        };
        Some(target)
    }

    /// Catalog lookup parameters for a product or article detail route.
    pub fn catalog_query(&self, registry: &LocaleRegistry) -> Option<CatalogQuery> {
        match (self.is_valid, self.locale, self.segment_kind) {
            (true, Some(locale), Some(_)) if !self.slug.is_empty() => Some(CatalogQuery::new(
                resolve_context(registry, locale),
                self.slug.as_str(),
            )),
            _ => None,
        }
    }
}

/// Split a request target into its path and query string.
///
/// Any fragment is dropped. Callers pass only the path to [`resolve`].
pub fn split_query(target: &str) -> (&str, Option<&str>) {
    let target = target.split('#').next().unwrap_or_default();
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Listing page number from a query string (`page=N`), defaulting to 1.
pub fn page_from_query(query: Option<&str>) -> u32 {
    query
        .into_iter()
        .flat_map(|query| query.split('&'))
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|page| page.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Resolve a request path (without query string) against the registry.
///
/// Empty segments are ignored, so repeated and trailing slashes do not
/// matter. Segments are percent-decoded before being compared with locale
/// codes and path words; the slug keeps the remaining segments exactly as
/// they arrived, including any `?` or `#`.
///
/// Never fails: an unknown or missing locale yields `is_valid == false`.
pub fn resolve(registry: &LocaleRegistry, path: &str) -> ResolvedRoute {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let Some(first) = segments.first() else {
        return ResolvedRoute {
            locale: None,
            segment_kind: None,
            slug: String::new(),
            is_valid: false,
        };
    };

    match registry.locale(&decode(first)) {
        Some(locale) => {
            let segment_kind = segments
                .get(1)
                .and_then(|word| registry.segment_for_word(locale, &decode(word)));
            let rest = if segment_kind.is_some() { 2 } else { 1 };
            ResolvedRoute {
                locale: Some(locale),
                segment_kind,
                slug: join(&segments, rest),
                is_valid: true,
            }
        }
        None => resolve_unlocalized(registry, &segments),
    }
}

/// Best-effort reading of a path whose first segment is not a locale.
///
/// A legacy unprefixed path (`/shop/bag`) is read from its first segment;
/// otherwise the first segment is taken as an unknown locale and skipped.
fn resolve_unlocalized(registry: &LocaleRegistry, segments: &[&str]) -> ResolvedRoute {
    let any_locale_word = |word: &str| {
        let word = decode(word);
        registry
            .all_locales()
            .into_iter()
            .find_map(|locale| registry.segment_for_word(locale, &word))
    };

    let (segment_kind, rest) = match any_locale_word(segments[0]) {
        Some(kind) => (Some(kind), 1),
        None => match segments.get(1).and_then(|&word| any_locale_word(word)) {
            Some(kind) => (Some(kind), 2),
            None => (None, 1),
        },
    };

    ResolvedRoute {
        locale: None,
        segment_kind,
        slug: join(segments, rest),
        is_valid: false,
    }
}

fn decode(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}

fn join(segments: &[&str], from: usize) -> String {
    segments.get(from..).map(|rest| rest.join("/")).unwrap_or_default()
}
