//! Canonical localized path construction.
//!
//! Every outgoing link (product cards, pagination, language switcher) is
//! built here so that [`resolve`](crate::paths::resolve) can always read it
//! back. Handles and slugs are expected to be URL-safe already.

use crate::i18n::{Locale, LocaleRegistry, SegmentKind};
use crate::paths::ResolvedRoute;
use serde::Serialize;

/// A logical link destination, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteTarget {
    /// Locale landing page
    Home,
    /// Index of a segment (shop front, blog listing)
    Segment { kind: SegmentKind },
    /// One product or article
    Detail { kind: SegmentKind, handle: String },
    /// Generic content page outside any segment
    Page { slug: String },
}

/// Same route in another locale, for language switchers and alternate links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatePath {
    pub locale: Locale,
    pub path: String,
}

/// `/{locale}`
pub fn build_home_path(locale: Locale) -> String {
    format!("/{}", locale)
}

/// `/{locale}/{localized word}`
pub fn build_segment_path(registry: &LocaleRegistry, locale: Locale, kind: SegmentKind) -> String {
    format!("/{}/{}", locale, registry.localized_segment(kind, locale))
}

/// `/{locale}/{localized word}/{handle}`
pub fn build_detail_path(
    registry: &LocaleRegistry,
    locale: Locale,
    kind: SegmentKind,
    handle: &str,
) -> String {
    format!("{}/{}", build_segment_path(registry, locale, kind), handle)
}

/// `/{locale}/{slug}`, or the home path for an empty slug.
pub fn build_page_path(locale: Locale, slug: &str) -> String {
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        build_home_path(locale)
    } else {
        format!("/{}/{}", locale, slug)
    }
}

/// Segment index link for a listing page. Pages 0 and 1 are the plain index.
///
/// The result carries a query string; split it off with
/// [`split_query`](crate::paths::split_query) before resolving.
pub fn build_paged_segment_path(
    registry: &LocaleRegistry,
    locale: Locale,
    kind: SegmentKind,
    page: u32,
) -> String {
    let path = build_segment_path(registry, locale, kind);
    if page > 1 {
        format!("{}?page={}", path, page)
    } else {
        path
    }
}

/// Path of `target` in `locale`.
pub fn build_target_path(registry: &LocaleRegistry, locale: Locale, target: &RouteTarget) -> String {
    match target {
        RouteTarget::Home => build_home_path(locale),
        RouteTarget::Segment { kind } => build_segment_path(registry, locale, *kind),
        RouteTarget::Detail { kind, handle } => build_detail_path(registry, locale, *kind, handle),
        RouteTarget::Page { slug } => build_page_path(locale, slug),
    }
}

/// The resolved route expressed in every supported locale, in registry order.
///
/// Product and article handles are shared across locales, so only the
/// locale and path word change. An invalid route maps to each home page.
pub fn alternate_paths(registry: &LocaleRegistry, route: &ResolvedRoute) -> Vec<AlternatePath> {
    let target = route.target().unwrap_or(RouteTarget::Home);
    registry
        .all_locales()
        .into_iter()
        .map(|locale| AlternatePath {
            locale,
            path: build_target_path(registry, locale, &target),
        })
        .collect()
}
