//! Integration tests for the storefront routing crate
//!
//! These tests exercise the public API end to end: resolving request paths,
//! building links from resolved routes, deriving catalog queries, and
//! exporting the redirect table to disk.

use std::fs;
use tempfile::TempDir;

use storefront_routing::config::Config;
use storefront_routing::i18n::{resolve_context, LocaleRegistry, MessageCatalog, SegmentKind};
use storefront_routing::paths::{
    alternate_paths, build_detail_path, build_segment_path, resolve, ResolvedRoute,
};
use storefront_routing::redirects::{build_redirects, render_redirects, RedirectFormat};

// ==================== Test Helpers ====================

fn registry() -> &'static LocaleRegistry {
    LocaleRegistry::init().expect("compiled-in registry should be valid")
}

// ==================== Resolution Scenarios ====================

#[test]
fn test_documented_scenarios() {
    let registry = registry();
    let en = registry.locale("en");
    let et = registry.locale("et");

    assert_eq!(
        resolve(registry, "/en/shop/leather-bag"),
        ResolvedRoute {
            locale: en,
            segment_kind: Some(SegmentKind::Shop),
            slug: "leather-bag".into(),
            is_valid: true,
        }
    );
    assert_eq!(
        resolve(registry, "/et/pood/leather-bag"),
        ResolvedRoute {
            locale: et,
            segment_kind: Some(SegmentKind::Shop),
            slug: "leather-bag".into(),
            is_valid: true,
        }
    );
    assert!(!resolve(registry, "/xx/shop").is_valid);
    assert_eq!(
        resolve(registry, "/en"),
        ResolvedRoute {
            locale: en,
            segment_kind: None,
            slug: String::new(),
            is_valid: true,
        }
    );
}

#[test]
fn test_german_detail_round_trip() {
    let registry = registry();
    let de = registry.locale("de").unwrap();

    let path = build_detail_path(registry, de, SegmentKind::Shop, "outdoor-grill");
    assert_eq!(path, "/de/shop-de/outdoor-grill");

    let route = resolve(registry, &path);
    assert_eq!(
        (route.locale, route.segment_kind, route.slug.as_str()),
        (Some(de), Some(SegmentKind::Shop), "outdoor-grill")
    );
}

// ==================== Request Flow ====================

#[test]
fn test_product_request_flow() {
    let registry = registry();
    let route = resolve(registry, "/fi/kauppa/leather-bag/");
    assert!(route.is_valid);

    // Catalog provider parameters
    let query = route.catalog_query(registry).expect("detail route");
    assert_eq!(query.to_variables()["country"], "FI");
    assert_eq!(query.to_variables()["catalogLanguage"], "FI");
    assert_eq!(query.handle, "leather-bag");

    // Language switcher
    let switcher: Vec<String> = alternate_paths(registry, &route)
        .into_iter()
        .map(|alt| format!("{}={}", alt.locale, alt.path))
        .collect();
    assert!(switcher.contains(&"sv=/sv/butik/leather-bag".to_string()));
    assert!(switcher.contains(&"fi=/fi/kauppa/leather-bag".to_string()));

    // Navigation labels for the page chrome
    let fi = route.locale.unwrap();
    assert_eq!(MessageCatalog::builtin().translate("nav.shop", fi), "Kauppa");
    assert_eq!(resolve_context(registry, fi).country, query.country);
}

#[test]
fn test_legacy_redirect_targets_resolve() {
    let registry = registry();
    for locale in registry.all_locales() {
        let rules = build_redirects(registry, Some(locale)).expect("Should build");
        for rule in rules.iter().filter(|rule| !rule.source_path.ends_with('*')) {
            let route = resolve(registry, &rule.destination_path);
            assert!(route.is_valid, "{} -> {}", rule.source_path, rule.destination_path);
            assert_eq!(route.locale, Some(locale));
            // legacy sources are never valid localized paths themselves
            assert!(!resolve(registry, &rule.source_path).is_valid);
        }
    }
}

#[test]
fn test_shop_redirect_for_english() {
    let registry = registry();
    let rules = build_redirects(registry, registry.locale("en")).unwrap();
    let shop = rules
        .iter()
        .find(|rule| rule.source_path == "/shop")
        .expect("/shop rule");

    assert_eq!(
        shop.destination_path,
        build_segment_path(registry, registry.default_locale(), SegmentKind::Shop)
    );
    assert_eq!(shop.destination_path, "/en/shop");
    assert!(shop.permanent);
}

// ==================== Export ====================

#[test]
fn test_export_writes_hosting_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = temp_dir.path().join("redirects.json");
    let registry = registry();

    let config = Config::from_lookup(registry, |key| match key {
        "REDIRECTS_FALLBACK_LOCALE" => Some("et".to_string()),
        "REDIRECTS_OUTPUT" => Some(output.display().to_string()),
        _ => None,
    })
    .expect("config");

    for _ in 0..2 {
        let rules = build_redirects(registry, Some(config.fallback_locale)).unwrap();
        let rendered = render_redirects(&rules, config.format).unwrap();
        fs::write(&config.output_path, rendered).unwrap();
    }

    let written = fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed[0]["source"], "/shop");
    assert_eq!(parsed[0]["destination"], "/et/pood");
    assert_eq!(parsed[0]["permanent"], true);
}

#[test]
fn test_netlify_export() {
    let registry = registry();
    let rules = build_redirects(registry, registry.locale("sv")).unwrap();
    let rendered = render_redirects(&rules, RedirectFormat::Netlify).unwrap();

    let first_line = rendered.lines().next().unwrap();
    assert_eq!(first_line, "/shop /sv/butik 301");
    assert_eq!(rendered.lines().count(), rules.len());
}
