//! Route preview binary - shows how the storefront reads a path
//!
//! Usage:
//!   cargo run --bin resolve -- /et/pood/leather-bag
//!   cargo run --bin resolve -- /xx/shop '/en/blog?page=2'
//!
//! Prints one JSON document per path with the resolved route, the catalog
//! query it would trigger, and the same page in every locale.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use storefront_routing::i18n::{resolve_context, CatalogQuery, LocaleContext, LocaleRegistry};
use storefront_routing::paths::{
    alternate_paths, page_from_query, resolve, split_query, AlternatePath, ResolvedRoute,
};
use tracing::{info, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoutePreview<'a> {
    path: &'a str,
    page: u32,
    route: ResolvedRoute,
    context: Option<LocaleContext>,
    catalog_query: Option<CatalogQuery>,
    alternates: Vec<AlternatePath>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resolve=info".parse()?)
                .add_directive("storefront_routing=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("Usage: resolve <path> [<path> ...]");
    }

    let registry = LocaleRegistry::init().context("Locale registry failed validation")?;

    for target in &paths {
        let (path, query) = split_query(target);
        let route = resolve(registry, path);
        if route.is_valid {
            info!("{} -> {:?}", path, route.target());
        } else {
            warn!("{} does not start with a supported locale", path);
        }

        let preview = RoutePreview {
            path,
            page: page_from_query(query),
            context: route.locale.map(|locale| resolve_context(registry, locale)),
            catalog_query: route.catalog_query(registry),
            alternates: alternate_paths(registry, &route),
            route,
        };

        let json = serde_json::to_string_pretty(&preview).context("Failed to serialize preview")?;
        println!("{}", json);
    }

    Ok(())
}
