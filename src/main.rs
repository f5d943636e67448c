use anyhow::{Context, Result};
use std::fs;
use storefront_routing::config::Config;
use storefront_routing::i18n::LocaleRegistry;
use storefront_routing::redirects::{build_redirects, render_redirects};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored in CI builds)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_routing=info".parse()?),
        )
        .init();

    info!("Exporting redirect table");

    // A broken locale table must stop the build here
    let registry = LocaleRegistry::init().context("Locale registry failed validation")?;
    let config = Config::from_env()?;

    let rules = build_redirects(registry, Some(config.fallback_locale))
        .context("Redirect table is invalid")?;
    let rendered =
        render_redirects(&rules, config.format).context("Failed to serialize redirects")?;

    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&config.output_path, rendered)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        "✓ Wrote {} redirects to {}",
        rules.len(),
        config.output_path.display()
    );
    Ok(())
}
