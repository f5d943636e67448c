//! Locale-aware routing for the multi-locale storefront.
//!
//! Resolves incoming paths into locale, segment and slug, builds canonical
//! localized links, maps locales to catalog query context, and plans the
//! redirect table for legacy unprefixed URLs.

pub mod config;
pub mod i18n;
pub mod paths;
pub mod redirects;
