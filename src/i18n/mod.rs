//! Internationalization (i18n) module for the localized storefront.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, their path words
//!   and market settings
//! - `locale`: Type-safe `Locale` handle validated against the registry
//! - `segment`: Logical content areas (`Shop`, `Blog`) with localized path words
//! - `context`: Locale to (country, catalog language) mapping for catalog queries
//! - `validator`: Startup validation of the locale table
//! - `messages`: Dotted-key UI message lookup with fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_routing::i18n::{LocaleRegistry, SegmentKind};
//!
//! let registry = LocaleRegistry::init()?;
//! let et = registry.locale("et").unwrap();
//! assert_eq!(registry.localized_segment(SegmentKind::Shop, et), "pood");
//! ```

mod context;
mod locale;
mod messages;
mod registry;
mod segment;
mod validator;

pub use context::{resolve_context, CatalogQuery, LocaleContext};
pub use locale::Locale;
pub use messages::MessageCatalog;
pub use registry::{LocaleConfig, LocaleRegistry, RegistryError};
pub use segment::SegmentKind;
pub use validator::{validate_locales, ValidationReport};
