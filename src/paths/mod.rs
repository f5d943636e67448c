//! Locale-aware URL paths.
//!
//! - `resolver`: incoming path to [`ResolvedRoute`]
//! - `builder`: locale and target to canonical path (the inverse of `resolver`)

mod builder;
mod resolver;

pub use builder::{
    alternate_paths, build_detail_path, build_home_path, build_page_path,
    build_paged_segment_path, build_segment_path, build_target_path, AlternatePath, RouteTarget,
};
pub use resolver::{page_from_query, resolve, split_query, ResolvedRoute};
