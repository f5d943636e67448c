//! Logical content areas that carry a localized URL word.

use serde::Serialize;
use std::fmt;

/// A logical section of the storefront whose first path segment is
/// translated per locale (e.g. `Shop` is `"pood"` in Estonian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Shop,
    Blog,
}

impl SegmentKind {
    /// Every kind, in resolution order. The resolver tries kinds in this
    /// order and the first matching word wins.
    pub const ALL: [SegmentKind; 2] = [SegmentKind::Shop, SegmentKind::Blog];

    /// Stable, locale-independent name used in logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Shop => "shop",
            SegmentKind::Blog => "blog",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
