//! Version scheme traits

use std::cmp::Ordering;

use gantry_core::error::Result;

use crate::types::VersionComponents;

/// Trait for version schemes
///
/// A scheme defines which strings count as versions, how they decompose and
/// how they order. Tag classification embeds `pattern()` into tag format
/// templates, so the fragment must match one full version string without
/// anchors or named capture groups.
pub trait VersionScheme: Send + Sync {
    /// Get the name of this scheme
    fn name(&self) -> &'static str;

    /// Regex fragment matching a single version string under this scheme
    fn pattern(&self) -> &'static str;

    /// Parse a version string into components
    fn parse(&self, version: &str) -> Result<VersionComponents>;

    /// Whether the version orders before its final release (e.g. beta, rc)
    fn is_prerelease(&self, version: &str) -> bool;

    /// Compare two versions under this scheme's ordering
    fn compare(&self, a: &str, b: &str) -> Result<Ordering>;

    /// Check if a version string is valid for this scheme
    fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }
}
