//! SemVer version scheme
//!
//! Strict Semantic Versioning 2.0.0, with the conventional leading `v`
//! tolerated and stripped before parsing.

use std::cmp::Ordering;

use gantry_core::error::{Result, VersionError};

use crate::traits::VersionScheme;
use crate::types::VersionComponents;

/// Fragment matching one full SemVer version, kept free of anchors and
/// named groups so tag formats can embed it.
const PATTERN: &str = r"v?\d+\.\d+\.\d+(?:-[0-9A-Za-z]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z]+(?:\.[0-9A-Za-z-]+)*)?";

/// Semantic Versioning scheme
pub struct SemverScheme;

impl SemverScheme {
    /// Create a new SemVer scheme
    pub fn new() -> Self {
        Self
    }

    fn parse_version(version: &str) -> Result<semver::Version> {
        let version = version.strip_prefix('v').unwrap_or(version);
        semver::Version::parse(version)
            .map_err(|e| VersionError::ParseFailed(version.to_string(), e.to_string()).into())
    }
}

impl Default for SemverScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionScheme for SemverScheme {
    fn name(&self) -> &'static str {
        "semver"
    }

    fn pattern(&self) -> &'static str {
        PATTERN
    }

    fn parse(&self, version: &str) -> Result<VersionComponents> {
        let v = Self::parse_version(version)?;

        Ok(VersionComponents {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            prerelease: if v.pre.is_empty() {
                None
            } else {
                Some(v.pre.to_string())
            },
            build: if v.build.is_empty() {
                None
            } else {
                Some(v.build.to_string())
            },
        })
    }

    fn is_prerelease(&self, version: &str) -> bool {
        Self::parse_version(version)
            .map(|v| !v.pre.is_empty())
            .unwrap_or(false)
    }

    fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let va = Self::parse_version(a)?;
        let vb = Self::parse_version(b)?;
        Ok(va.cmp(&vb))
    }
}
