//! PEP 440 style version scheme
//!
//! The loose grammar used by Python tooling: optional `v` prefix, a release
//! segment of one or more numbers, pre-release phases written with or
//! without separators (`1.0.0b2`, `1.0.0-rc.1`), dev releases and a local
//! segment. This is the default scheme because real tag histories are full
//! of such spellings.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use gantry_core::error::{Result, VersionError};

use crate::traits::VersionScheme;
use crate::types::VersionComponents;

/// Fragment matching one full PEP 440 style version, kept free of anchors
/// and named groups so tag formats can embed it.
const PATTERN: &str = r"v?\d+(?:\.\d+)*(?:[-_.]?(?:alpha|beta|preview|pre|rc|a|b|c)[-_.]?\d*)?(?:[-_.]?dev[-_.]?\d*)?(?:\+[0-9a-z]+(?:[-_.][0-9a-z]+)*)?";

static PARSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(?P<release>\d+(?:\.\d+)*)(?:[-_.]?(?P<phase>alpha|beta|preview|pre|rc|a|b|c)[-_.]?(?P<pre>\d*))?(?:[-_.]?dev[-_.]?(?P<dev>\d*))?(?:\+(?P<local>[0-9a-z]+(?:[-_.][0-9a-z]+)*))?$",
    )
    .expect("Invalid regex")
});

/// Pre-release phases, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Alpha,
    Beta,
    Rc,
}

impl Phase {
    fn from_marker(marker: &str) -> Self {
        match marker {
            "a" | "alpha" => Self::Alpha,
            "b" | "beta" => Self::Beta,
            _ => Self::Rc,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::Rc => "rc",
        }
    }
}

/// A fully parsed PEP 440 style version
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pep440Version {
    release: Vec<u64>,
    pre: Option<(Phase, u64)>,
    dev: Option<u64>,
    local: Option<String>,
}

impl Pep440Version {
    fn release_part(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    /// Rank of the segment between release numbers and a possible final:
    /// dev-only versions sort below pre-releases, pre-releases below finals.
    fn segment_rank(&self) -> (u8, Option<(Phase, u64)>) {
        match (&self.pre, &self.dev) {
            (Some(pre), _) => (1, Some(*pre)),
            (None, Some(_)) => (0, None),
            (None, None) => (2, None),
        }
    }
}

impl PartialOrd for Pep440Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pep440Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let parts = self.release.len().max(other.release.len());
        for index in 0..parts {
            match self.release_part(index).cmp(&other.release_part(index)) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        match self.segment_rank().cmp(&other.segment_rank()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        // Within the same segment, x.devN sorts before x
        let dev_rank = |dev: &Option<u64>| match dev {
            Some(n) => (0u8, *n),
            None => (1, 0),
        };
        match dev_rank(&self.dev).cmp(&dev_rank(&other.dev)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        self.local.cmp(&other.local)
    }
}

/// PEP 440 style scheme
pub struct Pep440Scheme;

impl Pep440Scheme {
    /// Create a new PEP 440 scheme
    pub fn new() -> Self {
        Self
    }

    fn parse_version(version: &str) -> Result<Pep440Version> {
        let caps = PARSE_REGEX.captures(version).ok_or_else(|| {
            VersionError::ParseFailed(
                version.to_string(),
                "does not match the PEP 440 grammar".to_string(),
            )
        })?;

        let release = caps["release"]
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|e| {
                    VersionError::ParseFailed(version.to_string(), e.to_string()).into()
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let pre = caps.name("phase").map(|phase| {
            let number = caps
                .name("pre")
                .map(|n| n.as_str().parse::<u64>().unwrap_or(0))
                .unwrap_or(0);
            (Phase::from_marker(phase.as_str()), number)
        });

        let dev = caps
            .name("dev")
            .map(|n| n.as_str().parse::<u64>().unwrap_or(0));

        let local = caps.name("local").map(|m| m.as_str().to_string());

        Ok(Pep440Version {
            release,
            pre,
            dev,
            local,
        })
    }
}

impl Default for Pep440Scheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionScheme for Pep440Scheme {
    fn name(&self) -> &'static str {
        "pep440"
    }

    fn pattern(&self) -> &'static str {
        PATTERN
    }

    fn parse(&self, version: &str) -> Result<VersionComponents> {
        let parsed = Self::parse_version(version)?;

        let prerelease = match (&parsed.pre, &parsed.dev) {
            (Some((phase, n)), Some(dev)) => Some(format!("{}{}.dev{}", phase.as_str(), n, dev)),
            (Some((phase, n)), None) => Some(format!("{}{}", phase.as_str(), n)),
            (None, Some(dev)) => Some(format!("dev{}", dev)),
            (None, None) => None,
        };

        Ok(VersionComponents {
            major: parsed.release_part(0),
            minor: parsed.release_part(1),
            patch: parsed.release_part(2),
            prerelease,
            build: parsed.local,
        })
    }

    fn is_prerelease(&self, version: &str) -> bool {
        Self::parse_version(version)
            .map(|parsed| parsed.pre.is_some() || parsed.dev.is_some())
            .unwrap_or(false)
    }

    fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let va = Self::parse_version(a)?;
        let vb = Self::parse_version(b)?;
        Ok(va.cmp(&vb))
    }
}
