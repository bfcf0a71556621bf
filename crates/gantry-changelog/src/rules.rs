//! Tag classification rules
//!
//! Decides which tag names count as releases, which belong to older naming
//! conventions and which must be skipped entirely. Format templates bind
//! `$version`/`${version}` to the configured scheme's grammar and
//! `${major}`/`${minor}`/`${patch}` to numeric parts; ignored formats may
//! additionally use `*` as a wildcard. Matching is full-string and
//! case-sensitive. Rules are immutable once built and cheap to share.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};

use gantry_core::config::ChangelogConfig;
use gantry_core::error::{ChangelogError, Result, VersionError};
use gantry_git::Tag;
use gantry_schemes::{Pep440Scheme, VersionComponents, VersionScheme};

/// Immutable tag classification policy
pub struct TagRules {
    scheme: Arc<dyn VersionScheme>,
    merge_prereleases: bool,
    /// Compiled version formats, the current format first, then legacy ones
    version_regexes: Vec<Regex>,
    ignored_regexes: Vec<Regex>,
}

impl TagRules {
    /// Build rules from a configuration, compiling every format once
    pub fn new(scheme: Arc<dyn VersionScheme>, config: &ChangelogConfig) -> Result<Self> {
        let mut version_regexes = Vec::with_capacity(1 + config.legacy_tag_formats.len());
        version_regexes.push(compile_format(scheme.as_ref(), &config.tag_format, false)?);
        for format in &config.legacy_tag_formats {
            version_regexes.push(compile_format(scheme.as_ref(), format, false)?);
        }

        let ignored_regexes = config
            .ignored_tag_formats
            .iter()
            .map(|format| compile_format(scheme.as_ref(), format, true))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            scheme = scheme.name(),
            formats = version_regexes.len(),
            ignored = ignored_regexes.len(),
            merge_prereleases = config.merge_prereleases,
            "compiled tag rules"
        );

        Ok(Self {
            scheme,
            merge_prereleases: config.merge_prereleases,
            version_regexes,
            ignored_regexes,
        })
    }

    /// The scheme these rules classify versions with
    pub fn scheme(&self) -> &dyn VersionScheme {
        self.scheme.as_ref()
    }

    /// Whether prerelease tags fold into their following final release
    pub fn merge_prereleases(&self) -> bool {
        self.merge_prereleases
    }

    /// True when the name matches the current or a legacy version format
    /// and no ignored format claims it. Ignored formats win unconditionally.
    pub fn is_version_tag(&self, name: &str) -> bool {
        !self.is_ignored_tag(name) && self.version_regexes.iter().any(|re| re.is_match(name))
    }

    /// True when any ignored format matches, regardless of version formats
    pub fn is_ignored_tag(&self, name: &str) -> bool {
        self.ignored_regexes.iter().any(|re| re.is_match(name))
    }

    /// Stricter check deciding release boundaries: the name must match the
    /// current tag format (legacy formats do not qualify) and carry a
    /// version that parses under the scheme.
    pub fn include_in_changelog(&self, tag: &Tag) -> bool {
        match capture_version(&self.version_regexes[0], &tag.name) {
            Some(version) => self.scheme.is_valid(&version),
            None => false,
        }
    }

    /// Whether the tag opens a release node of its own
    ///
    /// Identical to [`include_in_changelog`](Self::include_in_changelog)
    /// except that with `merge_prereleases` a prerelease tag opens nothing
    /// and its commits keep accumulating into the following release.
    pub fn opens_release(&self, tag: &Tag) -> bool {
        let Some(version) = capture_version(&self.version_regexes[0], &tag.name) else {
            return false;
        };
        if !self.scheme.is_valid(&version) {
            return false;
        }
        !(self.merge_prereleases && self.scheme.is_prerelease(&version))
    }

    /// Parse the version carried by a tag name, trying the current format
    /// first and legacy formats in their configured order
    pub fn extract_version(&self, name: &str) -> Result<VersionComponents> {
        let version = self
            .version_regexes
            .iter()
            .find_map(|re| capture_version(re, name))
            .ok_or_else(|| VersionError::InvalidFormat(name.to_string()))?;
        self.scheme.parse(&version)
    }

    /// Filter the version tags out of a tag list
    ///
    /// With `warn`, every tag that is neither a version tag nor ignored is
    /// reported once as a diagnostic.
    pub fn get_version_tags<'a>(&self, tags: &'a [Tag], warn: bool) -> Vec<&'a Tag> {
        tags.iter()
            .filter(|tag| {
                let is_version = self.is_version_tag(&tag.name);
                if warn && !is_version && !self.is_ignored_tag(&tag.name) {
                    warn!(
                        tag = %tag.name,
                        "invalid version tag: does not match any configured tag format"
                    );
                }
                is_version
            })
            .collect()
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::new(Arc::new(Pep440Scheme::new()), &ChangelogConfig::default())
            .expect("default tag rules compile")
    }
}

/// Compile a format template into an anchored regex
fn compile_format(scheme: &dyn VersionScheme, template: &str, wildcard: bool) -> Result<Regex> {
    let mut pattern = regex::escape(template);
    if wildcard {
        pattern = pattern.replace(r"\*", ".*");
    }

    let version_group = format!("(?P<version>{})", scheme.pattern());
    pattern = pattern.replace(r"\$\{version\}", &version_group);
    pattern = pattern.replace(r"\$version", &version_group);
    pattern = pattern.replace(r"\$\{major\}", r"(?P<major>\d+)");
    pattern = pattern.replace(r"\$\{minor\}", r"(?P<minor>\d+)");
    pattern = pattern.replace(r"\$\{patch\}", r"(?P<patch>\d+)");

    Regex::new(&format!("^{pattern}$")).map_err(|e| {
        ChangelogError::InvalidTagFormat {
            format: template.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Extract the version text a format regex captured from a tag name
fn capture_version(re: &Regex, name: &str) -> Option<String> {
    let caps = re.captures(name)?;
    if let Some(version) = caps.name("version") {
        return Some(version.as_str().to_string());
    }

    let major = caps.name("major")?.as_str();
    let minor = caps.name("minor").map(|m| m.as_str()).unwrap_or("0");
    let patch = caps.name("patch").map(|m| m.as_str()).unwrap_or("0");
    Some(format!("{major}.{minor}.{patch}"))
}
