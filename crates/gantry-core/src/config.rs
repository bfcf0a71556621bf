//! Changelog configuration

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Configuration for changelog generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Version scheme used to recognize and order release versions
    pub version_scheme: String,

    /// Tag format template recognizing current release tags
    ///
    /// Supports the `$version`/`${version}` placeholder as well as
    /// `${major}`, `${minor}` and `${patch}` part placeholders.
    pub tag_format: String,

    /// Older tag format templates still present in the history
    pub legacy_tag_formats: Vec<String>,

    /// Patterns for tags that must never be treated as releases
    ///
    /// Same placeholders as `tag_format`, plus `*` as a wildcard.
    pub ignored_tag_formats: Vec<String>,

    /// Fold prerelease tags into their following final release
    pub merge_prereleases: bool,

    /// Priority order for change type buckets within a release
    pub change_type_order: Vec<String>,

    /// Display labels for change type buckets
    pub change_type_map: HashMap<String, String>,

    /// Template name overriding the bundled default
    pub template: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            version_scheme: "pep440".to_string(),
            tag_format: "$version".to_string(),
            legacy_tag_formats: Vec::new(),
            ignored_tag_formats: Vec::new(),
            merge_prereleases: false,
            change_type_order: Vec::new(),
            change_type_map: HashMap::new(),
            template: None,
        }
    }
}

impl ChangelogConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        debug!(scheme = %config.version_scheme, tag_format = %config.tag_format, "loaded changelog config");
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the tag format
    pub fn with_tag_format(mut self, format: impl Into<String>) -> Self {
        self.tag_format = format.into();
        self
    }

    /// Set the legacy tag formats
    pub fn with_legacy_tag_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legacy_tag_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ignored tag formats
    pub fn with_ignored_tag_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_tag_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable prerelease merging
    pub fn with_merge_prereleases(mut self, merge: bool) -> Self {
        self.merge_prereleases = merge;
        self
    }
}
