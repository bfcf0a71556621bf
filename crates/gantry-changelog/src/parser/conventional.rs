//! Conventional Commits grammar
//!
//! Parses the changelog-relevant subset of the Conventional Commits
//! specification: https://www.conventionalcommits.org/
//!
//! Only change types with a place in the changelog parse (`feat`, `fix`,
//! `refactor`, `perf` and an explicit `BREAKING CHANGE`); everything else is
//! a parse miss and stays out of the tree.

use regex::Regex;
use std::sync::LazyLock;

use super::{BreakingChangeMatcher, CommitParser, ParsedMessage};

/// Regex for parsing conventional commit titles
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>feat|fix|refactor|perf|BREAKING CHANGE)(?:\((?P<scope>[^()\r\n]*)\)|\()?(?P<breaking>!)?:\s(?P<message>.*)?$",
    )
    .expect("Invalid regex")
});

/// Regex for body-declared breaking changes
static BREAKING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^BREAKING[- ]CHANGE:").expect("Invalid regex"));

/// Bundled changelog template for this grammar
pub const DEFAULT_TEMPLATE: &str = r#"{% for release in tree %}
## {{ release.version }}{% if release.date %} ({{ release.date }}){% endif %}
{% for change_type, changes in release.changes|items %}
### {{ change_type }}

{% for change in changes %}{% if change.scope %}- **{{ change.scope }}**: {{ change.message }}
{% elif change.message %}- {{ change.message }}
{% endif %}{% endfor %}
{% endfor %}
{% endfor %}"#;

/// Parser for Conventional Commits titles
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, title: &str) -> Option<ParsedMessage> {
        let caps = TITLE_REGEX.captures(title)?;

        let scope = caps
            .name("scope")
            .map(|m| m.as_str().to_string())
            .filter(|scope| !scope.is_empty());

        Some(ParsedMessage {
            change_type: caps["type"].to_string(),
            scope,
            breaking: caps.name("breaking").map(|m| m.as_str().to_string()),
            message: caps
                .name("message")
                .map(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Detector for `BREAKING CHANGE:` declarations in commit bodies
pub struct ConventionalBreakingMatcher;

impl ConventionalBreakingMatcher {
    /// Create a new matcher
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalBreakingMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakingChangeMatcher for ConventionalBreakingMatcher {
    fn matches(&self, body: &str) -> bool {
        BREAKING_REGEX.is_match(body)
    }
}
