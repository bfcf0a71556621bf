//! Release tree generation

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, instrument};

use gantry_core::config::ChangelogConfig;
use gantry_core::error::Result;
use gantry_git::{Commit, Tag};
use gantry_schemes::SchemeRegistry;

use crate::hooks::{MessageHook, ReleaseHook};
use crate::parser::{
    BreakingChangeMatcher, CommitParser, ConventionalBreakingMatcher, ConventionalParser,
};
use crate::range::get_commit_tag;
use crate::rules::TagRules;
use crate::types::{Change, Release, UNRELEASED};

/// Builds the release tree out of commit and tag history
///
/// Walks the newest-first commit list once, opening a release bucket at
/// every accepted tag and parsing each commit through the configured
/// grammar. The tree is recomputed from scratch on every call.
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    breaking_matcher: Box<dyn BreakingChangeMatcher>,
    rules: TagRules,
    change_type_map: HashMap<String, String>,
    message_hook: Option<Box<dyn MessageHook>>,
    release_hook: Option<Box<dyn ReleaseHook>>,
}

impl ChangelogGenerator {
    /// Create a generator with the conventional grammar and default rules
    pub fn new() -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            breaking_matcher: Box::new(ConventionalBreakingMatcher::new()),
            rules: TagRules::default(),
            change_type_map: HashMap::new(),
            message_hook: None,
            release_hook: None,
        }
    }

    /// Create a generator from a configuration, resolving its version scheme
    pub fn from_config(config: &ChangelogConfig) -> Result<Self> {
        let scheme = SchemeRegistry::new().resolve(&config.version_scheme)?;
        let rules = TagRules::new(scheme, config)?;
        Ok(Self::new()
            .with_rules(rules)
            .with_change_type_map(config.change_type_map.clone()))
    }

    /// Use a custom title grammar
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom body breaking-change matcher
    pub fn with_breaking_matcher<M: BreakingChangeMatcher + 'static>(mut self, matcher: M) -> Self {
        self.breaking_matcher = Box::new(matcher);
        self
    }

    /// Use custom tag rules
    pub fn with_rules(mut self, rules: TagRules) -> Self {
        self.rules = rules;
        self
    }

    /// Rename displayed change type labels
    pub fn with_change_type_map(mut self, map: HashMap<String, String>) -> Self {
        self.change_type_map = map;
        self
    }

    /// Transform every change before it enters the tree
    pub fn with_message_hook<H: MessageHook + 'static>(mut self, hook: H) -> Self {
        self.message_hook = Some(Box::new(hook));
        self
    }

    /// Transform every release before it enters the tree
    pub fn with_release_hook<H: ReleaseHook + 'static>(mut self, hook: H) -> Self {
        self.release_hook = Some(Box::new(hook));
        self
    }

    /// Generate the release tree, newest-first
    ///
    /// Commits and tags must arrive newest-first. Commits above the newest
    /// accepted tag collect into an "Unreleased" node, which is dropped when
    /// it stays empty and at least one tag anchored a release.
    #[instrument(skip(self, commits, tags), fields(commit_count = commits.len(), tag_count = tags.len()))]
    pub fn generate(&self, commits: &[Commit], tags: &[Tag]) -> Result<Vec<Release>> {
        let mut releases = Vec::new();

        let mut open_tag: Option<Tag> = commits
            .first()
            .and_then(|commit| get_commit_tag(commit, tags))
            .filter(|tag| self.rules.opens_release(tag))
            .cloned();
        let (mut version, mut date) = match &open_tag {
            Some(tag) => (tag.name.clone(), tag.date.clone()),
            None => (UNRELEASED.to_string(), String::new()),
        };
        let mut changes: IndexMap<String, Vec<Change>> = IndexMap::new();

        for commit in commits {
            if let Some(tag) = get_commit_tag(commit, tags) {
                let already_open = open_tag.as_ref() == Some(tag);
                if !already_open && self.rules.opens_release(tag) {
                    // An unreleased head that collected nothing is no node
                    if !(version == UNRELEASED && changes.is_empty()) {
                        releases.push(self.finish_release(
                            version,
                            date,
                            std::mem::take(&mut changes),
                            open_tag.as_ref(),
                        )?);
                    }
                    version = tag.name.clone();
                    date = tag.date.clone();
                    changes = IndexMap::new();
                    open_tag = Some(tag.clone());
                }
            }

            let Some(parsed) = self.parser.parse(&commit.message) else {
                continue;
            };

            let mut breaking = parsed.breaking;
            if breaking.is_none() && self.breaking_matcher.matches(&commit.body) {
                breaking = Some("!".to_string());
            }

            let change = Change {
                change_type: parsed.change_type,
                message: parsed.message,
                scope: parsed.scope,
                breaking,
                hash: commit.hash.clone(),
                parents: commit.parents.clone(),
                author: commit.author.clone(),
                author_email: commit.author_email.clone(),
            };

            let contributions = match &self.message_hook {
                Some(hook) => hook.transform(change, commit)?,
                None => vec![change],
            };
            for change in contributions {
                changes
                    .entry(change.change_type.clone())
                    .or_default()
                    .push(change);
            }
        }

        releases.push(self.finish_release(version, date, changes, open_tag.as_ref())?);

        debug!(release_count = releases.len(), "generated release tree");
        Ok(releases)
    }

    fn finish_release(
        &self,
        version: String,
        date: String,
        changes: IndexMap<String, Vec<Change>>,
        tag: Option<&Tag>,
    ) -> Result<Release> {
        let release = Release {
            version,
            date,
            changes: self.relabel_changes(changes),
        };
        match &self.release_hook {
            Some(hook) => hook.transform(release, tag),
            None => Ok(release),
        }
    }

    /// Apply the display label map to bucket keys, merging colliding labels
    fn relabel_changes(&self, changes: IndexMap<String, Vec<Change>>) -> IndexMap<String, Vec<Change>> {
        if self.change_type_map.is_empty() {
            return changes;
        }

        let mut relabeled: IndexMap<String, Vec<Change>> = IndexMap::new();
        for (change_type, bucket) in changes {
            let label = self
                .change_type_map
                .get(&change_type)
                .cloned()
                .unwrap_or(change_type);
            relabeled.entry(label).or_default().extend(bucket);
        }
        relabeled
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new()
    }
}
