//! Gantry Changelog - Changelog generation from commit and tag history
//!
//! This crate turns an ordered commit history and its release tags into a
//! structured release tree and renders it to text. Commit grammars, version
//! schemes, transform hooks and templates are all pluggable capabilities;
//! the built-in defaults follow the conventional-commit changelog layout.

pub mod generator;
pub mod hooks;
pub mod order;
pub mod parser;
pub mod range;
pub mod render;
pub mod rules;
pub mod types;

pub use generator::ChangelogGenerator;
pub use hooks::{MessageHook, ReleaseHook};
pub use order::reorder_change_types;
pub use parser::{
    BreakingChangeMatcher, CommitParser, ConventionalBreakingMatcher, ConventionalParser,
    ParsedMessage,
};
pub use range::{get_commit_tag, get_smart_tag_range};
pub use render::{ChangelogRenderer, DirLoader, TemplateLoader, DEFAULT_TEMPLATE_NAME};
pub use rules::TagRules;
pub use types::{Change, Release, UNRELEASED};
