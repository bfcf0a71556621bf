//! Transform hooks
//!
//! Hooks run inline during tree generation with no isolation: a hook error
//! aborts the generation that invoked it.

use gantry_core::error::Result;
use gantry_git::{Commit, Tag};

use crate::types::{Change, Release};

/// Trait for per-change transform hooks
///
/// The hook's return replaces the commit's contribution: an empty vector
/// drops it, one element keeps a single change, several fan out.
pub trait MessageHook: Send + Sync {
    /// Transform one parsed change, given its originating commit
    fn transform(&self, change: Change, commit: &Commit) -> Result<Vec<Change>>;
}

impl<F> MessageHook for F
where
    F: Fn(Change, &Commit) -> Result<Vec<Change>> + Send + Sync,
{
    fn transform(&self, change: Change, commit: &Commit) -> Result<Vec<Change>> {
        self(change, commit)
    }
}

/// Trait for per-release transform hooks
///
/// Called once per closed release with the tag that anchored it, or `None`
/// for the unreleased node; the return becomes the final node.
pub trait ReleaseHook: Send + Sync {
    /// Transform one release node
    fn transform(&self, release: Release, tag: Option<&Tag>) -> Result<Release>;
}

impl<F> ReleaseHook for F
where
    F: Fn(Release, Option<&Tag>) -> Result<Release> + Send + Sync,
{
    fn transform(&self, release: Release, tag: Option<&Tag>) -> Result<Release> {
        self(release, tag)
    }
}
