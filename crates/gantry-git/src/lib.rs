//! Gantry Git - Git history types for changelog generation
//!
//! This crate provides the commit and tag value types handed over by the
//! host's history reader. Reading a repository is the host's job; commits
//! arrive newest-first with their parent hashes, tags newest-first by date.

pub mod types;

pub use types::{Commit, Tag};
