//! Commit/tag matching and tag range selection

use gantry_git::{Commit, Tag};

/// Find the tag pointing at a commit
///
/// Returns the first tag in supplied order whose target equals the commit's
/// hash; duplicate targets resolve to the earliest entry.
pub fn get_commit_tag<'a>(commit: &Commit, tags: &'a [Tag]) -> Option<&'a Tag> {
    tags.iter().find(|tag| tag.commit_hash == commit.hash)
}

/// Select the tag window between two tag names, inclusive
///
/// `tags` is newest-first; `newest` names the upper end of the window and
/// `oldest` the lower end (defaulting to `newest` for a single-tag window).
/// The result carries one extra tag older than the window when one exists,
/// since diffing a release needs its predecessor as the base.
pub fn get_smart_tag_range<'a>(
    tags: &'a [Tag],
    newest: &str,
    oldest: Option<&str>,
) -> Vec<&'a Tag> {
    let oldest = oldest.unwrap_or(newest);
    let mut range = Vec::new();
    let mut keep = false;

    for (index, tag) in tags.iter().enumerate() {
        if tag.name == newest {
            keep = true;
        }
        if keep {
            range.push(tag);
            if tag.name == oldest {
                if let Some(predecessor) = tags.get(index + 1) {
                    range.push(predecessor);
                }
                break;
            }
        }
    }

    range
}
