//! Change type ordering

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use gantry_core::error::{ConfigError, Result};

use crate::types::Release;

/// Reorder every release's change buckets by a priority list
///
/// Listed change types come first in the given order; buckets the list does
/// not mention keep their original relative order behind them. The input
/// tree is left untouched. A duplicate entry in the priority list is a
/// configuration error, raised before any reordering happens — an empty
/// tree with a duplicated list still fails.
pub fn reorder_change_types(tree: &[Release], change_type_order: &[String]) -> Result<Vec<Release>> {
    let mut seen = HashSet::new();
    for change_type in change_type_order {
        if !seen.insert(change_type.as_str()) {
            return Err(ConfigError::DuplicateChangeTypes {
                change_type: change_type.clone(),
            }
            .into());
        }
    }

    debug!(
        release_count = tree.len(),
        priority_types = change_type_order.len(),
        "reordering change type buckets"
    );

    Ok(tree
        .iter()
        .map(|release| {
            let mut changes = IndexMap::with_capacity(release.changes.len());
            for change_type in change_type_order {
                if let Some(bucket) = release.changes.get(change_type) {
                    changes.insert(change_type.clone(), bucket.clone());
                }
            }
            for (change_type, bucket) in &release.changes {
                if !changes.contains_key(change_type) {
                    changes.insert(change_type.clone(), bucket.clone());
                }
            }

            Release {
                version: release.version.clone(),
                date: release.date.clone(),
                changes,
            }
        })
        .collect())
}
