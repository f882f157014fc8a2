//! Comparison of the remote and local mod sets

use std::collections::HashSet;

use super::LATEST_LIMIT;
use super::lister::ModTimestamp;

/// One remote mod and whether the local folder has it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub name: String,
    pub present_locally: bool,
}

/// The three views derived from a remote and a local listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Every remote mod, lexicographic order
    pub comparison: Vec<ComparisonRow>,
    /// Local mods the server does not have, sorted
    pub exceed: Vec<String>,
    /// Newest remote mods, at most [`LATEST_LIMIT`]
    pub latest: Vec<ModTimestamp>,
}

impl Reconciliation {
    pub fn comparison_names(&self) -> Vec<String> {
        self.comparison.iter().map(|row| row.name.clone()).collect()
    }

    pub fn latest_names(&self) -> Vec<String> {
        self.latest.iter().map(|m| m.name.clone()).collect()
    }

    pub fn missing_count(&self) -> usize {
        self.comparison.iter().filter(|row| !row.present_locally).count()
    }
}

/// Build all views. `remote` must already be sorted newest first.
pub fn reconcile(remote: &[ModTimestamp], local: &[String]) -> Reconciliation {
    let local_set: HashSet<&str> = local.iter().map(String::as_str).collect();
    let remote_set: HashSet<&str> = remote.iter().map(|m| m.name.as_str()).collect();

    let mut comparison: Vec<ComparisonRow> = remote
        .iter()
        .map(|m| ComparisonRow {
            name: m.name.clone(),
            present_locally: local_set.contains(m.name.as_str()),
        })
        .collect();
    comparison.sort_by(|a, b| a.name.cmp(&b.name));

    let mut exceed: Vec<String> = local
        .iter()
        .filter(|name| !remote_set.contains(name.as_str()))
        .cloned()
        .collect();
    exceed.sort();

    let latest = remote.iter().take(LATEST_LIMIT).cloned().collect();

    Reconciliation {
        comparison,
        exceed,
        latest,
    }
}
