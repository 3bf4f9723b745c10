use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One player's row on the leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Base58 wallet address of the player.
    pub identifier: String,

    /// Total clicks attributed to the player.
    pub score: u64,
}

impl LeaderboardEntry {
    pub fn new(identifier: impl Into<String>, score: u64) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }
}

/// Leaderboard data as fetched from the cluster, held until the identity or endpoint changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardSnapshot {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    /// Builds a snapshot, keeping only the first entry of each identifier.
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.identifier.clone()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LeaderboardEntry>> for LeaderboardSnapshot {
    fn from(entries: Vec<LeaderboardEntry>) -> Self {
        Self::new(entries)
    }
}

/// Overlays the connected player's live score on a snapshot.
///
/// The player's stale entry takes the live score. A player missing from the snapshot is appended,
/// unless the identifier is empty or the score is zero: zero-score players are never synthesized,
/// and a zero live score means no poll has landed yet, so the snapshot is returned untouched.
/// Output order is snapshot order with the appended player last.
pub fn reconcile(
    snapshot: &[LeaderboardEntry],
    live_score: u64,
    identifier: &str,
) -> Vec<LeaderboardEntry> {
    if identifier.is_empty() || live_score == 0 {
        return snapshot.to_vec();
    }

    let mut found = false;
    let mut merged: Vec<LeaderboardEntry> = snapshot
        .iter()
        .map(|entry| {
            if entry.identifier == identifier {
                found = true;
                LeaderboardEntry::new(identifier, live_score)
            } else {
                entry.clone()
            }
        })
        .collect();

    if !found {
        merged.push(LeaderboardEntry::new(identifier, live_score));
    }

    merged
}

/// Sorts by score descending. Ties keep their input order.
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

pub fn paginate(entries: &[LeaderboardEntry], page_size: usize) -> Vec<LeaderboardEntry> {
    entries.iter().take(page_size).cloned().collect()
}

/// Case-sensitive substring search on identifiers. An empty substring matches everything.
pub fn filter(entries: &[LeaderboardEntry], substring: &str) -> Vec<LeaderboardEntry> {
    if substring.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| entry.identifier.contains(substring))
        .cloned()
        .collect()
}
