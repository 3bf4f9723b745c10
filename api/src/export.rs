use crate::leaderboard::{rank, LeaderboardEntry};

/// Identifiers with at least `threshold` clicks, in leaderboard order.
pub fn qualifying_identifiers(entries: &[LeaderboardEntry], threshold: u64) -> Vec<String> {
    rank(entries.to_vec())
        .into_iter()
        .filter(|entry| entry.score >= threshold)
        .map(|entry| entry.identifier)
        .collect()
}

/// Renders the qualifying identifiers as a pretty-printed JSON array.
pub fn export(entries: &[LeaderboardEntry], threshold: u64) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&qualifying_identifiers(entries, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let entries = vec![
            LeaderboardEntry::new("A", 200),
            LeaderboardEntry::new("B", 100),
            LeaderboardEntry::new("C", 150),
        ];
        assert_eq!(qualifying_identifiers(&entries, 150), vec!["A", "C"]);
        assert!(qualifying_identifiers(&entries, 500).is_empty());
    }

    #[test]
    fn test_export_orders_by_rank() {
        let entries = vec![
            LeaderboardEntry::new("low", 600),
            LeaderboardEntry::new("high", 900),
        ];
        assert_eq!(
            export(&entries, 500).unwrap(),
            "[\n  \"high\",\n  \"low\"\n]"
        );
        assert_eq!(export(&[], 150).unwrap(), "[]");
    }
}
