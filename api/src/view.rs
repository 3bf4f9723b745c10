use crate::consts::PAGE_STEP;
use crate::export;
use crate::leaderboard::{filter, paginate, rank, reconcile, LeaderboardEntry, LeaderboardSnapshot};

/// The connected player's authoritative score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveScore {
    /// Empty while no wallet is connected.
    pub identifier: String,
    pub score: u64,
}

/// Session-local view parameters of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub live: LiveScore,

    /// Text typed in the search box, applied only by [`LeaderboardView::search`].
    pub search_input: String,

    /// Applied search. `Some("")` shows the raw snapshot.
    search: Option<String>,

    page_size: usize,
    page_step: usize,
}

impl ViewState {
    pub fn new(page_step: usize) -> Self {
        Self {
            live: LiveScore::default(),
            search_input: String::new(),
            search: None,
            page_size: page_step,
            page_step,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn applied_search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PAGE_STEP)
    }
}

/// A displayed leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based position in the displayed list.
    pub rank: usize,
    pub entry: LeaderboardEntry,
    /// Whether the row belongs to the connected player.
    pub is_player: bool,
}

/// Snapshot plus view state; derives the rows to render.
///
/// Rows come from one of two paths. By default the live score is merged into the snapshot, ranked
/// and paginated. After [`search`](Self::search) the raw snapshot is filtered and paginated
/// without the live-score overlay. A new live score, a new snapshot or a load-more returns to the
/// merged path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardView {
    snapshot: LeaderboardSnapshot,
    state: ViewState,
}

impl LeaderboardView {
    pub fn new(page_step: usize) -> Self {
        Self {
            snapshot: LeaderboardSnapshot::default(),
            state: ViewState::new(page_step),
        }
    }

    pub fn snapshot(&self) -> &LeaderboardSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn replace_snapshot(&mut self, snapshot: LeaderboardSnapshot) {
        self.snapshot = snapshot;
        self.state.search = None;
    }

    /// Records the player's live score. Returns false when nothing changed.
    pub fn set_live(&mut self, identifier: &str, score: u64) -> bool {
        let live = &self.state.live;
        if live.identifier == identifier && live.score == score {
            return false;
        }
        self.state.live = LiveScore {
            identifier: identifier.to_string(),
            score,
        };
        self.state.search = None;
        true
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.state.search_input = text.into();
    }

    /// Applies the current search input.
    pub fn search(&mut self) {
        self.state.search = Some(self.state.search_input.clone());
    }

    pub fn load_more(&mut self) {
        self.state.page_size = self.state.page_size.saturating_add(self.state.page_step);
        self.state.search = None;
    }

    /// Whether the current path has rows beyond the page, including an appended live player.
    pub fn can_load_more(&self) -> bool {
        self.unpaginated().len() > self.state.page_size
    }

    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        paginate(&self.unpaginated(), self.state.page_size)
    }

    fn unpaginated(&self) -> Vec<LeaderboardEntry> {
        match &self.state.search {
            Some(substring) => filter(self.snapshot.entries(), substring),
            None => {
                let live = &self.state.live;
                rank(reconcile(self.snapshot.entries(), live.score, &live.identifier))
            }
        }
    }

    pub fn rows(&self) -> Vec<LeaderboardRow> {
        let player = &self.state.live.identifier;
        self.entries()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardRow {
                rank: i + 1,
                is_player: !player.is_empty() && entry.identifier == *player,
                entry,
            })
            .collect()
    }

    /// Exports the snapshot's identifiers scoring at least `threshold`.
    pub fn export(&self, threshold: u64) -> Result<String, serde_json::Error> {
        export::export(self.snapshot.entries(), threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rows: &[(&str, u64)]) -> LeaderboardSnapshot {
        rows.iter()
            .map(|(id, score)| LeaderboardEntry::new(*id, *score))
            .collect::<Vec<_>>()
            .into()
    }

    fn ids(view: &LeaderboardView) -> Vec<String> {
        view.entries().into_iter().map(|e| e.identifier).collect()
    }

    #[test]
    fn test_page_size_grows_by_step() {
        let mut view = LeaderboardView::default();
        assert_eq!(view.state().page_size(), 10);
        view.load_more();
        view.load_more();
        assert_eq!(view.state().page_size(), 30);
    }

    #[test]
    fn test_merged_rows_mark_player() {
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&[("A", 100), ("B", 200)]));
        assert!(view.set_live("A", 150));

        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entry, LeaderboardEntry::new("B", 200));
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].entry.score, 150);
        assert!(rows[1].is_player);
        assert!(!rows[0].is_player);
    }

    #[test]
    fn test_pagination_and_load_more() {
        let rows: Vec<(String, u64)> = (0..25).map(|i| (format!("p{i}"), i as u64)).collect();
        let rows: Vec<(&str, u64)> = rows.iter().map(|(id, s)| (id.as_str(), *s)).collect();
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&rows));

        assert_eq!(view.entries().len(), 10);
        assert_eq!(view.entries()[0].identifier, "p24");
        assert!(view.can_load_more());
        view.load_more();
        assert_eq!(view.entries().len(), 20);
        view.load_more();
        assert_eq!(view.entries().len(), 25);
        assert!(!view.can_load_more());
    }

    #[test]
    fn test_search_is_paginated() {
        let rows: Vec<(String, u64)> = (0..25).map(|i| (format!("p{i}"), i as u64)).collect();
        let rows: Vec<(&str, u64)> = rows.iter().map(|(id, s)| (id.as_str(), *s)).collect();
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&rows));

        view.set_search_input("p");
        view.search();
        assert_eq!(view.entries().len(), 10);
        assert_eq!(view.entries()[0].identifier, "p0", "search keeps snapshot order");
        assert!(view.can_load_more());

        view.load_more();
        assert_eq!(view.state().applied_search(), None);
        assert_eq!(view.entries().len(), 20);
        assert_eq!(view.entries()[0].identifier, "p24");
    }

    #[test]
    fn test_load_more_reaches_appended_player() {
        let rows: Vec<(String, u64)> = (0..10).map(|i| (format!("p{i}"), 100 + i as u64)).collect();
        let rows: Vec<(&str, u64)> = rows.iter().map(|(id, s)| (id.as_str(), *s)).collect();
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&rows));
        view.set_live("me", 1);

        assert_eq!(view.rows().len(), 10);
        assert!(view.rows().iter().all(|row| !row.is_player));
        assert!(view.can_load_more());

        view.load_more();
        let rows = view.rows();
        assert_eq!(rows.len(), 11);
        assert!(rows[10].is_player);
        assert_eq!(rows[10].rank, 11);
        assert!(!view.can_load_more());
    }

    #[test]
    fn test_search_bypasses_live_score() {
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&[("Alice", 100), ("Bob", 200), ("Alfred", 50)]));
        view.set_live("Alice", 300);
        assert_eq!(view.entries()[0], LeaderboardEntry::new("Alice", 300));

        view.set_search_input("Al");
        assert_eq!(view.entries()[0].score, 300, "typing alone does not search");
        view.search();
        assert_eq!(view.state().applied_search(), Some("Al"));
        assert_eq!(
            view.entries(),
            vec![
                LeaderboardEntry::new("Alice", 100),
                LeaderboardEntry::new("Alfred", 50)
            ]
        );
    }

    #[test]
    fn test_empty_search_shows_raw_snapshot() {
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&[("A", 1), ("B", 2)]));
        view.set_live("C", 5);
        view.search();
        assert_eq!(ids(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_live_change_returns_to_merged() {
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&[("A", 1), ("B", 2)]));
        view.set_live("A", 3);
        view.set_search_input("B");
        view.search();
        assert_eq!(ids(&view), vec!["B"]);

        assert!(!view.set_live("A", 3));
        assert_eq!(ids(&view), vec!["B"], "unchanged score keeps the search");

        assert!(view.set_live("A", 4));
        assert_eq!(ids(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_export_uses_snapshot() {
        let mut view = LeaderboardView::default();
        view.replace_snapshot(snapshot(&[("A", 200), ("B", 100), ("C", 150)]));
        view.set_live("B", 1_000);
        assert_eq!(view.export(150).unwrap(), "[\n  \"A\",\n  \"C\"\n]");
    }
}
