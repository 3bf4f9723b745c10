use std::cell::{Cell, RefCell};

use clicker_api::prelude::*;

/// In-memory game cluster.
struct MockClient {
    games: RefCell<Vec<LeaderboardEntry>>,
    airdrops: Cell<u32>,
    fail_polls: Cell<bool>,
    reject_clicks: Cell<bool>,
}

impl MockClient {
    fn new(rows: &[(&str, u64)]) -> Self {
        Self {
            games: RefCell::new(
                rows.iter()
                    .map(|(id, score)| LeaderboardEntry::new(*id, *score))
                    .collect(),
            ),
            airdrops: Cell::new(0),
            fail_polls: Cell::new(false),
            reject_clicks: Cell::new(false),
        }
    }
}

impl GameClient for MockClient {
    async fn current_game(&self, identity: &str) -> Result<GameState, ClientError> {
        if self.fail_polls.get() {
            return Err(ClientError::Rpc("node unavailable".to_string()));
        }
        let mut games = self.games.borrow_mut();
        match games.iter().find(|e| e.identifier == identity) {
            Some(entry) => Ok(GameState {
                is_ready: true,
                clicks: entry.score,
                game_account: format!("game-{}", identity),
                error_message: None,
            }),
            None => {
                games.push(LeaderboardEntry::new(identity, 0));
                Ok(GameState::default())
            }
        }
    }

    async fn save_click(&self, identity: &str, game_account: &str) -> Result<String, ClientError> {
        if self.reject_clicks.get() {
            return Err(ClientError::Wallet("User rejected the request.".to_string()));
        }
        assert_eq!(game_account, format!("game-{}", identity));
        let mut games = self.games.borrow_mut();
        let entry = games
            .iter_mut()
            .find(|e| e.identifier == identity)
            .ok_or_else(|| ClientError::AccountNotFound(game_account.to_string()))?;
        entry.score += 1;
        Ok(format!("sig-{}", entry.score))
    }

    async fn airdrop(&self, _identity: &str) -> Result<String, ClientError> {
        self.airdrops.set(self.airdrops.get() + 1);
        Err(ClientError::Rpc("airdrop limit reached".to_string()))
    }

    async fn leaderboard(&self, _identity: &str) -> Result<Vec<LeaderboardEntry>, ClientError> {
        Ok(rank(self.games.borrow().clone()))
    }
}

async fn poll(client: &MockClient, session: &mut Session, identity: &str) {
    let result = client.current_game(identity).await;
    session.apply_poll(identity, result);
}

async fn click(client: &MockClient, session: &mut Session) {
    if let Some(ticket) = session.begin_click() {
        let result = client.save_click(&ticket.identity, &ticket.game_account).await;
        session.apply_click(&ticket.identity, result);
    }
}

#[tokio::test]
async fn test_new_player_session() {
    let client = MockClient::new(&[("A", 100), ("B", 200)]);
    let mut session = Session::default();
    let mut view = LeaderboardView::default();

    session.connect("C");
    fund_best_effort(&client, "C").await;
    assert_eq!(client.airdrops.get(), 1);
    assert_eq!(session.message(), None, "airdrop failures are not surfaced");

    view.replace_snapshot(client.leaderboard("C").await.unwrap().into());

    // First poll creates the account; not ready yet.
    poll(&client, &mut session, "C").await;
    assert_eq!(session.phase(), SessionPhase::Connecting);
    click(&client, &mut session).await;
    assert_eq!(session.clicks(), 0);

    poll(&client, &mut session, "C").await;
    assert_eq!(session.phase(), SessionPhase::Ready);

    view.set_live("C", session.clicks());
    let ids: Vec<_> = view.entries().into_iter().map(|e| e.identifier).collect();
    assert_eq!(ids, vec!["B", "A"], "zero-score player stays invisible");

    click(&client, &mut session).await;
    click(&client, &mut session).await;
    assert_eq!(session.clicks(), 2);

    view.set_live("C", session.clicks());
    let rows = view.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].entry, LeaderboardEntry::new("C", 2));
    assert!(rows[2].is_player);
}

#[tokio::test]
async fn test_errors_recover_on_next_poll() {
    let client = MockClient::new(&[("A", 10)]);
    let mut session = Session::default();
    session.connect("A");
    poll(&client, &mut session, "A").await;
    assert!(session.can_click());

    client.reject_clicks.set(true);
    click(&client, &mut session).await;
    assert_eq!(session.clicks(), 10);
    assert_eq!(
        session.message(),
        Some("Wallet error: User rejected the request.")
    );

    client.fail_polls.set(true);
    poll(&client, &mut session, "A").await;
    assert_eq!(session.phase(), SessionPhase::Error);
    click(&client, &mut session).await;

    client.fail_polls.set(false);
    client.reject_clicks.set(false);
    poll(&client, &mut session, "A").await;
    assert_eq!(session.phase(), SessionPhase::Ready);
    click(&client, &mut session).await;
    assert_eq!(session.clicks(), 11);

    poll(&client, &mut session, "A").await;
    assert_eq!(session.clicks(), 11);
    assert_eq!(session.counter().pending(), 0);
}

#[tokio::test]
async fn test_export_of_fetched_leaderboard() {
    let client = MockClient::new(&[("B", 100), ("A", 200), ("C", 150)]);
    let mut view = LeaderboardView::default();
    view.replace_snapshot(client.leaderboard("A").await.unwrap().into());

    let variant = Variant::odyssey();
    assert_eq!(
        qualifying_identifiers(view.snapshot().entries(), variant.export_threshold),
        vec!["A", "C"]
    );
}

#[tokio::test]
async fn test_teardown_discards_late_poll() {
    let client = MockClient::new(&[("A", 10)]);
    let mut session = Session::default();
    session.connect("A");

    let lifetime = Lifetime::new();
    lifetime.end();
    if let Some(result) = lifetime.guard(client.current_game("A")).await {
        session.apply_poll("A", result);
    }
    assert_eq!(session.phase(), SessionPhase::Connecting);
}
