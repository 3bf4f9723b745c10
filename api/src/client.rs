use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::leaderboard::LeaderboardEntry;

/// A player's game as reported by the cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// False until the player's game account exists.
    pub is_ready: bool,
    pub clicks: u64,
    /// Address of the game account, empty when unknown.
    pub game_account: String,
    pub error_message: Option<String>,
}

/// Access to the on-chain game on behalf of a wallet identity.
///
/// Implementations own the endpoint they talk to.
#[allow(async_fn_in_trait)]
pub trait GameClient {
    async fn current_game(&self, identity: &str) -> Result<GameState, ClientError>;

    /// Submits one click. Returns the transaction signature.
    async fn save_click(&self, identity: &str, game_account: &str) -> Result<String, ClientError>;

    /// Requests test funds for the identity. Returns the transaction signature.
    async fn airdrop(&self, identity: &str) -> Result<String, ClientError>;

    async fn leaderboard(&self, identity: &str) -> Result<Vec<LeaderboardEntry>, ClientError>;
}

/// Requests test funds, logging instead of returning any failure.
pub async fn fund_best_effort<C: GameClient>(client: &C, identity: &str) {
    if identity.is_empty() {
        return;
    }
    match client.airdrop(identity).await {
        Ok(signature) => tracing::info!("Airdropped test SOL to {}: {}", identity, signature),
        Err(e) => tracing::warn!("Unable to airdrop 1 test SOL due to {}", e),
    }
}

/// Players whose `Initialize` has been sent, counting the polls that still found no account.
///
/// A signature from the wallet does not mean the transaction landed, so a player still without an
/// account after [`RETRY_AFTER_POLLS`](Self::RETRY_AFTER_POLLS) polls is sent `Initialize` again.
#[derive(Clone, Debug, Default)]
pub struct InitializeTracker {
    pending: HashMap<String, u32>,
}

impl InitializeTracker {
    pub const RETRY_AFTER_POLLS: u32 = 15;

    /// Records a poll that found no game account. Returns true when `Initialize` should be sent.
    pub fn should_send(&mut self, identity: &str) -> bool {
        match self.pending.get_mut(identity) {
            None => {
                self.pending.insert(identity.to_string(), 0);
                true
            }
            Some(polls) => {
                *polls += 1;
                if *polls >= Self::RETRY_AFTER_POLLS {
                    *polls = 0;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Forgets the player, either because the account exists or the send failed.
    pub fn clear(&mut self, identity: &str) {
        self.pending.remove(identity);
    }

    pub fn is_pending(&self, identity: &str) -> bool {
        self.pending.contains_key(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_sent_once_while_pending() {
        let mut tracker = InitializeTracker::default();
        assert!(tracker.should_send("A"));
        assert!(!tracker.should_send("A"));
        assert!(tracker.should_send("B"));
        assert!(tracker.is_pending("A"));
    }

    #[test]
    fn test_initialize_resent_when_account_never_appears() {
        let mut tracker = InitializeTracker::default();
        assert!(tracker.should_send("A"));
        for _ in 1..InitializeTracker::RETRY_AFTER_POLLS {
            assert!(!tracker.should_send("A"));
        }
        assert!(tracker.should_send("A"));
        assert!(!tracker.should_send("A"));
    }

    #[test]
    fn test_clear_allows_immediate_resend() {
        let mut tracker = InitializeTracker::default();
        assert!(tracker.should_send("A"));
        tracker.clear("A");
        assert!(!tracker.is_pending("A"));
        assert!(tracker.should_send("A"));
    }
}
