use crate::client::GameState;
use crate::counter::OptimisticCounter;
use crate::error::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No wallet connected.
    #[default]
    Disconnected,

    /// Wallet connected, game account not ready yet.
    Connecting,

    /// Game account ready, clicks accepted.
    Ready,

    /// Last poll failed. The next successful poll recovers.
    Error,
}

/// What a click needs to be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickTicket {
    pub identity: String,
    pub game_account: String,
}

/// The connected player's game session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
    identity: Option<String>,
    game_account: String,
    message: Option<String>,
    counter: OptimisticCounter,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn game_account(&self) -> &str {
        &self.game_account
    }

    /// The single user-visible message slot.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clicks(&self) -> u64 {
        self.counter.value()
    }

    pub fn counter(&self) -> &OptimisticCounter {
        &self.counter
    }

    pub fn can_click(&self) -> bool {
        self.phase == SessionPhase::Ready && self.identity.is_some() && !self.game_account.is_empty()
    }

    pub fn connect(&mut self, identity: &str) {
        if self.identity.as_deref() == Some(identity) {
            return;
        }
        *self = Self {
            phase: SessionPhase::Connecting,
            identity: Some(identity.to_string()),
            ..Self::default()
        };
    }

    pub fn disconnect(&mut self) {
        *self = Self::default();
    }

    fn is_current(&self, identity: &str) -> bool {
        self.identity.as_deref() == Some(identity)
    }

    /// Applies a game poll. Results for another identity are discarded.
    pub fn apply_poll(&mut self, identity: &str, result: Result<GameState, ClientError>) -> bool {
        if !self.is_current(identity) {
            return false;
        }
        match result {
            Ok(state) => {
                if let Some(previous) = self.counter.reconcile(state.clicks) {
                    tracing::debug!(
                        "Local click count {} replaced by confirmed {}",
                        previous,
                        state.clicks
                    );
                }
                self.game_account = state.game_account;
                self.message = state.error_message.filter(|m| !m.is_empty());
                self.phase = if state.is_ready {
                    SessionPhase::Ready
                } else {
                    SessionPhase::Connecting
                };
            }
            Err(e) => {
                self.message = Some(e.to_string());
                self.phase = SessionPhase::Error;
            }
        }
        true
    }

    /// Starts a click: clears the message and hands out what the submission needs.
    /// Returns `None` when clicking is not allowed.
    pub fn begin_click(&mut self) -> Option<ClickTicket> {
        if !self.can_click() {
            return None;
        }
        self.message = None;
        Some(ClickTicket {
            identity: self.identity.clone()?,
            game_account: self.game_account.clone(),
        })
    }

    /// Applies a click submission. Results for another identity are discarded.
    pub fn apply_click<T>(&mut self, identity: &str, result: Result<T, ClientError>) -> bool {
        if !self.is_current(identity) {
            return false;
        }
        match result {
            Ok(_) => self.counter.record_click(),
            Err(e) => self.message = Some(e.to_string()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(clicks: u64) -> Result<GameState, ClientError> {
        Ok(GameState {
            is_ready: true,
            clicks,
            game_account: "game".to_string(),
            error_message: None,
        })
    }

    #[test]
    fn test_connect_then_ready() {
        let mut session = Session::default();
        assert_eq!(session.phase(), SessionPhase::Disconnected);
        assert!(!session.can_click());

        session.connect("alice");
        assert_eq!(session.phase(), SessionPhase::Connecting);
        assert!(!session.can_click());

        assert!(session.apply_poll("alice", ready(7)));
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.clicks(), 7);
        assert!(session.can_click());
    }

    #[test]
    fn test_unready_game_keeps_connecting() {
        let mut session = Session::default();
        session.connect("alice");
        session.apply_poll(
            "alice",
            Ok(GameState {
                is_ready: false,
                ..GameState::default()
            }),
        );
        assert_eq!(session.phase(), SessionPhase::Connecting);
        assert!(session.begin_click().is_none());
    }

    #[test]
    fn test_error_is_recoverable() {
        let mut session = Session::default();
        session.connect("alice");
        session.apply_poll("alice", ready(1));
        session.apply_poll("alice", Err(ClientError::Rpc("timeout".to_string())));
        assert_eq!(session.phase(), SessionPhase::Error);
        assert_eq!(session.message(), Some("RPC error: timeout"));
        assert!(!session.can_click());

        session.apply_poll("alice", ready(2));
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_click_success_increments() {
        let mut session = Session::default();
        session.connect("alice");
        session.apply_poll("alice", ready(5));

        let ticket = session.begin_click().unwrap();
        assert_eq!(ticket.game_account, "game");
        session.apply_click(&ticket.identity, Ok("sig"));
        assert_eq!(session.clicks(), 6);
        assert_eq!(session.counter().pending(), 1);
    }

    #[test]
    fn test_click_failure_sets_message() {
        let mut session = Session::default();
        session.connect("alice");
        session.apply_poll("alice", ready(5));

        session.apply_click::<String>("alice", Err(ClientError::Wallet("rejected".to_string())));
        assert_eq!(session.clicks(), 5);
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.message(), Some("Wallet error: rejected"));

        session.begin_click();
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut session = Session::default();
        session.connect("alice");
        session.apply_poll("alice", ready(5));
        session.connect("bob");

        assert!(!session.apply_poll("alice", ready(50)));
        assert!(!session.apply_click("alice", Ok(())));
        assert_eq!(session.clicks(), 0);
        assert_eq!(session.phase(), SessionPhase::Connecting);

        session.disconnect();
        assert!(!session.apply_poll("bob", ready(1)));
        assert_eq!(session.phase(), SessionPhase::Disconnected);
    }
}
