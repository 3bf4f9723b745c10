use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use clicker_api::prelude::*;
use clicker_api::solana_program::hash::Hash;
use clicker_api::solana_program::instruction::Instruction;
use clicker_api::solana_program::pubkey::Pubkey;

use super::rpc::{fetch_account, fetch_latest_blockhash, fetch_program_accounts, request_airdrop};
use super::wallet::sign_and_send_transaction;

/// [`GameClient`] over JSON-RPC, signing through the injected wallet.
#[derive(Clone)]
pub struct RpcGameClient {
    rpc_url: Rc<str>,
    initializing: Rc<RefCell<InitializeTracker>>,
}

impl RpcGameClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            initializing: Rc::new(RefCell::new(InitializeTracker::default())),
        }
    }

    async fn send(&self, payer: &Pubkey, instructions: &[Instruction]) -> Result<String, ClientError> {
        let blockhash = fetch_latest_blockhash(&self.rpc_url).await?;
        let blockhash =
            Hash::from_str(&blockhash).map_err(|e| ClientError::Encoding(e.to_string()))?;
        let tx = unsigned_transaction(instructions, payer, &blockhash);
        sign_and_send_transaction(&tx).await.map_err(ClientError::Wallet)
    }

    /// Sends `Initialize` unless one is already in flight. A failed send is retried by the next
    /// poll, an unconfirmed one after [`InitializeTracker::RETRY_AFTER_POLLS`] polls.
    async fn create_game(&self, player: Pubkey) -> Result<(), ClientError> {
        let identity = player.to_string();
        if !self.initializing.borrow_mut().should_send(&identity) {
            return Ok(());
        }
        tracing::info!("Creating game account for {}", identity);
        match self.send(&player, &[initialize(player)]).await {
            Ok(signature) => {
                tracing::info!("Game account creation submitted: {}", signature);
                Ok(())
            }
            Err(e) => {
                self.initializing.borrow_mut().clear(&identity);
                Err(e)
            }
        }
    }
}

impl GameClient for RpcGameClient {
    async fn current_game(&self, identity: &str) -> Result<GameState, ClientError> {
        let player = parse_identity(identity)?;
        let address = game_pda(player).0;

        match fetch_account(&self.rpc_url, &address.to_string()).await? {
            Some(data) => {
                let game = Game::try_from_bytes(&data)?;
                self.initializing.borrow_mut().clear(identity);
                Ok(GameState {
                    is_ready: true,
                    clicks: game.clicks,
                    game_account: address.to_string(),
                    error_message: None,
                })
            }
            None => {
                self.create_game(player).await?;
                Ok(GameState {
                    is_ready: false,
                    clicks: 0,
                    game_account: address.to_string(),
                    error_message: None,
                })
            }
        }
    }

    async fn save_click(&self, identity: &str, game_account: &str) -> Result<String, ClientError> {
        let player = parse_identity(identity)?;
        let game = Pubkey::from_str(game_account)
            .map_err(|_| ClientError::AccountNotFound(game_account.to_string()))?;
        self.send(&player, &[click(player, game)]).await
    }

    async fn airdrop(&self, identity: &str) -> Result<String, ClientError> {
        parse_identity(identity)?;
        request_airdrop(&self.rpc_url, identity, AIRDROP_LAMPORTS).await
    }

    async fn leaderboard(&self, _identity: &str) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let accounts = fetch_program_accounts(
            &self.rpc_url,
            &clicker_api::ID.to_string(),
            Game::LEN,
            &ClickerAccount::Game.discriminator(),
        )
        .await?;

        let entries = accounts
            .into_iter()
            .filter_map(|(address, data)| match Game::try_from_bytes(&data) {
                Ok(game) => Some(game.entry()),
                Err(e) => {
                    tracing::warn!("Skipping account {}: {}", address, e);
                    None
                }
            })
            .collect();

        Ok(rank(entries))
    }
}
