mod game;

pub use game::*;

use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use solana_program::pubkey::Pubkey;

use crate::consts::GAME;
use crate::error::ClientError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum ClickerAccount {
    Game = 100,
}

impl ClickerAccount {
    /// Account discriminators are one byte padded to eight.
    pub fn discriminator(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0] = self.into();
        bytes
    }
}

pub fn game_pda(player: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME, &player.to_bytes()], &crate::ID)
}

/// Parses a base58 wallet identifier.
pub fn parse_identity(identity: &str) -> Result<Pubkey, ClientError> {
    if identity.is_empty() {
        return Err(ClientError::NotConnected);
    }
    Pubkey::from_str(identity).map_err(|e| ClientError::Encoding(format!("{}: {}", identity, e)))
}
