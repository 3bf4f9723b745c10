use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

use crate::error::ClientError;
use crate::leaderboard::LeaderboardEntry;

use super::ClickerAccount;

/// A player's click counter.
///
/// On-chain layout: `[discriminator: 8][player: 32][clicks: 8]`, little endian.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Game {
    /// The wallet that owns this counter.
    pub player: Pubkey,

    /// Total confirmed clicks.
    pub clicks: u64,
}

impl Game {
    pub const LEN: usize = 8 + std::mem::size_of::<Game>();

    /// Decodes raw account data, checking size and discriminator.
    pub fn try_from_bytes(data: &[u8]) -> Result<Game, ClientError> {
        if data.len() != Self::LEN {
            return Err(ClientError::InvalidAccount(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                data.len()
            )));
        }
        if data[..8] != ClickerAccount::Game.discriminator() {
            return Err(ClientError::InvalidAccount("not a game account".to_string()));
        }
        bytemuck::try_pod_read_unaligned::<Game>(&data[8..])
            .map_err(|e| ClientError::InvalidAccount(e.to_string()))
    }

    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::LEN);
        data.extend_from_slice(&ClickerAccount::Game.discriminator());
        data.extend_from_slice(bytemuck::bytes_of(self));
        data
    }

    pub fn entry(&self) -> LeaderboardEntry {
        LeaderboardEntry::new(self.player.to_string(), self.clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size() {
        assert_eq!(Game::LEN, 48);
    }

    #[test]
    fn test_decode_account_data() {
        let player = Pubkey::new_unique();
        let game = Game { player, clicks: 42 };
        let data = game.to_account_data();
        assert_eq!(data[0], 100);
        assert_eq!(&data[8..40], player.as_ref());
        assert_eq!(&data[40..48], &42u64.to_le_bytes());

        let decoded = Game::try_from_bytes(&data).unwrap();
        assert_eq!(decoded.clicks, 42);
        assert_eq!(decoded.entry().identifier, player.to_string());
    }

    #[test]
    fn test_reject_foreign_accounts() {
        let mut data = Game { player: Pubkey::new_unique(), clicks: 1 }.to_account_data();
        assert!(Game::try_from_bytes(&data[..47]).is_err());
        data[0] = 7;
        assert_eq!(
            Game::try_from_bytes(&data),
            Err(ClientError::InvalidAccount("not a game account".to_string()))
        );
    }
}
