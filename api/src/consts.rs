/// The seed of the game account PDA.
pub const GAME: &[u8] = b"game";

/// Devnet is the only cluster the game is deployed to.
pub const CLUSTER: &str = "devnet";

/// The RPC endpoint of the game's cluster.
pub const RPC_URL: &str = "https://api.devnet.solana.com";

/// Number of rows the leaderboard shows initially and adds per "load more".
pub const PAGE_STEP: usize = 10;

/// Lamports requested from the devnet faucet when a wallet connects.
pub const AIRDROP_LAMPORTS: u64 = 1_000_000_000;

/// File name of the exported identifier list.
pub const EXPORT_FILE_NAME: &str = "wallet_addresses.json";

/// Link to an account on the cluster's explorer.
pub fn explorer_url(address: &str) -> String {
    format!(
        "https://explorer.solana.com/address/{}?cluster={}",
        address, CLUSTER
    )
}
