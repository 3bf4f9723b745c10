mod browser;
mod client;
mod rpc;
mod use_game;
mod use_leaderboard;
mod use_theme;
mod wallet;

pub use browser::{copy_to_clipboard, download_text};
pub use client::RpcGameClient;
pub use use_game::{use_game, GameHandle};
pub use use_leaderboard::{use_leaderboard, LeaderboardState};
pub use use_theme::use_theme;
pub use wallet::{connect_phantom, disconnect_phantom};
