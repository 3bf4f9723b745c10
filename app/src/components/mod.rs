mod click_panel;
mod layout;
mod leaderboard;
mod toast;
mod wallet_button;

pub use click_panel::ClickPanel;
pub use layout::Layout;
pub use leaderboard::LeaderboardPanel;
pub use toast::{notify, Toast, ToastState};
pub use wallet_button::WalletButton;
