use clicker_api::prelude::*;
use dioxus::prelude::*;

use crate::components::{ClickPanel, LeaderboardPanel};
use crate::hooks::use_game;
use crate::WalletState;

#[component]
pub fn Play() -> Element {
    let variant = use_context::<Variant>();
    let wallet = use_context::<Signal<WalletState>>();
    let theme = use_context::<Signal<ThemeCycle>>();
    let game = use_game();

    let is_connected = wallet.read().connected;
    let scheme = theme.read().current();
    let background = variant
        .leaderboard_background
        .map(str::to_string)
        .unwrap_or_else(|| scheme.leaderboard.to_string());

    rsx! {
        div { class: "flex flex-col sm:flex-row sm:justify-around w-full gap-4 pt-5",
            div { class: "flex-1 flex justify-center",
                ClickPanel { game }
            }
            if is_connected {
                div { class: "flex-1 flex justify-center",
                    LeaderboardPanel { background }
                }
            }
        }
    }
}
