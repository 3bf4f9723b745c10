use clicker_api::prelude::*;
use dioxus::prelude::*;

use super::client::RpcGameClient;
use crate::{WalletState, RPC_URL};

#[derive(Clone, Default)]
pub struct LeaderboardState {
    pub view: LeaderboardView,
    pub loading: bool,
    pub error: Option<String>,
}

/// Snapshot fetched once per connected wallet, overlaid with the live click count.
pub fn use_leaderboard() -> Signal<LeaderboardState> {
    let variant = use_context::<Variant>();
    let wallet = use_context::<Signal<WalletState>>();
    let session = use_context::<Signal<Session>>();
    let client = use_hook(|| RpcGameClient::new(RPC_URL));

    let mut state = use_signal(|| LeaderboardState {
        view: LeaderboardView::new(variant.page_step),
        loading: true,
        error: None,
    });

    let identity = use_memo(move || wallet.read().pubkey.clone());

    let _resource = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(id) = identity() else {
                return;
            };
            state.write().loading = true;
            match client.leaderboard(&id).await {
                Ok(entries) => {
                    let mut s = state.write();
                    s.view.replace_snapshot(entries.into());
                    s.error = None;
                    s.loading = false;
                }
                Err(e) => {
                    tracing::error!("Failed to fetch leaderboard: {}", e);
                    let mut s = state.write();
                    s.error = Some(e.to_string());
                    s.loading = false;
                }
            }
        }
    });

    use_effect(move || {
        let session = session.read();
        let identity = session.identity().unwrap_or_default();
        state.write().view.set_live(identity, session.clicks());
    });

    state
}
