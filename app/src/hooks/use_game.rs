use clicker_api::prelude::*;
use dioxus::prelude::*;

use super::client::RpcGameClient;
use crate::{WalletState, POLL_INTERVAL_MS, RPC_URL};

/// The player's session plus the click action.
#[derive(Clone, Copy, PartialEq)]
pub struct GameHandle {
    pub session: Signal<Session>,
    /// Set after a confirmed click, cleared when the wiggle animation ends.
    pub effect: Signal<bool>,
    pub click: Callback<()>,
}

pub fn use_game() -> GameHandle {
    let mut session = use_context::<Signal<Session>>();
    let wallet = use_context::<Signal<WalletState>>();
    let mut effect = use_signal(|| false);
    let client = use_hook(|| RpcGameClient::new(RPC_URL));

    // Results landing after unmount are dropped.
    let lifetime = use_hook(Lifetime::new);
    use_drop({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let identity = use_memo(move || wallet.read().pubkey.clone());

    // Follow the wallet; request test funds for every newly connected identity.
    use_effect({
        let client = client.clone();
        move || match identity() {
            Some(id) => {
                session.write().connect(&id);
                let client = client.clone();
                spawn(async move {
                    fund_best_effort(&client, &id).await;
                });
            }
            None => session.write().disconnect(),
        }
    });

    use_future({
        let client = client.clone();
        let lifetime = lifetime.clone();
        move || {
            let client = client.clone();
            let lifetime = lifetime.clone();
            async move {
                loop {
                    if let Some(id) = identity() {
                        if let Some(result) = lifetime.guard(client.current_game(&id)).await {
                            if let Err(e) = &result {
                                tracing::error!("Failed to fetch game: {}", e);
                            }
                            session.write().apply_poll(&id, result);
                        }
                    }
                    gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                }
            }
        }
    });

    let click = use_callback(move |_: ()| {
        // Not ready or not connected: nothing to do.
        let Some(ticket) = session.write().begin_click() else {
            return;
        };
        let client = client.clone();
        let lifetime = lifetime.clone();
        spawn(async move {
            let submitted = client.save_click(&ticket.identity, &ticket.game_account);
            let Some(result) = lifetime.guard(submitted).await else {
                return;
            };
            match &result {
                Ok(signature) => {
                    tracing::info!("Click submitted: {}", signature);
                    effect.set(true);
                }
                Err(e) => tracing::error!("Click failed: {}", e),
            }
            session.write().apply_click(&ticket.identity, result);
        });
    });

    GameHandle {
        session,
        effect,
        click,
    }
}
