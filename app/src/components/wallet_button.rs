use dioxus::prelude::*;
use futures::StreamExt;

use crate::hooks::{connect_phantom, disconnect_phantom};
use crate::WalletState;

#[derive(Clone)]
enum WalletAction {
    Connect,
    Disconnect,
}

#[component]
pub fn WalletButton() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => match connect_phantom().await {
                        Ok(pubkey) => {
                            tracing::info!("Wallet connected: {}", pubkey);
                            let mut w = wallet.write();
                            w.connected = true;
                            w.pubkey = Some(pubkey);
                        }
                        Err(e) => {
                            tracing::error!("Wallet connection failed: {}", e);
                        }
                    },
                    WalletAction::Disconnect => {
                        if let Err(e) = disconnect_phantom().await {
                            tracing::warn!("Wallet disconnect failed: {}", e);
                        }
                        let mut w = wallet.write();
                        w.connected = false;
                        w.pubkey = None;
                    }
                }
            }
        }
    });

    let wallet_read = wallet.read();

    if wallet_read.connected {
        let pubkey = wallet_read.pubkey.clone().unwrap_or_default();
        let short_pubkey = if pubkey.len() > 8 {
            format!("{}...{}", &pubkey[..4], &pubkey[pubkey.len() - 4..])
        } else {
            pubkey.clone()
        };

        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-black font-mono font-bold", "{short_pubkey}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: move |_| wallet_coro.send(WalletAction::Disconnect),
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                onclick: move |_| wallet_coro.send(WalletAction::Connect),
                "Select Wallet"
            }
        }
    }
}
