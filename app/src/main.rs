#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use clicker_api::prelude::*;
use dioxus::prelude::*;
use route::Route;

use components::ToastState;

// Configuration
pub const RPC_URL: &str = clicker_api::consts::RPC_URL;
pub const NETWORK: &str = clicker_api::consts::CLUSTER;
pub const POLL_INTERVAL_MS: u32 = 2000;

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(Variant::default);
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider(|| Signal::new(Session::default()));
    use_context_provider(|| Signal::new(ToastState::default()));

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct WalletState {
    pub connected: bool,
    pub pubkey: Option<String>,
}
