use clicker_api::prelude::*;
use dioxus::prelude::*;

use crate::hooks::GameHandle;
use crate::WalletState;

#[component]
pub fn ClickPanel(game: GameHandle) -> Element {
    let variant = use_context::<Variant>();
    let wallet = use_context::<Signal<WalletState>>();
    let theme = use_context::<Signal<ThemeCycle>>();
    let mut effect = game.effect;

    let scheme = theme.read().current();
    let session = game.session.read();
    let phase = session.phase();
    let is_ready = phase == SessionPhase::Ready;
    let clicks = session.clicks();
    let message = session.message().map(str::to_string);
    let game_account = session.game_account().to_string();
    let explorer = explorer_url(&game_account);
    let can_click = session.can_click();
    drop(session);

    let is_connected = wallet.read().connected;
    let wiggle = if *effect.read() { "animate-wiggle" } else { "" };

    rsx! {
        div { class: "p-4 flex flex-col items-center gap-3",
            div { class: "flex flex-col items-center p-2",
                if let Some(message) = message.filter(|_| is_ready || phase == SessionPhase::Error) {
                    div { class: "alert alert-error shadow-lg",
                        style: "background: {scheme.button};",
                        span { class: "text-white", "{message}" }
                    }
                }
                if is_ready {
                    div {
                        class: "{wiggle} text-black font-bold",
                        onanimationend: move |_| effect.set(false),
                        "{clicks} clicks"
                    }
                }
            }

            button {
                class: "btn btn-lg border-4 h-36 w-36 rounded-full transform transition-transform hover:scale-105 relative overflow-hidden text-black font-bold",
                style: "background: {scheme.button};",
                disabled: !can_click,
                onclick: move |_| game.click.call(()),
                span {
                    class: "absolute top-0 left-0 w-full h-full opacity-20",
                    style: "transition: background 0.3s ease-out; background: {scheme.button_hover};",
                }
                "Click Me"
            }

            if is_ready {
                div { class: "sm:w-3/4 text-black font-bold space-y-2",
                    p {
                        a { class: "underline", href: "{variant.guide_url}", target: "_blank", rel: "noreferrer", "Guide" }
                    }
                    p { "Aim for {variant.mint_goal} clicks to unlock exclusive minting access!" }
                    p {
                        "To participate, simply click the Click Me button. Achieve {variant.mint_goal} clicks to qualify for a complimentary minting opportunity."
                    }
                    if !game_account.is_empty() {
                        p {
                            a {
                                class: "underline",
                                href: "{explorer}",
                                target: "_blank",
                                rel: "noreferrer",
                                "View your game account"
                            }
                        }
                    }
                }
            }

            if !is_connected {
                p { class: "p-2 text-black", "Connect a wallet to start clicking." }
            } else if phase == SessionPhase::Connecting {
                p { class: "p-2 text-black", "Game initializing..." }
            }
        }
    }
}
