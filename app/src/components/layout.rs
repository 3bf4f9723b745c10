use clicker_api::theme::Variant;
use dioxus::prelude::*;

use crate::components::{Toast, WalletButton};
use crate::hooks::use_theme;
use crate::route::Route;
use crate::{WalletState, NETWORK};

#[component]
pub fn Layout() -> Element {
    let variant = use_context::<Variant>();
    let wallet = use_context::<Signal<WalletState>>();
    let theme = use_theme();
    use_context_provider(|| theme);

    let scheme = theme.read().current();
    let background = if wallet.read().connected {
        scheme.background
    } else {
        scheme.background_before_connect
    };

    rsx! {
        div { class: "min-h-screen flex items-center flex-col sm:p-4 p-1",
            style: "background: {background};",
            // Navigation
            nav { class: "navbar w-full mb-2 rounded-full sm:p-4 flex items-center",
                style: "background: {scheme.navbar};",
                div { class: "flex-1 text-xl font-mono",
                    Link { to: Route::Play {}, class: "flex items-center space-x-2",
                        img { src: "/logo.jpg", alt: "Logo", class: "h-14 w-auto rounded-md" }
                    }
                }

                div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                    NavLink { to: Route::Play {}, label: "Game" }
                    NavLink { to: Route::Home {}, label: "About" }
                }

                // Wallet button
                div { class: "flex items-center",
                    WalletButton {}
                }

                div { class: "badge badge-accent badge-outline flex-none ml-2",
                    a { href: "#{NETWORK}", "{NETWORK}" }
                }
            }

            // Main content
            main { class: "w-full max-w-7xl mx-auto",
                Outlet::<Route> {}
            }

            footer { class: "py-8 mt-auto text-center text-sm text-black",
                p { "{variant.title}" }
                p { class: "mt-2",
                    "Program: "
                    code { "{clicker_api::ID}" }
                }
            }

            Toast {}
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-black font-bold px-3 py-2 text-sm transition-colors hover:underline",
            "{label}"
        }
    }
}
