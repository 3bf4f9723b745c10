use clicker_api::prelude::*;
use dioxus::prelude::*;
use crate::route::Route;
use crate::NETWORK;

#[component]
pub fn Home() -> Element {
    let variant = use_context::<Variant>();

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16 text-black",
            // Hero
            h1 { class: "text-5xl font-bold mb-6", "{variant.title}" }

            p { class: "text-xl mb-8 max-w-2xl mx-auto",
                "Every click is a transaction on Solana {NETWORK}. "
                "Your total lives in your own game account and counts toward the leaderboard."
            }

            // CTA buttons
            div { class: "flex justify-center gap-4 mb-16",
                Link {
                    to: Route::Play {},
                    class: "btn btn-primary text-lg px-8 py-3",
                    "Start Clicking"
                }
            }

            // How it works
            div { class: "grid md:grid-cols-3 gap-8 mt-16",
                FeatureCard {
                    title: "Connect",
                    description: "Connect Phantom. Devnet test SOL is requested for you automatically.",
                    icon: "👛",
                }
                FeatureCard {
                    title: "Click",
                    description: "Each click is signed by your wallet and recorded on chain.",
                    icon: "👆",
                }
                FeatureCard {
                    title: "Climb",
                    description: "Your live count is merged into the leaderboard as you play.",
                    icon: "🏆",
                }
            }

            div { class: "mt-16 card max-w-xl mx-auto",
                h3 { class: "text-xl font-semibold mb-4", "Minting access" }
                div { class: "text-left space-y-2",
                    p {
                        span { class: "font-semibold", "Goal: " }
                        "{variant.mint_goal} clicks"
                    }
                    p {
                        span { class: "font-semibold", "Snapshot target: " }
                        "{variant.export_threshold} clicks"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold mb-2", "{props.title}" }
            p { "{props.description}" }
        }
    }
}
