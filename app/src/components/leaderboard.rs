use clicker_api::prelude::*;
use dioxus::prelude::*;

use crate::components::{notify, ToastState};
use crate::hooks::{copy_to_clipboard, download_text, use_leaderboard};

const CELL: &str = "text-center border border-black rounded p-2 font-bold";

#[component]
pub fn LeaderboardPanel(background: String) -> Element {
    let variant = use_context::<Variant>();
    let session = use_context::<Signal<Session>>();
    let toast = use_context::<Signal<ToastState>>();
    let mut leaderboard = use_leaderboard();

    let state = leaderboard.read();
    let rows = state.view.rows();
    let can_load_more = state.view.can_load_more();
    let search_input = state.view.state().search_input.clone();
    let loading = state.loading;
    let error = state.error.clone();
    drop(state);

    let identity = session.read().identity().unwrap_or_default().to_string();
    let can_export = variant.can_export(&identity);
    let threshold = variant.export_threshold;

    let download = move |_| {
        let json = match leaderboard.read().view.export(threshold) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to export wallet addresses: {}", e);
                return;
            }
        };
        match download_text(EXPORT_FILE_NAME, &json, "application/json") {
            Ok(()) => notify(toast, "Wallet addresses downloaded!"),
            Err(e) => tracing::error!("Download failed: {}", e),
        }
    };

    rsx! {
        div { class: "sm:p-10 items-center flex flex-col border-2 border-black rounded-[30px]",
            style: "background: {background};",
            // Search
            div { class: "flex items-center mb-4",
                input {
                    r#type: "text",
                    placeholder: "Search by Wallet Address",
                    class: "rounded-l-md p-2 text-black transition-all duration-300",
                    value: "{search_input}",
                    oninput: move |e| leaderboard.write().view.set_search_input(e.value()),
                }
                button {
                    class: "bg-green-500 text-white rounded-r-md p-2 ml-1 transition-all duration-300 transform hover:scale-105",
                    onclick: move |_| leaderboard.write().view.search(),
                    "Search"
                }
            }

            if variant.show_target {
                p { class: "text-black font-bold", "Target : {threshold} Clicks" }
            }

            div { class: "text-2xl mb-4 text-black font-bold", "Leaderboard" }

            if loading {
                div { class: "text-center py-12",
                    div { class: "animate-spin w-8 h-8 border-2 border-black border-t-transparent rounded-full mx-auto mb-4" }
                    p { class: "text-black", "Loading leaderboard..." }
                }
            } else if let Some(error) = error {
                div { class: "text-center py-12",
                    p { class: "text-red-600", "Error: {error}" }
                }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra w-full leaderboard-table",
                        thead {
                            tr {
                                th { class: CELL, "Rank" }
                                th { class: CELL, "Player" }
                                th { class: CELL, "Total Clicks" }
                            }
                        }
                        tbody {
                            for row in rows {
                                LeaderboardRowView { key: "{row.entry.identifier}", row: row.clone() }
                            }
                        }
                    }
                }
            }

            if can_export {
                button {
                    class: "bg-black font-bold text-white rounded-[30px] p-2 mt-4",
                    onclick: download,
                    "Download Wallet Addresses ({threshold}+ clicks)"
                }
            }

            if can_load_more {
                button {
                    class: "bg-green-500 text-white rounded-[30px] p-2 mt-4",
                    onclick: move |_| leaderboard.write().view.load_more(),
                    "Load More"
                }
            }
        }
    }
}

#[component]
fn LeaderboardRowView(row: LeaderboardRow) -> Element {
    let toast = use_context::<Signal<ToastState>>();
    let identifier = row.entry.identifier.clone();
    let weight = if row.is_player { "bold" } else { "normal" };

    let copy = move |_| match copy_to_clipboard(&identifier) {
        Ok(()) => notify(toast, "Wallet address copied!"),
        Err(e) => tracing::warn!("Copy failed: {}", e),
    };

    rsx! {
        tr { class: "leaderboard-row",
            th { class: CELL, "{row.rank}" }
            td {
                class: CELL,
                style: "cursor: pointer; font-weight: {weight};",
                onclick: copy,
                if row.is_player {
                    b { "You" }
                } else {
                    span { "{row.entry.identifier}" }
                }
            }
            td { class: CELL, "{row.entry.score}" }
        }
    }
}
