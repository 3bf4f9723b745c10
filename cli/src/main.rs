use std::str::FromStr;

use clicker_api::prelude::*;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    client_error::{reqwest::StatusCode, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    transaction::Transaction,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let rpc = RpcClient::new(std::env::var("RPC").unwrap_or(RPC_URL.to_string()));
    let command = std::env::var("COMMAND").map_err(|_| anyhow::anyhow!("Missing COMMAND env var"))?;
    match command.as_str() {
        "game" => {
            log_game(&rpc, &payer()?).await?;
        }
        "leaderboard" => {
            log_leaderboard(&rpc).await?;
        }
        "export" => {
            export_identifiers(&rpc).await?;
        }
        "initialize" => {
            initialize(&rpc, &payer()?).await?;
        }
        "click" => {
            click(&rpc, &payer()?).await?;
        }
        "airdrop" => {
            airdrop(&rpc, &payer()?).await?;
        }
        _ => anyhow::bail!("Invalid command: {}", command),
    };
    Ok(())
}

fn payer() -> Result<Keypair, anyhow::Error> {
    let path = std::env::var("KEYPAIR").map_err(|_| anyhow::anyhow!("Missing KEYPAIR env var"))?;
    read_keypair_file(&path).map_err(|e| anyhow::anyhow!("Failed to read keypair {}: {}", path, e))
}

/// Player to inspect: `PLAYER` env var, defaulting to the keypair.
fn player(payer: &Keypair) -> Result<Pubkey, anyhow::Error> {
    match std::env::var("PLAYER") {
        Ok(s) => Ok(Pubkey::from_str(&s)?),
        Err(_) => Ok(payer.pubkey()),
    }
}

async fn log_game(rpc: &RpcClient, payer: &Keypair) -> Result<(), anyhow::Error> {
    let player = player(payer)?;
    let game_address = game_pda(player).0;
    let game = get_game(rpc, game_address).await?;
    println!("Game");
    println!("  address: {}", game_address);
    println!("  player: {}", game.player);
    println!("  clicks: {}", game.clicks);
    println!("  explorer: {}", explorer_url(&game_address.to_string()));
    Ok(())
}

/// Usage: COMMAND=leaderboard [PLAYER=<pubkey> CLICKS=<n>] [PAGE=<n>] cargo run -p clicker-cli
async fn log_leaderboard(rpc: &RpcClient) -> Result<(), anyhow::Error> {
    let mut view = LeaderboardView::default();
    view.replace_snapshot(get_leaderboard(rpc).await?.into());

    // Optional live overlay, e.g. a score not yet confirmed on the queried node.
    if let (Ok(player), Ok(clicks)) = (std::env::var("PLAYER"), std::env::var("CLICKS")) {
        view.set_live(&player, clicks.parse()?);
    }
    if let Ok(search) = std::env::var("SEARCH") {
        view.set_search_input(search);
        view.search();
    }
    let pages: usize = std::env::var("PAGE").map(|s| s.parse()).unwrap_or(Ok(1))?;
    for _ in 1..pages {
        view.load_more();
    }

    println!("Leaderboard ({} players)", view.snapshot().len());
    for row in view.rows() {
        let marker = if row.is_player { " (you)" } else { "" };
        println!("  #{:<4} {:<44} {:>8}{}", row.rank, row.entry.identifier, row.entry.score, marker);
    }
    if view.can_load_more() {
        println!("  ... PAGE={} for more", pages + 1);
    }
    Ok(())
}

/// Usage: COMMAND=export [THRESHOLD=<clicks>] [OUT=<path>] cargo run -p clicker-cli
async fn export_identifiers(rpc: &RpcClient) -> Result<(), anyhow::Error> {
    let threshold: u64 = std::env::var("THRESHOLD")
        .map(|s| s.parse())
        .unwrap_or(Ok(Variant::default().export_threshold))?;
    let out = std::env::var("OUT").unwrap_or(EXPORT_FILE_NAME.to_string());

    let entries = get_leaderboard(rpc).await?;
    let json = export(&entries, threshold)?;
    std::fs::write(&out, &json)?;

    let count = qualifying_identifiers(&entries, threshold).len();
    println!("Exported {} of {} players with {}+ clicks to {}", count, entries.len(), threshold, out);
    Ok(())
}

async fn initialize(rpc: &RpcClient, payer: &Keypair) -> Result<(), anyhow::Error> {
    let game_address = game_pda(payer.pubkey()).0;
    if rpc.get_account(&game_address).await.is_ok() {
        println!("Game {} already exists", game_address);
        return Ok(());
    }
    let ix = clicker_api::sdk::initialize(payer.pubkey());
    submit_transaction(rpc, payer, &[ix]).await?;
    println!("Created game {}", game_address);
    Ok(())
}

/// Usage: COMMAND=click [COUNT=<n>] cargo run -p clicker-cli
async fn click(rpc: &RpcClient, payer: &Keypair) -> Result<(), anyhow::Error> {
    let count: u64 = std::env::var("COUNT").map(|s| s.parse()).unwrap_or(Ok(1))?;
    let game_address = game_pda(payer.pubkey()).0;
    let before = get_game(rpc, game_address).await?;

    let mut counter = OptimisticCounter::default();
    counter.reconcile(before.clicks);
    for _ in 0..count {
        let ix = clicker_api::sdk::click(payer.pubkey(), game_address);
        submit_transaction(rpc, payer, &[ix]).await?;
        counter.record_click();
    }

    let after = get_game(rpc, game_address).await?;
    println!("Clicks: {} (submitted {})", after.clicks, counter.value());
    Ok(())
}

async fn airdrop(rpc: &RpcClient, payer: &Keypair) -> Result<(), anyhow::Error> {
    let signature = rpc.request_airdrop(&payer.pubkey(), AIRDROP_LAMPORTS).await?;
    println!(
        "Requested {} SOL for {}: {}",
        AIRDROP_LAMPORTS as f64 / LAMPORTS_PER_SOL as f64,
        payer.pubkey(),
        signature
    );
    Ok(())
}

async fn get_game(rpc: &RpcClient, address: Pubkey) -> Result<Game, anyhow::Error> {
    let account = rpc.get_account(&address).await?;
    Ok(Game::try_from_bytes(&account.data)?)
}

async fn get_leaderboard(rpc: &RpcClient) -> Result<Vec<LeaderboardEntry>, anyhow::Error> {
    let games = get_games(rpc).await?;
    Ok(rank(games.into_iter().map(|(_, game)| game.entry()).collect()))
}

async fn get_games(rpc: &RpcClient) -> Result<Vec<(Pubkey, Game)>, anyhow::Error> {
    let filters = vec![
        RpcFilterType::DataSize(Game::LEN as u64),
        RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            0,
            &ClickerAccount::Game.discriminator(),
        )),
    ];
    let result = rpc
        .get_program_accounts_with_config(
            &clicker_api::ID,
            RpcProgramAccountsConfig {
                filters: Some(filters),
                account_config: RpcAccountInfoConfig {
                    encoding: Some(UiAccountEncoding::Base64),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await;

    match result {
        Ok(accounts) => Ok(accounts
            .into_iter()
            .filter_map(|(pubkey, account)| {
                Game::try_from_bytes(&account.data)
                    .ok()
                    .map(|game| (pubkey, game))
            })
            .collect()),
        Err(err) => match err.kind {
            ClientErrorKind::Reqwest(err) if err.status() == Some(StatusCode::GONE) => {
                anyhow::bail!(
                    "Your RPC provider does not support the getProgramAccounts endpoint. Please use a different RPC provider."
                )
            }
            _ => Err(anyhow::anyhow!("Failed to get program accounts: {}", err)),
        },
    }
}

async fn submit_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    instructions: &[solana_sdk::instruction::Instruction],
) -> Result<Signature, anyhow::Error> {
    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction =
        Transaction::new_signed_with_payer(instructions, Some(&payer.pubkey()), &[payer], blockhash);

    match rpc.send_and_confirm_transaction(&transaction).await {
        Ok(signature) => {
            println!("Transaction submitted: {:?}", signature);
            Ok(signature)
        }
        Err(e) => {
            println!("Error submitting transaction: {:?}", e);
            Err(e.into())
        }
    }
}
