use base64::Engine;
use clicker_api::error::ClientError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct AccountInfo {
    pub data: (String, String), // (base64 data, encoding)
    pub lamports: u64,
    pub owner: String,
}

#[derive(Deserialize, Debug)]
pub struct AccountResult {
    pub value: Option<AccountInfo>,
}

#[derive(Deserialize, Debug)]
pub struct ProgramAccount {
    pub pubkey: String,
    pub account: AccountInfo,
}

/// Sends one JSON-RPC request and unwraps its result.
async fn call<T: DeserializeOwned>(
    rpc_url: &str,
    method: &'static str,
    params: Vec<serde_json::Value>,
) -> Result<Option<T>, ClientError> {
    let client = reqwest::Client::new();

    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method,
        params,
    };

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| ClientError::Rpc(e.to_string()))?;

    let rpc_response: RpcResponse<T> = response
        .json()
        .await
        .map_err(|e| ClientError::Rpc(e.to_string()))?;

    if let Some(error) = rpc_response.error {
        tracing::debug!("{} failed with code {}", method, error.code);
        return Err(ClientError::Rpc(error.message));
    }

    Ok(rpc_response.result)
}

fn decode_data(account: &AccountInfo) -> Result<Vec<u8>, ClientError> {
    base64::engine::general_purpose::STANDARD
        .decode(&account.data.0)
        .map_err(|e| ClientError::Encoding(e.to_string()))
}

pub async fn fetch_account(rpc_url: &str, pubkey: &str) -> Result<Option<Vec<u8>>, ClientError> {
    let params = vec![
        serde_json::json!(pubkey),
        serde_json::json!({
            "encoding": "base64"
        }),
    ];

    let result: Option<AccountResult> = call(rpc_url, "getAccountInfo", params).await?;
    match result.and_then(|r| r.value) {
        Some(account) => Ok(Some(decode_data(&account)?)),
        None => Ok(None),
    }
}

/// Fetch every account of `program_id` with exactly `data_size` bytes starting with `prefix`.
pub async fn fetch_program_accounts(
    rpc_url: &str,
    program_id: &str,
    data_size: usize,
    prefix: &[u8],
) -> Result<Vec<(String, Vec<u8>)>, ClientError> {
    let params = vec![
        serde_json::json!(program_id),
        serde_json::json!({
            "encoding": "base64",
            "filters": [
                { "dataSize": data_size },
                { "memcmp": { "offset": 0, "bytes": bs58::encode(prefix).into_string() } }
            ]
        }),
    ];

    let accounts: Vec<ProgramAccount> = call(rpc_url, "getProgramAccounts", params)
        .await?
        .unwrap_or_default();

    accounts
        .into_iter()
        .map(|a| Ok((a.pubkey.clone(), decode_data(&a.account)?)))
        .collect()
}

pub async fn fetch_latest_blockhash(rpc_url: &str) -> Result<String, ClientError> {
    #[derive(Deserialize)]
    struct BlockhashResult {
        value: BlockhashValue,
    }

    #[derive(Deserialize)]
    struct BlockhashValue {
        blockhash: String,
    }

    let result: Option<BlockhashResult> = call(rpc_url, "getLatestBlockhash", vec![]).await?;
    result
        .map(|r| r.value.blockhash)
        .ok_or_else(|| ClientError::Rpc("No blockhash returned".to_string()))
}

/// Ask the cluster faucet for lamports. Returns the airdrop signature.
pub async fn request_airdrop(rpc_url: &str, pubkey: &str, lamports: u64) -> Result<String, ClientError> {
    let params = vec![serde_json::json!(pubkey), serde_json::json!(lamports)];
    let result: Option<String> = call(rpc_url, "requestAirdrop", params).await?;
    result.ok_or_else(|| ClientError::Rpc("No airdrop signature returned".to_string()))
}
