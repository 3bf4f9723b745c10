use thiserror::Error;

/// Failures of the game client capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Account {0} not found")]
    AccountNotFound(String),

    #[error("Invalid account data: {0}")]
    InvalidAccount(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Encoding(e.to_string())
    }
}
