//! Phantom interop through `window.solana`.

#[cfg(feature = "web")]
use js_sys::{Promise, Reflect, Uint8Array};
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
fn provider() -> Result<JsValue, String> {
    let window = web_sys::window().ok_or("No window")?;

    let solana = Reflect::get(&window, &JsValue::from_str("solana"))
        .map_err(|_| "Phantom not found")?;

    if solana.is_undefined() {
        // Open Phantom install page
        let _ = window.open_with_url("https://phantom.app/");
        return Err("Phantom not installed. Please install it and refresh.".to_string());
    }

    Ok(solana)
}

#[cfg(feature = "web")]
fn method(target: &JsValue, name: &str) -> Result<js_sys::Function, String> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| format!("No {} method", name))?
        .dyn_into()
        .map_err(|_| format!("{} is not a function", name))
}

#[cfg(feature = "web")]
async fn resolve(promise: JsValue, what: &str) -> Result<JsValue, String> {
    let promise: Promise = promise.dyn_into().map_err(|_| "Not a promise")?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{} rejected: {:?}", what, e))
}

/// Connects Phantom and returns the wallet's base58 public key.
#[cfg(feature = "web")]
pub async fn connect_phantom() -> Result<String, String> {
    let solana = provider()?;

    let is_phantom = Reflect::get(&solana, &JsValue::from_str("isPhantom"))
        .map_err(|_| "Not Phantom")?;

    if !is_phantom.as_bool().unwrap_or(false) {
        return Err("Please use Phantom wallet".to_string());
    }

    let promise = method(&solana, "connect")?
        .call0(&solana)
        .map_err(|e| format!("Connect call failed: {:?}", e))?;
    let result = resolve(promise, "Connection").await?;

    let public_key = Reflect::get(&result, &JsValue::from_str("publicKey"))
        .map_err(|_| "No publicKey in response")?;

    let pubkey_str = method(&public_key, "toString")?
        .call0(&public_key)
        .map_err(|e| format!("toString failed: {:?}", e))?;

    pubkey_str.as_string().ok_or("Public key not a string".to_string())
}

#[cfg(feature = "web")]
pub async fn disconnect_phantom() -> Result<(), String> {
    let solana = provider()?;
    let promise = method(&solana, "disconnect")?
        .call0(&solana)
        .map_err(|e| format!("Disconnect call failed: {:?}", e))?;
    resolve(promise, "Disconnect").await?;
    Ok(())
}

/// Has Phantom sign and submit a serialized transaction. Returns the signature.
#[cfg(feature = "web")]
pub async fn sign_and_send_transaction(tx_bytes: &[u8]) -> Result<String, String> {
    let solana = provider()?;

    let tx_array = Uint8Array::new_with_length(tx_bytes.len() as u32);
    tx_array.copy_from(tx_bytes);

    let promise = method(&solana, "signAndSendTransaction")?
        .call1(&solana, &tx_array.into())
        .map_err(|e| format!("Sign call failed: {:?}", e))?;
    let result = resolve(promise, "Transaction").await?;

    Reflect::get(&result, &JsValue::from_str("signature"))
        .ok()
        .and_then(|s| s.as_string())
        .ok_or("No signature in response".to_string())
}

#[cfg(not(feature = "web"))]
pub async fn connect_phantom() -> Result<String, String> {
    Err("Phantom wallet only available in web mode".to_string())
}

#[cfg(not(feature = "web"))]
pub async fn disconnect_phantom() -> Result<(), String> {
    Ok(())
}

#[cfg(not(feature = "web"))]
pub async fn sign_and_send_transaction(_tx_bytes: &[u8]) -> Result<String, String> {
    Err("Transaction signing only available in web mode".to_string())
}
