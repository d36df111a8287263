use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::EthError;

/// The wallet capability the rest of the crate is written against. In the
/// browser this is the extension's injected EIP-1193 object; tests substitute
/// a scripted mock.
#[async_trait(?Send)]
pub trait EthereumProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, EthError>;
}

/// `window.ethereum`, as injected by MetaMask and friends.
#[derive(Clone)]
pub struct InjectedWallet {
    ethereum: JsValue,
}

impl InjectedWallet {
    /// Looks for a wallet extension on the page. Logs what it finds and
    /// nothing else; absence is a normal state, not an error.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            log::info!("no wallet provider injected into this page");
            return None;
        }
        log::debug!("found an injected wallet provider");
        Some(Self { ethereum })
    }
}

#[async_trait(?Send)]
impl EthereumProvider for InjectedWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, EthError> {
        let args = json!({ "method": method, "params": params })
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| EthError::Codec(e.to_string()))?;

        let request_fn: js_sys::Function =
            js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request"))
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| EthError::Codec("provider request is not callable".into()))?;

        let promise: js_sys::Promise = request_fn
            .call1(&self.ethereum, &args)
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| EthError::Codec("provider request did not return a promise".into()))?;

        let resolved = JsFuture::from(promise).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(resolved).map_err(|e| EthError::Codec(e.to_string()))
    }
}

fn js_error(value: JsValue) -> EthError {
    let detail = js_sys::JSON::stringify(&value)
        .map(String::from)
        .unwrap_or_else(|_| format!("{value:?}"));
    EthError::Rpc(detail)
}

/// Asks the wallet which accounts the page is already authorized for. Never
/// prompts the user; returns the first account, if any.
pub async fn authorized_account<P: EthereumProvider>(
    provider: &P,
) -> Result<Option<String>, EthError> {
    let accounts = provider.request("eth_accounts", json!([])).await?;
    Ok(first_account(&accounts))
}

/// Prompts the user to authorize an account and waits for the wallet to
/// resolve, so the caller adopts a real address rather than a pending handle.
pub async fn request_account<P: EthereumProvider>(
    provider: &P,
) -> Result<Option<String>, EthError> {
    let accounts = provider.request("eth_requestAccounts", json!([])).await?;
    Ok(first_account(&accounts))
}

fn first_account(accounts: &Value) -> Option<String> {
    accounts.as_array()?.first()?.as_str().map(str::to_owned)
}
