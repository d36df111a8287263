use serde_json::{json, Value};

use super::abi::{self, WaveRecord};
use super::provider::EthereumProvider;
use super::EthError;
use crate::config;

/// Client for the WavePortal contract, generic over the wallet capability so
/// tests can drive it without a browser.
pub struct WavePortal<P> {
    provider: P,
    address: String,
}

impl<P: EthereumProvider> WavePortal<P> {
    pub fn new(provider: P, address: impl Into<String>) -> Self {
        Self {
            provider,
            address: address.into(),
        }
    }

    /// The complete wave log, in the order the ledger reports it.
    pub async fn get_all_waves(&self) -> Result<Vec<WaveRecord>, EthError> {
        let data = self.call(abi::get_all_waves_call()).await?;
        Ok(abi::decode_wave_array(&data)?)
    }

    pub async fn get_total_waves(&self) -> Result<u64, EthError> {
        let data = self.call(abi::get_total_waves_call()).await?;
        Ok(abi::decode_uint(&data)?)
    }

    /// Sends the wave transaction and returns its hash without waiting for
    /// inclusion.
    pub async fn wave(&self, from: &str, message: &str) -> Result<String, EthError> {
        let params = json!([{
            "from": from,
            "to": self.address,
            "data": abi::wave_call(message),
            "gas": format!("{:#x}", config::WAVE_GAS_LIMIT),
        }]);
        let hash = self.provider.request("eth_sendTransaction", params).await?;
        expect_string(hash)
    }

    /// Polls until the transaction lands in a block. There is deliberately no
    /// timeout; a stalled wallet or node keeps the caller suspended.
    pub async fn wait_for_receipt(&self, tx_hash: &str) -> Result<(), EthError> {
        loop {
            let receipt = self
                .provider
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;
            if receipt.is_null() {
                pause(config::RECEIPT_POLL_INTERVAL_MS).await;
                continue;
            }
            return match receipt.get("status").and_then(Value::as_str) {
                // Pre-Byzantium nodes omit the status field.
                Some("0x1") | None => Ok(()),
                _ => Err(EthError::TxReverted(tx_hash.to_owned())),
            };
        }
    }

    /// Submits a wave and resolves once the ledger confirms it.
    pub async fn submit_wave(&self, from: &str, message: &str) -> Result<(), EthError> {
        let tx_hash = self.wave(from, message).await?;
        log::debug!("wave transaction sent: {tx_hash}");
        self.wait_for_receipt(&tx_hash).await
    }

    /// Installs a log filter matching NewWave events emitted from now on.
    pub async fn install_new_wave_filter(&self) -> Result<String, EthError> {
        let params = json!([{
            "address": self.address,
            "topics": [abi::new_wave_topic()],
        }]);
        let id = self.provider.request("eth_newFilter", params).await?;
        expect_string(id)
    }

    /// Drains events accumulated since the previous poll, oldest first.
    pub async fn drain_new_waves(&self, filter_id: &str) -> Result<Vec<WaveRecord>, EthError> {
        let changes = self
            .provider
            .request("eth_getFilterChanges", json!([filter_id]))
            .await?;
        let logs = changes
            .as_array()
            .ok_or_else(|| EthError::Codec("filter changes is not an array".into()))?;
        logs.iter().map(decode_log).collect()
    }

    pub async fn uninstall_filter(&self, filter_id: &str) -> Result<(), EthError> {
        self.provider
            .request("eth_uninstallFilter", json!([filter_id]))
            .await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn provider_for_tests(&self) -> &P {
        &self.provider
    }

    async fn call(&self, calldata: String) -> Result<String, EthError> {
        let result = self
            .provider
            .request(
                "eth_call",
                json!([{ "to": self.address, "data": calldata }, "latest"]),
            )
            .await?;
        expect_string(result)
    }
}

fn decode_log(log: &Value) -> Result<WaveRecord, EthError> {
    let topics: Vec<String> = log
        .get("topics")
        .and_then(Value::as_array)
        .map(|t| {
            t.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    let data = log.get("data").and_then(Value::as_str).unwrap_or("0x");
    Ok(abi::decode_new_wave_log(&topics, data)?)
}

fn expect_string(value: Value) -> Result<String, EthError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| EthError::Codec(format!("expected a string response, got {value}")))
}

#[cfg(target_arch = "wasm32")]
async fn pause(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause(_ms: u32) {}
