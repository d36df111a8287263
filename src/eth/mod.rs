pub mod abi;
pub mod portal;
pub mod provider;

use thiserror::Error;

/// Everything that can go wrong between the page and the chain. UI code logs
/// these and degrades; nothing here is fatal to the session.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("wallet provider rejected the request: {0}")]
    Rpc(String),
    #[error("malformed response from the provider: {0}")]
    Codec(String),
    #[error("contract response could not be decoded: {0}")]
    Abi(#[from] abi::AbiError),
    #[error("transaction {0} was included but reverted")]
    TxReverted(String),
}
