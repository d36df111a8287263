use serde::{Deserialize, Serialize};

/// One wave as the UI renders it. `sender`, `timestamp` and `message` come
/// from the ledger and are immutable; `display_color` is assigned client-side
/// on every fetch and carries no meaning beyond the card background.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Wave {
    pub sender: String,
    /// Seconds since the Unix epoch, as recorded by the chain.
    pub timestamp: u64,
    pub message: String,
    pub display_color: String,
}
