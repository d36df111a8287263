/// Address of the deployed WavePortal contract. Baked in at build time so the
/// static bundle needs no runtime config endpoint; override with
/// `WAVEPORTAL_ADDRESS=0x... trunk build`.
pub fn contract_address() -> &'static str {
    option_env!("WAVEPORTAL_ADDRESS").unwrap_or("0xd5f65D53e4cb1e1b8EbBA7E53d1A2Ff006C9b5E3")
}

/// Upper bound on gas the submit transaction is allowed to burn. The contract
/// does a little more than a plain store (prize roll), so leave headroom.
pub const WAVE_GAS_LIMIT: u64 = 300_000;

/// How often the NewWave log filter is drained, in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u32 = 4_000;

/// Pause between transaction-receipt polls while waiting for inclusion.
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 1_500;
