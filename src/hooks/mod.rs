pub mod use_wallet;
pub mod use_waves;
pub mod wave_state;

pub use use_wallet::*;
pub use use_waves::*;

/// Blocking user-visible notice for the few cases that must interrupt the
/// user (missing wallet, empty message).
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
