use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::eth::provider::{authorized_account, request_account, InjectedWallet};
use crate::hooks::alert;

pub const INSTALL_WALLET_PROMPT: &str = "Please get the MetaMask browser extension";

#[derive(Clone, PartialEq)]
pub struct WalletHandle {
    /// The connected account, once a wallet has authorized one.
    pub account: Option<String>,
    pub connect: Callback<MouseEvent>,
}

/// Wallet connector: silently adopts an already-authorized account on mount
/// and exposes a connect action that prompts the user. Startup failures are
/// logged and swallowed; the page stays usable read-only.
#[hook]
pub fn use_wallet() -> WalletHandle {
    let account = use_state(|| None::<String>);

    {
        let account = account.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let Some(wallet) = InjectedWallet::detect() else {
                    log::info!("make sure you have a wallet extension");
                    return;
                };
                match authorized_account(&wallet).await {
                    Ok(Some(address)) => account.set(Some(address)),
                    Ok(None) => log::info!("no authorized account found"),
                    Err(err) => log::warn!("authorized-account check failed: {err}"),
                }
            });
            || ()
        });
    }

    let connect = {
        let account = account.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(wallet) = InjectedWallet::detect() else {
                alert(INSTALL_WALLET_PROMPT);
                return;
            };
            let account = account.clone();
            spawn_local(async move {
                match request_account(&wallet).await {
                    Ok(Some(address)) => account.set(Some(address)),
                    Ok(None) => log::info!("wallet returned no accounts"),
                    Err(err) => log::warn!("wallet connection declined or failed: {err}"),
                }
            });
        })
    };

    WalletHandle {
        account: (*account).clone(),
        connect,
    }
}
