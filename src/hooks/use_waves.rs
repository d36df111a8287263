use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::color::random_light_color;
use crate::config;
use crate::eth::abi::WaveRecord;
use crate::eth::portal::WavePortal;
use crate::eth::provider::{EthereumProvider, InjectedWallet};
use crate::eth::EthError;
use crate::hooks::alert;
use crate::hooks::wave_state::{is_blank_message, WaveAction, WaveState};
use crate::models::Wave;

pub const EMPTY_MESSAGE_PROMPT: &str = "Please leave me a message 😭";
pub const CONNECT_FIRST_PROMPT: &str = "Connect your wallet before waving";

#[derive(Clone)]
pub struct WavesHandle {
    pub state: UseReducerHandle<WaveState>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Contract reader/writer binding: fetches the wave log once on mount,
/// installs the NewWave filter and drains it on an interval for the lifetime
/// of the page, and exposes the submit flow.
#[hook]
pub fn use_waves(account: Option<String>) -> WavesHandle {
    let state = use_reducer(WaveState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let filter_id = Rc::new(RefCell::new(None::<String>));

            {
                let state = state.clone();
                let filter_id = filter_id.clone();
                spawn_local(async move {
                    let Some(wallet) = InjectedWallet::detect() else {
                        log::info!("no provider, the wave list stays empty");
                        return;
                    };
                    let portal = WavePortal::new(wallet, config::contract_address());
                    match load_waves(&portal).await {
                        Ok((waves, total)) => state.dispatch(WaveAction::Loaded { waves, total }),
                        Err(err) => log::error!("initial wave fetch failed: {err}"),
                    }
                    // Installed after the fetch so the filter only reports
                    // waves newer than the list we just loaded.
                    match portal.install_new_wave_filter().await {
                        Ok(id) => *filter_id.borrow_mut() = Some(id),
                        Err(err) => log::error!("could not watch for new waves: {err}"),
                    }
                });
            }

            let interval = {
                let state = state.clone();
                let filter_id = filter_id.clone();
                Interval::new(config::EVENT_POLL_INTERVAL_MS, move || {
                    let Some(id) = filter_id.borrow().clone() else {
                        return;
                    };
                    let state = state.clone();
                    spawn_local(async move {
                        let Some(wallet) = InjectedWallet::detect() else {
                            return;
                        };
                        let portal = WavePortal::new(wallet, config::contract_address());
                        match portal.drain_new_waves(&id).await {
                            Ok(records) => {
                                for record in records {
                                    state.dispatch(WaveAction::Arrived(decorate(record)));
                                }
                            }
                            Err(err) => log::warn!("NewWave poll failed: {err}"),
                        }
                    });
                })
            };

            move || {
                if let Some(id) = filter_id.borrow_mut().take() {
                    spawn_local(async move {
                        let Some(wallet) = InjectedWallet::detect() else {
                            return;
                        };
                        let portal = WavePortal::new(wallet, config::contract_address());
                        if let Err(err) = portal.uninstall_filter(&id).await {
                            log::warn!("failed to release the NewWave filter: {err}");
                        }
                    });
                }
                drop(interval);
            }
        });
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(WaveAction::InputChanged(value)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.write_in_flight {
                return;
            }
            let message = state.pending_input.clone();
            if is_blank_message(&message) {
                alert(EMPTY_MESSAGE_PROMPT);
                return;
            }
            let Some(from) = account.clone() else {
                alert(CONNECT_FIRST_PROMPT);
                return;
            };
            let Some(wallet) = InjectedWallet::detect() else {
                alert(crate::hooks::use_wallet::INSTALL_WALLET_PROMPT);
                return;
            };

            state.dispatch(WaveAction::WriteStarted);
            let state = state.clone();
            spawn_local(async move {
                let portal = WavePortal::new(wallet, config::contract_address());
                match run_submit(&portal, &from, &message).await {
                    Ok((waves, total)) => {
                        state.dispatch(WaveAction::WriteConfirmed { waves, total })
                    }
                    Err(err) => {
                        log::error!("wave submission failed: {err}");
                        state.dispatch(WaveAction::WriteFailed);
                    }
                }
            });
        })
    };

    WavesHandle {
        state,
        on_input,
        on_submit,
    }
}

async fn load_waves<P: EthereumProvider>(
    portal: &WavePortal<P>,
) -> Result<(Vec<Wave>, u64), EthError> {
    let records = portal.get_all_waves().await?;
    let total = portal.get_total_waves().await?;
    Ok((records.into_iter().map(decorate).collect(), total))
}

/// Sends the wave, waits for the ledger to confirm it, then re-fetches the
/// authoritative list and counter. Nothing local is touched before
/// confirmation.
async fn run_submit<P: EthereumProvider>(
    portal: &WavePortal<P>,
    from: &str,
    message: &str,
) -> Result<(Vec<Wave>, u64), EthError> {
    portal.submit_wave(from, message).await?;
    load_waves(portal).await
}

fn decorate(record: WaveRecord) -> Wave {
    Wave {
        sender: record.sender,
        timestamp: record.timestamp,
        message: record.message,
        display_color: random_light_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eth::abi::fixtures;
    use crate::eth::testing::MockProvider;
    use futures::executor::block_on;
    use serde_json::json;

    const SENDER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn load_decorates_every_wave_with_a_fresh_color() {
        let provider = MockProvider::new(vec![
            Ok(json!(fixtures::wave_array(&[(SENDER, 1000, "hi")]))),
            Ok(json!(fixtures::uint(1))),
        ]);
        let portal = WavePortal::new(provider, "0xc0de");
        let (waves, total) = block_on(load_waves(&portal)).unwrap();

        assert_eq!(total, 1);
        assert_eq!(waves[0].sender, SENDER);
        assert_eq!(waves[0].message, "hi");
        assert!(waves[0].display_color.starts_with("hsl("));
    }

    #[test]
    fn submit_resyncs_only_after_confirmation() {
        let provider = MockProvider::new(vec![
            Ok(json!("0xhash")),
            Ok(json!({ "status": "0x1" })),
            Ok(json!(fixtures::wave_array(&[
                (SENDER, 1000, "hi"),
                (SENDER, 2000, "hello"),
            ]))),
            Ok(json!(fixtures::uint(2))),
        ]);
        let portal = WavePortal::new(provider, "0xc0de");
        let (waves, total) = block_on(run_submit(&portal, SENDER, "hello")).unwrap();

        assert_eq!(waves.len(), 2);
        assert_eq!(total, 2);
        // The reads strictly follow the receipt: no optimistic refresh.
        let methods: Vec<String> = portal_methods(&portal);
        assert_eq!(
            methods,
            vec![
                "eth_sendTransaction",
                "eth_getTransactionReceipt",
                "eth_call",
                "eth_call",
            ]
        );
    }

    #[test]
    fn failed_submit_stops_before_any_read() {
        let provider = MockProvider::new(vec![Err(EthError::Rpc("user denied".into()))]);
        let portal = WavePortal::new(provider, "0xc0de");
        assert!(block_on(run_submit(&portal, SENDER, "hello")).is_err());
        assert_eq!(portal_methods(&portal), vec!["eth_sendTransaction"]);
    }

    fn portal_methods(portal: &WavePortal<MockProvider>) -> Vec<String> {
        portal.provider_for_tests().methods()
    }
}
