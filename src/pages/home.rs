use yew::prelude::*;

use crate::components::{ConnectButton, WaveCard, WaveForm};
use crate::hooks::{use_wallet, use_waves};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let wallet = use_wallet();
    let waves = use_waves(wallet.account.clone());
    let state = &waves.state;

    html! {
        <section class={styles::SECTION}>
            if wallet.account.is_none() {
                <ConnectButton onclick={wallet.connect.clone()} />
            }
            <div class={styles::MAIN_CONTAINER}>
                <h1 class={styles::HEADER}>
                    <span role="img" aria-label="wave emoji">{"👋"}</span>
                    {" Hey there!"}
                </h1>
                <p class={styles::BIO}>{"I build things on chains. Leave me a wave below."}</p>

                <WaveForm
                    value={state.pending_input.clone()}
                    busy={state.write_in_flight}
                    oninput={waves.on_input.clone()}
                    onsubmit={waves.on_submit.clone()}
                />

                <div class={styles::TOTAL_ROW}>
                    <span class={styles::TOTAL_LABEL}>{"Total waves:"}</span>
                    <span>{ state.total_waves }</span>
                </div>

                <div class={styles::WAVE_GRID}>
                    { for state.waves.iter().map(|wave| html! {
                        <WaveCard wave={wave.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
