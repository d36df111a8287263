use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConnectButtonProps {
    pub onclick: Callback<MouseEvent>,
}

/// Shown only while no account is connected.
#[function_component(ConnectButton)]
pub fn connect_button(props: &ConnectButtonProps) -> Html {
    html! {
        <button type="button" class={styles::CONNECT_BUTTON} onclick={props.onclick.clone()}>
            {"Connect Wallet"}
        </button>
    }
}
