use yew::prelude::*;

use crate::models::Wave;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WaveCardProps {
    pub wave: Wave,
}

/// One wave: the message, its date, and the sender address revealed on hover.
/// The background comes from the wave's cosmetic color.
#[function_component(WaveCard)]
pub fn wave_card(props: &WaveCardProps) -> Html {
    let wave = &props.wave;
    html! {
        <div
            class={styles::WAVE_CARD}
            style={format!("background-color: {}", wave.display_color)}
        >
            <div class={styles::WAVE_MESSAGE}>
                <p>{ &wave.message }</p>
            </div>
            <div class={styles::WAVE_FOOTER}>
                <p class={styles::WAVE_DATE}>{ format_wave_date(wave.timestamp) }</p>
                <span class={styles::WAVE_SENDER} title={wave.sender.clone()}>{"ⓘ"}</span>
            </div>
        </div>
    }
}

/// Epoch seconds, as the chain records them, rendered "Mon D, YYYY".
fn format_wave_date(timestamp: u64) -> String {
    chrono::DateTime::from_timestamp(timestamp as i64, 0)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}
