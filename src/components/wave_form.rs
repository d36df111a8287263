use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WaveFormProps {
    pub value: String,
    /// True while a submission is being confirmed; the button is disabled and
    /// shows a loading label.
    pub busy: bool,
    pub oninput: Callback<String>,
    pub onsubmit: Callback<()>,
}

#[function_component(WaveForm)]
pub fn wave_form(props: &WaveFormProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    let onsubmit = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            onsubmit.emit(());
        })
    };

    html! {
        <form {onsubmit}>
            <label for="wave_message" class={styles::FORM}>
                <span class={styles::FORM_LABEL}>{"Tell me something"}</span>
                <input
                    id="wave_message"
                    class={styles::FORM_INPUT}
                    placeholder="your message..."
                    value={props.value.clone()}
                    {oninput}
                />
            </label>
            <button type="submit" class={styles::SUBMIT_BUTTON} disabled={props.busy}>
                { if props.busy { "Loading..." } else { "Wave at Me" } }
            </button>
        </form>
    }
}
