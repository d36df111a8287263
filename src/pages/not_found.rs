use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class={styles::SECTION}>
            <div class={styles::MAIN_CONTAINER}>
                <h1 class={styles::HEADER}>{"404"}</h1>
                <p class={styles::BIO}>
                    <Link<Route> to={Route::Home}>{"Back to the portal"}</Link<Route>>
                </p>
            </div>
        </section>
    }
}
