use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_task;
use crate::config::DashConfig;
use crate::state::DashState;
use crate::view::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(DashState::default);

    // Load the task once on mount. The result replaces the state exactly once.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let url = DashConfig::default().endpoint();
            spawn_local(async move {
                let outcome = fetch_task(&url).await;
                if let Err(e) = &outcome {
                    console::error!(format!("failed loading {url}: {e}"));
                }
                state.set(DashState::settled(outcome));
            });
            || ()
        });
    }

    html! { <Dashboard state={(*state).clone()} /> }
}
