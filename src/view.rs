use std::fmt::Display;

use yew::prelude::*;

use crate::state::DashState;
use crate::task::StatusTone;

/// The four text fields shown for a task. Blank until a task is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFields {
    pub id: String,
    pub name: String,
    pub state: String,
    pub resources: String,
}

fn text<T: Display>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl TaskFields {
    pub fn of(state: &DashState) -> Self {
        let task = state.task();
        let res = task.and_then(|t| t.resources.as_ref());
        Self {
            id: text(task.and_then(|t| t.id.as_deref())),
            name: text(task.and_then(|t| t.name.as_deref())),
            state: text(task.and_then(|t| t.state.as_deref())),
            resources: format!(
                "CPUs: {}, RAM: {}",
                text(res.and_then(|r| r.cpu_cores)),
                text(res.and_then(|r| r.ram_gb)),
            ),
        }
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="App-header">
            <img src="logo.svg" class="App-logo" alt="logo" />
            <h1 class="App-title">{ "Funnel" }</h1>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub state: DashState,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let fields = TaskFields::of(&props.state);
    let tone = props
        .state
        .task()
        .map(|t| t.tone())
        .unwrap_or(StatusTone::Idle);

    html! {
        <div class="App">
            <Header />
            <p class="App-intro">{ fields.id }</p>
            <p class="App-intro">{ fields.name }</p>
            <p class={classes!("App-intro", tone.class())}>{ fields.state }</p>
            <p class="App-intro">{ fields.resources }</p>
            if let Some(e) = props.state.error() {
                <p class="App-error">{ e.to_string() }</p>
            }
        </div>
    }
}
