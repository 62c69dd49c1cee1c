// src/main.rs — Funnel task dashboard (Rust + Yew + WASM)
// Fetches one task from the Funnel gateway that serves this page and shows
// its id, name, state and requested resources.

mod api;
mod app;
mod config;
mod error;
mod state;
mod task;
mod view;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
