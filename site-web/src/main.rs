//! Kapitan Sisig landing page - Leptos frontend
//!
//! Single page, client-side rendered. Mounted from wasm start.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Kapitan Sisig landing page starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
