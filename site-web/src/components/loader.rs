//! Loading splash screen
//!
//! Covers the viewport until the page's resources have loaded, then unmounts.

use leptos::prelude::*;
use lib_core::LoadGate;
use send_wrapper::SendWrapper;

use crate::services::BrowserPage;
use crate::utils::constants::LOADER_IMAGE;

#[component]
pub fn Loader() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);

    // Runs synchronously when the page is already complete, so the first render
    // never shows the overlay in that case
    let gate = LoadGate::mount(&BrowserPage, move || {
        log::info!("Page resources loaded, removing loader");
        set_is_loading.set(false);
    });

    let gate = SendWrapper::new(gate);
    on_cleanup(move || drop(gate));

    view! {
        <Show when=move || is_loading.get()>
            <div class="fixed top-0 left-0 h-full w-full z-[10000] bg-white flex items-center justify-center overflow-hidden animate-fadeOut">
                <img
                    src=LOADER_IMAGE
                    alt="Loading..."
                    class="w-full max-w-[35rem] transition-all"
                />
            </div>
        </Show>
    }
}
