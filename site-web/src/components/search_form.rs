//! Search overlay - visibility controlled by the parent

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lib_core::{overlay_class, OverlayToggle};

use crate::utils::constants::{SEARCH_BOX_ID, SEARCH_FORM_ID};

#[component]
pub fn SearchForm(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let toggle = OverlayToggle::new(move || on_close.run(()));

    let on_dismiss = move |_: MouseEvent| {
        if toggle.dismiss(active.get_untracked()) {
            log::debug!("Search overlay close requested");
        }
    };

    view! {
        <form action="" id=SEARCH_FORM_ID class=move || overlay_class(active.get())>
            <input
                class="w-[50rem] max-[768px]:w-[90%] py-4 text-[3rem] bg-transparent text-white border-b border-white placeholder:text-brandGrey focus:outline-none focus:ring-0"
                type="search"
                placeholder="Search here..."
                name=""
                id=SEARCH_BOX_ID
            />
            <span class="fas fa-search text-white cursor-pointer text-[3rem] ml-4 hover:text-brandGreen transition-all"></span>
            <span
                class="fas fa-times absolute top-8 right-12 text-white cursor-pointer text-[5rem] hover:text-brandGreen transition-all"
                on:click=on_dismiss
            ></span>
        </form>
    }
}
