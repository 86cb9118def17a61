//! "Go up" button, revealed once the page is scrolled past the beacon threshold.

use leptos::html;
use leptos::prelude::*;
use lib_core::ScrollBeacon;
use send_wrapper::SendWrapper;

use crate::services::{AnchorHandle, BrowserPage};
use crate::state::page::use_page_context;
use crate::utils::constants::SCROLL_UP_ID;

#[component]
pub fn ScrollUp() -> impl IntoView {
    let page_ctx = use_page_context();
    let anchor = NodeRef::<html::A>::new();

    let beacon = ScrollBeacon::mount(
        &BrowserPage,
        AnchorHandle::new(SCROLL_UP_ID, anchor),
        page_ctx.config.beacon,
    );
    let beacon = SendWrapper::new(beacon);
    on_cleanup(move || drop(beacon));

    view! {
        <a
            node_ref=anchor
            href="#"
            id=SCROLL_UP_ID
            title="Go up!"
            class="fixed right-4 -bottom-[20%] inline-flex rounded-full cursor-pointer z-[999] text-brandBlack bg-brandGrey opacity-80 hover:text-white hover:bg-brandGreen hover:opacity-100 transition-all md:right-8"
        >
            <i class="fas fa-arrow-up w-[4.5rem] h-[4.5rem] text-[1.7rem] text-center leading-[4.5rem]"></i>
        </a>
    }
}
