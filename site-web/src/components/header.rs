//! Fixed page header with section-aware navigation and a mobile menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lib_core::header::{is_nav_active, is_scrolled, SectionTracker};
use lib_core::PageEvents;
use send_wrapper::SendWrapper;
use shared::catalog::nav_items;

use crate::services::page::section_bounds;
use crate::services::BrowserPage;
use crate::state::page::use_page_context;
use crate::utils::constants::{BRAND_PREFIX, BRAND_SUFFIX, LOGO_IMAGE, SECTION_SELECTOR};

const ORDER_BUTTON_CLASS: &str = "mt-4 inline-block text-[1.7rem] text-white bg-brandBlack rounded-[0.5rem] cursor-pointer p-2 px-6 transition-all duration-200 ease-in-out hover:bg-brandYellow hover:text-brandBlack hover:tracking-wider w-full text-center justify-center";

#[component]
pub fn Header() -> impl IntoView {
    let page_ctx = use_page_context();
    let config = page_ctx.config.header;

    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(is_scrolled(BrowserPage.scroll_offset(), &config));
    let tracker = RwSignal::new(SectionTracker::default());

    let subscription = BrowserPage.on_scroll(Box::new(move |offset| {
        set_scrolled.set(is_scrolled(offset, &config));

        let sections = section_bounds(SECTION_SELECTOR);
        let changed = tracker
            .try_update(|t| t.update(offset, &sections, &config))
            .unwrap_or(false);
        if changed {
            log::debug!(
                "Active section: {:?}",
                tracker.with_untracked(|t| t.active().map(str::to_string))
            );
        }
    }));
    let subscription = SendWrapper::new(subscription);
    on_cleanup(move || drop(subscription));

    let toggle_menu = move |_: MouseEvent| set_menu_open.update(|open| *open = !*open);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);
    let nav_class = move |section_id: &'static str, active: &'static str, idle: &'static str| {
        move || {
            let is_active = tracker.with(|t| is_nav_active(section_id, t.active()));
            if is_active { active } else { idle }
        }
    };

    let header_class = move || {
        format!(
            "fixed top-0 left-0 right-0 z-[1000] w-full bg-white shadow-[0_4px_10px_rgba(0,0,0,0.08)] border-b border-black/10 {} px-5 sm:px-6 lg:px-8 transition-all duration-300",
            if scrolled.get() { "py-2" } else { "py-3" },
        )
    };
    let backdrop_class = move || {
        format!(
            "fixed inset-0 z-40 transition-opacity duration-300 md:hidden {}",
            if menu_open.get() { "opacity-100" } else { "opacity-0 pointer-events-none" },
        )
    };
    let drawer_class = move || {
        format!(
            "absolute top-0 right-0 h-full w-4/5 max-w-sm bg-white shadow-lg flex flex-col transform transition-transform duration-300 ease-in-out {}",
            if menu_open.get() { "translate-x-0" } else { "translate-x-full" },
        )
    };
    let menu_icon = move || {
        if menu_open.get() {
            "fas fa-times text-2xl"
        } else {
            "fas fa-bars text-2xl"
        }
    };

    view! {
        <header class=header_class>
            <div class="w-full mx-auto max-w-[1200px] flex items-center justify-between">
                <a href="#" class="flex items-center gap-2 sm:gap-4 flex-shrink-0 relative -top-[2px] sm:-top-[4px] md:-top-[5px]">
                    <img src=LOGO_IMAGE alt="Kapitan Sisig logo" class="w-10 h-10 sm:w-14 sm:h-14 object-contain"/>
                    <span class="text-xl sm:text-2xl font-bold text-brandBlack whitespace-nowrap">
                        {BRAND_PREFIX}<span class="text-brandYellow">{BRAND_SUFFIX}</span>
                    </span>
                </a>

                // Desktop navigation
                <nav class="hidden md:flex items-center space-x-8">
                    {nav_items()
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href.as_str()
                                    class=nav_class(
                                        item.section_id(),
                                        "px-3 py-2 font-medium transition-colors duration-200 capitalize text-brandYellow font-bold",
                                        "px-3 py-2 font-medium transition-colors duration-200 capitalize text-brandBlack hover:text-brandYellow",
                                    )
                                >
                                    {item.name.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <button
                        class="p-2 text-brandBlack hover:text-brandYellow transition-colors"
                        aria-label="Search"
                        on:click=move |_| page_ctx.open_search()
                    >
                        <i class="fas fa-search text-2xl"></i>
                    </button>
                    <button
                        class="md:hidden z-50 p-2 text-brandBlack hover:text-brandYellow transition-colors"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <i class=menu_icon></i>
                    </button>
                </div>
            </div>

            // Mobile menu
            <div class=backdrop_class>
                <div
                    class="absolute inset-0 bg-black/80 backdrop-blur-sm transition-opacity duration-300"
                    on:click=toggle_menu
                ></div>
                <div class=drawer_class on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <div class="p-4 border-b border-gray-100 flex items-center gap-2">
                        <img src=LOGO_IMAGE alt="Kapitan Sisig logo" class="w-10 h-10 object-contain"/>
                        <span class="text-xl font-bold text-brandBlack">
                            {BRAND_PREFIX}<span class="text-brandYellow">{BRAND_SUFFIX}</span>
                        </span>
                    </div>

                    <nav class="flex-1 overflow-y-auto p-4 space-y-2">
                        {nav_items()
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href.as_str()
                                        class=nav_class(
                                            item.section_id(),
                                            "block px-4 py-3 rounded-lg transition-colors text-lg bg-brandYellow/10 text-brandYellow font-medium",
                                            "block px-4 py-3 rounded-lg transition-colors text-lg text-gray-700 hover:bg-gray-100",
                                        )
                                        on:click=close_menu
                                    >
                                        {item.name.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="p-4 border-t border-gray-100">
                        <a href="#" class=ORDER_BUTTON_CLASS on:click=close_menu>
                            "Order Now"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
