//! Landing page sections

use leptos::prelude::*;
use shared::catalog::{dishes, menu_dishes};
use shared::DishRecord;

use crate::components::Dish;
use crate::utils::constants::{ABOUT_IMAGE, BRAND_PREFIX, BRAND_SUFFIX, COPYRIGHT};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="w-full flex flex-col py-6 px-4 sm:px-6 lg:px-8 max-w-[1200px] mx-auto bg-white transition-all">
            <HomeSection/>
            <DishesSection/>
            <AboutSection/>
            <MenuSection/>
        </main>
        <footer class="w-full text-center text-[0.95rem] text-black py-4 border-t border-black/10 bg-brandGrey">
            {COPYRIGHT}
        </footer>
    }
}

/// Card grid keyed by dish id, in catalog order.
#[component]
fn DishGrid(dishes: &'static [DishRecord]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
            <For
                each=move || dishes.iter()
                key=|dish| dish.id
                children=|dish| view! { <Dish dish=dish/> }
            />
        </div>
    }
}

#[component]
fn HomeSection() -> impl IntoView {
    view! {
        <section id="home" class="scroll-mt-20 py-12 sm:py-16 text-center">
            <h3 class="sub-heading">"Authentic Filipino cuisine"</h3>
            <h1 class="heading text-brandBlack text-[2.5rem] md:text-[3rem] font-bold uppercase">
                {BRAND_PREFIX}<span class="text-brandYellow">{BRAND_SUFFIX}</span>
            </h1>
            <p class="max-w-2xl mx-auto text-gray-600 text-base sm:text-lg mt-3">
                "Discover our chef's special creations made with the finest ingredients"
            </p>
            <a href="#menu" class="mt-4 inline-block text-[1.7rem] text-white bg-brandBlack rounded-[0.5rem] cursor-pointer p-2 px-6 transition-all duration-200 ease-in-out hover:bg-brandYellow hover:text-brandBlack hover:tracking-wider">
                "Order Now"
            </a>
        </section>
    }
}

#[component]
fn DishesSection() -> impl IntoView {
    view! {
        <section id="dishes" class="scroll-mt-20 w-full py-12 sm:py-16 bg-white">
            <div class="text-center mb-10">
                <h3 class="sub-heading">"Our dishes"</h3>
                <h1 class="heading mb-3">"Popular dishes"</h1>
                <p class="max-w-2xl mx-auto text-gray-600 text-base sm:text-lg">
                    "Discover our most loved dishes, made with the finest ingredients"
                </p>
            </div>
            <DishGrid dishes=dishes()/>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let features = [
        ("fa-shipping-fast", "Fast delivery"),
        ("fa-dollar-sign", "Easy payments"),
        ("fa-headset", "Good service"),
    ];

    view! {
        <section id="about" class="scroll-mt-20 w-full bg-white text-center">
            <div class="w-full max-w-[1200px] mx-auto px-4 md:px-8 py-8 bg-brandGrey rounded-md shadow-soft">
                <h3 class="sub-heading">"About us"</h3>
                <h1 class="heading pb-10">"Why choose us?"</h1>
                <div class="flex flex-wrap gap-6 items-center">
                    <div class="basis-[45rem] grow transition-all">
                        <img src=ABOUT_IMAGE alt="" class="max-w-[1000px] w-full mx-auto pt-4"/>
                    </div>
                    <div class="basis-[45rem] grow transition-all">
                        <h3 class="text-brandBlack text-[4rem] py-2">"Best food in the country"</h3>
                        <div class="flex gap-4 flex-wrap py-4 mt-2">
                            {features
                                .into_iter()
                                .map(|(icon, label)| view! {
                                    <div class="bg-brandGrey rounded-md border border-black/20 flex items-center justify-center gap-4 basis-[17rem] grow p-6">
                                        <i class=format!("fas {} text-[2.5rem] text-brandGreen", icon)></i>
                                        <span class="text-[1.5rem] text-brandBlack">{label}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MenuSection() -> impl IntoView {
    view! {
        <section id="menu" class="scroll-mt-20 w-full py-12 sm:py-16">
            <h3 class="sub-heading text-center">"Our menu"</h3>
            <h1 class="heading text-center mb-8 sm:mb-12">"Today's Speciality"</h1>
            <DishGrid dishes=menu_dishes()/>
        </section>
    }
}
