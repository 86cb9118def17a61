//! Kapitan Sisig landing page - root component

use leptos::prelude::*;

use crate::components::{Header, Loader, ScrollUp, SearchForm};
use crate::pages::HomePage;
use crate::state::page::provide_page_context;

#[component]
pub fn App() -> impl IntoView {
    let page_ctx = provide_page_context();

    view! {
        <div class="min-h-screen pt-[60px] md:pt-[100px] lg:pt-[140px] bg-white overflow-x-hidden">
            <Header/>
            <HomePage/>
            <SearchForm
                active=page_ctx.search_open
                on_close=Callback::new(move |_| page_ctx.close_search())
            />
            <Loader/>
            <ScrollUp/>
        </div>
    }
}
