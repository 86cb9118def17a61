//! Page-wide state management

use leptos::prelude::*;
use lib_core::UiConfig;

/// Global page context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Search overlay visibility. Owned here; the overlay only reads it.
    pub search_open: RwSignal<bool>,
    pub config: UiConfig,
}

impl PageContext {
    pub fn new(config: UiConfig) -> Self {
        Self {
            search_open: RwSignal::new(false),
            config,
        }
    }

    pub fn open_search(&self) {
        self.search_open.set(true);
    }

    pub fn close_search(&self) {
        self.search_open.set(false);
    }
}

pub fn provide_page_context() -> PageContext {
    let context = PageContext::new(UiConfig::default());
    provide_context(context);
    context
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
