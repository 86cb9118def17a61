//! Browser implementation of the page event source.
//!
//! Listeners are attached to `window` through `gloo-events`; dropping the
//! returned [`Subscription`] drops the `EventListener`, which removes it.

use gloo_events::EventListener;
use leptos::html;
use leptos::prelude::*;
use lib_core::{ClassTarget, PageEvents, ReadyState, Result, Subscription, UiError};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use lib_core::header::SectionBounds;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl PageEvents for BrowserPage {
    fn ready_state(&self) -> ReadyState {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document available, assuming page is still loading");
            return ReadyState::Loading;
        };
        document.ready_state().parse().unwrap_or_else(|e: UiError| {
            log::warn!("{}, assuming page is still loading", e);
            ReadyState::Loading
        })
    }

    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default()
    }

    fn on_load(&self, mut handler: Box<dyn FnMut()>) -> Subscription {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, load event not observed");
            return Subscription::empty();
        };
        let listener = EventListener::once(&window, "load", move |_event| handler());
        Subscription::new(move || drop(listener))
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut(f64)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, scroll events not observed");
            return Subscription::empty();
        };
        let page = *self;
        let listener =
            EventListener::new(&window, "scroll", move |_event| handler(page.scroll_offset()));
        Subscription::new(move || drop(listener))
    }
}

/// Bounds of every `<section id=..>` matching `selector`, in document order.
pub fn section_bounds(selector: &str) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Section query `{}` failed: {:?}", selector, e);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter_map(|element| {
            let id = element.get_attribute("id")?;
            Some(SectionBounds {
                id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Owned handle to an anchor element, resolved through its `NodeRef`.
#[derive(Clone, Copy)]
pub struct AnchorHandle {
    id: &'static str,
    node: NodeRef<html::A>,
}

impl AnchorHandle {
    pub fn new(id: &'static str, node: NodeRef<html::A>) -> Self {
        Self { id, node }
    }
}

impl ClassTarget for AnchorHandle {
    fn toggle_class(&self, class: &str, present: bool) -> Result<()> {
        let element = self
            .node
            .get_untracked()
            .ok_or_else(|| UiError::ElementMissing(self.id.to_string()))?;
        element
            .class_list()
            .toggle_with_force(class, present)
            .map_err(|e| UiError::Environment(format!("{:?}", e)))?;
        Ok(())
    }
}
