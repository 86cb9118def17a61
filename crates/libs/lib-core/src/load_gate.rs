//! # Load Gate
//!
//! Tracks whether the page is still loading its resources. The gate starts in the
//! loading state and flips to loaded exactly once, either immediately at mount
//! (page already complete) or when the load event arrives.
//!
//! ```rust,ignore
//! let gate = LoadGate::mount(&page, move || set_is_loading.set(false));
//! // render the splash while gate.is_loading()
//! ```
//!
//! Dropping the gate unregisters its load observer whether or not it has fired.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::env::{PageEvents, Subscription};

struct GateState {
    loading: Cell<bool>,
    on_ready: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl GateState {
    fn complete(&self) {
        // true -> false only; later deliveries find the flag already cleared
        if !self.loading.replace(false) {
            return;
        }
        log::debug!("load gate satisfied");
        let on_ready = self.on_ready.borrow_mut().take();
        if let Some(on_ready) = on_ready {
            on_ready();
        }
    }
}

pub struct LoadGate {
    state: Rc<GateState>,
    subscription: Option<Subscription>,
}

impl LoadGate {
    /// Inspect the page and, if it is not complete yet, wait for its load event.
    ///
    /// `on_ready` runs at most once, when the gate flips to loaded. If the page is
    /// already complete it runs before `mount` returns.
    pub fn mount<E>(events: &E, on_ready: impl FnOnce() + 'static) -> Self
    where
        E: PageEvents + ?Sized,
    {
        let state = Rc::new(GateState {
            loading: Cell::new(true),
            on_ready: RefCell::new(Some(Box::new(on_ready))),
        });

        if events.ready_state().is_complete() {
            state.complete();
            return Self {
                state,
                subscription: None,
            };
        }

        log::debug!("page still loading, waiting for load event");
        let weak = Rc::downgrade(&state);
        let subscription = events.on_load(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.complete();
            }
        }));

        Self {
            state,
            subscription: Some(subscription),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading.get()
    }

    /// Whether a load observer is still registered.
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }
}

impl Drop for LoadGate {
    fn drop(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("load gate torn down, load observer released");
        }
    }
}
