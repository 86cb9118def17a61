//! # Page Event Source
//!
//! The page's load and scroll signals, modelled as an injected capability instead
//! of ambient globals. Observers are handed back as [`Subscription`] guards: the
//! observer stays registered exactly as long as the guard lives.
//!
//! ```rust
//! use lib_core::env::Subscription;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let released = Rc::new(Cell::new(false));
//! let flag = released.clone();
//! let subscription = Subscription::new(move || flag.set(true));
//! drop(subscription);
//! assert!(released.get());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// `document.readyState`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn is_complete(self) -> bool {
        self == ReadyState::Complete
    }
}

impl FromStr for ReadyState {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loading" => Ok(ReadyState::Loading),
            "interactive" => Ok(ReadyState::Interactive),
            "complete" => Ok(ReadyState::Complete),
            other => Err(UiError::UnknownReadyState(other.to_string())),
        }
    }
}

/// Load and scroll notifications for the current page.
///
/// Implementations deliver notifications on the single UI thread, in order, each
/// handled to completion before the next.
pub trait PageEvents {
    /// Current readiness of the page's resources.
    fn ready_state(&self) -> ReadyState;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Register for the one-shot "all resources loaded" event.
    fn on_load(&self, handler: Box<dyn FnMut()>) -> Subscription;

    /// Register for scroll notifications; the handler receives the new offset.
    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Subscription;
}

/// Registration guard. Dropping it unregisters the observer.
#[must_use = "dropping a Subscription unregisters its observer immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that unregisters an observer.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for sources that could not register.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unregister now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
