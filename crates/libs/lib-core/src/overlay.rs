//! # Overlay Toggle
//!
//! A controlled full-viewport overlay (the search form). Visibility belongs to the
//! parent; the overlay only reads it and asks the parent to close through a
//! callback. It is always mounted and moves on/off screen by class so the
//! transition can animate.

/// Classes shared by both states.
pub const OVERLAY_BASE_CLASS: &str = "w-full h-full fixed -top-[110%] left-0 z-[1004] bg-black/80 flex items-center justify-center px-4 transition-all";

/// Class that brings the overlay on screen.
pub const OVERLAY_ACTIVE_CLASS: &str = "!top-0";

/// Full class attribute for the given visibility.
pub fn overlay_class(active: bool) -> String {
    if active {
        format!("{} {}", OVERLAY_BASE_CLASS, OVERLAY_ACTIVE_CLASS)
    } else {
        OVERLAY_BASE_CLASS.to_string()
    }
}

/// Dismiss behavior for a controlled overlay.
#[derive(Clone, Copy)]
pub struct OverlayToggle<F> {
    on_request_close: F,
}

impl<F: Fn()> OverlayToggle<F> {
    pub fn new(on_request_close: F) -> Self {
        Self { on_request_close }
    }

    /// Handle the dismiss control. Asks the parent to close only while the overlay
    /// is shown; returns whether the request was made.
    pub fn dismiss(&self, active: bool) -> bool {
        if !active {
            return false;
        }
        (self.on_request_close)();
        true
    }
}
