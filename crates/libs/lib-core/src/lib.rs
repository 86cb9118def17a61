//! # UI State Core
//!
//! Browser-independent state controllers for the landing page. Every controller
//! talks to the page through the [`PageEvents`] capability, so the same code runs
//! against the real window in `site-web` and against a scripted fake in tests.
//!
//! - [`load_gate`]: splash screen shown until the document finishes loading
//! - [`scroll_beacon`]: "scroll to top" control revealed past a scroll depth
//! - [`overlay`]: externally controlled search overlay
//! - [`header`]: header compaction and active-section tracking
//! - [`rating`]: star rating selection state

pub mod config;
pub mod env;
pub mod error;
pub mod header;
pub mod load_gate;
pub mod overlay;
pub mod rating;
pub mod scroll_beacon;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{BeaconConfig, HeaderConfig, UiConfig};
pub use env::{PageEvents, ReadyState, Subscription};
pub use error::{Result, UiError};
pub use load_gate::LoadGate;
pub use overlay::{overlay_class, OverlayToggle};
pub use scroll_beacon::{ClassTarget, ScrollBeacon};
