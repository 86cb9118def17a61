//! # Error Handling
//!
//! Errors raised while projecting state onto the page. None of them are fatal:
//! notification handlers match on them, log, and carry on.

use thiserror::Error;

/// Convenience type alias for `Result<T, UiError>`.
pub type Result<T> = std::result::Result<T, UiError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UiError {
    /// The target element is not in the document (yet, or any more).
    ///
    /// Expected before first paint; handlers treat it as a no-op.
    #[error("Element not attached: {0}")]
    ElementMissing(String),

    /// A browser API call failed.
    #[error("Environment error: {0}")]
    Environment(String),

    /// `document.readyState` returned something outside the HTML standard.
    #[error("Unknown ready state: {0}")]
    UnknownReadyState(String),
}
