//! # Data Records
//!
//! Serializable records backing the page content.
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`

pub mod dish;
pub mod nav;

pub use dish::*;
pub use nav::*;
