//! Browser services

pub mod page;

pub use page::{AnchorHandle, BrowserPage};
