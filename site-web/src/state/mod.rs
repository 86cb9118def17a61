//! Application state

pub mod page;
