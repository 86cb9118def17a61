//! # Shared Site Data Library
//!
//! Static content shared by the landing page crates: the dish records rendered as
//! cards, the navigation entries, and the small formatting helpers used on them.
//!
//! ## Structure
//!
//! - **[`dto`]**: Plain data records
//!   - **[`dto::dish`]**: [`DishRecord`] for dish cards
//!   - **[`dto::nav`]**: [`NavItem`] for header links
//! - **[`catalog`]**: The fixed, ordered catalogs built once at first access
//! - **[`utils`]**: Price and rating formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::catalog::dishes;
//!
//! for dish in dishes() {
//!     println!("{} {}", dish.title, dish.price);
//! }
//! assert_eq!(dishes().len(), 6);
//! ```

pub mod catalog;
pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
