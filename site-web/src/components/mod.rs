//! UI Components

pub mod dish;
pub mod header;
pub mod loader;
pub mod scroll_up;
pub mod search_form;
pub mod star_rating;

pub use dish::Dish;
pub use header::Header;
pub use loader::Loader;
pub use scroll_up::ScrollUp;
pub use search_form::SearchForm;
pub use star_rating::StarRating;
