//! Page modules - the landing page is a single scrolling page

pub mod home;

pub use home::HomePage;
