//! Application constants

pub const BRAND_PREFIX: &str = "Kapitan";
pub const BRAND_SUFFIX: &str = "Sisig";
pub const COPYRIGHT: &str = "Copyright @ 2025 by Monkeys";

// Element ids
pub const SCROLL_UP_ID: &str = "scroll-up";
pub const SEARCH_FORM_ID: &str = "search-form";
pub const SEARCH_BOX_ID: &str = "search-box";

// Sections tracked by the header
pub const SECTION_SELECTOR: &str = "section[id]";

// Assets
pub const LOADER_IMAGE: &str = "/images/loader.gif";
pub const LOGO_IMAGE: &str = "/images/KapitanLogo.png";
pub const ABOUT_IMAGE: &str = "images/about-img.png";

pub const MAX_STARS: u8 = lib_core::rating::DEFAULT_MAX_STARS;
