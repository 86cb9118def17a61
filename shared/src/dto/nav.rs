use serde::{Deserialize, Serialize};

/// Header navigation link pointing at an in-page section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub id: u32,
    pub name: String,
    /// Fragment link, e.g. `"#menu"`
    pub href: String,
}

impl NavItem {
    /// Section id targeted by the link (`"#menu"` -> `"menu"`).
    pub fn section_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}
