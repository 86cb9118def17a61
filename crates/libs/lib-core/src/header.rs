//! # Header Scroll State
//!
//! The header compacts once the page is scrolled and highlights the nav link of
//! the section currently under it.

use crate::config::HeaderConfig;

/// Position of an in-page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Compact header style applies strictly past the threshold.
pub fn is_scrolled(offset: f64, config: &HeaderConfig) -> bool {
    offset > config.scrolled_threshold
}

/// Section under `offset`, if any. When bounds overlap the last matching
/// section wins.
pub fn active_section<'a>(
    offset: f64,
    sections: &'a [SectionBounds],
    config: &HeaderConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top - config.section_lead;
            offset >= top && offset < top + section.height
        })
        .map(|section| section.id.as_str())
}

/// Whether the link targeting `section_id` should be highlighted.
pub fn is_nav_active(section_id: &str, active: Option<&str>) -> bool {
    active == Some(section_id)
}

/// Remembers the last active section between scroll notifications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
    active: Option<String>,
}

impl SectionTracker {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Update from a new offset. Offsets between sections keep the previous
    /// section active. Returns whether the active section changed.
    pub fn update(&mut self, offset: f64, sections: &[SectionBounds], config: &HeaderConfig) -> bool {
        match active_section(offset, sections, config) {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}
