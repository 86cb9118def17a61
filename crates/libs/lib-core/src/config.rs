//! # UI Configuration
//!
//! Thresholds and class names used by the scroll-driven controllers. The page reads
//! no environment variables, so configuration is typed and fixed at compile time;
//! [`UiConfig::default`] is what the site ships with.

/// Scroll-to-top control settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeaconConfig {
    /// Offset at which the control is revealed (inclusive)
    pub threshold: f64,
    /// Class applied while revealed
    pub revealed_class: &'static str,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            threshold: 200.0,
            revealed_class: "bottom-20",
        }
    }
}

/// Header settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderConfig {
    /// Header switches to its compact style strictly past this offset
    pub scrolled_threshold: f64,
    /// A section becomes active this many pixels before its top edge
    pub section_lead: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            section_lead: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiConfig {
    pub beacon: BeaconConfig,
    pub header: HeaderConfig,
}
