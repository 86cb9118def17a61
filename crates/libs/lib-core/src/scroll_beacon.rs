//! # Scroll Beacon
//!
//! Reveals the "scroll to top" control once the page is scrolled deep enough.
//! Each notification is a pure projection of the current offset onto one class on
//! one element: offsets at or past the threshold add the class, anything else
//! removes it. Notifications are handled as delivered, without debouncing.

use crate::config::BeaconConfig;
use crate::env::{PageEvents, Subscription};
use crate::error::{Result, UiError};

/// Owned handle to an element whose class list can be toggled.
pub trait ClassTarget {
    /// Add (`present = true`) or remove `class`.
    ///
    /// Returns [`UiError::ElementMissing`] if the element is not in the document.
    fn toggle_class(&self, class: &str, present: bool) -> Result<()>;
}

/// Whether `offset` is deep enough to reveal the control. The threshold is inclusive.
pub fn is_revealed(offset: f64, config: &BeaconConfig) -> bool {
    offset >= config.threshold
}

pub struct ScrollBeacon {
    _subscription: Subscription,
}

impl ScrollBeacon {
    /// Start projecting scroll notifications onto `target`.
    ///
    /// The target handle is captured once here and held for the beacon's lifetime.
    /// The scroll observer is released when the beacon is dropped.
    pub fn mount<E, T>(events: &E, target: T, config: BeaconConfig) -> Self
    where
        E: PageEvents + ?Sized,
        T: ClassTarget + 'static,
    {
        let subscription = events.on_scroll(Box::new(move |offset| {
            Self::project(&target, offset, &config);
        }));
        log::debug!("scroll beacon mounted (threshold {})", config.threshold);

        Self {
            _subscription: subscription,
        }
    }

    /// Apply the class state for `offset` to `target`.
    pub fn project<T>(target: &T, offset: f64, config: &BeaconConfig)
    where
        T: ClassTarget + ?Sized,
    {
        let revealed = is_revealed(offset, config);
        match target.toggle_class(config.revealed_class, revealed) {
            Ok(()) => {}
            Err(UiError::ElementMissing(id)) => {
                log::trace!("scroll beacon target `{}` not attached, skipping", id);
            }
            Err(e) => log::warn!("scroll beacon could not update class: {}", e),
        }
    }
}

impl Drop for ScrollBeacon {
    fn drop(&mut self) {
        log::debug!("scroll beacon torn down, scroll observer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage};

    const CLASS: &str = "bottom-20";

    #[test]
    fn test_threshold_boundary() {
        let config = BeaconConfig::default();
        assert!(!is_revealed(0.0, &config));
        assert!(!is_revealed(199.0, &config));
        assert!(!is_revealed(199.5, &config));
        assert!(is_revealed(200.0, &config));
        assert!(is_revealed(10_000.0, &config));
    }

    #[test]
    fn test_offset_sequence() {
        let page = FakePage::complete();
        let anchor = FakeElement::attached("scroll-up");
        let _beacon = ScrollBeacon::mount(&page, anchor.clone(), BeaconConfig::default());

        let observed: Vec<bool> = [0.0, 150.0, 199.0, 200.0, 500.0, 50.0]
            .into_iter()
            .map(|offset| {
                page.scroll_to(offset);
                anchor.has_class(CLASS)
            })
            .collect();

        assert_eq!(observed, vec![false, false, false, true, true, false]);
    }

    #[test]
    fn test_same_offset_twice_is_stable() {
        let page = FakePage::complete();
        let anchor = FakeElement::attached("scroll-up");
        let _beacon = ScrollBeacon::mount(&page, anchor.clone(), BeaconConfig::default());

        page.scroll_to(300.0);
        let once = anchor.has_class(CLASS);
        page.scroll_to(300.0);
        assert_eq!(anchor.has_class(CLASS), once);

        page.scroll_to(10.0);
        let once = anchor.has_class(CLASS);
        page.scroll_to(10.0);
        assert_eq!(anchor.has_class(CLASS), once);
    }

    #[test]
    fn test_missing_element_is_noop() {
        let page = FakePage::complete();
        let anchor = FakeElement::detached("scroll-up");
        let _beacon = ScrollBeacon::mount(&page, anchor.clone(), BeaconConfig::default());

        page.scroll_to(400.0);
        assert_eq!(anchor.writes(), 0);

        // Attached later: the next notification applies normally
        anchor.set_attached(true);
        page.scroll_to(400.0);
        assert!(anchor.has_class(CLASS));
    }

    #[test]
    fn test_teardown_unregisters() {
        let page = FakePage::complete();
        let anchor = FakeElement::attached("scroll-up");
        let beacon = ScrollBeacon::mount(&page, anchor.clone(), BeaconConfig::default());
        assert_eq!(page.scroll_listeners(), 1);

        drop(beacon);
        assert_eq!(page.scroll_listeners(), 0);

        page.scroll_to(900.0);
        assert_eq!(anchor.writes(), 0);
    }

    #[test]
    fn test_custom_config() {
        let page = FakePage::complete();
        let anchor = FakeElement::attached("scroll-up");
        let config = BeaconConfig {
            threshold: 10.0,
            revealed_class: "visible",
        };
        let _beacon = ScrollBeacon::mount(&page, anchor.clone(), config);

        page.scroll_to(10.0);
        assert!(anchor.has_class("visible"));
        assert!(!anchor.has_class(CLASS));
    }
}
