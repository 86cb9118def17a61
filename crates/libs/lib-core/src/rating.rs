//! Star rating state: a selected value plus a transient hover value.

pub const DEFAULT_MAX_STARS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarRating {
    min: u8,
    max: u8,
    rating: f64,
    hover: u8,
}

impl StarRating {
    pub fn new(rating: f64, max: u8) -> Self {
        Self {
            min: 0,
            max,
            rating,
            hover: 0,
        }
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Star `value` (1-based) is marked when the hovered value, or the selected
    /// rating if nothing is hovered, reaches it.
    pub fn is_marked(&self, value: u8) -> bool {
        let effective = if self.hover > 0 {
            f64::from(self.hover)
        } else {
            self.rating
        };
        effective >= f64::from(value)
    }

    pub fn marks(&self) -> Vec<bool> {
        (1..=self.max).map(|value| self.is_marked(value)).collect()
    }

    pub fn select(&mut self, value: u8) {
        self.rating = f64::from(value.min(self.max));
    }

    pub fn hover(&mut self, value: u8) {
        self.hover = value.min(self.max);
    }

    pub fn leave(&mut self) {
        self.hover = self.min;
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_MAX_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_rating_rounds_down() {
        let stars = StarRating::new(4.5, 5);
        assert_eq!(stars.marks(), vec![true, true, true, true, false]);
    }

    #[test]
    fn test_hover_overrides_rating() {
        let mut stars = StarRating::new(4.0, 5);
        stars.hover(2);
        assert_eq!(stars.marks(), vec![true, true, false, false, false]);

        stars.leave();
        assert_eq!(stars.marks(), vec![true, true, true, true, false]);
    }

    #[test]
    fn test_select() {
        let mut stars = StarRating::default();
        assert!(stars.marks().iter().all(|marked| !marked));

        stars.select(5);
        assert_eq!(stars.rating(), 5.0);
        stars.select(9);
        assert_eq!(stars.rating(), 5.0);
        assert!(stars.is_marked(5));
    }

    #[test]
    fn test_max_sets_star_count() {
        let mut stars = StarRating::new(3.0, 4);
        assert_eq!(stars.max(), 4);
        assert_eq!(stars.marks().len(), usize::from(stars.max()));

        stars.hover(7);
        assert_eq!(stars.marks(), vec![true; 4]);
        assert_eq!(StarRating::default().max(), DEFAULT_MAX_STARS);
    }
}
