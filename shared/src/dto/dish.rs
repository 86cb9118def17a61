use serde::{Deserialize, Serialize};

use crate::utils::{price_amount, rating_value};

/// One dish card.
///
/// `id` is the stable key used when diffing rendered lists; display order is the
/// order of the catalog the record came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishRecord {
    pub id: u32,
    pub title: String,
    pub image_path: String,
    /// Decimal string, e.g. `"4.5"`
    pub rating: String,
    /// Shows the "view details" button on the card
    pub detailed: bool,
    /// Shows the "favorite" button on the card
    pub favorited: bool,
    /// Currency formatted, e.g. `"₱249"`
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DishRecord {
    /// Numeric rating, `0.0` when the stored string is not a number.
    pub fn rating_value(&self) -> f64 {
        rating_value(&self.rating).unwrap_or(0.0)
    }

    /// Price without its currency symbol.
    pub fn price_amount(&self) -> Option<u32> {
        price_amount(&self.price)
    }
}
