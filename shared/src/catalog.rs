//! # Static Catalogs
//!
//! The page content lists. Each list is built once on first access and never
//! mutated afterwards; slice order is display order.

use std::sync::LazyLock;

use crate::dto::{DishRecord, NavItem};
use crate::utils::format_price;

static DISHES: LazyLock<Vec<DishRecord>> = LazyLock::new(|| {
    [
        (1, "Sisig Wow", 249),
        (2, "Sisig with Love", 199),
        (3, "Sisig Jacinto", 179),
        (4, "Sisig Master", 349),
        (5, "Sisig Breakup", 129),
        (6, "Sisig A+", 219),
    ]
    .into_iter()
    .map(|(id, title, amount)| DishRecord {
        id,
        title: title.to_string(),
        image_path: format!("images/dish-{}.png", id),
        rating: "4.5".to_string(),
        detailed: true,
        favorited: true,
        price: format_price(amount),
        description: None,
    })
    .collect()
});

static MENU_DISHES: LazyLock<Vec<DishRecord>> = LazyLock::new(|| {
    [
        (1, "Delicious Sisig", "Sisig ipsum sizzling plate amet, pork belly adobo crispy chicharron."),
        (2, "Delicious Sisig", "Sisig ipsum, Kalamansi et vinegar, chili peppers consectetur silog elit."),
        (3, "Delicious Sisig", "Sisig ipsum, bbq manok do dolore ut crispy chicharron voluptate."),
        (4, "Delicious Sisig", "Sisig ipsum, pancit canton incididunt rice bowl ut halo-halo dessert."),
        (5, "Delicious Sisig", "Sisig ipsum, crunchy onion et lechon kawali tempor silog umami."),
        (6, "Delicious Sisig", "Sisig ipsum, mayo overload excepteur pork belly walang kayo sizzling adobo plate."),
        (7, "Delicious Sisig", "Sisig ipsum, inihaw tenga chili peppers ad minim toyo et vinegar."),
        (8, "Delicious Food", "Sisig ipsum, sunny-side egg topping elit pancit ut silog happiness."),
    ]
    .into_iter()
    .map(|(id, title, description)| DishRecord {
        id,
        title: title.to_string(),
        image_path: format!("images/menu-{}.jpg", id),
        rating: "4".to_string(),
        detailed: false,
        favorited: true,
        price: format_price(249),
        description: Some(description.to_string()),
    })
    .collect()
});

static NAV_ITEMS: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    ["home", "dishes", "about", "menu"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| NavItem {
            id,
            name: name.to_string(),
            href: format!("#{}", name),
        })
        .collect()
});

/// Popular dishes shown as cards in the "dishes" section.
pub fn dishes() -> &'static [DishRecord] {
    &DISHES
}

/// Today's menu, shown with descriptions in the "menu" section.
pub fn menu_dishes() -> &'static [DishRecord] {
    &MENU_DISHES
}

/// Header links, in display order.
pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::CURRENCY_SYMBOL;
    use std::collections::HashSet;

    #[test]
    fn test_dish_catalog_integrity() {
        let dishes = dishes();
        assert_eq!(dishes.len(), 6);

        let ids: Vec<u32> = dishes.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());

        for dish in dishes {
            assert!(dish.price.starts_with(CURRENCY_SYMBOL), "{}", dish.price);
            assert!(dish.price_amount().is_some());
            assert_eq!(dish.rating_value(), 4.5);
        }
    }

    #[test]
    fn test_dish_catalog_order_is_stable() {
        let titles: Vec<&str> = dishes().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Sisig Wow",
                "Sisig with Love",
                "Sisig Jacinto",
                "Sisig Master",
                "Sisig Breakup",
                "Sisig A+",
            ]
        );
        // Same backing storage on every access
        assert!(std::ptr::eq(dishes(), dishes()));
    }

    #[test]
    fn test_menu_dishes() {
        let menu = menu_dishes();
        assert_eq!(menu.len(), 8);
        assert!(menu.iter().all(|d| d.description.is_some()));
        assert!(menu.iter().all(|d| d.price == "₱249"));
        assert_eq!(menu[7].title, "Delicious Food");
    }

    #[test]
    fn test_nav_items() {
        let sections: Vec<&str> = nav_items().iter().map(|n| n.section_id()).collect();
        assert_eq!(sections, vec!["home", "dishes", "about", "menu"]);
    }

    #[test]
    fn test_dish_wire_format() {
        let json = serde_json::to_value(&dishes()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["image_path"], "images/dish-1.png");
        assert_eq!(json["price"], "₱249");
        assert!(json.get("description").is_none());

        let back: DishRecord = serde_json::from_value(json).unwrap();
        assert_eq!(&back, &dishes()[0]);
    }
}
