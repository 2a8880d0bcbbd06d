//! Display Helpers
//!
//! Turns a [`RecommendationItem`] into what a card shows.

use crate::models::RecommendationItem;

/// Brand color, also the fallback category color
pub const DEFAULT_CATEGORY_COLOR: &str = "#9B0D2B";

/// Category keyword and its pill color
const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("cake", "#C41E3A"),
    ("pizza", "#E07A1F"),
];

pub fn category_color(category: &str) -> &'static str {
    let key = category.trim().to_lowercase();
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

pub fn format_price(price: f64) -> String {
    format!("Rs. {:.2}", price)
}

/// Everything an item card renders
#[derive(Debug, Clone, PartialEq)]
pub struct CardDisplay {
    pub label: String,
    pub title: String,
    pub price_text: String,
    /// Struck-through previous price, only when it was higher
    pub old_price_text: Option<String>,
    pub description: String,
    pub color: &'static str,
    pub image_url: String,
}

impl CardDisplay {
    pub fn from_item(item: &RecommendationItem) -> Self {
        Self {
            label: item.category.to_uppercase(),
            title: item.name.clone(),
            price_text: format_price(item.price),
            old_price_text: item.old_price.filter(|old| *old > item.price).map(format_price),
            description: item.description.clone(),
            color: category_color(&item.category),
            image_url: item.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_lookup() {
        assert_eq!(category_color("cake"), "#C41E3A");
        assert_eq!(category_color("Cake"), "#C41E3A");
        assert_eq!(category_color(" PIZZA "), "#E07A1F");
        assert_eq!(category_color("Burgers"), DEFAULT_CATEGORY_COLOR);
        assert_eq!(category_color(""), DEFAULT_CATEGORY_COLOR);
        assert_ne!(category_color("cake"), category_color("pizza"));
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(950.0), "Rs. 950.00");
        assert_eq!(format_price(12.5), "Rs. 12.50");
        assert_eq!(format_price(0.0), "Rs. 0.00");
    }

    #[test]
    fn test_chocolate_cake_card() {
        let item = RecommendationItem {
            name: "Chocolate Cake".into(),
            category: "Cake".into(),
            price: 950.0,
            description: "Rich cake".into(),
            image_url: "https://x/cake.jpg".into(),
            old_price: None,
        };
        let card = CardDisplay::from_item(&item);
        assert_eq!(card.label, "CAKE");
        assert_eq!(card.title, "Chocolate Cake");
        assert!(card.price_text.contains("950.00"));
        assert_eq!(card.old_price_text, None);
        assert_eq!(card.image_url, "https://x/cake.jpg");
    }

    #[test]
    fn test_old_price_only_when_higher() {
        let mut item = RecommendationItem {
            name: "Fajita".into(),
            category: "Pizza".into(),
            price: 1299.0,
            description: String::new(),
            image_url: String::new(),
            old_price: Some(1499.0),
        };
        assert_eq!(CardDisplay::from_item(&item).old_price_text.as_deref(), Some("Rs. 1499.00"));

        item.old_price = Some(999.0);
        assert_eq!(CardDisplay::from_item(&item).old_price_text, None);
    }
}
