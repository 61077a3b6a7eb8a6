//! The static menu catalog and search.

use serde::{Deserialize, Serialize};

use lilies_core::{ItemId, Money};

/// Menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Burgers,
    Pasta,
    Appetizers,
    Noodles,
    Sides,
}

impl Category {
    /// Display label, as shown on the menu cards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Burgers => "Burgers",
            Self::Pasta => "Pasta",
            Self::Appetizers => "Appetizers",
            Self::Noodles => "Noodles",
            Self::Sides => "Sides",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item on the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image_url: String,
    pub rating: f32,
    pub category: Category,
}

/// The menu catalog.
///
/// Read-only after construction; search never mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from a list of items.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The full Lilies menu.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            menu_item(
                1,
                "Burger Deluxe",
                "Premium beef burger with fresh veggies",
                2500,
                "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400&h=300&fit=crop",
                4.8,
                Category::Burgers,
            ),
            menu_item(
                2,
                "Stir Fry Pasta",
                "In-house pasta with chicken by chef Moose",
                3200,
                "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=400&h=300&fit=crop",
                4.9,
                Category::Pasta,
            ),
            menu_item(
                3,
                "Crispy Samosa",
                "Golden fried samosas with spicy filling",
                1500,
                "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=400&h=300&fit=crop",
                4.6,
                Category::Appetizers,
            ),
            menu_item(
                4,
                "Special Indomie",
                "Loaded indomie with eggs and veggies",
                1800,
                "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=300&fit=crop",
                4.7,
                Category::Noodles,
            ),
            menu_item(
                5,
                "Plantain & Fries",
                "Crispy plantain with seasoned fries",
                2000,
                "https://images.unsplash.com/photo-1639744091680-e1c525c93185?w=400&h=300&fit=crop",
                4.5,
                Category::Sides,
            ),
            menu_item(
                6,
                "Chicken Burger",
                "Grilled chicken with special sauce",
                2800,
                "https://images.unsplash.com/photo-1606755962773-d324e0a13086?w=400&h=300&fit=crop",
                4.8,
                Category::Burgers,
            ),
        ])
    }

    /// All items, in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive substring search over item name and category.
    ///
    /// An empty query matches everything. Returns a filtered view; the
    /// underlying catalog is untouched.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.category.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn menu_item(
    id: i32,
    name: &str,
    description: &str,
    price_naira: i64,
    image_url: &str,
    rating: f32,
    category: Category,
) -> MenuItem {
    MenuItem {
        id: ItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Money::naira(price_naira),
        image_url: image_url.to_owned(),
        rating,
        category,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_menu() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.items().len(), 6);

        let burger = catalog.get(ItemId::new(1)).unwrap();
        assert_eq!(burger.name, "Burger Deluxe");
        assert_eq!(burger.price, Money::naira(2500));
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(Catalog::sample().get(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let catalog = Catalog::sample();
        let hits = catalog.search("bUrGeR");
        let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger Deluxe", "Chicken Burger"]);
    }

    #[test]
    fn test_search_by_category() {
        let catalog = Catalog::sample();
        let hits = catalog.search("noodle");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().name, "Special Indomie");
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.search("").len(), 6);
    }

    #[test]
    fn test_search_no_hits() {
        assert!(Catalog::sample().search("sushi").is_empty());
    }
}
