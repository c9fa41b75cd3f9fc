//! # Category Catalog
//!
//! One lookup table for everything keyed by category name: the header icon
//! and color the list screen draws, and the example products the suggestion
//! heuristic quotes.
//!
//! ```text
//! ┌──────────────┬──────┬─────────┬───────────────────────────────┐
//! │ key          │ icon │ color   │ examples                      │
//! ├──────────────┼──────┼─────────┼───────────────────────────────┤
//! │ Dairy        │ 🥛   │ #90CAF9 │ Milk, Cheese, Yogurt          │
//! │ Vegetable    │ 🥦   │ #4CAF50 │ Tomato, Cucumber, Pepper      │
//! │ Fruit        │ 🍎   │ #E91E63 │ Banana, Apple, Orange         │
//! │ Meat         │ 🥩   │ #B71C1C │ Chicken, Ground beef, Fish    │
//! │ Cleaning     │ 🧼   │ #1976D2 │ Detergent, Dish sponge        │
//! │ Snacks       │ 🍪   │ #FF9800 │ Biscuits, Chips               │
//! │ Breakfast    │ 🍳   │ #FFD600 │ Olives, Jam                   │
//! │ Other        │ 🛒   │ #757575 │ Water, Bread                  │
//! │ (unknown)    │ 🛒   │ #757575 │ (none)                        │
//! └──────────────┴──────┴─────────┴───────────────────────────────┘
//! ```
//!
//! Lookups are exact and case-sensitive: categories are free text, and a
//! user-typed "dairy" is its own category.

use serde::Serialize;

/// Display and suggestion data for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStyle {
    /// Catalog key; empty for the fallback entry.
    pub key: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Typical products, quoted by suggestions.
    pub examples: &'static [&'static str],
}

impl CategoryStyle {
    /// True for the entry returned when a category is not in the catalog.
    pub fn is_fallback(&self) -> bool {
        self.key.is_empty()
    }
}

/// Entry used for any category missing from [`CATALOG`].
pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    key: "",
    icon: "🛒",
    color: "#757575",
    examples: &[],
};

/// Known categories.
pub const CATALOG: &[CategoryStyle] = &[
    CategoryStyle {
        key: "Dairy",
        icon: "🥛",
        color: "#90CAF9",
        examples: &["Milk", "Cheese", "Yogurt"],
    },
    CategoryStyle {
        key: "Vegetable",
        icon: "🥦",
        color: "#4CAF50",
        examples: &["Tomato", "Cucumber", "Pepper"],
    },
    CategoryStyle {
        key: "Fruit",
        icon: "🍎",
        color: "#E91E63",
        examples: &["Banana", "Apple", "Orange"],
    },
    CategoryStyle {
        key: "Meat",
        icon: "🥩",
        color: "#B71C1C",
        examples: &["Chicken", "Ground beef", "Fish"],
    },
    CategoryStyle {
        key: "Cleaning",
        icon: "🧼",
        color: "#1976D2",
        examples: &["Detergent", "Dish sponge"],
    },
    CategoryStyle {
        key: "Snacks",
        icon: "🍪",
        color: "#FF9800",
        examples: &["Biscuits", "Chips"],
    },
    CategoryStyle {
        key: "Breakfast",
        icon: "🍳",
        color: "#FFD600",
        examples: &["Olives", "Jam"],
    },
    CategoryStyle {
        key: "Other",
        icon: "🛒",
        color: "#757575",
        examples: &["Water", "Bread"],
    },
];

/// Looks up a category, falling back to [`FALLBACK_STYLE`].
///
/// ## Example
/// ```rust
/// use basket_core::catalog::category_style;
///
/// assert_eq!(category_style("Dairy").icon, "🥛");
/// assert!(category_style("Pet food").is_fallback());
/// ```
pub fn category_style(category: &str) -> &'static CategoryStyle {
    CATALOG
        .iter()
        .find(|style| style.key == category)
        .unwrap_or(&FALLBACK_STYLE)
}
