//! # Demo Seed
//!
//! First-run sample data so a fresh session is not a blank screen.
//! Nothing depends on it; the shell only loads it when
//! `BASKET_SEED_DEMO` is on.

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::new_id;
use crate::types::{Item, NewItem, ShoppingList};

/// "Weekly Market" with milk and tomatoes, plus an empty "Breakfast Run".
pub fn demo_lists(now: DateTime<Utc>) -> Vec<ShoppingList> {
    let mut weekly = ShoppingList::new(new_id(), "Weekly Market".to_string());
    weekly.items = vec![
        Item::from_new(
            new_id(),
            NewItem::named("Milk")
                .with_amount(1)
                .with_category("Dairy")
                .with_estimated_price(Money::from_major_minor(30, 0)),
            now,
        ),
        Item::from_new(
            new_id(),
            NewItem::named("Tomato")
                .with_amount(2)
                .with_category("Vegetable")
                .with_estimated_price(Money::from_major_minor(20, 0)),
            now,
        ),
    ];

    let breakfast = ShoppingList::new(new_id(), "Breakfast Run".to_string());

    vec![weekly, breakfast]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lists_shape() {
        let now = Utc::now();
        let lists = demo_lists(now);

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Weekly Market");
        assert_eq!(lists[0].items.len(), 2);
        assert!(lists[0].items.iter().all(|i| !i.is_checked() && i.created_at == now));
        assert_eq!(lists[0].categories(), vec!["Dairy", "Vegetable"]);
        assert!(lists[1].is_empty());
        assert_ne!(lists[0].id, lists[1].id);
    }
}
