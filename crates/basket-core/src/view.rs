//! # Grouped List View
//!
//! The list screen shows items under one header per category:
//!
//! ```text
//! 🥛 Dairy            ← first category to appear among the items
//!    [ ] Cheese
//!    [x] Milk         ← checked items sink below unchecked ones
//! 🥦 Vegetable
//!    [ ] Tomato
//! ```
//!
//! Groups follow first-occurrence order. Inside a group unchecked items come
//! first; otherwise insertion order is kept. An item whose category was
//! patched to blank is shown under "Other".

use serde::Serialize;

use crate::catalog::{category_style, CategoryStyle};
use crate::types::{Item, ShoppingList};

/// One category header and the items under it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub style: &'static CategoryStyle,
    pub items: Vec<&'a Item>,
}

/// Groups a list's items by category for display.
pub fn group_by_category(list: &ShoppingList) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

    for item in &list.items {
        let category = item.display_category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category,
                style: category_style(category),
                items: vec![item],
            }),
        }
    }

    for group in &mut groups {
        // stable: insertion order survives within each half
        group.items.sort_by_key(|item| item.is_checked());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemPatch, NewItem};
    use chrono::Utc;

    fn list_of(entries: &[(&str, &str)]) -> ShoppingList {
        let mut list = ShoppingList::new("l1".to_string(), "View".to_string());
        for (name, category) in entries {
            list.items.push(Item::from_new(
                name.to_string(),
                NewItem::named(*name).with_category(*category),
                Utc::now(),
            ));
        }
        list
    }

    fn names(group: &CategoryGroup<'_>) -> Vec<String> {
        group.items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_empty_list_has_no_groups() {
        assert!(group_by_category(&list_of(&[])).is_empty());
    }

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let list = list_of(&[
            ("Tomato", "Vegetable"),
            ("Milk", "Dairy"),
            ("Pepper", "Vegetable"),
        ]);
        let groups = group_by_category(&list);

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Vegetable", "Dairy"]);
        assert_eq!(names(&groups[0]), vec!["Tomato", "Pepper"]);
        assert_eq!(groups[1].style.icon, "🥛");
    }

    #[test]
    fn test_checked_items_sink_stably() {
        let mut list = list_of(&[
            ("Milk", "Dairy"),
            ("Cheese", "Dairy"),
            ("Yogurt", "Dairy"),
            ("Butter", "Dairy"),
        ]);
        list.items[0].toggle(Utc::now());
        list.items[2].toggle(Utc::now());

        let groups = group_by_category(&list);
        assert_eq!(names(&groups[0]), vec!["Cheese", "Butter", "Milk", "Yogurt"]);
    }

    #[test]
    fn test_blank_category_shown_as_other() {
        let mut list = list_of(&[("Water", "Other"), ("Mystery", "Snacks")]);
        list.items[1].apply(ItemPatch {
            category: Some(String::new()),
            ..ItemPatch::default()
        });

        let groups = group_by_category(&list);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Other");
        assert_eq!(names(&groups[0]), vec!["Water", "Mystery"]);
    }

    #[test]
    fn test_unknown_category_uses_fallback_style() {
        let list = list_of(&[("Kibble", "Pet food")]);
        let groups = group_by_category(&list);
        assert!(groups[0].style.is_fallback());
    }
}
