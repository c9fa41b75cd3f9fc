//! # Suggestions
//!
//! Reminder strings about categories the user has not bought from lately.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  known     = distinct item categories, first-occurrence order           │
//! │  recent    = categories with an item purchased < window ago             │
//! │  missing   = known - recent               (order of `known` kept)       │
//! │                                                                         │
//! │  for cat in missing:                                                    │
//! │      catalog has examples? ──yes──► "... {cat}..., e.g.: A, B, C"       │
//! │                            └─no───► "... {cat}..."                      │
//! │                                                                         │
//! │  list non-empty and "Fruit" not in known ──► fruit reminder (last)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty list yields nothing at all. Advisory text only; nothing in the
//! store depends on it.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::category_style;
use crate::types::ShoppingList;
use crate::{FRUIT_CATEGORY, RECENCY_WINDOW_DAYS};

/// Most example products quoted in one message.
const MAX_EXAMPLES: usize = 3;

/// Fixed reminder appended when a list has never had a fruit item.
pub const FRUIT_REMINDER: &str =
    "You haven't added any fruit this week, how about some bananas or apples?";

/// Tunables for the suggestion heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPolicy {
    /// How far back a purchase still counts as recent.
    pub window: Duration,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        SuggestionPolicy::from_days(RECENCY_WINDOW_DAYS)
    }
}

impl SuggestionPolicy {
    pub fn from_days(days: u32) -> Self {
        SuggestionPolicy {
            window: Duration::days(i64::from(days)),
        }
    }

    /// Builds the ordered reminder list for `list` as of `now`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::suggestions::{SuggestionPolicy, FRUIT_REMINDER};
    /// use basket_core::store::ListStore;
    /// use basket_core::NewItem;
    ///
    /// let mut store = ListStore::new();
    /// let list_id = store.add_list("Weekly");
    /// store.add_item(&list_id, NewItem::named("Milk").with_category("Dairy"));
    ///
    /// let list = store.list(&list_id).unwrap();
    /// let tips = SuggestionPolicy::default().suggest(list, chrono::Utc::now());
    /// assert_eq!(tips.len(), 2);
    /// assert!(tips[0].contains("dairy"));
    /// assert_eq!(tips[1], FRUIT_REMINDER);
    /// ```
    pub fn suggest(&self, list: &ShoppingList, now: DateTime<Utc>) -> Vec<String> {
        if list.is_empty() {
            return Vec::new();
        }

        let known = list.categories();
        let recent: Vec<&str> = list
            .items
            .iter()
            .filter(|item| item.purchased_within(now, self.window))
            .map(|item| item.display_category())
            .collect();

        let mut suggestions: Vec<String> = known
            .iter()
            .filter(|category| !recent.contains(category))
            .map(|category| self.missing_category_message(category))
            .collect();

        if !known.contains(&FRUIT_CATEGORY) {
            suggestions.push(FRUIT_REMINDER.to_string());
        }

        suggestions
    }

    fn missing_category_message(&self, category: &str) -> String {
        let examples = category_style(category).examples;
        let lead = format!(
            "You haven't bought any {} in the last {}",
            category.to_lowercase(),
            describe_window(self.window)
        );

        if examples.is_empty() {
            format!("{}.", lead)
        } else {
            let shown: Vec<&str> = examples.iter().take(MAX_EXAMPLES).copied().collect();
            format!("{}, e.g.: {}", lead, shown.join(", "))
        }
    }
}

/// "2 weeks", "week", "10 days".
fn describe_window(window: Duration) -> String {
    let days = window.num_days();
    match days {
        1 => "day".to_string(),
        7 => "week".to_string(),
        d if d > 0 && d % 7 == 0 => format!("{} weeks", d / 7),
        d => format!("{} days", d),
    }
}
