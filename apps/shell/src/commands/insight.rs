//! # Insight Commands
//!
//! Read-only views derived from one list.
//!
//! ## List Detail Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Weekly Market                                                          │
//! │                                                                         │
//! │  💡 You haven't added any fruit this week, how about ...   ◄─ suggestions│
//! │                                                                         │
//! │  🥛 Dairy                                                  ◄─ list view │
//! │     [ ] Milk              x1                  30.00                     │
//! │  🥦 Vegetable                                                           │
//! │     [x] Tomato            x2       20.00 → 18.00                        │
//! │                                                                         │
//! │  Estimated 70.00    Real 36.00                             ◄─ totals    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::view::group_by_category;
use basket_core::{Item, ListTotals};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// One category section of the list view, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub category: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: Vec<Item>,
}

/// Gets estimated and real totals; zero for an unknown list.
pub fn get_list_totals(store: &StoreState, list_id: String) -> Result<ListTotals, ApiError> {
    debug!(list_id = %list_id, "get_list_totals command");
    Ok(store.with_store(|s| s.list_totals(&list_id))?)
}

/// Gets reminder strings for a list; empty for an unknown or empty list.
///
/// The recency window comes from configuration (`BASKET_RECENCY_DAYS`).
pub fn get_suggestions(store: &StoreState, list_id: String) -> Result<Vec<String>, ApiError> {
    debug!(list_id = %list_id, "get_suggestions command");
    Ok(store.with_store(|s| s.suggestions(&list_id))?)
}

/// Gets a list's items grouped by category, unchecked first in each group.
pub fn get_list_view(
    store: &StoreState,
    list_id: String,
) -> Result<Vec<CategorySection>, ApiError> {
    debug!(list_id = %list_id, "get_list_view command");
    let snapshot = store.with_store(|s| s.snapshot())?;

    let sections = snapshot
        .list(&list_id)
        .map(|list| {
            group_by_category(list)
                .into_iter()
                .map(|group| CategorySection {
                    category: group.category.to_string(),
                    icon: group.style.icon,
                    color: group.style.color,
                    items: group.items.into_iter().cloned().collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(sections)
}
