//! # Item Commands
//!
//! ## Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   toggle_item   ┌──────────┐   record_real_price          │
//! │  │Unchecked │ ──────────────► │Purchased │ ──────────────────► realPrice │
//! │  │          │ ◄────────────── │ (at: now)│                    recorded   │
//! │  └──────────┘   toggle_item   └──────────┘                               │
//! │       ▲                                                                 │
//! │   add_item                 update_item: name / amount / category /      │
//! │                            estimatedPrice / realPrice, any state        │
//! │                                                                         │
//! │  Items are never deleted on their own; remove_list drops them all.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::validation::parse_real_price;
use basket_core::{ItemPatch, NewItemForm};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Adds an item from the add-item form.
///
/// ## Form Handling
/// - `name`: required (trimmed, at most 100 characters)
/// - `amount`: empty, unparsable or `0` → 1
/// - `category`: blank → "Other"
/// - `estimatedPrice`: empty, unparsable or negative → 0
///   (above 1,000,000 is a validation error)
///
/// ## Returns
/// The new item's id, or `None` if the list does not exist
pub fn add_item(
    store: &StoreState,
    list_id: String,
    form: NewItemForm,
) -> Result<Option<String>, ApiError> {
    debug!(list_id = %list_id, name = %form.name, "add_item command");
    let data = form.into_new_item()?;
    Ok(store.with_store_mut(|s| s.add_item(&list_id, data))?)
}

/// Flips an item between unchecked and purchased.
///
/// ## Returns
/// `true` if the item exists
pub fn toggle_item(store: &StoreState, list_id: String, item_id: String) -> Result<bool, ApiError> {
    debug!(list_id = %list_id, item_id = %item_id, "toggle_item command");
    Ok(store.with_store_mut(|s| s.toggle_item(&list_id, &item_id))?)
}

/// Merges a partial update into an item.
///
/// ## Returns
/// `true` if something changed; `false` for unknown ids or an empty patch
pub fn update_item(
    store: &StoreState,
    list_id: String,
    item_id: String,
    patch: ItemPatch,
) -> Result<bool, ApiError> {
    debug!(list_id = %list_id, item_id = %item_id, ?patch, "update_item command");
    Ok(store.with_store_mut(|s| s.update_item(&list_id, &item_id, patch))?)
}

/// Records the price actually paid, as typed by the user.
///
/// Unlike the add-item form this is strict: empty, malformed or negative
/// input is a `VALIDATION_ERROR` and nothing is written.
pub fn record_real_price(
    store: &StoreState,
    list_id: String,
    item_id: String,
    text: String,
) -> Result<bool, ApiError> {
    debug!(list_id = %list_id, item_id = %item_id, text = %text, "record_real_price command");
    let price = parse_real_price(&text)?;
    Ok(store.with_store_mut(|s| s.update_item(&list_id, &item_id, ItemPatch::real_price(price)))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::insight::get_list_totals;
    use crate::error::ErrorCode;
    use basket_core::{ListStore, Money};

    fn started_with_list() -> (StoreState, String) {
        let state = StoreState::uninitialized();
        state.start(ListStore::new());
        let list_id = state.with_store_mut(|s| s.add_list("Weekly")).unwrap();
        (state, list_id)
    }

    fn form(name: &str, amount: &str, category: &str, price: &str) -> NewItemForm {
        NewItemForm {
            name: name.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            estimated_price: price.to_string(),
        }
    }

    #[test]
    fn test_add_item_from_form() {
        let (state, list_id) = started_with_list();
        let item_id = add_item(&state, list_id.clone(), form("Tomato", "2", "Vegetable", "20"))
            .unwrap()
            .unwrap();

        let item = state
            .with_store(|s| s.list(&list_id).unwrap().item(&item_id).cloned())
            .unwrap()
            .unwrap();
        assert_eq!(item.amount, 2);
        assert_eq!(item.category, "Vegetable");
        assert_eq!(item.estimated_price, Money::from_cents(2000));
    }

    #[test]
    fn test_add_item_form_defaults() {
        let (state, list_id) = started_with_list();
        let item_id = add_item(&state, list_id.clone(), form("Bread", "", " ", "n/a"))
            .unwrap()
            .unwrap();

        let item = state
            .with_store(|s| s.list(&list_id).unwrap().item(&item_id).cloned())
            .unwrap()
            .unwrap();
        assert_eq!(item.amount, 1);
        assert_eq!(item.category, "Other");
        assert_eq!(item.estimated_price, Money::zero());
    }

    #[test]
    fn test_add_item_requires_name() {
        let (state, list_id) = started_with_list();
        let err = add_item(&state, list_id, form("  ", "1", "", "")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_add_item_rejects_huge_estimated_price() {
        let (state, list_id) = started_with_list();
        let revision = state.with_store(|s| s.revision()).unwrap();

        let err = add_item(
            &state,
            list_id.clone(),
            form("Gold", "2", "", "90000000000000000"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "estimated price must be between 0 and 1000000");
        assert_eq!(state.with_store(|s| s.revision()).unwrap(), revision);

        add_item(&state, list_id.clone(), form("Gold", "2", "", "1000000"))
            .unwrap()
            .unwrap();
        let totals = get_list_totals(&state, list_id).unwrap();
        assert_eq!(totals.estimated, Money::from_cents(200_000_000));
    }

    #[test]
    fn test_add_item_unknown_list() {
        let (state, _) = started_with_list();
        assert_eq!(
            add_item(&state, "nope".to_string(), form("Milk", "", "", "")).unwrap(),
            None
        );
    }

    #[test]
    fn test_toggle_and_update() {
        let (state, list_id) = started_with_list();
        let item_id = add_item(&state, list_id.clone(), form("Milk", "1", "Dairy", "30"))
            .unwrap()
            .unwrap();

        assert!(toggle_item(&state, list_id.clone(), item_id.clone()).unwrap());
        assert!(!toggle_item(&state, list_id.clone(), "nope".to_string()).unwrap());

        let patch = ItemPatch {
            amount: Some(4),
            ..ItemPatch::default()
        };
        assert!(update_item(&state, list_id.clone(), item_id.clone(), patch).unwrap());
        assert!(!update_item(&state, list_id.clone(), item_id.clone(), ItemPatch::default()).unwrap());

        let item = state
            .with_store(|s| s.list(&list_id).unwrap().item(&item_id).cloned())
            .unwrap()
            .unwrap();
        assert!(item.is_checked());
        assert_eq!(item.amount, 4);
    }

    #[test]
    fn test_record_real_price() {
        let (state, list_id) = started_with_list();
        let item_id = add_item(&state, list_id.clone(), form("Tomato", "2", "Vegetable", "20"))
            .unwrap()
            .unwrap();

        assert!(record_real_price(&state, list_id.clone(), item_id.clone(), "18".to_string()).unwrap());
        let real = state
            .with_store(|s| s.list_totals(&list_id).real)
            .unwrap();
        assert_eq!(real, Money::from_cents(3600));
    }

    #[test]
    fn test_record_real_price_rejects_bad_input() {
        let (state, list_id) = started_with_list();
        let item_id = add_item(&state, list_id.clone(), form("Tomato", "2", "", "20"))
            .unwrap()
            .unwrap();
        let revision = state.with_store(|s| s.revision()).unwrap();

        for text in ["", "abc", "-1", "1.234", "1000000.01"] {
            let err = record_real_price(&state, list_id.clone(), item_id.clone(), text.to_string())
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "input {:?}", text);
        }
        assert_eq!(state.with_store(|s| s.revision()).unwrap(), revision);
    }
}
