//! # List Commands
//!
//! ## Lists Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MY LISTS                                                 [+ New list]  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Weekly Market                              2 items      [delete]       │
//! │  Breakfast Run                              0 items      [delete]       │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//!  get_lists()        ──► rows above
//!  add_list(name)     ──► new row at the bottom, returns its id
//!  remove_list(id)    ──► row and all its items gone
//!  get_list(id)       ──► full list for the detail screen
//! ```

use basket_core::validation::validate_list_name;
use basket_core::{ListSummary, ShoppingList};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Gets one overview row per list, in creation order.
pub fn get_lists(store: &StoreState) -> Result<Vec<ListSummary>, ApiError> {
    debug!("get_lists command");
    Ok(store.with_store(|s| s.summaries())?)
}

/// Gets a full list, or `None` if no list has this id.
pub fn get_list(store: &StoreState, list_id: String) -> Result<Option<ShoppingList>, ApiError> {
    debug!(list_id = %list_id, "get_list command");
    Ok(store.with_store(|s| s.list(&list_id).cloned())?)
}

/// Creates an empty list.
///
/// ## Arguments
/// * `name` - List name; trimmed, must be non-empty and at most 100 characters
///
/// ## Returns
/// The new list's id
pub fn add_list(store: &StoreState, name: String) -> Result<String, ApiError> {
    debug!(name = %name, "add_list command");
    let name = validate_list_name(&name)?;
    Ok(store.with_store_mut(|s| s.add_list(name))?)
}

/// Deletes a list with all its items.
///
/// ## Returns
/// `true` if the list existed. Unknown ids are not an error.
pub fn remove_list(store: &StoreState, list_id: String) -> Result<bool, ApiError> {
    debug!(list_id = %list_id, "remove_list command");
    Ok(store.with_store_mut(|s| s.remove_list(&list_id))?)
}
