//! # List Store
//!
//! The canonical list-of-lists plus every mutation and query on it.
//!
//! ## Snapshots
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Copy-on-Write Snapshots                              │
//! │                                                                         │
//! │   reader A ──► Snapshot r3 ──┐                                          │
//! │                              ├──► Arc<Vec<ShoppingList>> (r3)           │
//! │   ListStore ─► Snapshot r3 ──┘                                          │
//! │                                                                         │
//! │   toggle_item(..)                                                       │
//! │        │  Arc::make_mut: r3 is shared, so clone it, then edit the copy  │
//! │        ▼                                                                │
//! │   ListStore ─► Snapshot r4 ────► Arc<Vec<ShoppingList>> (r4)            │
//! │   reader A ──► Snapshot r3 (unchanged, still consistent)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - One structural change = exactly one new revision.
//! - Operations on unknown ids change nothing: same revision, same `Arc`.
//! - Mutators report whether they changed anything so the caller knows when
//!   to notify observers.
//!
//! ## Usage
//! ```rust
//! use basket_core::store::ListStore;
//! use basket_core::{Money, NewItem};
//!
//! let mut store = ListStore::new();
//! let list_id = store.add_list("Weekly Market");
//! let item_id = store
//!     .add_item(
//!         &list_id,
//!         NewItem::named("Tomato")
//!             .with_amount(2)
//!             .with_estimated_price(Money::from_cents(2000)),
//!     )
//!     .unwrap();
//!
//! let before = store.snapshot();
//! assert!(store.toggle_item(&list_id, &item_id));
//! assert!(!before.list(&list_id).unwrap().items[0].is_checked());
//! assert!(store.list(&list_id).unwrap().items[0].is_checked());
//!
//! assert_eq!(store.list_totals(&list_id).estimated.cents(), 4000);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::new_id;
use crate::suggestions::SuggestionPolicy;
use crate::totals::{list_totals, ListTotals};
use crate::types::{Item, ItemPatch, ListSummary, NewItem, ShoppingList};
use crate::view::{group_by_category, CategoryGroup};

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable view of the store at one revision. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Snapshot {
    revision: u64,
    lists: Arc<Vec<ShoppingList>>,
}

impl Snapshot {
    fn new(lists: Vec<ShoppingList>) -> Self {
        Snapshot {
            revision: 0,
            lists: Arc::new(lists),
        }
    }

    /// Increases by one on every structural change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All lists in insertion order.
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Finds a list by id.
    pub fn list(&self, list_id: &str) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    /// True when both handles point at the very same state.
    pub fn same_as(&self, other: &Snapshot) -> bool {
        self.revision == other.revision && Arc::ptr_eq(&self.lists, &other.lists)
    }
}

// =============================================================================
// List Store
// =============================================================================

/// In-memory aggregate of shopping lists.
///
/// ## Invariants
/// - List ids are unique in the store, item ids unique in their list
///   (fresh UUID v4 each time)
/// - Lists and items keep insertion order
/// - Items are never removed; only `remove_list` drops them, with their list
#[derive(Debug, Clone)]
pub struct ListStore {
    snapshot: Snapshot,
    clock: Arc<dyn Clock>,
    policy: SuggestionPolicy,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_lists(Vec::new(), Arc::new(SystemClock))
    }

    /// Creates a store holding `lists`, reading time from `clock`.
    pub fn with_lists(lists: Vec<ShoppingList>, clock: Arc<dyn Clock>) -> Self {
        ListStore {
            snapshot: Snapshot::new(lists),
            clock,
            policy: SuggestionPolicy::default(),
        }
    }

    /// Replaces the suggestion tunables.
    pub fn with_policy(mut self, policy: SuggestionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SuggestionPolicy {
        self.policy
    }

    // ==================== Reads ====================

    /// The current snapshot. Holding it never blocks later mutations.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    pub fn lists(&self) -> &[ShoppingList] {
        self.snapshot.lists()
    }

    pub fn list(&self, list_id: &str) -> Option<&ShoppingList> {
        self.snapshot.list(list_id)
    }

    /// One overview row per list.
    pub fn summaries(&self) -> Vec<ListSummary> {
        self.lists().iter().map(ListSummary::from).collect()
    }

    // ==================== List Operations ====================

    /// Appends a new empty list and returns its id.
    ///
    /// Any string is accepted; rejecting blank names is the caller's job
    /// (see [`crate::validation::validate_list_name`]).
    pub fn add_list(&mut self, name: impl Into<String>) -> String {
        let list = ShoppingList::new(new_id(), name.into());
        let id = list.id.clone();
        debug!(list_id = %id, name = %list.name, "add_list");

        self.commit(|lists| lists.push(list));
        id
    }

    /// Removes a list and all its items. Returns false if it did not exist.
    pub fn remove_list(&mut self, list_id: &str) -> bool {
        let Some(index) = self.list_index(list_id) else {
            debug!(list_id, "remove_list: no such list");
            return false;
        };

        debug!(list_id, "remove_list");
        self.commit(|lists| {
            lists.remove(index);
        });
        true
    }

    // ==================== Item Operations ====================

    /// Appends a new unchecked item to a list and returns its id.
    ///
    /// Creation defaults are applied here (amount → 1, category → "Other",
    /// estimated price → 0). Returns `None`, changing nothing, if the list
    /// does not exist.
    pub fn add_item(&mut self, list_id: &str, data: NewItem) -> Option<String> {
        let Some(index) = self.list_index(list_id) else {
            debug!(list_id, "add_item: no such list");
            return None;
        };

        let item = Item::from_new(new_id(), data, self.clock.now());
        let item_id = item.id.clone();
        debug!(list_id, item_id = %item_id, category = %item.category, "add_item");

        self.commit(|lists| lists[index].items.push(item));
        Some(item_id)
    }

    /// Flips an item between unchecked and purchased-now.
    ///
    /// Returns false if the list or item does not exist.
    pub fn toggle_item(&mut self, list_id: &str, item_id: &str) -> bool {
        let Some((list_index, item_index)) = self.item_index(list_id, item_id) else {
            debug!(list_id, item_id, "toggle_item: no such item");
            return false;
        };

        let now = self.clock.now();
        self.commit(|lists| lists[list_index].items[item_index].toggle(now));
        debug!(
            list_id,
            item_id,
            checked = self.lists()[list_index].items[item_index].is_checked(),
            "toggle_item"
        );
        true
    }

    /// Shallow-merges `patch` onto an item.
    ///
    /// Returns false, changing nothing, if the list or item does not exist
    /// or the patch is empty. No creation defaults are re-applied.
    pub fn update_item(&mut self, list_id: &str, item_id: &str, patch: ItemPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some((list_index, item_index)) = self.item_index(list_id, item_id) else {
            debug!(list_id, item_id, "update_item: no such item");
            return false;
        };

        debug!(list_id, item_id, ?patch, "update_item");
        self.commit(|lists| lists[list_index].items[item_index].apply(patch));
        true
    }

    // ==================== Derived Data ====================

    /// Estimated and real totals; zero for an unknown list.
    pub fn list_totals(&self, list_id: &str) -> ListTotals {
        self.list(list_id).map(list_totals).unwrap_or_default()
    }

    /// Reminder strings as of the clock's now; empty for an unknown list.
    pub fn suggestions(&self, list_id: &str) -> Vec<String> {
        self.list(list_id)
            .map(|list| self.policy.suggest(list, self.clock.now()))
            .unwrap_or_default()
    }

    /// Items grouped by category for display; empty for an unknown list.
    pub fn list_view(&self, list_id: &str) -> Vec<CategoryGroup<'_>> {
        self.list(list_id).map(group_by_category).unwrap_or_default()
    }

    // ==================== Internals ====================

    fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists().iter().position(|l| l.id == list_id)
    }

    fn item_index(&self, list_id: &str, item_id: &str) -> Option<(usize, usize)> {
        let list_index = self.list_index(list_id)?;
        let item_index = self.lists()[list_index]
            .items
            .iter()
            .position(|i| i.id == item_id)?;
        Some((list_index, item_index))
    }

    /// Applies one structural change and moves to the next revision.
    fn commit<F>(&mut self, change: F)
    where
        F: FnOnce(&mut Vec<ShoppingList>),
    {
        change(Arc::make_mut(&mut self.snapshot.lists));
        self.snapshot.revision += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
