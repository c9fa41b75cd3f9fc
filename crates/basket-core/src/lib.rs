//! # basket-core: Pure Shopping-List Logic for Basket
//!
//! This crate is the **heart** of Basket. It holds the in-memory list store
//! and every rule about lists, items, totals and suggestions, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (external)                      │   │
//! │  │    Lists screen ──► List detail ──► Add item / Real price       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / queries                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    basket-shell                                 │   │
//! │  │    StoreState, ConfigState, commands, ApiError, tracing         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌────────┐ │   │
//! │  │   │  types  │ │  store  │ │ totals  │ │suggestions│ │catalog │ │   │
//! │  │   │  money  │ │Snapshot │ │         │ │           │ │  view  │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └───────────┘ └────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SINGLETONS • TIME VIA `Clock`                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ShoppingList, Item, PurchaseState, patches)
//! - [`money`] - Integer money for prices and totals
//! - [`store`] - `ListStore` and its copy-on-write `Snapshot`
//! - [`totals`] - Estimated vs. real spend
//! - [`suggestions`] - "You haven't bought X lately" heuristic
//! - [`catalog`] - Category icon/color/examples lookup table
//! - [`view`] - Items grouped by category for display
//! - [`validation`] - Form input parsing
//! - [`clock`] - Injectable time source
//! - [`seed`] - First-run demo lists
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::store::ListStore;
//! use basket_core::{ItemPatch, Money, NewItem};
//!
//! let mut store = ListStore::new();
//! let list_id = store.add_list("Weekly Market");
//! let tomato = store
//!     .add_item(
//!         &list_id,
//!         NewItem::named("Tomato")
//!             .with_amount(2)
//!             .with_category("Vegetable")
//!             .with_estimated_price(Money::from_cents(2000)),
//!     )
//!     .unwrap();
//!
//! store.toggle_item(&list_id, &tomato);
//! store.update_item(&list_id, &tomato, ItemPatch::real_price(Money::from_cents(1800)));
//!
//! let totals = store.list_totals(&list_id);
//! assert_eq!(totals.estimated.cents(), 4000);
//! assert_eq!(totals.real.cents(), 3600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod clock;
pub mod error;
pub mod money;
pub mod seed;
pub mod store;
pub mod suggestions;
pub mod totals;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{ListStore, Snapshot};
pub use suggestions::SuggestionPolicy;
pub use totals::ListTotals;
pub use types::*;
pub use validation::NewItemForm;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category given to items added without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Quantity given to items added without a usable one.
pub const DEFAULT_AMOUNT: u32 = 1;

/// Days a purchase counts as "recent" for suggestions.
pub const RECENCY_WINDOW_DAYS: u32 = 14;

/// Category whose total absence triggers the fixed fruit reminder.
pub const FRUIT_CATEGORY: &str = "Fruit";

/// Longest accepted list or item name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Highest accepted unit price, in major units.
pub const MAX_PRICE_MAJOR: i64 = 1_000_000;

/// Fresh identifier for a list or item.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
