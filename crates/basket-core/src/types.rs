//! # Domain Types
//!
//! Core domain types used throughout Basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShoppingList   │   │      Item       │   │ PurchaseState   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  id (UUID)      │──►│  Unpurchased    │       │
//! │  │  name           │   │  name, amount   │   │  Purchased{at}  │       │
//! │  │  items (ordered)│   │  category       │   └─────────────────┘       │
//! │  └─────────────────┘   │  estimated/real │                             │
//! │                        │  created_at     │                             │
//! │                        └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewItem      │   │   ItemPatch     │   │  ListSummary    │       │
//! │  │  (add input,    │   │  (shallow merge │   │  (overview row) │       │
//! │  │  not defaulted) │   │  no purchase)   │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purchase State
//! "Checked" and "checked at" travel together as one enum, so an item can
//! never be checked without a purchase time or carry a stale one after being
//! unchecked. [`ItemPatch`] has no field for it; only
//! [`crate::store::ListStore::toggle_item`] moves an item between states.
//!
//! ## Wire Format
//! camelCase JSON, timestamps as epoch milliseconds.

use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_AMOUNT, DEFAULT_CATEGORY};

// =============================================================================
// Purchase State
// =============================================================================

/// Whether an item has been bought, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PurchaseState {
    /// Still on the list.
    #[default]
    Unpurchased,
    /// Checked off at `at`.
    Purchased {
        #[serde(with = "ts_milliseconds")]
        #[ts(type = "number")]
        at: DateTime<Utc>,
    },
}

impl PurchaseState {
    /// The state after one toggle at `now`.
    pub fn toggled(self, now: DateTime<Utc>) -> Self {
        match self {
            PurchaseState::Unpurchased => PurchaseState::Purchased { at: now },
            PurchaseState::Purchased { .. } => PurchaseState::Unpurchased,
        }
    }

    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseState::Purchased { .. })
    }

    pub fn purchased_at(&self) -> Option<DateTime<Utc>> {
        match self {
            PurchaseState::Purchased { at } => Some(*at),
            PurchaseState::Unpurchased => None,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single entry on a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the owning list (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Purchase state; see module docs.
    pub(crate) purchase: PurchaseState,

    /// Quantity to buy.
    pub amount: u32,

    /// Free-text grouping label ("Dairy", "Vegetable", ...).
    pub category: String,

    /// Estimated unit price.
    pub estimated_price: Money,

    /// Actual unit price, typically recorded after purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub real_price: Option<Money>,

    /// When the item was added. Never changes afterwards.
    #[serde(with = "ts_milliseconds")]
    #[ts(type = "number")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Builds a fresh, unchecked item from caller input, applying creation
    /// defaults: amount `0`/absent → 1, blank category → "Other",
    /// absent or negative estimated price → 0.
    pub(crate) fn from_new(id: String, data: NewItem, now: DateTime<Utc>) -> Self {
        let amount = match data.amount {
            Some(amount) if amount > 0 => amount,
            _ => DEFAULT_AMOUNT,
        };

        let category = data
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        let estimated_price = match data.estimated_price {
            Some(price) if price.is_negative() => {
                tracing::warn!(%price, name = %data.name, "negative estimated price defaulted to zero");
                Money::zero()
            }
            Some(price) => price,
            None => Money::zero(),
        };

        Item {
            id,
            name: data.name,
            purchase: PurchaseState::Unpurchased,
            amount,
            category,
            estimated_price,
            real_price: None,
            created_at: now,
        }
    }

    /// The purchase state.
    #[inline]
    pub fn purchase(&self) -> PurchaseState {
        self.purchase
    }

    /// Whether the item is checked off.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.purchase.is_purchased()
    }

    /// When the item was checked off, if it is.
    #[inline]
    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        self.purchase.purchased_at()
    }

    /// `estimated_price × amount`.
    #[inline]
    pub fn estimated_line_total(&self) -> Money {
        self.estimated_price.multiply_quantity(self.amount)
    }

    /// `real_price × amount`, or `None` when no real price was recorded.
    #[inline]
    pub fn real_line_total(&self) -> Option<Money> {
        self.real_price.map(|price| price.multiply_quantity(self.amount))
    }

    /// The category the item is shown and reminded under: blank (possible
    /// only through a patch) reads as "Other".
    pub fn display_category(&self) -> &str {
        if self.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }

    /// True when the item was checked off less than `window` before `now`.
    pub fn purchased_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.checked_at().is_some_and(|at| now - at < window)
    }

    pub(crate) fn toggle(&mut self, now: DateTime<Utc>) {
        self.purchase = self.purchase.toggled(now);
    }

    pub(crate) fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(estimated_price) = patch.estimated_price {
            self.estimated_price = estimated_price;
        }
        if let Some(real_price) = patch.real_price {
            self.real_price = real_price;
        }
    }
}

// =============================================================================
// Shopping List
// =============================================================================

/// A named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Unique identifier within the store (UUID v4).
    pub id: String,

    /// Display name, as typed by the user.
    pub name: String,

    /// Items in insertion order.
    pub items: Vec<Item>,
}

impl ShoppingList {
    pub(crate) fn new(id: String, name: String) -> Self {
        ShoppingList {
            id,
            name,
            items: Vec::new(),
        }
    }

    /// Finds an item by id.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Distinct display categories in the order they first appear among the
    /// items.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            let category = item.display_category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One row of the lists overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub item_count: usize,
    pub checked_count: usize,
}

impl From<&ShoppingList> for ListSummary {
    fn from(list: &ShoppingList) -> Self {
        ListSummary {
            id: list.id.clone(),
            name: list.name.clone(),
            item_count: list.items.len(),
            checked_count: list.items.iter().filter(|i| i.is_checked()).count(),
        }
    }
}

// =============================================================================
// Item Input Types
// =============================================================================

/// Caller input for adding an item. Fields are taken as given; creation
/// defaults are applied by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    #[ts(optional)]
    pub amount: Option<u32>,
    #[serde(default)]
    #[ts(optional)]
    pub category: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub estimated_price: Option<Money>,
}

impl NewItem {
    /// An item with only a name; everything else takes creation defaults.
    pub fn named(name: impl Into<String>) -> Self {
        NewItem {
            name: name.into(),
            ..NewItem::default()
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_estimated_price(mut self, price: Money) -> Self {
        self.estimated_price = Some(price);
        self
    }
}

/// Shallow field update for an existing item.
///
/// `None` leaves a field untouched. `real_price` is doubly optional:
/// `Some(None)` clears a recorded price. In JSON, an absent key means
/// "untouched" and an explicit `null` means "clear".
///
/// Purchase state is not patchable; use `toggle_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub amount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub estimated_price: Option<Money>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_some"
    )]
    #[ts(optional)]
    pub real_price: Option<Option<Money>>,
}

impl ItemPatch {
    /// A patch that records the actual unit price.
    pub fn real_price(price: Money) -> Self {
        ItemPatch {
            real_price: Some(Some(price)),
            ..ItemPatch::default()
        }
    }

    /// A patch that forgets a recorded actual price.
    pub fn clear_real_price() -> Self {
        ItemPatch {
            real_price: Some(None),
            ..ItemPatch::default()
        }
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.estimated_price.is_none()
            && self.real_price.is_none()
    }
}

/// Maps a present JSON value (including `null`) to `Some(..)`, so that
/// `Option<Option<T>>` can tell "absent" from "null".
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// =============================================================================
// Unit Tests
// =============================================================================
