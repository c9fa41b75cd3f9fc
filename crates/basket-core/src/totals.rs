//! # Totals
//!
//! Estimated vs. real spend for one list.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item            amount   estimated   real        est. line  real line │
//! │  Milk               1       30.00      -            30.00       -      │
//! │  Tomato             2       20.00     18.00         40.00     36.00    │
//! │  ───────────────────────────────────────────────────────────────────── │
//! │  estimated = 70.00   real = 36.00   difference = -34.00                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `estimated` always uses every item's estimated price. `real` only counts
//! items with a recorded real price; the others add nothing to it. The two
//! never borrow from each other.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::ShoppingList;

/// Aggregated spend for one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListTotals {
    pub estimated: Money,
    pub real: Money,
}

impl ListTotals {
    /// `real - estimated`; negative when the shop came in under estimate.
    pub fn difference(&self) -> Money {
        self.real - self.estimated
    }
}

impl From<&ShoppingList> for ListTotals {
    fn from(list: &ShoppingList) -> Self {
        list_totals(list)
    }
}

/// Sums a list's estimated and real line totals.
pub fn list_totals(list: &ShoppingList) -> ListTotals {
    ListTotals {
        estimated: list.items.iter().map(|i| i.estimated_line_total()).sum(),
        real: list.items.iter().filter_map(|i| i.real_line_total()).sum(),
    }
}
