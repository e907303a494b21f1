//! Shoe model
//!
//! Represents one inventory line item, as loaded from the inventory file or
//! captured interactively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A shoe line item in the inventory
///
/// Fields mirror the columns of the inventory file. The `code` is intended
/// to be unique but uniqueness is never enforced; lookups take the first
/// match in store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    /// Country of origin
    pub country: String,

    /// Shoe code, the lookup key
    pub code: String,

    /// Product display name
    pub product: String,

    /// Per-unit price
    pub cost: f64,

    /// Units on hand
    pub quantity: u32,
}

impl Shoe {
    /// Create a new shoe record
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Per-unit price
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Units on hand
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Total stock value of this line item (cost times quantity)
    pub fn total_value(&self) -> f64 {
        self.cost * self.quantity as f64
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} units available at ${} each from {}.",
            self.product, self.code, self.quantity, self.cost, self.country
        )
    }
}
