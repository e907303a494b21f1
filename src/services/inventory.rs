//! Inventory service
//!
//! Business logic for the inventory operations: listing, capture, re-stock,
//! code search, per-item value, and highest-quantity reporting. Interactive
//! prompting lives in the `cli` layer; the service only touches the store
//! and the backing file.

use crate::error::{InventoryError, InventoryResult};
use crate::models::Shoe;
use crate::storage::Storage;

/// Which end of the quantity range to select
#[derive(Debug, Clone, Copy)]
enum Extremum {
    Min,
    Max,
}

/// One row of the value-per-item report
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub product: String,
    pub code: String,
    /// Total stock value, cost times quantity
    pub value: f64,
}

/// Service for inventory management
pub struct InventoryService<'a> {
    storage: &'a Storage,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All shoes in store order (file order, new captures last)
    ///
    /// The listing is deliberately unsorted; it reflects the order records
    /// were loaded and captured.
    pub fn list(&self) -> InventoryResult<Vec<Shoe>> {
        self.storage.shoes.get_all()
    }

    /// Capture a new shoe into the store and the inventory file
    pub fn add(
        &self,
        country: &str,
        code: &str,
        product: &str,
        cost: f64,
        quantity: u32,
    ) -> InventoryResult<Shoe> {
        let shoe = Shoe::new(country.trim(), code.trim(), product.trim(), cost, quantity);
        self.storage.shoes.append(shoe.clone())?;
        self.storage.log_create(&shoe);
        Ok(shoe)
    }

    /// First shoe whose code equals `code`
    ///
    /// A miss signals [`InventoryError::NotFound`]; callers report it and
    /// carry on, nothing propagates to the menu loop.
    pub fn search(&self, code: &str) -> InventoryResult<Shoe> {
        self.storage
            .shoes
            .find_by_code(code)?
            .ok_or_else(|| InventoryError::shoe_not_found(code))
    }

    /// The shoe with the lowest quantity (re-stock candidate)
    ///
    /// Errors with [`InventoryError::EmptyInventory`] when there is nothing
    /// to select from.
    pub fn lowest_stock(&self) -> InventoryResult<Shoe> {
        let shoes = self.storage.shoes.get_all()?;
        let index = extremum_index_by_quantity(&shoes, Extremum::Min)?;
        Ok(shoes[index].clone())
    }

    /// The shoe with the highest quantity
    ///
    /// Errors with [`InventoryError::EmptyInventory`] when there is nothing
    /// to select from.
    pub fn highest_stock(&self) -> InventoryResult<Shoe> {
        let shoes = self.storage.shoes.get_all()?;
        let index = extremum_index_by_quantity(&shoes, Extremum::Max)?;
        Ok(shoes[index].clone())
    }

    /// Add `additional` units to the current lowest-quantity shoe
    ///
    /// Re-selects the minimum (stable, so this is the same record a prior
    /// [`InventoryService::lowest_stock`] call returned), updates it in
    /// memory, then persists the new total to every file line sharing its
    /// code. Returns the updated record.
    pub fn restock_lowest(&self, additional: u32) -> InventoryResult<Shoe> {
        let shoes = self.storage.shoes.get_all()?;
        let index = extremum_index_by_quantity(&shoes, Extremum::Min)?;

        let updated = self.storage.shoes.add_quantity_at(index, additional)?;
        self.storage
            .shoes
            .rewrite_quantity(&updated.code, updated.quantity)?;
        self.storage.log_update(&updated);
        Ok(updated)
    }

    /// Total stock value of every line item, in store order
    pub fn value_report(&self) -> InventoryResult<Vec<ItemValue>> {
        Ok(self
            .list()?
            .iter()
            .map(|shoe| ItemValue {
                product: shoe.product.clone(),
                code: shoe.code.clone(),
                value: shoe.total_value(),
            })
            .collect())
    }
}

/// Select the store position of the record at one end of the quantity range
///
/// Stable: strict comparison means the first record encountered wins ties,
/// for both the minimum and the maximum.
fn extremum_index_by_quantity(shoes: &[Shoe], which: Extremum) -> InventoryResult<usize> {
    let mut best: Option<usize> = None;
    for (index, shoe) in shoes.iter().enumerate() {
        let better = match (best, which) {
            (None, _) => true,
            (Some(b), Extremum::Min) => shoe.quantity < shoes[b].quantity,
            (Some(b), Extremum::Max) => shoe.quantity > shoes[b].quantity,
        };
        if better {
            best = Some(index);
        }
    }

    best.ok_or(InventoryError::EmptyInventory)
}
