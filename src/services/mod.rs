//! Service layer for shoestock
//!
//! The service layer provides business logic on top of the storage layer:
//! the six inventory operations behind the interactive menu.

pub mod inventory;

pub use inventory::{InventoryService, ItemValue};
