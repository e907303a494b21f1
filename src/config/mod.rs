//! Configuration module for shoestock
//!
//! Provides path resolution for the inventory file and the audit log.

pub mod paths;

pub use paths::InventoryPaths;
