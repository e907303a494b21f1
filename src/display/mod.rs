//! Display formatting for terminal output
//!
//! Provides utilities for formatting the inventory for terminal display.

pub mod inventory;

pub use inventory::{format_shoe_table, format_value_report};
